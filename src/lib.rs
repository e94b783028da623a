//! # hanabi-engine
//!
//! Game-state engine for two-player Hanabi with the base 50-card deck.
//!
//! ## Design Principles
//!
//! 1. **No mutation on rejection**: an action either applies completely or
//!    returns a `GameError` and leaves the game exactly as it was.
//!
//! 2. **Explicit randomness**: shuffling uses a seeded `GameRng` passed in by
//!    the caller; the same seed always deals the same game.
//!
//! 3. **Engine vs. loop**: `Game` knows the rules of a single action. Turn
//!    order and the last round belong to the loop driving it
//!    (`TurnTracker`, or `Match` which combines both).
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, rule constants, actions, errors
//! - `cards`: Card values (color + number)
//! - `zones`: Deck, hands, and the board
//! - `game`: The game state machine, turn tracking, and match sessions
//! - `play`: Console driver and the scripted opening
//! - `logging`: Stdout logger for the `hanabi` binary
//!
//! ## Example
//!
//! ```
//! use hanabi_engine::{Game, GameError, PlayerId};
//!
//! let mut game = Game::with_seed(42);
//! let outcome = game.action_play(PlayerId::ONE, 0).unwrap();
//! assert_eq!(game.hand(PlayerId::ONE).len(), 5);
//! assert_eq!(outcome.successful, game.score() == 1);
//!
//! // All tokens are held, so discarding is rejected.
//! assert_eq!(game.action_discard(PlayerId::TWO, 0), Err(GameError::AllTokensAlreadyHeld));
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod logging;
pub mod play;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameError, GameRng, ParseActionError, PlayerId, PlayerMap,
};

pub use crate::cards::{Card, Color, Number};

pub use crate::zones::{Board, Deck, Hand};

pub use crate::game::{
    ActionOutcome, ClueOutcome, DiscardOutcome, EndReason, Game, GameBuilder, GameStatus, Match,
    PlayOutcome, Snapshot, TurnPhase, TurnTracker,
};
