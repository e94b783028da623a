//! The game engine and the turn loop built on top of it.
//!
//! - `Game`: the state machine behind play / discard / clue
//! - `TurnTracker`: whose turn it is, and the last-round countdown
//! - `Match`: a `Game` driven by a `TurnTracker`, with action history

mod engine;
mod outcome;
mod session;
mod snapshot;
mod turns;

pub use engine::{Game, GameBuilder};
pub use outcome::{ActionOutcome, ClueOutcome, DiscardOutcome, EndReason, GameStatus, PlayOutcome};
pub use session::Match;
pub use snapshot::Snapshot;
pub use turns::{TurnPhase, TurnTracker};
