//! Rule constants for the base game.
//!
//! Only the standard five-color deck is supported, so these are constants
//! rather than a runtime configuration. Per-game knobs (seed, deck order)
//! live on `GameBuilder`.

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Cards dealt to each player at the start of the game.
pub const HAND_SIZE: usize = 5;

/// Clue tokens available at the start, and the most that can be held.
pub const MAX_CLUE_TOKENS: u8 = 8;

/// The game ends when this many misplays have been made.
pub const MAX_STRIKES: u8 = 3;

/// Highest card number; also the height of a finished firework.
pub const MAX_NUMBER: u8 = 5;

/// Total cards in a freshly built deck.
pub const DECK_SIZE: usize = 50;

/// Score of a perfect game (every color played up to 5).
pub const MAX_SCORE: u32 = 25;
