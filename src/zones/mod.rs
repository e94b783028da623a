//! Where cards live: the deck, each hand, and the board.
//!
//! The discard pile is a plain append-only `im::Vector<Card>` owned by the
//! game.

mod board;
mod deck;
mod hand;

pub use board::Board;
pub use deck::Deck;
pub use hand::Hand;
