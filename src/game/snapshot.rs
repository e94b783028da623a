//! Read-only copy of everything a driver needs to display the game.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerMap;
use crate::zones::{Board, Hand};

use super::outcome::GameStatus;

/// Point-in-time view of a game.
///
/// Cloning the discard pile is O(1), so taking a snapshot after every
/// action is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub clue_tokens: u8,
    pub strikes: u8,
    pub hands: PlayerMap<Hand>,
    pub discard: Vector<Card>,
    pub board: Board,
    pub deck_size: usize,
    pub status: GameStatus,
}

impl Snapshot {
    /// Board score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.board.score()
    }

    /// Cards in the deck, both hands, the discard pile and on the board.
    ///
    /// Always 50 for a game started from a full deck.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck_size
            + self.hands.values().map(Hand::len).sum::<usize>()
            + self.discard.len()
            + self.board.score() as usize
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "deck: {} cards", self.deck_size)?;
        writeln!(f, "clues: {}", self.clue_tokens)?;
        writeln!(f, "strikes: {}", self.strikes)?;
        for (player, hand) in self.hands.iter() {
            writeln!(f, "{}: {}", player, hand)?;
        }
        let discard: Vec<String> = self.discard.iter().map(ToString::to_string).collect();
        writeln!(f, "discard pile: [{}]", discard.join(" "))?;
        write!(f, "board:\n{}", self.board)
    }
}
