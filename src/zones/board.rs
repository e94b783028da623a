//! Played fireworks: one counter per color.

use serde::{Deserialize, Serialize};

use crate::cards::Color;
use crate::core::config::MAX_NUMBER;

/// Highest number played in each color, 0 when nothing has been played.
///
/// The board does not check legality. The game only calls [`Board::play`]
/// after confirming the card is the next number for its color, which keeps
/// every counter within `0..=5` and non-decreasing. Deserialized boards
/// are checked against the same bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 5]", into = "[u8; 5]")]
pub struct Board {
    progress: [u8; 5],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest number played for `color`.
    #[must_use]
    pub fn current_value(&self, color: Color) -> u8 {
        self.progress[color.index()]
    }

    /// Advance `color` by one and return the updated counters.
    pub fn play(&mut self, color: Color) -> [u8; 5] {
        debug_assert!(
            self.progress[color.index()] < MAX_NUMBER,
            "{} is already complete",
            color
        );
        self.progress[color.index()] += 1;
        self.progress
    }

    /// Sum of all counters, 0 to 25.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.progress.iter().map(|&n| u32::from(n)).sum()
    }

    /// Whether every color has reached 5.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress.iter().all(|&n| n == MAX_NUMBER)
    }

    /// Counters in color order.
    #[must_use]
    pub fn progress(&self) -> [u8; 5] {
        self.progress
    }
}

impl TryFrom<[u8; 5]> for Board {
    type Error = String;

    fn try_from(progress: [u8; 5]) -> Result<Self, Self::Error> {
        match progress.iter().position(|&n| n > MAX_NUMBER) {
            Some(i) => Err(format!(
                "{} counter {} is above {}",
                Color::ALL[i],
                progress[i],
                MAX_NUMBER
            )),
            None => Ok(Self { progress }),
        }
    }
}

impl From<Board> for [u8; 5] {
    fn from(board: Board) -> Self {
        board.progress
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let colors: Vec<String> = Color::ALL.iter().map(ToString::to_string).collect();
        let counts: Vec<String> = self.progress.iter().map(ToString::to_string).collect();
        write!(f, "{}\n{}", colors.join(" "), counts.join(" "))
    }
}
