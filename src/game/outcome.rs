//! What an accepted action did, and whether the game is still running.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// The third misplay was made.
    Strikeout,
    /// The deck ran out and every other player had their final turn.
    LastRoundComplete,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::Strikeout => write!(f, "strikeout"),
            EndReason::LastRoundComplete => write!(f, "last round complete"),
        }
    }
}

/// Current status of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Ended(EndReason),
}

impl GameStatus {
    /// Whether the game has ended for any reason.
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Ended(_))
    }
}

/// Result of an accepted play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The card that was played.
    pub card: Card,
    /// `true` if the card landed on the board, `false` for a misplay.
    pub successful: bool,
    /// A completed color returned a clue token.
    pub bonus_token: bool,
    /// This misplay was the final strike.
    pub strikeout: bool,
    /// Board score at the moment of a strikeout.
    pub final_score: Option<u32>,
    /// A replacement card was drawn. `false` means the deck was empty.
    pub drew_replacement: bool,
}

/// Result of an accepted discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscardOutcome {
    /// The card that was discarded.
    pub card: Card,
    /// Clue tokens after the discard.
    pub clue_tokens: u8,
    /// A replacement card was drawn. `false` means the deck was empty.
    pub drew_replacement: bool,
}

/// Result of an accepted clue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClueOutcome {
    /// Clue tokens left after spending one.
    pub clue_tokens: u8,
}

/// Result of any accepted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Play(PlayOutcome),
    Discard(DiscardOutcome),
    Clue(ClueOutcome),
}

impl ActionOutcome {
    /// The acting player should have drawn but the deck was empty.
    ///
    /// The first time this happens the last round begins.
    #[must_use]
    pub fn missed_draw(&self) -> bool {
        match self {
            ActionOutcome::Play(p) => !p.drew_replacement,
            ActionOutcome::Discard(d) => !d.drew_replacement,
            ActionOutcome::Clue(_) => false,
        }
    }
}
