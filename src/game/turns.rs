//! Turn order and the last round.
//!
//! The engine itself only reports whether an action drew a replacement card.
//! Whoever runs the turn loop owns the rest: the first player who should
//! have drawn but could not triggers the last round, every other player then
//! gets exactly one more turn, and the game is over.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::config::PLAYER_COUNT;
use crate::core::PlayerId;

/// Where the turn loop stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Cards are still being drawn.
    Normal,
    /// `trigger` could not draw; `turns_left` more turns will be played.
    LastRound { trigger: PlayerId, turns_left: usize },
    /// No more turns.
    Ended,
}

/// Tracks whose turn it is and counts down the last round.
///
/// ```
/// use hanabi_engine::game::{TurnPhase, TurnTracker};
/// use hanabi_engine::core::PlayerId;
///
/// let mut turns = TurnTracker::new(PlayerId::ONE);
/// turns.end_turn(false);
/// assert_eq!(turns.current(), PlayerId::TWO);
///
/// // Player 2 could not draw: player 1 gets one final turn.
/// turns.end_turn(true);
/// assert!(matches!(turns.phase(), TurnPhase::LastRound { .. }));
/// turns.end_turn(false);
/// assert_eq!(turns.phase(), TurnPhase::Ended);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTracker {
    current: PlayerId,
    turn: u32,
    phase: TurnPhase,
}

impl TurnTracker {
    /// Start at turn 1 with `first` to act.
    #[must_use]
    pub fn new(first: PlayerId) -> Self {
        Self {
            current: first,
            turn: 1,
            phase: TurnPhase::Normal,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// The current turn number, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::Ended
    }

    /// Finish the current player's turn.
    ///
    /// `missed_draw` is true when the turn's play or discard found the deck
    /// empty. Only the first such turn starts the last round.
    pub fn end_turn(&mut self, missed_draw: bool) -> TurnPhase {
        self.phase = match self.phase {
            TurnPhase::Normal if missed_draw => {
                info!("{} could not draw; last round begins", self.current);
                TurnPhase::LastRound {
                    trigger: self.current,
                    turns_left: PLAYER_COUNT - 1,
                }
            }
            TurnPhase::Normal => TurnPhase::Normal,
            TurnPhase::LastRound { turns_left, .. } if turns_left <= 1 => TurnPhase::Ended,
            TurnPhase::LastRound { trigger, turns_left } => TurnPhase::LastRound {
                trigger,
                turns_left: turns_left - 1,
            },
            TurnPhase::Ended => TurnPhase::Ended,
        };

        if self.phase != TurnPhase::Ended {
            self.current = self.current.next();
            self.turn += 1;
        }
        self.phase
    }

    /// Stop the loop immediately, e.g. after a strikeout.
    pub fn end(&mut self) {
        self.phase = TurnPhase::Ended;
    }
}
