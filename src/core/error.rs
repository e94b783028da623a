//! Errors reported by the game engine.
//!
//! Every variant except `EmptyDeckDraw` describes a rejected player action:
//! the engine reports it and leaves the game untouched, and the driver is
//! expected to ask the player again.

use thiserror::Error;

/// Errors that can occur while acting on a game.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no such card: index {index} is outside a hand of {hand_size}")]
    InvalidCardIndex { index: usize, hand_size: usize },

    #[error("no clue tokens available")]
    NoClueTokensAvailable,

    #[error("cannot discard while holding every clue token")]
    AllTokensAlreadyHeld,

    /// Drawing from an empty deck. Callers must check `is_empty` first, so
    /// seeing this is a bug in the caller rather than a player mistake.
    #[error("attempted to draw from an empty deck")]
    EmptyDeckDraw,

    #[error("seat {0} does not exist; seats are 1 and 2")]
    InvalidPlayer(u8),

    #[error("the game is over")]
    GameOver,
}

/// Errors from reading a typed command such as `play 3`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'; expected play, discard or clue")]
    UnknownCommand(String),

    #[error("'{0}' needs a card number from 1 to 5")]
    MissingCard(String),

    #[error("'{0}' is not a card number from 1 to 5")]
    InvalidCard(String),

    #[error("unexpected input after the command: '{0}'")]
    TrailingInput(String),
}

impl GameError {
    /// Whether the driver can simply re-prompt after this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::EmptyDeckDraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_empty_draw_is_unrecoverable() {
        assert!(GameError::InvalidCardIndex { index: 5, hand_size: 5 }.is_recoverable());
        assert!(GameError::NoClueTokensAvailable.is_recoverable());
        assert!(GameError::AllTokensAlreadyHeld.is_recoverable());
        assert!(GameError::InvalidPlayer(3).is_recoverable());
        assert!(GameError::GameOver.is_recoverable());
        assert!(!GameError::EmptyDeckDraw.is_recoverable());
    }

    #[test]
    fn test_messages() {
        let err = GameError::InvalidCardIndex { index: 7, hand_size: 4 };
        assert_eq!(err.to_string(), "no such card: index 7 is outside a hand of 4");
        assert_eq!(
            GameError::AllTokensAlreadyHeld.to_string(),
            "cannot discard while holding every clue token"
        );
    }
}
