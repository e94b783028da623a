//! Player actions.
//!
//! A turn is exactly one of three actions. Card indices are 0-based
//! positions in the acting player's hand at the moment the action is taken.
//!
//! Typed commands (`play 2`, `discard 1`, `clue`) count cards from 1, the
//! same way `Display` prints them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::HAND_SIZE;
use super::error::ParseActionError;
use super::player::PlayerId;

/// A single player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at `card_index` onto the board.
    Play { card_index: usize },
    /// Discard the card at `card_index` to regain a clue token.
    Discard { card_index: usize },
    /// Spend a clue token.
    Clue,
}

impl Action {
    /// The hand index this action refers to, if any.
    #[must_use]
    pub fn card_index(&self) -> Option<usize> {
        match self {
            Action::Play { card_index } | Action::Discard { card_index } => Some(*card_index),
            Action::Clue => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play { card_index } => write!(f, "play card {}", card_index + 1),
            Action::Discard { card_index } => write!(f, "discard card {}", card_index + 1),
            Action::Clue => write!(f, "give a clue"),
        }
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parse `play N`, `discard N` or `clue`, ignoring case.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let command = words.next().ok_or(ParseActionError::Empty)?.to_ascii_lowercase();

        let action = match command.as_str() {
            "clue" => Action::Clue,
            "play" | "discard" => {
                let word = words
                    .next()
                    .ok_or_else(|| ParseActionError::MissingCard(command.clone()))?;
                let card_index = match word.parse::<usize>() {
                    Ok(n) if (1..=HAND_SIZE).contains(&n) => n - 1,
                    _ => return Err(ParseActionError::InvalidCard(word.to_string())),
                };
                if command == "play" {
                    Action::Play { card_index }
                } else {
                    Action::Discard { card_index }
                }
            }
            _ => return Err(ParseActionError::UnknownCommand(command)),
        };

        match words.next() {
            Some(extra) => Err(ParseActionError::TrailingInput(extra.to_string())),
            None => Ok(action),
        }
    }
}

/// An accepted action with the turn it was taken on.
///
/// Used for:
/// - Match history
/// - Replay/debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self { player, action, turn }
    }
}
