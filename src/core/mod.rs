//! Core engine types: players, RNG, rule constants, actions, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use error::{GameError, ParseActionError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
