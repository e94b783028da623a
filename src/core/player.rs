//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Players are addressed by seat number at the API boundary: seat 1 and
//! seat 2. Internally a `PlayerId` stores the 0-based index so it can address
//! a `PlayerMap` directly.
//!
//! ## PlayerMap
//!
//! Fixed-size per-player storage, one entry per seat, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::PLAYER_COUNT;
use super::error::GameError;

/// Player identifier for one of the two seats.
///
/// Serializes as the 1-based seat number, and deserializing goes through
/// [`PlayerId::from_seat`], so a stored id always addresses a real seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player in seat 1.
    pub const ONE: PlayerId = PlayerId(0);
    /// The player in seat 2.
    pub const TWO: PlayerId = PlayerId(1);

    /// Look up a player by 1-based seat number.
    ///
    /// ```
    /// use hanabi_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_seat(2).unwrap(), PlayerId::TWO);
    /// assert!(PlayerId::from_seat(0).is_err());
    /// ```
    pub fn from_seat(seat: u8) -> Result<Self, GameError> {
        if (1..=PLAYER_COUNT as u8).contains(&seat) {
            Ok(Self(seat - 1))
        } else {
            Err(GameError::InvalidPlayer(seat))
        }
    }

    /// The 1-based seat number.
    #[must_use]
    pub const fn seat(self) -> u8 {
        self.0 + 1
    }

    /// The 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player who acts after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    /// Iterate over both players in seat order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = GameError;

    fn try_from(seat: u8) -> Result<Self, Self::Error> {
        Self::from_seat(seat)
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.seat()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.seat())
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use hanabi_engine::core::{PlayerId, PlayerMap};
///
/// let mut turns: PlayerMap<u32> = PlayerMap::with_default();
/// turns[PlayerId::TWO] += 1;
/// assert_eq!(turns[PlayerId::ONE], 0);
/// assert_eq!(turns[PlayerId::TWO], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory is called once per player, in seat order.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the stored values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
