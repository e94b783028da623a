//! Card values: a color and a number.
//!
//! Cards carry no identity beyond their value. Two red 1s are
//! interchangeable, so `Card` is a plain `Copy` value with structural
//! equality.

use serde::{Deserialize, Serialize};

use crate::core::config::MAX_NUMBER;

/// Firework color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    White,
}

impl Color {
    /// All colors in board order.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::White,
    ];

    /// Position of this color on the board.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-letter abbreviation (`R`, `Y`, `G`, `B`, `W`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::White => 'W',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card number, always in `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Number(u8);

impl Number {
    /// Create a number, returning `None` outside `1..=5`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= MAX_NUMBER {
            Some(Self(value))
        } else {
            None
        }
    }

    /// All numbers in ascending order.
    pub fn all() -> impl Iterator<Item = Number> {
        (1..=MAX_NUMBER).map(Number)
    }

    /// The raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Copies of each color/number pair in a full deck.
    #[must_use]
    pub const fn copies(self) -> usize {
        match self.0 {
            1 => 3,
            MAX_NUMBER => 1,
            _ => 2,
        }
    }
}

impl TryFrom<u8> for Number {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Number::new(value)
            .ok_or_else(|| format!("card number {} is outside 1..={}", value, MAX_NUMBER))
    }
}

impl From<Number> for u8 {
    fn from(number: Number) -> u8 {
        number.0
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub number: Number,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(color: Color, number: Number) -> Self {
        Self { color, number }
    }

    /// Shorthand for building cards from a raw number, e.g. in tests.
    ///
    /// Returns `None` when `number` is outside `1..=5`.
    #[must_use]
    pub const fn of(color: Color, number: u8) -> Option<Self> {
        match Number::new(number) {
            Some(number) => Some(Self { color, number }),
            None => None,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_order_and_symbols() {
        let symbols: String = Color::ALL.iter().map(|c| c.symbol()).collect();
        assert_eq!(symbols, "RYGBW");

        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_number_bounds() {
        assert!(Number::new(0).is_none());
        assert!(Number::new(6).is_none());
        assert_eq!(Number::new(1).map(Number::get), Some(1));
        assert_eq!(Number::all().count(), 5);
    }

    #[test]
    fn test_copies_per_number() {
        let copies: Vec<_> = Number::all().map(Number::copies).collect();
        assert_eq!(copies, vec![3, 2, 2, 2, 1]);
    }

    #[test]
    fn test_card_equality_is_structural() {
        let a = Card::of(Color::Red, 1).unwrap();
        let b = Card::new(Color::Red, Number::new(1).unwrap());

        assert_eq!(a, b);
        assert_ne!(a, Card::of(Color::Red, 2).unwrap());
        assert_ne!(a, Card::of(Color::Blue, 1).unwrap());
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::of(Color::White, 5).unwrap().to_string(), "W5");
        assert_eq!(Card::of(Color::Green, 2).unwrap().to_string(), "G2");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::of(Color::Yellow, 4).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"color":"Yellow","number":4}"#);

        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_out_of_range_number_rejected_on_deserialize() {
        let result: Result<Card, _> = serde_json::from_str(r#"{"color":"Red","number":9}"#);
        assert!(result.is_err());
    }
}
