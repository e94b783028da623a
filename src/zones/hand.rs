//! A player's hand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::config::HAND_SIZE;
use crate::core::GameError;

/// Ordered cards held by one player. Cards are referenced by position.
///
/// Removing a card keeps the relative order of the others; new cards are
/// appended at the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; HAND_SIZE]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Card at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Check that `index` refers to a card in this hand.
    pub fn check_index(&self, index: usize) -> Result<(), GameError> {
        if index < self.cards.len() {
            Ok(())
        } else {
            Err(GameError::InvalidCardIndex {
                index,
                hand_size: self.cards.len(),
            })
        }
    }

    /// Remove the card at `index`, shifting later cards down.
    pub fn remove(&mut self, index: usize) -> Result<Card, GameError> {
        self.check_index(index)?;
        Ok(self.cards.remove(index))
    }

    /// Add a card at the end.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the cards in order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The cards as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    fn hand(cards: &[(Color, u8)]) -> Hand {
        cards.iter().map(|&(c, n)| Card::of(c, n).unwrap()).collect()
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut h = hand(&[(Color::Red, 1), (Color::Blue, 2), (Color::White, 3)]);

        let removed = h.remove(1).unwrap();

        assert_eq!(removed, Card::of(Color::Blue, 2).unwrap());
        assert_eq!(h, hand(&[(Color::Red, 1), (Color::White, 3)]));
    }

    #[test]
    fn test_remove_out_of_bounds_leaves_hand_alone() {
        let mut h = hand(&[(Color::Red, 1)]);

        let err = h.remove(1).unwrap_err();

        assert_eq!(err, GameError::InvalidCardIndex { index: 1, hand_size: 1 });
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_push_appends() {
        let mut h = Hand::new();
        assert!(h.is_empty());

        h.push(Card::of(Color::Green, 4).unwrap());
        h.push(Card::of(Color::Yellow, 5).unwrap());

        assert_eq!(h.get(1), Card::of(Color::Yellow, 5).as_ref());
        assert_eq!(h.to_string(), "[G4 Y5]");
    }
}
