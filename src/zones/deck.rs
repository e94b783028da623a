//! The draw pile.
//!
//! The top of the deck is the end of the underlying `Vec`, so drawing is a
//! `pop` and the last card placed (or shuffled) into position is drawn first.

use log::trace;

use crate::cards::{Card, Color, Number};
use crate::core::config::DECK_SIZE;
use crate::core::{GameError, GameRng};

/// Ordered stack of undrawn cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the full 50-card deck in construction order.
    ///
    /// Numbers ascend; within a number the colors run `R Y G B W`, and each
    /// card is repeated according to `Number::copies` before moving to the
    /// next color. The deck is not shuffled.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for number in Number::all() {
            for color in Color::ALL {
                let card = Card::new(color, number);
                cards.extend(std::iter::repeat(card).take(number.copies()));
            }
        }
        Self { cards }
    }

    /// Use a pre-arranged deck. The last card in `cards` is drawn first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Randomly permute the remaining cards in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    ///
    /// Drawing from an empty deck is a contract violation: check
    /// [`Deck::is_empty`] first. It is reported as
    /// [`GameError::EmptyDeckDraw`] rather than panicking.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        let card = self.cards.pop().ok_or(GameError::EmptyDeckDraw)?;
        trace!("drew {} ({} left)", card, self.cards.len());
        Ok(card)
    }

    /// Draw up to `n` cards, stopping quietly if the deck runs out.
    ///
    /// Cards are returned in draw order.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        let mut dealt = self.cards.split_off(self.cards.len() - take);
        dealt.reverse();
        dealt
    }

    /// Number of cards left.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(color: Color, number: u8) -> Card {
        Card::of(color, number).unwrap()
    }

    #[test]
    fn test_new_deck_has_fifty_cards() {
        assert_eq!(Deck::new().size(), DECK_SIZE);
    }

    #[test]
    fn test_construction_order() {
        let deck = Deck::new();
        let cards = deck.cards();

        assert_eq!(&cards[..4], &[
            card(Color::Red, 1),
            card(Color::Red, 1),
            card(Color::Red, 1),
            card(Color::Yellow, 1),
        ]);
        // Fifteen 1s, then the 2s begin.
        assert_eq!(cards[15], card(Color::Red, 2));
        assert_eq!(cards[DECK_SIZE - 1], card(Color::White, 5));
    }

    #[test]
    fn test_draw_takes_from_top() {
        let mut deck = Deck::from_cards(vec![card(Color::Red, 1), card(Color::Blue, 3)]);

        assert_eq!(deck.draw(), Ok(card(Color::Blue, 3)));
        assert_eq!(deck.draw(), Ok(card(Color::Red, 1)));
        assert_eq!(deck.draw(), Err(GameError::EmptyDeckDraw));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_deal_returns_draw_order() {
        let mut deck = Deck::from_cards(vec![
            card(Color::Red, 1),
            card(Color::Green, 2),
            card(Color::White, 3),
        ]);

        let dealt = deck.deal(2);

        assert_eq!(dealt, vec![card(Color::White, 3), card(Color::Green, 2)]);
        assert_eq!(deck.cards(), &[card(Color::Red, 1)]);
    }

    #[test]
    fn test_deal_stops_when_empty() {
        let mut deck = Deck::from_cards(vec![card(Color::Red, 1), card(Color::Green, 2)]);

        let dealt = deck.deal(5);

        assert_eq!(dealt.len(), 2);
        assert!(deck.is_empty());
        assert!(deck.deal(3).is_empty());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle(&mut GameRng::new(1));
        b.shuffle(&mut GameRng::new(1));

        assert_eq!(a, b);
        assert_ne!(a, Deck::new());
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut deck = Deck::new();
        deck.shuffle(&mut GameRng::new(99));

        let mut shuffled = deck.cards().to_vec();
        let mut original = Deck::new().cards().to_vec();
        shuffled.sort();
        original.sort();

        assert_eq!(shuffled, original);
    }
}
