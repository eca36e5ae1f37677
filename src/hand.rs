//! The hand dealt for a single drill round.

use alloc::vec::Vec;

use crate::card::Card;
use crate::count::evaluate;

/// Cards dealt for one round, paired with their Hi-Lo count.
///
/// The count is computed when the hand is built and cannot drift from the
/// cards, since neither can be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Running count of the cards.
    count: i32,
}

impl Hand {
    /// Creates a hand from the given cards.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        let count = evaluate(&cards);
        Self { cards, count }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the Hi-Lo running count of the hand.
    #[must_use]
    pub const fn count(&self) -> i32 {
        self.count
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consumes the hand and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}
