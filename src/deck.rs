//! The standard 52-card deck.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A complete, ordered 52-card deck.
///
/// The deck is never mutated once generated. Dealing works on shuffled
/// copies, so the same deck serves every round of a drill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Generates a standard deck: every suit crossed with every rank.
    ///
    /// Cards are enumerated suit by suit (hearts, diamonds, clubs, spades),
    /// ace through king within each suit.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns an iterator over the cards in deck order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Generates a standard 52-card deck.
///
/// Shorthand for [`Deck::standard`].
#[must_use]
pub fn generate_deck() -> Deck {
    Deck::standard()
}
