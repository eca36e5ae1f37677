//! Dealing hands from a deck.

use rand::Rng;

use crate::deck::Deck;
use crate::hand::Hand;
use crate::shuffle::shuffled;

/// Deals `count` cards from a freshly shuffled copy of `deck`.
///
/// The deck itself is left untouched, so every call draws from a full deck.
/// Asking for more cards than the deck holds returns the whole shuffled deck
/// rather than failing, and a count of zero returns an empty hand.
pub fn deal<R: Rng + ?Sized>(deck: &Deck, count: usize, rng: &mut R) -> Hand {
    let mut cards = shuffled(deck.cards(), rng);
    cards.truncate(count);
    Hand::new(cards)
}
