//! Hi-Lo running count evaluation.

use crate::card::Card;

/// Returns the Hi-Lo running count of `cards`.
///
/// An empty slice counts `0`, and the result does not depend on card order.
///
/// ```
/// use hilo_drill::{Card, Rank, Suit, count::evaluate};
///
/// let cards = [
///     Card::new(Suit::Hearts, Rank::Two),
///     Card::new(Suit::Clubs, Rank::Six),
///     Card::new(Suit::Spades, Rank::King),
/// ];
/// assert_eq!(evaluate(&cards), 1);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> i32 {
    cards.iter().map(|card| i32::from(card.hi_lo_value())).sum()
}
