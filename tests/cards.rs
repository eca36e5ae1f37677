//! Card, deck, shuffle, dealing and counting tests.

use std::collections::HashSet;

use hilo_drill::count::evaluate;
use hilo_drill::dealer::deal;
use hilo_drill::shuffle::{shuffle_in_place, shuffled};
use hilo_drill::{Card, DECK_SIZE, Deck, Hand, Rank, Suit, generate_deck};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn hi_lo_values() {
    assert_eq!(Rank::Ace.hi_lo_value(), -1);
    assert_eq!(Rank::Two.hi_lo_value(), 1);
    assert_eq!(Rank::Six.hi_lo_value(), 1);
    assert_eq!(Rank::Seven.hi_lo_value(), 0);
    assert_eq!(Rank::Nine.hi_lo_value(), 0);
    assert_eq!(Rank::Ten.hi_lo_value(), -1);
    assert_eq!(Rank::King.hi_lo_value(), -1);

    let total: i32 = Rank::ALL.iter().map(|r| i32::from(r.hi_lo_value())).sum();
    assert_eq!(total, 0, "a balanced count sums to zero over one suit");
}

#[test]
fn card_display() {
    assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A♠");
    assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
}

#[test]
fn standard_deck_is_complete() {
    let deck = generate_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        assert_eq!(deck.iter().filter(|c| c.suit == suit).count(), 13);
    }
    for rank in Rank::ALL {
        assert_eq!(deck.iter().filter(|c| c.rank == rank).count(), 4);
    }
    assert_eq!(evaluate(deck.cards()), 0);
}

#[test]
fn deck_order_is_deterministic() {
    let deck = Deck::standard();
    assert_eq!(deck, Deck::default());
    assert_eq!(deck.cards()[0], Card::new(Suit::Hearts, Rank::Ace));
    assert_eq!(deck.cards()[51], Card::new(Suit::Spades, Rank::King));
}

#[test]
fn shuffled_leaves_input_untouched() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = Deck::standard();
    let before = deck.clone();

    let mixed = shuffled(deck.cards(), &mut rng);

    assert_eq!(deck, before);
    assert_ne!(mixed, deck.cards());
    let mut sorted_a: Vec<_> = mixed.iter().map(|c| format!("{c}")).collect();
    let mut sorted_b: Vec<_> = deck.iter().map(|c| format!("{c}")).collect();
    sorted_a.sort();
    sorted_b.sort();
    assert_eq!(sorted_a, sorted_b);
}

#[test]
fn shuffle_of_empty_and_single() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let empty: [u8; 0] = [];
    assert!(shuffled(&empty, &mut rng).is_empty());
    assert_eq!(shuffled(&[9], &mut rng), vec![9]);
}

#[test]
fn shuffle_positions_are_unbiased() {
    const TRIALS: usize = 20_000;
    const N: usize = 5;

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut counts = [[0usize; N]; N];

    for _ in 0..TRIALS {
        let mut items = [0, 1, 2, 3, 4];
        shuffle_in_place(&mut items, &mut rng);
        for (pos, &item) in items.iter().enumerate() {
            counts[item][pos] += 1;
        }
    }

    // Every element should land in every slot about TRIALS / N times.
    let expected = TRIALS / N;
    for row in counts {
        for count in row {
            assert!(
                count.abs_diff(expected) < expected / 10,
                "count {count} too far from {expected}"
            );
        }
    }
}

#[test]
fn deal_takes_prefix_without_touching_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let deck = Deck::standard();

    let hand = deal(&deck, 12, &mut rng);
    assert_eq!(hand.len(), 12);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(hand.count(), evaluate(hand.cards()));
}

#[test]
fn deal_beyond_deck_size_returns_whole_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let hand = deal(&Deck::standard(), 53, &mut rng);

    assert_eq!(hand.len(), DECK_SIZE);
    let unique: HashSet<Card> = hand.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn deal_zero_is_empty() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let hand = deal(&Deck::standard(), 0, &mut rng);

    assert!(hand.is_empty());
    assert_eq!(hand.count(), 0);
}

#[test]
fn evaluate_empty_is_zero() {
    assert_eq!(evaluate(&[]), 0);
    assert_eq!(Hand::default().count(), 0);
}

proptest! {
    #[test]
    fn dealt_hands_are_distinct_cards_from_deck(seed in any::<u64>(), n in 0usize..=52) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::standard();
        let hand = deal(&deck, n, &mut rng);

        prop_assert_eq!(hand.len(), n);
        let unique: HashSet<Card> = hand.cards().iter().copied().collect();
        prop_assert_eq!(unique.len(), n);
        prop_assert!(hand.cards().iter().all(|c| deck.cards().contains(c)));
    }

    #[test]
    fn evaluate_ignores_order(seed in any::<u64>(), n in 0usize..=52) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let hand = deal(&Deck::standard(), n, &mut rng);
        let mut reversed = hand.cards().to_vec();
        reversed.reverse();

        prop_assert_eq!(evaluate(&reversed), hand.count());
        prop_assert_eq!(evaluate(&shuffled(&reversed, &mut rng)), hand.count());
    }
}
