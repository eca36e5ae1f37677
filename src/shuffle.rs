//! Unbiased Fisher-Yates shuffling.

use alloc::vec::Vec;

use rand::Rng;

/// Shuffles `items` in place.
///
/// Walks from the last index down to the second, swapping each slot with a
/// uniformly chosen slot in `[0, i]`. Every permutation is equally likely.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of `items`, leaving the input untouched.
///
/// ```
/// use hilo_drill::shuffle::shuffled;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let original = [1, 2, 3, 4, 5];
/// let mut mixed = shuffled(&original, &mut rng);
/// mixed.sort_unstable();
/// assert_eq!(mixed, original);
/// ```
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle_in_place(&mut copy, rng);
    copy
}
