//! Lattice hashing.
//!
//! Folds the generator seed with the integer coordinates of a lattice corner,
//! one axis at a time, into the 64-bit word that seeds that corner's gradient.
//! The combine step is not commutative, so `(1, 2)` and `(2, 1)` get unrelated
//! seeds.
//!
//! Cache lookups never use this hash: the gradient map keys on the corner's
//! coordinates. The hash only decides *which* random gradient a new corner
//! receives.

use nperlin_core::{LatticeInt, Point};

/// Odd 64-bit constant derived from the golden ratio.
pub const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Folds one word into a running hash.
///
/// `seed ^ (word + GOLDEN_GAMMA + (seed << 6) + (seed >> 2))`, all wrapping.
#[inline]
pub fn hash_combine(seed: u64, word: u64) -> u64 {
    seed ^ word
        .wrapping_add(GOLDEN_GAMMA)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Hash of a lattice corner under a generator seed.
///
/// Equivalent to calling [`hash_combine`] for each coordinate in axis order,
/// starting from `seed`.
///
/// ```rust
/// use nperlin_core::Point;
/// use nperlin_noise::hash::{corner_hash, hash_combine};
///
/// let key = Point::new([3i32, -4]);
/// let manual = hash_combine(hash_combine(7, 3), (-4i64) as u64);
/// assert_eq!(corner_hash(7, &key), manual);
/// ```
#[inline]
pub fn corner_hash<I: LatticeInt, const N: usize>(seed: u64, key: &Point<I, N>) -> u64 {
    key.iter()
        .fold(seed, |hash, &coord| hash_combine(hash, coord.hash_word()))
}
