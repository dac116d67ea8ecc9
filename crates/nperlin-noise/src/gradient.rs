//! Memoized lattice gradients.
//!
//! Every lattice corner gets one random unit vector, drawn the first time the
//! corner is visited and kept for the lifetime of the cache.
//!
//! # Generation
//!
//! A fresh [`Pcg64Mcg`] is seeded with the corner hash (see
//! [`crate::hash::corner_hash`]) and `N` standard normal values are drawn and
//! normalized. Normalized Gaussian vectors are uniformly distributed over the
//! unit hypersphere. Reseeding per corner makes a gradient depend only on
//! (generator seed, corner coordinates), never on visitation order.
//!
//! # Memory
//!
//! The cache is never evicted. It grows with the number of distinct lattice
//! points visited; callers bounding memory use a fresh generator per region or
//! call [`GradientCache::clear`].

use nperlin_core::{Coord, LatticeInt, Point};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use rand_pcg::Pcg64Mcg;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::hash::corner_hash;

/// Draws a unit vector uniformly distributed over the N-sphere.
///
/// Deterministic per `corner_seed`. A zero-length draw is rejected and the
/// next draw from the same stream is used.
///
/// ```rust
/// use nperlin_noise::gradient::sample_unit_sphere;
///
/// let g = sample_unit_sphere::<f64, 4>(1234);
/// assert!((g.length() - 1.0).abs() < 1e-12);
/// assert_eq!(g, sample_unit_sphere::<f64, 4>(1234));
/// ```
pub fn sample_unit_sphere<F, const N: usize>(corner_seed: u64) -> Point<F, N>
where
    F: Coord,
    StandardNormal: Distribution<F>,
{
    let mut rng = Pcg64Mcg::seed_from_u64(corner_seed);
    loop {
        let draw: Point<F, N> = Point::from_fn(|_| rng.sample(StandardNormal));
        if let Some(unit) = draw.normalize() {
            return unit;
        }
    }
}

/// Map from lattice key to its gradient.
///
/// Keys compare and hash structurally. One cache belongs to one generator.
#[derive(Debug, Clone)]
pub struct GradientCache<F, I, const N: usize> {
    gradients: FxHashMap<Point<I, N>, Point<F, N>>,
}

impl<F, I, const N: usize> Default for GradientCache<F, I, N> {
    fn default() -> Self {
        Self {
            gradients: FxHashMap::default(),
        }
    }
}

impl<F, I, const N: usize> GradientCache<F, I, N>
where
    F: Coord,
    I: LatticeInt,
    StandardNormal: Distribution<F>,
{
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the gradient for `key` under generator `seed`.
    ///
    /// Generates and stores it on first access.
    pub fn gradient(&mut self, seed: u64, key: Point<I, N>) -> Point<F, N> {
        self.get_or_insert(key, corner_hash(seed, &key))
    }

    /// Returns the gradient for `key`, generating it from `corner_seed` on a miss.
    ///
    /// `corner_seed` must equal `corner_hash(seed, &key)`; the interpolation
    /// passes the hash it has already folded on the way down.
    #[inline]
    pub fn get_or_insert(&mut self, key: Point<I, N>, corner_seed: u64) -> Point<F, N> {
        *self.gradients.entry(key).or_insert_with(|| {
            trace!(?key, corner_seed, "generating gradient");
            sample_unit_sphere(corner_seed)
        })
    }

    /// Returns the cached gradient for `key` without generating one.
    pub fn get(&self, key: &Point<I, N>) -> Option<Point<F, N>> {
        self.gradients.get(key).copied()
    }

    /// Number of cached gradients.
    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    /// Returns `true` if no gradient has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }

    /// Drops every cached gradient.
    ///
    /// Later lookups regenerate identical vectors.
    pub fn clear(&mut self) {
        self.gradients.clear();
    }
}
