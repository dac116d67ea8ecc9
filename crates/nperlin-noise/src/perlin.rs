//! N-dimensional Perlin noise generator.
//!
//! [`Perlin`] owns a seed and a [`GradientCache`]. Each call splits the input
//! into a lattice cell and offset ([`NoiseState`]) and blends the cell's
//! corner gradients.
//!
//! # Calling conventions
//!
//! | Input | Method | Arity check |
//! |-------|--------|-------------|
//! | `(x, y, z)` / `[x, y, z]` / [`Point`] | [`Perlin::noise`] | compile time |
//! | `noise!(perlin, x, y, z)` | [`crate::noise!`] | compile time |
//! | any `IntoIterator<Item = F>` | [`Perlin::noise_iter`] | runtime |
//! | `&[F]` buffer | [`Perlin::noise_slice`] | runtime |
//!
//! All of them produce the same value for the same coordinate.
//!
//! # Thread Safety
//!
//! Every cache miss mutates the generator, so evaluation takes `&mut self`.
//! A generator is `Send` but is meant to be owned by one worker; parallel
//! renderers give each worker its own instance with the same seed.
//!
//! # Example
//!
//! ```rust
//! use nperlin_noise::Perlin;
//!
//! let mut perlin: Perlin<3> = Perlin::new(42);
//! let a = perlin.noise((0.25, 1.5, -3.75));
//! let b = perlin.noise([0.25, 1.5, -3.75]);
//! let c = perlin.noise_slice(&[0.25, 1.5, -3.75]).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a, c);
//! assert!(a.abs() <= 3f32.sqrt() / 2.0);
//! ```

use nperlin_core::{Coord, Error, LatticeInt, Point, Result};
use num_traits::AsPrimitive;
use rand_distr::{Distribution, StandardNormal};
use tracing::debug;

use crate::gradient::GradientCache;
use crate::interp::NoiseState;

/// Largest dimension [`sample_any_dim`] dispatches to.
pub const MAX_DYN_DIM: usize = 6;

/// Seeded N-dimensional gradient noise generator.
///
/// - `N` - dimension, at least 1
/// - `F` - coordinate type (`f32` by default)
/// - `I` - lattice index type (`i32` by default)
///
/// Output is roughly within `±sqrt(N)/2` and is not clamped. Integer
/// coordinates always give exactly zero.
#[derive(Debug, Clone)]
pub struct Perlin<const N: usize, F = f32, I = i32> {
    seed: u64,
    gradients: GradientCache<F, I, N>,
}

impl<const N: usize, F, I> Default for Perlin<N, F, I>
where
    F: Coord + AsPrimitive<I>,
    I: LatticeInt + AsPrimitive<F>,
    StandardNormal: Distribution<F>,
{
    /// Generator with seed 0.
    fn default() -> Self {
        Self::new(0)
    }
}

impl<const N: usize, F, I> Perlin<N, F, I>
where
    F: Coord + AsPrimitive<I>,
    I: LatticeInt + AsPrimitive<F>,
    StandardNormal: Distribution<F>,
{
    /// Creates a generator with an empty gradient cache.
    ///
    /// `N = 0` is rejected at compile time.
    pub fn new(seed: u64) -> Self {
        const { assert!(N >= 1, "perlin noise needs at least one dimension") };
        debug!(dim = N, seed, "creating perlin generator");
        Self {
            seed,
            gradients: GradientCache::new(),
        }
    }

    /// Seed the gradient field was built from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Noise at `point`.
    ///
    /// Accepts a [`Point`], an `[F; N]` array or an `N`-tuple of scalars.
    #[inline]
    pub fn noise(&mut self, point: impl Into<Point<F, N>>) -> F {
        NoiseState::new(point.into(), self.seed).blend(&mut self.gradients)
    }

    /// Noise at a coordinate given as exactly `N` items.
    ///
    /// Fails with [`Error::ArityMismatch`] for any other item count.
    ///
    /// ```rust
    /// use nperlin_noise::Perlin;
    ///
    /// let mut perlin: Perlin<2, f64> = Perlin::default();
    /// let coords = vec![0.5, 0.25];
    /// assert!(perlin.noise_iter(coords.iter().copied()).is_ok());
    /// assert!(perlin.noise_iter([0.5]).is_err());
    /// ```
    pub fn noise_iter(&mut self, coords: impl IntoIterator<Item = F>) -> Result<F> {
        Ok(self.noise(Point::try_from_iter(coords)?))
    }

    /// Noise at a coordinate stored in a contiguous buffer of `N` values.
    ///
    /// Fails with [`Error::ArityMismatch`] unless `coords.len() == N`.
    pub fn noise_slice(&mut self, coords: &[F]) -> Result<F> {
        Ok(self.noise(Point::try_from(coords)?))
    }

    /// Gradient assigned to the lattice point `key`.
    ///
    /// Generates it on first access; afterwards always returns the same vector.
    pub fn gradient(&mut self, key: impl Into<Point<I, N>>) -> Point<F, N> {
        self.gradients.gradient(self.seed, key.into())
    }

    /// Number of lattice points visited so far.
    pub fn cache_len(&self) -> usize {
        self.gradients.len()
    }

    /// Drops all cached gradients. Results are unaffected.
    pub fn clear_cache(&mut self) {
        debug!(dim = N, cached = self.gradients.len(), "clearing gradient cache");
        self.gradients.clear();
    }
}

/// One-off noise evaluation with the dimension chosen at runtime.
///
/// Builds a fresh `Perlin<coords.len(), F, i64>` with `seed`. Supports
/// `1..=MAX_DYN_DIM` components; anything else is
/// [`Error::UnsupportedDimension`].
///
/// ```rust
/// use nperlin_noise::{sample_any_dim, Perlin};
///
/// let dynamic = sample_any_dim(7, &[0.5f64, 1.25]).unwrap();
/// let mut fixed: Perlin<2, f64, i64> = Perlin::new(7);
/// assert_eq!(dynamic, fixed.noise([0.5, 1.25]));
/// assert!(sample_any_dim::<f64>(7, &[]).is_err());
/// ```
pub fn sample_any_dim<F>(seed: u64, coords: &[F]) -> Result<F>
where
    F: Coord + AsPrimitive<i64>,
    i64: AsPrimitive<F>,
    StandardNormal: Distribution<F>,
{
    match coords.len() {
        1 => Perlin::<1, F, i64>::new(seed).noise_slice(coords),
        2 => Perlin::<2, F, i64>::new(seed).noise_slice(coords),
        3 => Perlin::<3, F, i64>::new(seed).noise_slice(coords),
        4 => Perlin::<4, F, i64>::new(seed).noise_slice(coords),
        5 => Perlin::<5, F, i64>::new(seed).noise_slice(coords),
        6 => Perlin::<6, F, i64>::new(seed).noise_slice(coords),
        dim => Err(Error::unsupported_dimension(dim, MAX_DYN_DIM)),
    }
}
