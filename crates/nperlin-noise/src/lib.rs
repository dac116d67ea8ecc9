//! # nperlin-noise
//!
//! N-dimensional gradient (Perlin) noise.
//!
//! Given a coordinate in N-space, [`Perlin`] returns a smooth, deterministic
//! scalar by blending random unit gradients attached to the corners of the
//! lattice cell containing the coordinate.
//!
//! - [`Perlin`] - Seeded generator, the public entry point
//! - [`GradientCache`] - Lazily filled map from lattice point to gradient
//! - [`NoiseState`], [`fade`], [`lerp`] - Corner interpolation
//! - [`hash`] - Seed and lattice coordinate hashing
//!
//! # Usage
//!
//! ```rust
//! use nperlin_noise::{noise, Perlin};
//!
//! let mut perlin: Perlin<2> = Perlin::new(7);
//!
//! // Integer coordinates are lattice points: always exactly zero.
//! assert_eq!(perlin.noise((3.0, -2.0)), 0.0);
//!
//! let v = noise!(perlin, 0.5, 0.5);
//! assert!(v.abs() <= 2f32.sqrt() / 2.0);
//! ```
//!
//! # Cost
//!
//! A sample visits `2^N` lattice corners, so the generator is meant for small
//! dimensions (1 to 6 in practice). Memory grows with the number of distinct
//! lattice points visited and is only released with the generator or by
//! [`Perlin::clear_cache`].
//!
//! # Dependencies
//!
//! - [`rand`], [`rand_distr`], [`rand_pcg`] - Seeded uniform-on-sphere gradients
//! - [`rustc_hash`] - Fast hash map for the gradient cache
//! - `nperlin-core` - [`Point`](nperlin_core::Point) and scalar traits
//!
//! # Used By
//!
//! - `nperlin-render` - Looping animation frames
//! - `nperlin-cli` - `sample` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gradient;
pub mod hash;
pub mod interp;
pub mod perlin;

pub use gradient::GradientCache;
pub use interp::{fade, lerp, NoiseState};
pub use perlin::{sample_any_dim, Perlin, MAX_DYN_DIM};

/// Evaluates noise with per-axis scalar arguments.
///
/// `noise!(perlin, x, y, z)` is `perlin.noise([x, y, z])`; passing the wrong
/// number of scalars for the generator's dimension does not compile.
///
/// ```rust
/// use nperlin_noise::{noise, Perlin};
///
/// let mut perlin: Perlin<3> = Perlin::default();
/// assert_eq!(noise!(perlin, 0.1, 0.2, 0.3), perlin.noise((0.1, 0.2, 0.3)));
/// ```
///
/// ```compile_fail
/// use nperlin_noise::{noise, Perlin};
///
/// let mut perlin: Perlin<3> = Perlin::default();
/// noise!(perlin, 0.1, 0.2);
/// ```
#[macro_export]
macro_rules! noise {
    ($perlin:expr, $($coord:expr),+ $(,)?) => {
        $perlin.noise([$($coord),+])
    };
}
