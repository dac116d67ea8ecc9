//! Fade-weighted interpolation over the corners of a lattice cell.
//!
//! A query point splits into its cell (the floor of every coordinate) and an
//! offset in `[0, 1)^N`. Each of the `2^N` cell corners contributes the dot
//! product of its gradient with the displacement from that corner; the
//! contributions are blended axis by axis with [`lerp`], weighted by
//! [`fade`] of the offset.
//!
//! # Recursion
//!
//! [`NoiseState::blend`] resolves one axis per level. At axis `i` it descends
//! into the low corner (coordinate unchanged) and the high corner (coordinate
//! plus one, displacement minus one), then blends the two results. The corner
//! hash travels down as a plain value: each branch folds its own coordinate
//! into its own copy, so sibling branches never see each other's state.
//!
//! Cost is `2^N` gradient lookups per sample.

use nperlin_core::{Coord, LatticeInt, Point};
use num_traits::AsPrimitive;
use rand_distr::{Distribution, StandardNormal};

use crate::gradient::GradientCache;
use crate::hash::{corner_hash, hash_combine};

/// Quintic fade curve `t^3 (t (6t - 15) + 10)`.
///
/// Value 0 and zero first and second derivative at `t = 0`, value 1 and zero
/// derivatives at `t = 1`, which keeps the noise C1 across cell faces.
///
/// ```rust
/// use nperlin_noise::fade;
///
/// assert_eq!(fade(0.0f32), 0.0);
/// assert_eq!(fade(1.0f32), 1.0);
/// assert_eq!(fade(0.5f64), 0.5);
/// ```
#[inline]
pub fn fade<F: Coord>(t: F) -> F {
    let six = F::constant(6.0);
    let fifteen = F::constant(15.0);
    let ten = F::constant(10.0);
    t * t * t * (t * (t * six - fifteen) + ten)
}

/// Linear blend `w * high + (1 - w) * low`.
///
/// Exact at the endpoints: `w = 0` gives `low`, `w = 1` gives `high`.
#[inline]
pub fn lerp<F: Coord>(w: F, low: F, high: F) -> F {
    w * high + (F::one() - w) * low
}

/// Per-sample state: the cell, the offset inside it and the fade weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseState<F, I, const N: usize> {
    /// Minimal corner of the cell containing the sample.
    pub cell: Point<I, N>,
    /// Displacement from `cell`, each component in `[0, 1)` for finite input.
    pub offset: Point<F, N>,
    /// [`fade`] of each offset component.
    pub weights: Point<F, N>,
    /// Generator seed the corner hashes start from.
    pub seed: u64,
}

impl<F, I, const N: usize> NoiseState<F, I, N>
where
    F: Coord + AsPrimitive<I>,
    I: LatticeInt + AsPrimitive<F>,
    StandardNormal: Distribution<F>,
{
    /// Splits `point` into cell and offset.
    ///
    /// Non-finite components are not rejected: they saturate in the integer
    /// cast and leave a non-finite offset, which propagates to the result.
    pub fn new(point: Point<F, N>, seed: u64) -> Self {
        let cell: Point<I, N> = point.map(|c| c.floor().as_());
        let offset = point - cell.map(|c| c.as_());
        Self {
            cell,
            offset,
            weights: offset.map(fade),
            seed,
        }
    }

    /// Blends all `2^N` corner contributions.
    pub fn blend(&self, gradients: &mut GradientCache<F, I, N>) -> F {
        self.descend(gradients, 0, self.cell, self.offset, self.seed)
    }

    fn descend(
        &self,
        gradients: &mut GradientCache<F, I, N>,
        axis: usize,
        corner: Point<I, N>,
        offset: Point<F, N>,
        hash: u64,
    ) -> F {
        if axis == N {
            debug_assert_eq!(hash, corner_hash(self.seed, &corner));
            return offset.dot(gradients.get_or_insert(corner, hash));
        }

        let low = self.descend(
            gradients,
            axis + 1,
            corner,
            offset,
            hash_combine(hash, corner[axis].hash_word()),
        );

        let high_coord = corner[axis].wrapping_add(&I::one());
        let high = self.descend(
            gradients,
            axis + 1,
            corner.with(axis, high_coord),
            offset.with(axis, offset[axis] - F::one()),
            hash_combine(hash, high_coord.hash_word()),
        );

        lerp(self.weights[axis], low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fade_endpoints_and_slope() {
        let h = 1e-6f64;
        assert_eq!(fade(0.0f64), 0.0);
        assert_eq!(fade(1.0f64), 1.0);
        assert_abs_diff_eq!((fade(h) - fade(0.0)) / h, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!((fade(1.0) - fade(1.0 - h)) / h, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_fade_is_monotonic() {
        let mut prev = fade(0.0f32);
        for i in 1..=100 {
            let next = fade(i as f32 / 100.0);
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(0.0f32, 2.0, 7.0), 2.0);
        assert_eq!(lerp(1.0f32, 2.0, 7.0), 7.0);
        assert_eq!(lerp(0.5f64, 2.0, 4.0), 3.0);
    }

    #[test]
    fn test_state_split() {
        let state = NoiseState::<f32, i32, 3>::new(Point::new([1.25, -0.5, 3.0]), 0);
        assert_eq!(state.cell, Point::new([1, -1, 3]));
        assert_eq!(state.offset, Point::new([0.25, 0.5, 0.0]));
        assert_eq!(state.weights[1], 0.5);
        assert_eq!(state.weights[2], 0.0);
    }

    #[test]
    fn test_blend_visits_every_corner() {
        let mut cache = GradientCache::<f64, i32, 3>::new();
        let state = NoiseState::new(Point::new([0.5f64, 0.5, 0.5]), 3);
        state.blend(&mut cache);
        assert_eq!(cache.len(), 8);

        for corner in 0..8 {
            let key = Point::from_fn(|axis| (corner >> axis) & 1);
            assert!(cache.get(&key).is_some());
        }
    }

    #[test]
    fn test_blend_matches_explicit_corner_sum() {
        let seed = 17;
        let point = Point::new([0.3f64, 0.8]);
        let mut cache = GradientCache::<f64, i32, 2>::new();
        let state = NoiseState::new(point, seed);
        let blended = state.blend(&mut cache);

        let mut contrib = |x: i32, y: i32| {
            let g = cache.gradient(seed, Point::new([x, y]));
            (point - Point::new([x as f64, y as f64])).dot(g)
        };
        let (u, v) = (fade(0.3f64), fade(0.8f64));
        let bottom = lerp(u, contrib(0, 0), contrib(1, 0));
        let top = lerp(u, contrib(0, 1), contrib(1, 1));
        assert_abs_diff_eq!(blended, lerp(v, bottom, top), epsilon = 1e-12);
    }
}
