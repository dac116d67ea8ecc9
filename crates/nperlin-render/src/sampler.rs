//! Seamless coordinate mapping.
//!
//! Each looping axis (image x, image y, time) is wrapped onto a circle and
//! sampled as a `(sin, cos)` pair, so the left and right image edges, top and
//! bottom edges, and the first and last frame all meet without a seam. Three
//! looping axes need six noise dimensions.

use crate::AnimationConfig;
use nperlin_core::Point;
use std::f64::consts::TAU;

/// Maps pixels and loop progress onto 6-D noise coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSampler {
    size: u32,
    space_radius: f64,
    time_radius: f64,
}

impl LoopSampler {
    /// Creates a sampler for square frames of `size` pixels.
    pub fn new(size: u32, space_radius: f64, time_radius: f64) -> Self {
        Self {
            size,
            space_radius,
            time_radius,
        }
    }

    /// Sampler matching an animation configuration.
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.size, config.space_radius, config.time_radius)
    }

    /// Noise coordinate of pixel `(x, y)` at loop `progress` in `[0, 1)`.
    ///
    /// ```rust
    /// use nperlin_render::LoopSampler;
    ///
    /// let sampler = LoopSampler::new(64, 2.0, 1.5);
    /// // Wrapping: pixel 0 and pixel 64 map to the same point.
    /// assert!((sampler.coords(0, 5, 0.25)[0] - sampler.coords(64, 5, 0.25)[0]).abs() < 1e-6);
    /// ```
    pub fn coords(&self, x: u32, y: u32, progress: f64) -> Point<f32, 6> {
        let step = TAU / self.size as f64;
        let (sx, cx) = (step * x as f64).sin_cos();
        let (sy, cy) = (step * y as f64).sin_cos();
        let (st, ct) = (TAU * progress).sin_cos();
        let rs = self.space_radius;
        let rt = self.time_radius;
        Point::new([rs * sx, rs * cx, rs * sy, rs * cy, rt * st, rt * ct].map(|c| c as f32))
    }
}
