//! # nperlin-render
//!
//! Seamlessly looping noise animations.
//!
//! Both image axes and the time axis are wrapped onto circles and sampled
//! through a 6-D [`Perlin`](nperlin_noise::Perlin) generator, so every frame
//! tiles and the last frame flows into the first.
//!
//! - [`AnimationConfig`] - Frame size, frame count, radii, seed
//! - [`LoopSampler`] - Pixel + progress to 6-D coordinate mapping
//! - [`render_frame`], [`render_frames`], [`render_animation`] - Rendering
//!
//! # Usage
//!
//! ```rust,no_run
//! use nperlin_io::{frame_path, png};
//! use nperlin_render::{render_animation, AnimationConfig};
//!
//! let config = AnimationConfig::default();
//! render_animation(&config, |index, frame| {
//!     png::write_gray(frame_path("animation", index), frame)
//! })?;
//! # Ok::<(), nperlin_render::RenderError>(())
//! ```
//!
//! # Parallelism
//!
//! Work is spread over the current rayon pool. Each task owns a generator;
//! no locks are taken while rendering.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod error;
mod render;
mod sampler;

pub use config::AnimationConfig;
pub use error::{RenderError, RenderResult};
pub use render::{frame_ranges, render_animation, render_frame, render_frames, LoopNoise};
pub use sampler::LoopSampler;
