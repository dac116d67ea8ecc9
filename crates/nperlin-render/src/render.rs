//! Frame rendering.
//!
//! Frames are independent, so an animation is split into contiguous frame
//! ranges and each range is rendered by one rayon task that owns its own
//! [`Perlin`] generator. Nothing is shared between tasks except an atomic
//! progress counter. All generators use the configured seed, so the output
//! does not depend on the number of threads.

use crate::{AnimationConfig, LoopSampler, RenderResult};
use nperlin_io::{Frame, IoResult};
use nperlin_noise::Perlin;
use rayon::prelude::*;
use std::ops::Range;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, info};

/// Generator used for looping animations: three wrapped axes, six dimensions.
pub type LoopNoise = Perlin<6, f32, i32>;

/// Splits `0..total` into at most `workers` contiguous, non-empty ranges.
///
/// Range `i` is `i * total / workers .. (i + 1) * total / workers`.
///
/// ```rust
/// use nperlin_render::frame_ranges;
///
/// assert_eq!(frame_ranges(10, 3), vec![0..3, 3..6, 6..10]);
/// assert_eq!(frame_ranges(2, 4), vec![0..1, 1..2]);
/// ```
pub fn frame_ranges(total: u32, workers: usize) -> Vec<Range<u32>> {
    let workers = workers.max(1) as u64;
    let total64 = total as u64;
    (0..workers)
        .map(|i| (i * total64 / workers) as u32..((i + 1) * total64 / workers) as u32)
        .filter(|range| !range.is_empty())
        .collect()
}

/// Renders frame `index` of the animation with `perlin`.
pub fn render_frame(perlin: &mut LoopNoise, config: &AnimationConfig, index: u32) -> Frame {
    let sampler = LoopSampler::from_config(config);
    let progress = config.progress(index);
    let mut frame = Frame::new(config.size, config.size);
    for y in 0..config.size {
        for x in 0..config.size {
            frame.set(x, y, perlin.noise(sampler.coords(x, y, progress)));
        }
    }
    frame
}

/// Counts finished frames and logs progress.
struct Progress {
    done: AtomicU32,
    total: u32,
}

impl Progress {
    fn new(total: u32) -> Self {
        Self {
            done: AtomicU32::new(0),
            total,
        }
    }

    fn tick(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        info!(done, total = self.total, "Progress: {}/{}", done, self.total);
    }
}

/// Renders every frame in parallel and returns them in order.
pub fn render_frames(config: &AnimationConfig) -> RenderResult<Vec<Frame>> {
    config.validate()?;
    let ranges = frame_ranges(config.frames, rayon::current_num_threads());
    debug!(frames = config.frames, tasks = ranges.len(), "render_frames");

    let progress = Progress::new(config.frames);
    let chunks: Vec<Vec<Frame>> = ranges
        .into_par_iter()
        .map(|range| {
            let mut perlin = LoopNoise::new(config.seed);
            range
                .map(|index| {
                    let frame = render_frame(&mut perlin, config, index);
                    progress.tick();
                    frame
                })
                .collect()
        })
        .collect();

    Ok(chunks.concat())
}

/// Renders every frame in parallel, handing each to `sink` as it finishes.
///
/// `sink` is called from worker threads in no particular order. The first
/// sink error stops the remaining work and is returned.
///
/// Returns the number of frames rendered.
pub fn render_animation<S>(config: &AnimationConfig, sink: S) -> RenderResult<u32>
where
    S: Fn(u32, &Frame) -> IoResult<()> + Sync,
{
    config.validate()?;
    let ranges = frame_ranges(config.frames, rayon::current_num_threads());
    info!(
        frames = config.frames,
        size = config.size,
        seed = config.seed,
        tasks = ranges.len(),
        "Rendering animation"
    );

    let progress = Progress::new(config.frames);
    ranges.into_par_iter().try_for_each(|range| -> RenderResult<()> {
        let mut perlin = LoopNoise::new(config.seed);
        for index in range {
            let frame = render_frame(&mut perlin, config, index);
            sink(index, &frame)?;
            progress.tick();
        }
        debug!(cached = perlin.cache_len(), "render task finished");
        Ok(())
    })?;

    Ok(progress.done.into_inner())
}
