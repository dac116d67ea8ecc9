//! CLI command implementations

pub mod dump;
pub mod render;
pub mod sample;

use crate::AnimationArgs;
use anyhow::{Context, Result};
use nperlin_render::AnimationConfig;
use tracing::debug;

/// Builds the animation config: `base` or the `--config` file, then flags.
pub fn resolve_config(args: &AnimationArgs, base: AnimationConfig) -> Result<AnimationConfig> {
    let mut config = match &args.config {
        Some(path) => AnimationConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => base,
    };

    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(frames) = args.frames {
        config.frames = frames;
    }
    if let Some(r) = args.space_radius {
        config.space_radius = r;
    }
    if let Some(r) = args.time_radius {
        config.time_radius = r;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    config.validate().context("Invalid animation parameters")?;
    debug!(?config, "resolved animation config");
    Ok(config)
}
