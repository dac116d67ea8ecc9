//! Render command: one PNG per frame

use crate::RenderArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{Context, Result};
use nperlin_io::{frame_path, png};
use nperlin_render::{render_animation, AnimationConfig};
use std::time::Instant;

pub fn run(args: RenderArgs, verbose: u8) -> Result<()> {
    trace!(output = %args.output.display(), "render::run");

    let config = super::resolve_config(&args.animation, AnimationConfig::default())?;

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create output directory: {}", args.output.display()))?;

    if verbose > 0 {
        println!(
            "Rendering {} frames of {}x{} (seed {}) into {}",
            config.frames,
            config.size,
            config.size,
            config.seed,
            args.output.display()
        );
    }

    let start = Instant::now();
    let rendered = render_animation(&config, |index, frame| {
        let path = frame_path(&args.output, index);
        debug!(index, path = %path.display(), "writing frame");
        png::write_gray(&path, frame)
    })
    .context("Rendering failed")?;

    info!(rendered, elapsed_ms = start.elapsed().as_millis() as u64, "Render complete");
    println!("Rendered {} frames to {}", rendered, args.output.display());

    Ok(())
}
