//! Dump command: whole animation as JSON text

use crate::DumpArgs;
use anyhow::{Context, Result};
use nperlin_io::text;
use nperlin_render::{render_frames, AnimationConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{info, trace};

pub fn run(args: DumpArgs, verbose: u8) -> Result<()> {
    trace!(output = ?args.output, "dump::run");

    let config = super::resolve_config(&args.animation, AnimationConfig::text_dump())?;
    let frames = render_frames(&config).context("Rendering failed")?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            write_json(BufWriter::new(file), &frames)?;
            if verbose > 0 {
                println!("Wrote {} frames to {}", frames.len(), path.display());
            }
        }
        None => write_json(BufWriter::new(io::stdout().lock()), &frames)?,
    }

    info!(frames = frames.len(), "Dump complete");
    Ok(())
}

fn write_json<W: Write>(mut writer: W, frames: &[nperlin_io::Frame]) -> Result<()> {
    text::write_frames_json(&mut writer, frames).context("Failed to write JSON")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
