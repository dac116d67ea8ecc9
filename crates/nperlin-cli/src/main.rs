//! nperlin - N-dimensional Perlin noise renderer
//!
//! Renders seamlessly looping noise animations to PNG frames or JSON text and
//! evaluates single noise samples.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "nperlin")]
#[command(author, version, about = "N-dimensional Perlin noise renderer")]
#[command(long_about = "
Renders seamlessly looping 6-D Perlin noise animations and evaluates
noise samples in 1 to 6 dimensions.

Examples:
  nperlin render -o animation                 # 100 PNG frames, 256x256
  nperlin render -o out --size 128 --frames 24 --seed 7
  nperlin render -o out --config anim.yaml    # YAML config, flags override
  nperlin dump > frames.json                  # JSON text, 50 frames, 128x128
  nperlin sample 0.5 1.25 -3.0                # one 3-D sample
  RUST_LOG=debug nperlin -j 4 render -o out
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a looping animation to PNG frames
    #[command(visible_alias = "r")]
    Render(RenderArgs),

    /// Print a looping animation as JSON text
    #[command(visible_alias = "d")]
    Dump(DumpArgs),

    /// Evaluate noise at one coordinate (1 to 6 components)
    #[command(visible_alias = "s")]
    Sample(SampleArgs),
}

/// Animation parameters shared by `render` and `dump`.
///
/// Unset flags keep the value from `--config` or the command's defaults.
#[derive(Args)]
struct AnimationArgs {
    /// YAML animation config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frame width and height in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Number of frames in the loop
    #[arg(short = 'n', long)]
    frames: Option<u32>,

    /// Radius of the wrapped image axes
    #[arg(long)]
    space_radius: Option<f64>,

    /// Radius of the wrapped time axis
    #[arg(long)]
    time_radius: Option<f64>,

    /// Generator seed
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct RenderArgs {
    /// Output directory for image_<n>.png files
    #[arg(short, long, default_value = "animation")]
    output: PathBuf,

    #[command(flatten)]
    animation: AnimationArgs,
}

#[derive(Args)]
struct DumpArgs {
    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    animation: AnimationArgs,
}

#[derive(Args)]
struct SampleArgs {
    /// Coordinate components
    #[arg(required = true, allow_negative_numbers = true)]
    coords: Vec<f64>,

    /// Generator seed
    #[arg(short, long, default_value = "0")]
    seed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Render(args) => commands::render::run(args, cli.verbose),
        Commands::Dump(args) => commands::dump::run(args, cli.verbose),
        Commands::Sample(args) => commands::sample::run(args, cli.verbose),
    }
}
