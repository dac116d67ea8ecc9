//! Sample command: one noise value

use crate::SampleArgs;
use anyhow::{Context, Result};
use nperlin_noise::{sample_any_dim, MAX_DYN_DIM};
use tracing::trace;

pub fn run(args: SampleArgs, verbose: u8) -> Result<()> {
    trace!(coords = ?args.coords, seed = args.seed, "sample::run");

    let value = match sample_any_dim(args.seed, &args.coords) {
        Ok(value) => value,
        Err(err) if err.is_arity_error() => {
            return Err(err).with_context(|| {
                format!(
                    "Cannot sample {} components: pass 1 to {} coordinates",
                    args.coords.len(),
                    MAX_DYN_DIM
                )
            });
        }
        Err(err) => return Err(err).context("Sampling failed"),
    };

    if verbose > 0 {
        println!("noise({:?}) seed={} = {}", args.coords, args.seed, value);
    } else {
        println!("{}", value);
    }
    Ok(())
}
