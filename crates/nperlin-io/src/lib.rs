//! # nperlin-io
//!
//! Frame buffers and output formats for rendered noise.
//!
//! - [`Frame`] - Row-major grid of raw noise samples
//! - [`png`] - 8-bit greyscale PNG files, one per frame
//! - [`text`] - The whole animation as nested JSON arrays
//!
//! # Usage
//!
//! ```rust,ignore
//! use nperlin_io::{frame_path, png, Frame};
//!
//! let frame = Frame::new(128, 128);
//! png::write_gray(frame_path("animation", 0), &frame)?;
//! ```
//!
//! # Dependencies
//!
//! - [`png`](::png) - PNG encoding
//! - [`serde_json`] - Text output

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod frame;
pub mod png;
pub mod text;

pub use error::{IoError, IoResult};
pub use frame::{quantize, Frame};

use std::path::{Path, PathBuf};

/// Path of frame `index` inside `dir`: `dir/image_<index>.png`.
///
/// ```rust
/// use nperlin_io::frame_path;
/// use std::path::Path;
///
/// assert_eq!(frame_path("out", 7), Path::new("out").join("image_7.png"));
/// ```
pub fn frame_path<P: AsRef<Path>>(dir: P, index: u32) -> PathBuf {
    dir.as_ref().join(format!("image_{}.png", index))
}
