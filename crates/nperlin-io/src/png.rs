//! PNG frame output.
//!
//! Frames are written as 8-bit greyscale images, one file per frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use nperlin_io::{png, Frame};
//!
//! let frame = Frame::new(256, 256);
//! png::write_gray("animation/image_0.png", &frame)?;
//! let pixels = png::read_gray("animation/image_0.png")?;
//! ```

use crate::{Frame, IoError, IoResult};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::trace;

/// Decoded 8-bit greyscale image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major grey levels.
    pub pixels: Vec<u8>,
}

/// Writes a frame as an 8-bit greyscale PNG.
///
/// Samples are mapped with [`crate::quantize`].
pub fn write_gray<P: AsRef<Path>>(path: P, frame: &Frame) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), width = frame.width, height = frame.height, "png::write_gray");

    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, frame.width, frame.height);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(&frame.to_gray8())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

/// Reads an 8-bit greyscale PNG.
///
/// Other color types and bit depths are rejected with
/// [`IoError::UnsupportedFormat`].
pub fn read_gray<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    match (info.color_type, info.bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            buf.truncate(info.buffer_size());
            Ok(GrayImage {
                width: info.width,
                height: info.height,
                pixels: buf,
            })
        }
        (color_type, bit_depth) => Err(IoError::UnsupportedFormat(format!(
            "{:?} {:?}",
            color_type, bit_depth
        ))),
    }
}
