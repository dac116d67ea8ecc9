//! JSON text output.
//!
//! An animation is written as a JSON array of frames, each frame an array of
//! rows, each row an array of raw noise samples:
//!
//! ```text
//! [[[0.0, 0.12, ...], ...], ...]
//! ```
//!
//! This is the layout plotting scripts load directly with a JSON parser.

use crate::{Frame, IoResult};
use std::io::{Read, Write};
use tracing::trace;

/// Writes frames as nested JSON arrays.
pub fn write_frames_json<W: Write>(writer: W, frames: &[Frame]) -> IoResult<()> {
    trace!(frames = frames.len(), "text::write_frames_json");
    let nested: Vec<Vec<&[f32]>> = frames.iter().map(|f| f.rows().collect()).collect();
    serde_json::to_writer(writer, &nested)?;
    Ok(())
}

/// Reads frames written by [`write_frames_json`].
pub fn read_frames_json<R: Read>(reader: R) -> IoResult<Vec<Frame>> {
    let nested: Vec<Vec<Vec<f32>>> = serde_json::from_reader(reader)?;
    nested.into_iter().map(Frame::from_rows).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let frame = Frame::from_rows(vec![vec![0.5, -0.25], vec![0.0, 0.125]]).unwrap();
        let mut out = Vec::new();
        write_frames_json(&mut out, &[frame]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[[[0.5,-0.25],[0.0,0.125]]]");
    }

    #[test]
    fn test_read_back() {
        let frames = vec![
            Frame::from_rows(vec![vec![0.1, 0.2]]).unwrap(),
            Frame::from_rows(vec![vec![0.3, 0.4]]).unwrap(),
        ];
        let mut out = Vec::new();
        write_frames_json(&mut out, &frames).unwrap();
        assert_eq!(read_frames_json(out.as_slice()).unwrap(), frames);
    }

    #[test]
    fn test_read_rejects_ragged_frame() {
        assert!(read_frames_json("[[[0.1,0.2],[0.3]]]".as_bytes()).is_err());
    }
}
