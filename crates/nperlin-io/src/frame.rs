//! Single-channel noise frame.
//!
//! A [`Frame`] stores raw noise samples in row-major order. PNG output
//! quantizes them to 8-bit grey with [`quantize`]; text output keeps the raw
//! values.

use crate::{IoError, IoResult};

/// Maps a noise sample to an 8-bit grey level.
///
/// `(noise + 0.5) * 255`, clamped to `0..=255` and truncated. Samples in
/// `[-0.5, 0.5]` span the full range; NaN maps to 0.
///
/// ```rust
/// use nperlin_io::quantize;
///
/// assert_eq!(quantize(-0.5), 0);
/// assert_eq!(quantize(0.0), 127);
/// assert_eq!(quantize(0.5), 255);
/// assert_eq!(quantize(3.0), 255);
/// ```
#[inline]
pub fn quantize(noise: f32) -> u8 {
    ((noise + 0.5) * 255.0).clamp(0.0, 255.0) as u8
}

/// Row-major grid of noise samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Width in samples.
    pub width: u32,
    /// Height in samples.
    pub height: u32,
    samples: Vec<f32>,
}

impl Frame {
    /// Creates a zero-filled frame.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            samples: vec![0.0; width as usize * height as usize],
        }
    }

    /// Wraps existing row-major samples.
    pub fn from_samples(width: u32, height: u32, samples: Vec<f32>) -> IoResult<Self> {
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(IoError::DimensionMismatch {
                expected: format!("{}x{} = {} samples", width, height, expected),
                actual: format!("{} samples", samples.len()),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Builds a frame from equally long rows.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> IoResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != width) {
            return Err(IoError::DimensionMismatch {
                expected: format!("rows of {} samples", width),
                actual: format!("row of {} samples", bad.len()),
            });
        }
        Self::from_samples(width as u32, height as u32, rows.concat())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the frame.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.samples[self.index(x, y)]
    }

    /// Stores a sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the frame.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        let i = self.index(x, y);
        self.samples[i] = value;
    }

    /// All samples in row-major order.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        // chunks_exact(0) panics; an empty frame has no rows anyway.
        self.samples.chunks_exact(self.width.max(1) as usize)
    }

    /// Quantized 8-bit grey pixels, row-major.
    pub fn to_gray8(&self) -> Vec<u8> {
        self.samples.iter().map(|&s| quantize(s)).collect()
    }

    /// Smallest and largest sample, ignoring NaN.
    pub fn range(&self) -> Option<(f32, f32)> {
        self.samples
            .iter()
            .copied()
            .filter(|s| !s.is_nan())
            .fold(None, |acc, s| match acc {
                None => Some((s, s)),
                Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut frame = Frame::new(4, 3);
        frame.set(3, 2, 0.25);
        assert_eq!(frame.get(3, 2), 0.25);
        assert_eq!(frame.samples()[11], 0.25);
        assert_eq!(frame.rows().count(), 3);
    }

    #[test]
    fn test_from_samples_checks_length() {
        assert!(Frame::from_samples(2, 2, vec![0.0; 4]).is_ok());
        assert!(Frame::from_samples(2, 2, vec![0.0; 5]).is_err());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let frame = Frame::from_rows(vec![vec![0.1, 0.2], vec![0.3, 0.4]]).unwrap();
        assert_eq!((frame.width, frame.height), (2, 2));
        assert_eq!(frame.get(0, 1), 0.3);
        assert!(Frame::from_rows(vec![vec![0.1, 0.2], vec![0.3]]).is_err());
    }

    #[test]
    fn test_quantize_clamps() {
        assert_eq!(quantize(-2.0), 0);
        assert_eq!(quantize(f32::NAN), 0);
        assert_eq!(quantize(0.25), 191);
    }

    #[test]
    fn test_range() {
        let frame = Frame::from_samples(3, 1, vec![0.2, -0.4, f32::NAN]).unwrap();
        assert_eq!(frame.range(), Some((-0.4, 0.2)));
        assert_eq!(Frame::new(0, 0).range(), None);
    }
}
