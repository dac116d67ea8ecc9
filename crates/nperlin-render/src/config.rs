//! Animation configuration.
//!
//! [`AnimationConfig`] holds everything a render needs besides the output
//! destination. It can be built in code, loaded from YAML, or assembled from
//! CLI flags layered over either.
//!
//! # YAML
//!
//! ```yaml
//! size: 256
//! frames: 100
//! space_radius: 2.0
//! time_radius: 1.5
//! seed: 0
//! ```
//!
//! Missing keys fall back to [`AnimationConfig::default`].

use crate::{RenderError, RenderResult};
use nperlin_core::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Parameters of a seamlessly looping noise animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Width and height of each square frame in pixels.
    pub size: u32,
    /// Number of frames in one loop.
    pub frames: u32,
    /// Radius of the circles the image axes are wrapped onto.
    ///
    /// Larger values show more noise features per frame.
    pub space_radius: f64,
    /// Radius of the circle the time axis is wrapped onto.
    ///
    /// Larger values make frames change faster.
    pub time_radius: f64,
    /// Generator seed.
    pub seed: u64,
}

impl Default for AnimationConfig {
    /// 256x256, 100 frames, space radius 2.0, time radius 1.5, seed 0.
    fn default() -> Self {
        Self {
            size: 256,
            frames: 100,
            space_radius: 2.0,
            time_radius: 1.5,
            seed: 0,
        }
    }
}

impl AnimationConfig {
    /// Defaults for text dumps: 128x128, 50 frames, both radii 3.0.
    pub fn text_dump() -> Self {
        Self {
            size: 128,
            frames: 50,
            space_radius: 3.0,
            time_radius: 3.0,
            seed: 0,
        }
    }

    /// Loads a configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> RenderResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded animation config");
        Ok(config)
    }

    /// Parses a configuration from YAML text and validates it.
    pub fn from_yaml_str(text: &str) -> RenderResult<Self> {
        let config: Self = serde_yaml::from_str(text).map_err(RenderError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects zero sizes and non-finite radii.
    pub fn validate(&self) -> nperlin_core::Result<()> {
        if self.size == 0 {
            return Err(Error::invalid_parameter("size", "must be at least 1"));
        }
        if self.frames == 0 {
            return Err(Error::invalid_parameter("frames", "must be at least 1"));
        }
        for (name, value) in [
            ("space_radius", self.space_radius),
            ("time_radius", self.time_radius),
        ] {
            if !value.is_finite() {
                return Err(Error::invalid_parameter(name, format!("{} is not finite", value)));
            }
        }
        Ok(())
    }

    /// Loop progress of frame `index`, in `[0, 1)`.
    #[inline]
    pub fn progress(&self, index: u32) -> f64 {
        index as f64 / self.frames as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AnimationConfig::default().validate().is_ok());
        assert!(AnimationConfig::text_dump().validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let config = AnimationConfig::from_yaml_str("size: 64\nseed: 9\n").unwrap();
        assert_eq!(config.size, 64);
        assert_eq!(config.seed, 9);
        assert_eq!(config.frames, AnimationConfig::default().frames);
    }

    #[test]
    fn test_yaml_rejects_zero_frames() {
        let err = AnimationConfig::from_yaml_str("frames: 0\n").unwrap_err();
        assert!(err.to_string().contains("frames"));
    }

    #[test]
    fn test_yaml_rejects_garbage() {
        assert!(matches!(
            AnimationConfig::from_yaml_str("size: [1, 2]"),
            Err(RenderError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_nan_radius() {
        let config = AnimationConfig {
            space_radius: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_progress() {
        let config = AnimationConfig::default();
        assert_eq!(config.progress(0), 0.0);
        assert_eq!(config.progress(50), 0.5);
    }

    #[test]
    fn test_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anim.yaml");
        std::fs::write(&path, "frames: 12\ntime_radius: 0.5\n").unwrap();
        let config = AnimationConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.frames, 12);
        assert_eq!(config.time_radius, 0.5);
    }
}
