//! Error types for nperlin-core operations.
//!
//! Noise evaluation itself has no recoverable failure modes. The only errors
//! are precondition violations detected at the API boundary:
//!
//! - A runtime-sized coordinate (iterator or slice) whose length does not match
//!   the generator's dimension
//! - A dimension the caller asked for that no generator is instantiated for
//! - An invalid parameter in a rendering configuration
//!
//! # Usage
//!
//! ```rust
//! use nperlin_core::{Error, Result};
//!
//! fn check_arity(values: &[f32]) -> Result<()> {
//!     if values.len() != 3 {
//!         return Err(Error::arity_mismatch(3, values.len()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_arity(&[1.0, 2.0]).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::point::Point`] - Fallible construction from slices and iterators
//! - `nperlin-noise` - Slice and iterator calling conventions
//! - `nperlin-render` - Configuration validation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by nperlin crates.
///
/// # Categories
///
/// - **Arity errors**: [`ArityMismatch`](Error::ArityMismatch), [`UnsupportedDimension`](Error::UnsupportedDimension)
/// - **Parameter errors**: [`InvalidParameter`](Error::InvalidParameter)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Wrong number of coordinate components for the generator's dimension.
    ///
    /// Components are never truncated or zero-padded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nperlin_core::Error;
    ///
    /// let err = Error::arity_mismatch(3, 2);
    /// assert_eq!(err.to_string(), "arity mismatch: expected 3 components, got 2");
    /// ```
    #[error("arity mismatch: expected {expected} components, got {got}")]
    ArityMismatch {
        /// Dimension of the generator
        expected: usize,
        /// Number of components supplied
        got: usize,
    },

    /// No generator is available for the requested dimension.
    #[error("unsupported dimension {dim}: expected 1..={max}")]
    UnsupportedDimension {
        /// Requested dimension
        dim: usize,
        /// Largest supported dimension
        max: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::ArityMismatch`] error.
    #[inline]
    pub fn arity_mismatch(expected: usize, got: usize) -> Self {
        Self::ArityMismatch { expected, got }
    }

    /// Creates an [`Error::UnsupportedDimension`] error.
    #[inline]
    pub fn unsupported_dimension(dim: usize, max: usize) -> Self {
        Self::UnsupportedDimension { dim, max }
    }

    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error is an arity or dimension problem.
    #[inline]
    pub fn is_arity_error(&self) -> bool {
        matches!(
            self,
            Self::ArityMismatch { .. } | Self::UnsupportedDimension { .. }
        )
    }
}
