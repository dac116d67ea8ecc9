//! # nperlin-core
//!
//! Core types for N-dimensional gradient noise.
//!
//! This crate provides the foundational types used throughout the nperlin
//! workspace:
//!
//! - [`Point`] - Fixed-size N-dimensional tuple with elementwise arithmetic
//! - [`Coord`], [`LatticeInt`] - Scalar traits for coordinates and lattice indices
//! - [`Error`], [`Result`] - Precondition errors
//!
//! ## Design Philosophy
//!
//! The dimension `N` is a const generic, so a 3-D coordinate cannot be passed
//! to a 6-D generator:
//!
//! ```compile_fail
//! use nperlin_core::Point;
//!
//! let p: Point<f32, 6> = Point::from((1.0f32, 2.0, 3.0));
//! ```
//!
//! Only runtime-sized inputs (slices and iterators) can have the wrong arity,
//! and those are rejected with [`Error::ArityMismatch`].
//!
//! ## Crate Structure
//!
//! ```text
//! nperlin-core (this crate)
//!    ^
//!    |
//!    +-- nperlin-noise (gradient cache, interpolation, Perlin facade)
//!    +-- nperlin-render (looping animation frames)
//!    +-- nperlin-io (PNG and text output)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod point;
pub mod scalar;

pub use error::*;
pub use point::*;
pub use scalar::*;
