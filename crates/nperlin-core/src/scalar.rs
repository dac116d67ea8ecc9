//! Numeric traits a noise generator is parameterised over.
//!
//! A generator works with two scalar types:
//!
//! - [`Coord`] - floating point type for input coordinates, displacements,
//!   fade weights and gradients (`f32` or `f64`)
//! - [`LatticeInt`] - integer type for lattice indices (`i32` by default)
//!
//! Both are blanket or macro implemented for the primitive types, so callers
//! never implement them by hand.

use num_traits::{Float, PrimInt, Signed, WrappingAdd};
use std::fmt::Debug;
use std::hash::Hash;

/// Floating point coordinate type.
pub trait Coord: Float + Debug + Send + Sync + 'static {
    /// Converts an `f64` literal to this type.
    ///
    /// Yields NaN if the value is not representable, which cannot happen for
    /// `f32` or `f64`.
    #[inline]
    fn constant(value: f64) -> Self {
        <Self as num_traits::NumCast>::from(value).unwrap_or_else(Self::nan)
    }
}

impl<T> Coord for T where T: Float + Debug + Send + Sync + 'static {}

/// Integer lattice index type.
///
/// [`hash_word`](LatticeInt::hash_word) widens the value to the 64-bit word
/// folded into a lattice hash. Signed values are sign extended so that `-1i8`
/// and `-1i64` hash the same.
///
/// Only signed types qualify: cells below the origin need negative indices.
/// Stepping to the next corner wraps at the top of the range instead of
/// overflowing, so out-of-range input yields a meaningless value, not a panic.
pub trait LatticeInt:
    PrimInt + Signed + WrappingAdd + Hash + Debug + Send + Sync + 'static
{
    /// Widens the index to a hash word.
    fn hash_word(self) -> u64;
}

macro_rules! impl_lattice_int {
    ($($t:ty),*) => {
        $(
            impl LatticeInt for $t {
                #[inline]
                fn hash_word(self) -> u64 {
                    self as i64 as u64
                }
            }
        )*
    };
}

impl_lattice_int!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant() {
        assert_eq!(f32::constant(6.0), 6.0f32);
        assert_eq!(f64::constant(-15.0), -15.0f64);
    }

    #[test]
    fn test_hash_word_sign_extension() {
        assert_eq!((-1i8).hash_word(), u64::MAX);
        assert_eq!((-1i32).hash_word(), (-1i64).hash_word());
        assert_eq!(7i16.hash_word(), 7);
    }

    #[test]
    fn test_next_corner_wraps_at_top_of_range() {
        assert_eq!(WrappingAdd::wrapping_add(&i32::MAX, &1), i32::MIN);
        assert_eq!(
            WrappingAdd::wrapping_add(&i8::MAX, &1).hash_word(),
            (-128i64) as u64
        );
    }
}
