//! Fixed-size N-dimensional point type.
//!
//! [`Point`] is an ordered tuple of `N` numeric components whose dimension is
//! part of the type. Float points hold coordinates, displacements and
//! gradients; integer points are lattice keys. Points of different `N` can
//! never be mixed, so arity errors surface at compile time wherever the
//! dimension is known statically.
//!
//! # Usage
//!
//! ```rust
//! use nperlin_core::Point;
//!
//! let v = Point::new([1.5f32, -0.25, 2.0]);
//! let floor = v.map(|c| c.floor() as i32);
//! assert_eq!(floor, Point::new([1, -1, 2]));
//!
//! let frac = v - floor.map(|c| c as f32);
//! assert_eq!(frac, Point::new([0.5, 0.75, 0.0]));
//! ```
//!
//! # Construction
//!
//! | Source | Conversion | Arity check |
//! |--------|------------|-------------|
//! | `[T; N]` | `From` | compile time |
//! | `(T, .., T)` (1..=6 items) | `From` | compile time |
//! | `&[T]` | `TryFrom` | runtime, [`Error::ArityMismatch`] |
//! | `impl IntoIterator<Item = T>` | [`Point::try_from_iter`] | runtime, [`Error::ArityMismatch`] |

use crate::error::{Error, Result};
use num_traits::{Float, Num, Zero};
use std::ops::{Add, Index, IndexMut, Sub};

/// Most surplus items [`Point::try_from_iter`] counts before giving up.
pub const SURPLUS_SCAN_LIMIT: usize = 1024;

/// An ordered tuple of `N` numeric components.
///
/// Equality and hashing are elementwise, so integer points work directly as
/// map keys.
///
/// # Example
///
/// ```rust
/// use nperlin_core::Point;
///
/// let a = Point::new([1.0f32, 2.0]);
/// let b = Point::from((3.0f32, 4.0));
/// assert_eq!(a.dot(b), 11.0);
/// assert_eq!(b[1], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Point<T, const N: usize>([T; N]);

impl<T, const N: usize> Point<T, N> {
    /// Number of components.
    pub const DIM: usize = N;

    /// Creates a point from its components.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self(components)
    }

    /// Creates a point by calling `f` with each axis index.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(std::array::from_fn(f))
    }

    /// Returns the components as an array reference.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Consumes the point and returns its components.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Iterates over the components in axis order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Applies `f` to every component, possibly changing the element type.
    ///
    /// ```rust
    /// use nperlin_core::Point;
    ///
    /// let v = Point::new([0.5f64, -1.5]);
    /// assert_eq!(v.map(|c| c.floor() as i64), Point::new([0, -2]));
    /// ```
    #[inline]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Point<U, N> {
        Point(self.0.map(f))
    }
}

impl<T: Copy, const N: usize> Point<T, N> {
    /// Creates a point with every component set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Returns a copy with component `axis` replaced by `value`.
    #[inline]
    pub fn with(mut self, axis: usize, value: T) -> Self {
        self.0[axis] = value;
        self
    }

    /// Builds a point from exactly `N` items.
    ///
    /// Fails with [`Error::ArityMismatch`] when the iterator yields fewer or
    /// more than `N` items. Surplus items are counted up to
    /// [`SURPLUS_SCAN_LIMIT`], so an endless iterator fails instead of hanging
    /// and the reported `got` is capped at `N + SURPLUS_SCAN_LIMIT`.
    ///
    /// ```rust
    /// use nperlin_core::{Error, Point};
    ///
    /// let p = Point::<f32, 2>::try_from_iter(vec![1.0, 2.0]).unwrap();
    /// assert_eq!(p, Point::new([1.0, 2.0]));
    ///
    /// let err = Point::<f32, 2>::try_from_iter([1.0, 2.0, 3.0]).unwrap_err();
    /// assert_eq!(err, Error::arity_mismatch(2, 3));
    /// ```
    pub fn try_from_iter<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Zero,
    {
        let mut items = items.into_iter();
        let mut components = [T::zero(); N];
        for (got, slot) in components.iter_mut().enumerate() {
            *slot = items
                .next()
                .ok_or_else(|| Error::arity_mismatch(N, got))?;
        }
        let extra = items.take(SURPLUS_SCAN_LIMIT).count();
        if extra > 0 {
            return Err(Error::arity_mismatch(N, N + extra));
        }
        Ok(Self(components))
    }
}

impl<T: Num + Copy, const N: usize> Point<T, N> {
    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }
}

impl<T: Float, const N: usize> Point<T, N> {
    /// Euclidean length.
    #[inline]
    pub fn length(self) -> T {
        self.dot(self).sqrt()
    }

    /// Scales the point to unit length.
    ///
    /// Returns `None` for a zero-length (or non-finite length) point.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let len = self.length();
        if len > T::zero() && len.is_finite() {
            Some(self.map(|c| c / len))
        } else {
            None
        }
    }
}

impl<T: Copy + Sub<Output = T>, const N: usize> Sub for Point<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.0[i] - rhs.0[i])
    }
}

impl<T: Copy + Add<Output = T>, const N: usize> Add for Point<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.0[i] + rhs.0[i])
    }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, axis: usize) -> &T {
        &self.0[axis]
    }
}

impl<T, const N: usize> IndexMut<usize> for Point<T, N> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut T {
        &mut self.0[axis]
    }
}

impl<T, const N: usize> From<[T; N]> for Point<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T, const N: usize> From<Point<T, N>> for [T; N] {
    #[inline]
    fn from(point: Point<T, N>) -> Self {
        point.0
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Point<T, N> {
    type Error = Error;

    #[inline]
    fn try_from(slice: &[T]) -> Result<Self> {
        <[T; N]>::try_from(slice)
            .map(Self)
            .map_err(|_| Error::arity_mismatch(N, slice.len()))
    }
}

impl<T, const N: usize> IntoIterator for Point<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Point<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Per-axis scalar arguments: `perlin.noise((x, y, z))`.
macro_rules! impl_from_tuple {
    ($n:literal, ($($t:ident),+), ($($idx:tt),+)) => {
        impl<T> From<($($t,)+)> for Point<T, $n> {
            #[inline]
            fn from(tuple: ($($t,)+)) -> Self {
                Self([$(tuple.$idx),+])
            }
        }
    };
}

impl_from_tuple!(1, (T), (0));
impl_from_tuple!(2, (T, T), (0, 1));
impl_from_tuple!(3, (T, T, T), (0, 1, 2));
impl_from_tuple!(4, (T, T, T, T), (0, 1, 2, 3));
impl_from_tuple!(5, (T, T, T, T, T), (0, 1, 2, 3, 4));
impl_from_tuple!(6, (T, T, T, T, T, T), (0, 1, 2, 3, 4, 5));

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sub_and_dot() {
        let a = Point::new([3.0f32, 5.0, 7.0]);
        let b = Point::new([1.0f32, 1.0, 2.0]);
        assert_eq!(a - b, Point::new([2.0, 4.0, 5.0]));
        assert_eq!(a.dot(b), 3.0 + 5.0 + 14.0);
        assert_eq!(a + b, Point::new([4.0, 6.0, 9.0]));
    }

    #[test]
    fn test_map_changes_type() {
        let v = Point::new([-0.5f32, 0.0, 2.99]);
        let floor: Point<i32, 3> = v.map(|c| c.floor() as i32);
        assert_eq!(floor, Point::new([-1, 0, 2]));
    }

    #[test]
    fn test_equality_is_elementwise() {
        let a = Point::new([1, 2, 3]);
        assert_eq!(a, Point::from((1, 2, 3)));
        assert_ne!(a, Point::new([1, 2, 4]));
        assert_ne!(a, Point::new([3, 2, 1]));
    }

    #[test]
    fn test_integer_points_hash_structurally() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Point::new([0i32, 1]));
        set.insert(Point::new([1i32, 0]));
        set.insert(Point::new([0i32, 1]));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_try_from_slice() {
        let buf = [1.0f64, 2.0, 3.0];
        let p = Point::<f64, 3>::try_from(&buf[..]).unwrap();
        assert_eq!(p.into_array(), buf);

        let err = Point::<f64, 4>::try_from(&buf[..]).unwrap_err();
        assert_eq!(err, Error::arity_mismatch(4, 3));
    }

    #[test]
    fn test_try_from_iter_rejects_short_and_long() {
        let short = Point::<f32, 3>::try_from_iter([1.0, 2.0]);
        assert_eq!(short.unwrap_err(), Error::arity_mismatch(3, 2));

        let long = Point::<f32, 1>::try_from_iter(vec![1.0, 2.0, 3.0]);
        assert_eq!(long.unwrap_err(), Error::arity_mismatch(1, 3));

        let exact = Point::<f32, 2>::try_from_iter((0..2).map(|i| i as f32));
        assert_eq!(exact.unwrap(), Point::new([0.0, 1.0]));
    }

    #[test]
    fn test_try_from_iter_endless_iterator_fails() {
        let err = Point::<f32, 2>::try_from_iter(std::iter::repeat(0.5)).unwrap_err();
        assert_eq!(err, Error::arity_mismatch(2, 2 + SURPLUS_SCAN_LIMIT));
    }

    #[test]
    fn test_normalize() {
        let v = Point::new([3.0f32, 4.0]).normalize().unwrap();
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(v[0], 0.6, epsilon = 1e-6);
        assert!(Point::<f32, 4>::splat(0.0).normalize().is_none());
    }

    #[test]
    fn test_with_and_index() {
        let mut p = Point::new([0i32; 3]).with(1, 5);
        p[2] += 2;
        assert_eq!(p.as_slice(), &[0, 5, 2]);
        assert_eq!(Point::<i32, 3>::DIM, 3);
    }
}
