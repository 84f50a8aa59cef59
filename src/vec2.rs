// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple 2D vector.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::common::{approx_eq, Scalar};

/// A 2D vector.
///
/// This is used both for points in the plane and for the offsets between
/// them; paths store their geometry as absolute `Vec2` points.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<T> {
    /// The x-coordinate.
    pub x: T,
    /// The y-coordinate.
    pub y: T,
}

impl<T: Scalar> Vec2<T> {
    /// The vector (0, 0).
    pub const ZERO: Self = Vec2 {
        x: T::ZERO,
        y: T::ZERO,
    };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Vec2 { x, y }
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Magnitude of vector.
    #[inline]
    pub fn hypot(self) -> T {
        self.hypot2().sqrt()
    }

    /// Magnitude squared of vector.
    #[inline]
    pub fn hypot2(self) -> T {
        self.dot(self)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (self - other).hypot()
    }

    /// Linearly interpolate between two vectors.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }

    /// Reflect `other` through this point, `2·self − other`.
    ///
    /// This is how the implied control point of a smooth curve command is
    /// derived from the previous command's control point.
    #[inline]
    pub fn reflect(self, other: Self) -> Self {
        self + (self - other)
    }

    /// Whether two points coincide within [`Scalar::CLOSURE_EPSILON`].
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }

    /// Is this vector finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Widen the coordinates to `f64`.
    #[inline]
    pub fn to_f64(self) -> (f64, f64) {
        (self.x.to_f64(), self.y.to_f64())
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    #[inline]
    fn from(v: (T, T)) -> Self {
        Vec2 { x: v.0, y: v.1 }
    }
}

impl<T> From<Vec2<T>> for (T, T) {
    #[inline]
    fn from(v: Vec2<T>) -> (T, T) {
        (v.x, v.y)
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Scalar> AddAssign for Vec2<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T: Scalar> SubAssign for Vec2<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, other: T) -> Self {
        Vec2 {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

impl<T: Scalar> MulAssign<T> for Vec2<T> {
    #[inline]
    fn mul_assign(&mut self, other: T) {
        *self = *self * other;
    }
}

// Coherence rules out a blanket `impl<T> Mul<Vec2<T>> for T`.
macro_rules! impl_scalar_mul {
    ($($ty:ty),+) => {
        $(
            impl Mul<Vec2<$ty>> for $ty {
                type Output = Vec2<$ty>;

                #[inline]
                fn mul(self, other: Vec2<$ty>) -> Vec2<$ty> {
                    other * self
                }
            }
        )+
    };
}

impl_scalar_mul!(f32, f64);

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Scalar> fmt::Display for Vec2<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

// Conversions to and from mint
#[cfg(feature = "mint")]
impl<T> From<Vec2<T>> for mint::Point2<T> {
    #[inline]
    fn from(p: Vec2<T>) -> mint::Point2<T> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Point2<T>> for Vec2<T> {
    #[inline]
    fn from(p: mint::Point2<T>) -> Self {
        Vec2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl<T> From<Vec2<T>> for mint::Vector2<T> {
    #[inline]
    fn from(p: Vec2<T>) -> mint::Vector2<T> {
        mint::Vector2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Vector2<T>> for Vec2<T> {
    #[inline]
    fn from(p: mint::Vector2<T>) -> Self {
        Vec2 { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::Vec2;

    #[test]
    fn display() {
        assert_eq!(Vec2::new(10.0_f64, -2.5).to_string(), "(10, -2.5)");
        let v = Vec2::new(0.1_f32 + 0.2, 5.0);
        assert_eq!(format!("{v:.3}"), "(0.300, 5.000)");
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);
        assert_eq!(a + b, Vec2::new(5.0, 8.0));
        assert_eq!(b - a, Vec2::new(3.0, 4.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(Vec2::<f32>::ZERO, Vec2::new(0.0_f32, 0.0));
    }

    #[test]
    fn reflect_through_point() {
        let current = Vec2::new(10.0, 0.0);
        let control = Vec2::new(5.0, 5.0);
        assert_eq!(current.reflect(control), Vec2::new(15.0, -5.0));
        assert_eq!(current.reflect(current), current);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Vec2::new(0.0_f32, 10.0);
        let b = Vec2::new(10.0_f32, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(5.0, 5.0));
    }
}
