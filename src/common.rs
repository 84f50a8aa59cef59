// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

/// Defines the [`Scalar`] trait, choosing between libstd or libm implementations
/// of the float methods it needs.
macro_rules! define_scalar {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident/$lfname:ident;
    )+) => {
        /// A floating point coordinate type.
        ///
        /// This is implemented for `f32` and `f64`, so that geometry can be
        /// produced at either precision. Float functions use the standard
        /// library when the `std` feature is enabled, and [`libm`] otherwise.
        ///
        /// [`libm`]: https://docs.rs/libm
        pub trait Scalar:
            Copy
            + Default
            + PartialOrd
            + Debug
            + Display
            + FromStr
            + Add<Output = Self>
            + Sub<Output = Self>
            + Mul<Output = Self>
            + Div<Output = Self>
            + Neg<Output = Self>
            + AddAssign
            + SubAssign
            + MulAssign
            + Send
            + Sync
            + 'static
        {
            /// Zero.
            const ZERO: Self;
            /// One.
            const ONE: Self;
            /// Relative tolerance used when checking that a contour closes.
            ///
            /// Points are considered coincident when every coordinate differs
            /// by at most this value times the larger magnitude (but at least
            /// one unit).
            const CLOSURE_EPSILON: Self;

            /// Convert from an `f64`, rounding if necessary.
            fn from_f64(v: f64) -> Self;
            /// Convert from a count.
            fn from_usize(v: usize) -> Self;
            /// Widen to `f64`.
            fn to_f64(self) -> f64;
            /// Truncate towards zero into a count.
            ///
            /// Negative values and `NaN` give 0, values too large saturate.
            fn to_usize(self) -> usize;
            /// Returns `true` if this value is neither infinite nor `NaN`.
            fn is_finite(self) -> bool;

            $(
                #[allow(missing_docs, reason = "mirrors the inherent float method")]
                fn $name(self $(,$arg: $arg_ty)*) -> $ret;
            )+
        }

        impl Scalar for f64 {
            const ZERO: f64 = 0.0;
            const ONE: f64 = 1.0;
            const CLOSURE_EPSILON: f64 = 1e-9;

            #[inline]
            fn from_f64(v: f64) -> f64 {
                v
            }

            #[inline]
            #[allow(clippy::cast_precision_loss, reason = "sample counts are small")]
            fn from_usize(v: usize) -> f64 {
                v as f64
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "saturating by definition")]
            fn to_usize(self) -> usize {
                self as usize
            }

            #[inline]
            fn is_finite(self) -> bool {
                f64::is_finite(self)
            }

            $(
                #[inline]
                fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                    #[cfg(feature = "std")]
                    return f64::$name(self $(,$arg)*);

                    #[cfg(not(feature = "std"))]
                    return libm::$lname(self $(,$arg as _)*);
                }
            )+
        }

        impl Scalar for f32 {
            const ZERO: f32 = 0.0;
            const ONE: f32 = 1.0;
            const CLOSURE_EPSILON: f32 = 1e-4;

            #[inline]
            #[allow(clippy::cast_possible_truncation, reason = "narrowing is the point")]
            fn from_f64(v: f64) -> f32 {
                v as f32
            }

            #[inline]
            #[allow(clippy::cast_precision_loss, reason = "sample counts are small")]
            fn from_usize(v: usize) -> f32 {
                v as f32
            }

            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "saturating by definition")]
            fn to_usize(self) -> usize {
                self as usize
            }

            #[inline]
            fn is_finite(self) -> bool {
                f32::is_finite(self)
            }

            $(
                #[inline]
                fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                    #[cfg(feature = "std")]
                    return f32::$name(self $(,$arg)*);

                    #[cfg(not(feature = "std"))]
                    return libm::$lfname(self $(,$arg as _)*);
                }
            )+
        }
    }
}

define_scalar! {
    fn abs(self) -> Self => fabs/fabsf;
    fn floor(self) -> Self => floor/floorf;
    fn max(self, other: Self) -> Self => fmax/fmaxf;
    fn powi(self, n: i32) -> Self => pow/powf;
    fn sqrt(self) -> Self => sqrt/sqrtf;
}

/// Compare two scalars with the scale-dependent closure tolerance.
///
/// See [`Scalar::CLOSURE_EPSILON`].
#[inline]
pub fn approx_eq<T: Scalar>(a: T, b: T) -> bool {
    if a == b {
        return true;
    }
    if !(a.is_finite() && b.is_finite()) {
        return false;
    }
    let scale = a.abs().max(b.abs()).max(T::ONE);
    (a - b).abs() <= T::CLOSURE_EPSILON * scale
}
