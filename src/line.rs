// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::common::Scalar;
use crate::{ParamCurve, ParamCurveArclen, Vec2};

/// A single line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line<T> {
    /// The line's start point.
    pub p0: Vec2<T>,
    /// The line's end point.
    pub p1: Vec2<T>,
}

impl<T: Scalar> Line<T> {
    /// Create a new line.
    #[inline]
    pub fn new<V: Into<Vec2<T>>>(p0: V, p1: V) -> Self {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The length of the line.
    #[inline]
    pub fn length(&self) -> T {
        self.p0.distance(self.p1)
    }
}

impl<T: Scalar> ParamCurve<T> for Line<T> {
    #[inline]
    fn eval(&self, t: T) -> Vec2<T> {
        self.p0.lerp(self.p1, t)
    }

    #[inline]
    fn start(&self) -> Vec2<T> {
        self.p0
    }

    #[inline]
    fn end(&self) -> Vec2<T> {
        self.p1
    }
}

impl<T: Scalar> ParamCurveArclen<T> for Line<T> {
    /// The exact length; a line needs no sampling.
    #[inline]
    fn arclen_sampled(&self, _steps: usize) -> T {
        self.length()
    }

    #[inline]
    fn arclen_sampled_closed(&self, _steps: usize) -> T {
        self.length()
    }
}
