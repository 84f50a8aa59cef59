// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use crate::common::Scalar;
use crate::Vec2;

/// A curve parametrized by a scalar.
pub trait ParamCurve<T: Scalar>: Sized {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: T) -> Vec2<T>;

    /// The start point.
    fn start(&self) -> Vec2<T> {
        self.eval(T::ZERO)
    }

    /// The end point.
    fn end(&self) -> Vec2<T> {
        self.eval(T::ONE)
    }
}

/// A parametrized curve that can have its arc length measured.
pub trait ParamCurveArclen<T: Scalar>: ParamCurve<T> {
    /// Approximate the arc length by a polyline through the `steps` evenly
    /// spaced parameter values `j / steps` for `j` in `0..steps`.
    ///
    /// The last stretch, from `(steps - 1) / steps` to 1, is not measured, so
    /// a curve measured with 1 step has length zero. A `steps` of 0 is
    /// treated as 1.
    fn arclen_sampled(&self, steps: usize) -> T {
        let steps = steps.max(1);
        let n = T::from_usize(steps);
        let mut last = self.start();
        let mut length = T::ZERO;
        for j in 1..steps {
            let p = self.eval(T::from_usize(j) / n);
            length += last.distance(p);
            last = p;
        }
        length
    }

    /// Like [`arclen_sampled`](Self::arclen_sampled), but through `steps + 1`
    /// parameter values from 0 to 1 inclusive, so the whole curve is
    /// measured.
    ///
    /// A `steps` of 0 is treated as 1, which measures the chord.
    fn arclen_sampled_closed(&self, steps: usize) -> T {
        let steps = steps.max(1);
        let n = T::from_usize(steps);
        let mut last = self.start();
        let mut length = T::ZERO;
        for j in 1..=steps {
            let p = if j == steps {
                self.end()
            } else {
                self.eval(T::from_usize(j) / n)
            };
            length += last.distance(p);
            last = p;
        }
        length
    }
}
