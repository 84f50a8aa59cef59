// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use arrayvec::ArrayVec;

use crate::bezier::eval_bernstein;
use crate::common::Scalar;
use crate::{ParamCurve, ParamCurveArclen, Vec2};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez<T> {
    /// The start point.
    pub p0: Vec2<T>,
    /// The first control point.
    pub p1: Vec2<T>,
    /// The second control point.
    pub p2: Vec2<T>,
    /// The end point.
    pub p3: Vec2<T>,
}

impl<T: Scalar> CubicBez<T> {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<V: Into<Vec2<T>>>(p0: V, p1: V, p2: V, p3: V) -> Self {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// The points in curve order: start, first control, second control, end.
    #[inline]
    pub fn points(&self) -> ArrayVec<Vec2<T>, 4> {
        ArrayVec::from([self.p0, self.p1, self.p2, self.p3])
    }
}

impl<T: Scalar> ParamCurve<T> for CubicBez<T> {
    #[inline]
    fn eval(&self, t: T) -> Vec2<T> {
        eval_bernstein(&[self.p0, self.p1, self.p2, self.p3], t)
    }

    #[inline]
    fn start(&self) -> Vec2<T> {
        self.p0
    }

    #[inline]
    fn end(&self) -> Vec2<T> {
        self.p3
    }
}

impl<T: Scalar> ParamCurveArclen<T> for CubicBez<T> {}

#[cfg(test)]
mod tests {
    use crate::{CubicBez, ParamCurve, ParamCurveArclen};

    #[test]
    fn cubicbez_eval_matches_closed_form() {
        let c = CubicBez::new((0.0, 0.0), (1.0 / 3.0, 0.0), (2.0 / 3.0, 1.0 / 3.0), (1.0, 1.0));
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            let mt = 1.0 - t;
            let expected = c.p0 * (mt * mt * mt)
                + (c.p1 * (mt * mt * 3.0) + (c.p2 * (mt * 3.0) + c.p3 * t) * t) * t;
            assert!((c.eval(t) - expected).hypot() < 1e-12);
        }
    }

    #[test]
    fn cubicbez_endpoints() {
        let c = CubicBez::new((0.3_f32, -1.7), (9.1, 4.4), (7.0, 7.0), (-2.5, 0.01));
        assert_eq!(c.eval(0.0), c.p0);
        assert_eq!(c.eval(1.0), c.p3);
    }

    #[test]
    fn cubicbez_arclen() {
        // y = x^2
        let c = CubicBez::new((0.0_f64, 0.0), (1.0 / 3.0, 0.0), (2.0 / 3.0, 1.0 / 3.0), (1.0, 1.0));
        let true_arclen = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        let closed = c.arclen_sampled_closed(10);
        assert!(closed <= true_arclen);
        assert!(true_arclen - closed < 1e-2);
        assert!(c.arclen_sampled(10) < closed);
    }

    #[test]
    fn straight_cubic_lengths() {
        // evenly spaced controls give x = 3u
        let c: CubicBez<f64> = CubicBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0));
        assert!((c.arclen_sampled_closed(10) - 3.0).abs() < 1e-12);
        assert!((c.arclen_sampled(10) - 2.7).abs() < 1e-12);
    }
}
