// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use arrayvec::ArrayVec;

use crate::bezier::eval_bernstein;
use crate::common::Scalar;
use crate::{ParamCurve, ParamCurveArclen, Vec2};

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez<T> {
    /// The start point.
    pub p0: Vec2<T>,
    /// The control point.
    pub p1: Vec2<T>,
    /// The end point.
    pub p2: Vec2<T>,
}

impl<T: Scalar> QuadBez<T> {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new<V: Into<Vec2<T>>>(p0: V, p1: V, p2: V) -> Self {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// The points in curve order: start, control, end.
    #[inline]
    pub fn points(&self) -> ArrayVec<Vec2<T>, 4> {
        [self.p0, self.p1, self.p2].into_iter().collect()
    }
}

impl<T: Scalar> ParamCurve<T> for QuadBez<T> {
    #[inline]
    fn eval(&self, t: T) -> Vec2<T> {
        eval_bernstein(&[self.p0, self.p1, self.p2], t)
    }

    #[inline]
    fn start(&self) -> Vec2<T> {
        self.p0
    }

    #[inline]
    fn end(&self) -> Vec2<T> {
        self.p2
    }
}

impl<T: Scalar> ParamCurveArclen<T> for QuadBez<T> {}

#[cfg(test)]
mod tests {
    use crate::{ParamCurve, ParamCurveArclen, QuadBez, Vec2};

    #[test]
    fn quadbez_eval_matches_closed_form() {
        let q = QuadBez::new((0.0, 0.0), (1.0, 3.0), (4.0, 1.0));
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            let mt = 1.0 - t;
            let expected = q.p0 * (mt * mt) + (q.p1 * (mt * 2.0) + q.p2 * t) * t;
            assert!((q.eval(t) - expected).hypot() < 1e-12);
        }
    }

    #[test]
    fn quadbez_endpoints() {
        let q = QuadBez::new((0.3, -1.7), (9.1, 4.4), (-2.5, 0.01));
        assert_eq!(q.eval(0.0), q.p0);
        assert_eq!(q.eval(1.0), q.p2);
        assert_eq!(q.points().as_slice(), &[q.p0, q.p1, q.p2]);
    }

    #[test]
    fn quadbez_arclen() {
        // y = x^2 on [0, 1]
        let q = QuadBez::new((0.0_f64, 0.0), (0.5, 0.0), (1.0, 1.0));
        let true_arclen = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        let closed = q.arclen_sampled_closed(10);
        // a polyline through points on the curve is never longer
        assert!(closed <= true_arclen);
        assert!(true_arclen - closed < 1e-2);
        // the default estimate leaves out the stretch from u = 0.9 to 1
        let half_open = q.arclen_sampled(10);
        let last_chunk = q.eval(0.9).distance(q.end());
        assert!((half_open + last_chunk - closed).abs() < 1e-12);
        assert!(q.arclen_sampled(1000) > half_open);
        assert_eq!(q.arclen_sampled(1), 0.0);
    }

    #[test]
    fn degenerate_quadbez_has_zero_length() {
        let q = QuadBez::new(Vec2::new(2.0_f64, 2.0), Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
        assert!(q.arclen_sampled(10) < 1e-12);
        assert!(q.arclen_sampled_closed(10) < 1e-12);
    }
}
