// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path segments.

use arrayvec::ArrayVec;

use crate::common::Scalar;
use crate::{CubicBez, Line, ParamCurve, ParamCurveArclen, QuadBez, Vec2};

/// The kind of a [`Segment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentKind {
    /// A straight line.
    Line,
    /// A quadratic Bézier curve.
    QuadraticBezier,
    /// A cubic Bézier curve.
    CubicBezier,
}

impl SegmentKind {
    /// The polynomial degree of segments of this kind.
    pub fn degree(self) -> usize {
        match self {
            SegmentKind::Line => 1,
            SegmentKind::QuadraticBezier => 2,
            SegmentKind::CubicBezier => 3,
        }
    }
}

/// A segment of a path, in absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment<T> {
    /// A line segment.
    Line(Line<T>),
    /// A quadratic Bézier segment.
    Quad(QuadBez<T>),
    /// A cubic Bézier segment.
    Cubic(CubicBez<T>),
}

impl<T: Scalar> Segment<T> {
    /// The kind of this segment.
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Line(_) => SegmentKind::Line,
            Segment::Quad(_) => SegmentKind::QuadraticBezier,
            Segment::Cubic(_) => SegmentKind::CubicBezier,
        }
    }

    /// The defining points in the order start, control points, end.
    ///
    /// This is the order [`eval_bernstein`](crate::bezier::eval_bernstein)
    /// expects.
    pub fn control_points(&self) -> ArrayVec<Vec2<T>, 4> {
        match self {
            Segment::Line(line) => [line.p0, line.p1].into_iter().collect(),
            Segment::Quad(quad) => quad.points(),
            Segment::Cubic(cubic) => cubic.points(),
        }
    }

    /// Replace the end point, keeping every other point.
    pub(crate) fn with_end(self, end: Vec2<T>) -> Self {
        match self {
            Segment::Line(line) => Segment::Line(Line { p1: end, ..line }),
            Segment::Quad(quad) => Segment::Quad(QuadBez { p2: end, ..quad }),
            Segment::Cubic(cubic) => Segment::Cubic(CubicBez { p3: end, ..cubic }),
        }
    }
}

impl<T: Scalar> ParamCurve<T> for Segment<T> {
    fn eval(&self, t: T) -> Vec2<T> {
        match self {
            Segment::Line(line) => line.eval(t),
            Segment::Quad(quad) => quad.eval(t),
            Segment::Cubic(cubic) => cubic.eval(t),
        }
    }

    fn start(&self) -> Vec2<T> {
        match self {
            Segment::Line(line) => line.p0,
            Segment::Quad(quad) => quad.p0,
            Segment::Cubic(cubic) => cubic.p0,
        }
    }

    fn end(&self) -> Vec2<T> {
        match self {
            Segment::Line(line) => line.p1,
            Segment::Quad(quad) => quad.p2,
            Segment::Cubic(cubic) => cubic.p3,
        }
    }
}

impl<T: Scalar> ParamCurveArclen<T> for Segment<T> {
    fn arclen_sampled(&self, steps: usize) -> T {
        match self {
            Segment::Line(line) => line.arclen_sampled(steps),
            Segment::Quad(quad) => quad.arclen_sampled(steps),
            Segment::Cubic(cubic) => cubic.arclen_sampled(steps),
        }
    }

    fn arclen_sampled_closed(&self, steps: usize) -> T {
        match self {
            Segment::Line(line) => line.arclen_sampled_closed(steps),
            Segment::Quad(quad) => quad.arclen_sampled_closed(steps),
            Segment::Cubic(cubic) => cubic.arclen_sampled_closed(steps),
        }
    }
}

impl<T: Scalar> From<Line<T>> for Segment<T> {
    fn from(line: Line<T>) -> Self {
        Segment::Line(line)
    }
}

impl<T: Scalar> From<QuadBez<T>> for Segment<T> {
    fn from(quad: QuadBez<T>) -> Self {
        Segment::Quad(quad)
    }
}

impl<T: Scalar> From<CubicBez<T>> for Segment<T> {
    fn from(cubic: CubicBez<T>) -> Self {
        Segment::Cubic(cubic)
    }
}

#[cfg(test)]
mod tests {
    use crate::bezier::eval_bernstein;
    use crate::{CubicBez, Line, ParamCurve, QuadBez, Segment, SegmentKind, Vec2};

    #[test]
    fn control_points_are_in_curve_order() {
        let cubic: Segment<f64> =
            CubicBez::new((0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0)).into();
        let pts = cubic.control_points();
        assert_eq!(pts.len(), cubic.kind().degree() + 1);
        assert_eq!(pts[0], cubic.start());
        assert_eq!(pts[3], cubic.end());
        assert_eq!(pts[1], Vec2::new(1.0, 2.0));
        for i in 0..=8 {
            let t = f64::from(i) / 8.0;
            assert_eq!(eval_bernstein(&pts, t), cubic.eval(t));
        }
    }

    #[test]
    fn endpoints_of_every_kind() {
        let segs: [Segment<f32>; 3] = [
            Line::new((1.0, 1.0), (2.0, 5.0)).into(),
            QuadBez::new((1.5, -1.0), (2.0, 7.25), (0.125, 3.0)).into(),
            CubicBez::new((9.0, 9.0), (0.0, 3.0), (-4.0, 2.0), (6.5, 6.5)).into(),
        ];
        for seg in segs {
            let pts = seg.control_points();
            assert_eq!(seg.eval(0.0), pts[0]);
            assert_eq!(seg.eval(1.0), pts[pts.len() - 1]);
        }
        assert_eq!(segs[1].kind(), SegmentKind::QuadraticBezier);
    }

    #[test]
    fn with_end_moves_only_the_end() {
        let seg: Segment<f64> = QuadBez::new((0.0, 0.0), (1.0, 1.0), (2.0, 0.0)).into();
        let moved = seg.with_end(Vec2::new(2.5, 0.5));
        assert_eq!(moved.start(), seg.start());
        assert_eq!(moved.end(), Vec2::new(2.5, 0.5));
        assert_eq!(moved.control_points()[1], Vec2::new(1.0, 1.0));
    }
}
