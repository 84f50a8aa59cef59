// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed contours.

use alloc::vec::Vec;
use core::ops::Deref;

use crate::common::Scalar;
use crate::{Error, ParamCurve, ParamCurveArclen, Result, Segment, Vec2};

/// A single closed contour made of [`Segment`]s.
///
/// Each segment starts where the previous one ends, and the last segment
/// ends exactly where the first one starts. A `Path` is only constructed
/// through [`Path::from_segments`] (or by parsing), which verifies both
/// properties, so every `Path` in existence is closed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path<T> {
    segments: Vec<Segment<T>>,
}

impl<T: Scalar> Path<T> {
    /// Build a path from an ordered list of segments.
    ///
    /// Consecutive segments must share their joining point exactly. The end
    /// of the last segment must coincide with the start of the first within
    /// [`Scalar::CLOSURE_EPSILON`]; if it does, it is moved onto the start so
    /// that the contour closes exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPath`] if `segments` is empty or two
    /// consecutive segments do not join, and [`Error::UnclosedPath`] if the
    /// contour does not return to its start.
    pub fn from_segments(mut segments: Vec<Segment<T>>) -> Result<Self> {
        let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
            return Err(Error::MalformedPath {
                offset: 0,
                reason: "contour has no drawing commands",
            });
        };
        let (start, end) = (first.start(), last.end());
        if let Some(ix) = segments
            .windows(2)
            .position(|pair| pair[0].end() != pair[1].start())
        {
            log::debug!("segment {} does not join segment {}", ix, ix + 1);
            return Err(Error::MalformedPath {
                offset: 0,
                reason: "consecutive segments do not join",
            });
        }
        if !end.approx_eq(start) {
            return Err(Error::UnclosedPath {
                start: start.to_f64(),
                end: end.to_f64(),
            });
        }
        if end != start {
            let ix = segments.len() - 1;
            segments[ix] = segments[ix].with_end(start);
        }
        Ok(Path { segments })
    }

    /// The segments of this path, in order.
    #[inline]
    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    /// The point where the contour starts and ends.
    pub fn start(&self) -> Vec2<T> {
        // non-empty by construction
        self.segments[0].start()
    }

    /// Approximate perimeter, measuring curves with `steps` samples each.
    ///
    /// See [`ParamCurveArclen::arclen_sampled`].
    pub fn perimeter(&self, steps: usize) -> T {
        let mut total = T::ZERO;
        for seg in &self.segments {
            total += seg.arclen_sampled(steps);
        }
        total
    }

    /// Consume the path, returning its segments.
    pub fn into_segments(self) -> Vec<Segment<T>> {
        self.segments
    }
}

impl<T> Deref for Path<T> {
    type Target = [Segment<T>];

    fn deref(&self) -> &[Segment<T>] {
        &self.segments
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a Segment<T>;
    type IntoIter = core::slice::Iter<'a, Segment<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Line, ParamCurve, Path, QuadBez, Segment, Vec2};

    fn square() -> Vec<Segment<f64>> {
        vec![
            Line::new((0.0, 0.0), (10.0, 0.0)).into(),
            Line::new((10.0, 0.0), (10.0, 10.0)).into(),
            Line::new((10.0, 10.0), (0.0, 10.0)).into(),
            Line::new((0.0, 10.0), (0.0, 0.0)).into(),
        ]
    }

    #[test]
    fn closed_square() {
        let path = Path::from_segments(square()).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.start(), Vec2::new(0.0, 0.0));
        assert_eq!(path.perimeter(10), 40.0);
    }

    #[test]
    fn empty_is_malformed() {
        let err = Path::<f64>::from_segments(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::MalformedPath { .. }));
    }

    #[test]
    fn open_contour_is_rejected() {
        let mut segs = square();
        segs.pop();
        match Path::from_segments(segs) {
            Err(Error::UnclosedPath { start, end }) => {
                assert_eq!(start, (0.0, 0.0));
                assert_eq!(end, (0.0, 10.0));
            }
            other => panic!("expected an unclosed path, got {other:?}"),
        }
    }

    #[test]
    fn broken_chain_is_rejected() {
        let mut segs = square();
        segs[2] = Line::new((10.0, 11.0), (0.0, 10.0)).into();
        let err = Path::from_segments(segs).unwrap_err();
        assert!(matches!(err, Error::MalformedPath { .. }));
    }

    #[test]
    fn near_closure_is_snapped() {
        let mut segs = square();
        segs[3] = QuadBez::new((0.0, 10.0), (-1.0, 5.0), (1e-12, -1e-12)).into();
        let path = Path::from_segments(segs).unwrap();
        let last = path.segments()[3];
        assert_eq!(last.end(), Vec2::new(0.0, 0.0));
        assert_eq!(last.control_points()[1], Vec2::new(-1.0, 5.0));
    }
}
