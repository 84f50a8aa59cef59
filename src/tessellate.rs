// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resampling a closed path into a polyline.
//!
//! Tessellation runs in two passes. The first estimates the arc length of
//! every segment. The second hands each segment a share of the requested
//! sample count proportional to its length, plus one, and samples it at that
//! many evenly spaced parameter values. Because of the extra sample per
//! segment, the polyline has between `sample_count` and
//! `sample_count + segments` points.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::common::Scalar;
use crate::{ParamCurve, ParamCurveArclen, Path, Vec2};

/// The number of parameter steps used to measure a curve by default.
pub const DEFAULT_ARCLEN_STEPS: usize = 10;

/// Per-segment scratch values; most contours have few segments.
pub type SegmentValues<T> = SmallVec<[T; 16]>;

/// Options for [`tessellate_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TessellateOpts {
    /// The requested number of samples for the whole contour.
    pub sample_count: usize,
    /// How many parameter steps are used to estimate the length of a curve.
    ///
    /// Lines are always measured exactly.
    pub arclen_steps: usize,
    /// Whether curve lengths include the final parameter step up to `u = 1`.
    ///
    /// By default curves are measured through `j / arclen_steps` for `j` in
    /// `0..arclen_steps`, leaving the last stretch out. See
    /// [`ParamCurveArclen::arclen_sampled_closed`].
    pub closed_arclen: bool,
}

impl TessellateOpts {
    /// Request `sample_count` samples, measuring curves with
    /// [`DEFAULT_ARCLEN_STEPS`] steps.
    pub fn new(sample_count: usize) -> Self {
        TessellateOpts {
            sample_count,
            arclen_steps: DEFAULT_ARCLEN_STEPS,
            closed_arclen: false,
        }
    }

    /// Set the number of parameter steps used to measure curves.
    ///
    /// A value of 0 is treated as 1, which measures curves by their chord.
    pub fn arclen_steps(mut self, arclen_steps: usize) -> Self {
        self.arclen_steps = arclen_steps;
        self
    }

    /// Measure curves all the way to their end point.
    pub fn closed_arclen(mut self, closed_arclen: bool) -> Self {
        self.closed_arclen = closed_arclen;
        self
    }
}

/// The result of [`tessellate_with`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tessellation<T> {
    /// The polyline, in path order. The closing point is not repeated.
    pub points: Vec<Vec2<T>>,
    /// How many of the points were taken from each segment.
    pub samples_per_segment: SegmentValues<usize>,
    /// The estimated length of each segment.
    pub segment_lengths: SegmentValues<T>,
    /// The estimated length of the whole contour.
    pub total_length: T,
}

impl<T: Scalar> Tessellation<T> {
    /// The coordinates interleaved as `x0, y0, x1, y1, …`.
    pub fn flatten(&self) -> Vec<T> {
        flatten(&self.points)
    }
}

/// Estimate the arc length of every segment of a path.
///
/// Lines are measured exactly. Curves are measured by the polyline through
/// `opts.arclen_steps` evenly spaced parameter values in `[0, 1)`, or
/// through `[0, 1]` when `opts.closed_arclen` is set.
pub fn segment_lengths<T: Scalar>(path: &Path<T>, opts: &TessellateOpts) -> SegmentValues<T> {
    let steps = opts.arclen_steps;
    path.iter()
        .map(|seg| {
            if opts.closed_arclen {
                seg.arclen_sampled_closed(steps)
            } else {
                seg.arclen_sampled(steps)
            }
        })
        .collect()
}

/// Distribute `sample_count` samples over segments of the given lengths.
///
/// Segment `i` gets `floor(lengths[i] / total * sample_count) + 1` samples,
/// so even a zero-length segment gets one. If `total` is zero (or not a
/// positive finite number), every segment gets exactly one sample. Counts
/// saturate at `usize::MAX`.
pub fn allocate<T: Scalar>(lengths: &[T], total: T, sample_count: usize) -> SegmentValues<usize> {
    if !(total > T::ZERO && total.is_finite()) {
        return lengths.iter().map(|_| 1).collect();
    }
    let count = T::from_usize(sample_count);
    lengths
        .iter()
        .map(|&len| (len / total * count).floor().to_usize().saturating_add(1))
        .collect()
}

/// Resample a path into about `sample_count` points spaced by arc length.
///
/// See [`tessellate_with`] for details.
pub fn tessellate<T: Scalar>(path: &Path<T>, sample_count: usize) -> Vec<Vec2<T>> {
    tessellate_with(path, &TessellateOpts::new(sample_count)).points
}

/// Resample a path into a polyline with arc-length-proportional density.
///
/// Each segment is sampled at `j / n` for `j` in `0..n`, where `n` is its
/// share from [`allocate`]. Lines are interpolated linearly and curves are
/// evaluated in the Bernstein basis. The first point is the start of the
/// path, and the end of the last segment, which coincides with it, is not
/// emitted.
pub fn tessellate_with<T: Scalar>(path: &Path<T>, opts: &TessellateOpts) -> Tessellation<T> {
    let segment_lengths = segment_lengths(path, opts);
    let mut total_length = T::ZERO;
    for &len in &segment_lengths {
        total_length += len;
    }
    let samples_per_segment = allocate(&segment_lengths, total_length, opts.sample_count);

    let capacity = samples_per_segment
        .iter()
        .fold(0_usize, |acc, &n| acc.saturating_add(n));
    let mut points = Vec::with_capacity(capacity);
    for (seg, &n) in path.iter().zip(&samples_per_segment) {
        let local_div = T::from_usize(n);
        points.extend((0..n).map(|j| seg.eval(T::from_usize(j) / local_div)));
    }
    log::debug!(
        "tessellated {} segments of total length {}: {} samples requested, {} produced",
        path.len(),
        total_length,
        opts.sample_count,
        points.len()
    );
    Tessellation {
        points,
        samples_per_segment,
        segment_lengths,
        total_length,
    }
}

/// Interleave point coordinates into a flat buffer, `x0, y0, x1, y1, …`.
pub fn flatten<T: Copy>(points: &[Vec2<T>]) -> Vec<T> {
    let mut result = Vec::with_capacity(points.len() * 2);
    for p in points {
        result.push(p.x);
        result.push(p.y);
    }
    result
}
