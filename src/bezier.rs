// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bézier evaluation in the Bernstein basis.

use crate::common::Scalar;
use crate::Vec2;

/// Binomial coefficients C(n, k) for n in 1..=3.
const BINOMIAL: [[f64; 4]; 3] = [[1., 1., 0., 0.], [1., 2., 1., 0.], [1., 3., 3., 1.]];

/// Evaluate a Bézier curve of degree `points.len() - 1` at parameter `u`.
///
/// The points are in the order start, control points, end, which is the
/// order returned by [`Segment::control_points`](crate::Segment::control_points).
/// The result is `Σ C(N,k) · u^k · (1−u)^(N−k) · P_k`. Every basis polynomial
/// but the first vanishes exactly at `u = 0`, and every one but the last at
/// `u = 1`, so the endpoints are reproduced exactly.
///
/// # Panics
///
/// Panics if there are fewer than 2 or more than 4 points.
pub fn eval_bernstein<T: Scalar>(points: &[Vec2<T>], u: T) -> Vec2<T> {
    assert!(
        (2..=4).contains(&points.len()),
        "Bézier degree must be between 1 and 3"
    );
    let degree = points.len() - 1;
    let coeffs = &BINOMIAL[degree - 1];
    let mu = T::ONE - u;
    let mut result = Vec2::ZERO;
    for (k, p) in points.iter().enumerate() {
        // k and degree are at most 3
        let k_exp = k as i32;
        let rest = (degree - k) as i32;
        let coef = T::from_f64(coeffs[k]) * u.powi(k_exp) * mu.powi(rest);
        result += *p * coef;
    }
    result
}
