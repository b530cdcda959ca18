//! Evenly spaced grids and monotone linear interpolation.
//!
//! ## Purpose
//!
//! This module provides the two numerical building blocks of distance-domain
//! resampling: constructing an inclusive evenly spaced grid over an
//! interval, and evaluating a piecewise-linear function (given as sorted
//! knots) at arbitrary query points.
//!
//! ## Design notes
//!
//! * **Monotone domain**: `interp` requires non-decreasing x knots; callers
//!   validate before invoking (see `engine::validator`).
//! * **Clamped ends**: Queries left of the first knot return the first y,
//!   queries right of the last knot return the last y. The resampling grid
//!   is clamped to the overlap window, so extrapolation is never exercised
//!   on the comparison path.
//! * **Determinism**: Output depends only on the inputs; identical calls
//!   produce bit-identical results.
//!
//! ## Invariants
//!
//! * `linspace(start, stop, n)` returns exactly `n` points; the first is
//!   exactly `start` and the last exactly `stop` (no accumulated drift).
//! * `interp` never divides by zero: the bracketing knots of an interior
//!   query are strictly increasing in x.
//!
//! ## Non-goals
//!
//! * This module does not sort or validate the knots.
//! * This module does not provide higher-order interpolation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Grid Construction
// ============================================================================

/// Build `n` evenly spaced points across `[start, stop]` inclusive.
///
/// Requires `n >= 2`. The last point is pinned to `stop` exactly rather
/// than accumulated from the step, so the grid endpoints always equal the
/// requested interval bounds.
pub fn linspace<T: Float>(start: T, stop: T, n: usize) -> Vec<T> {
    debug_assert!(n >= 2, "linspace requires at least two points");

    let step = (stop - start) / T::from(n - 1).unwrap();
    let mut grid: Vec<T> = (0..n)
        .map(|i| start + step * T::from(i).unwrap())
        .collect();
    grid[n - 1] = stop;
    grid
}

// ============================================================================
// Linear Interpolation
// ============================================================================

/// Evaluate the piecewise-linear function through `(x, y)` at one query.
///
/// `x` must be non-decreasing. Out-of-range queries are clamped to the
/// boundary values.
pub fn interp_at<T: Float>(query: T, x: &[T], y: &[T]) -> T {
    let n = x.len();

    // First knot with x >= query; everything before it is strictly below.
    let j = x.partition_point(|&v| v < query);

    if j == 0 {
        return y[0];
    }
    if j == n {
        return y[n - 1];
    }

    let x0 = x[j - 1];
    let x1 = x[j];
    let y0 = y[j - 1];
    let y1 = y[j];

    // x0 < query <= x1, so the denominator is strictly positive.
    let slope = (y1 - y0) / (x1 - x0);
    y0 + (query - x0) * slope
}

/// Evaluate the piecewise-linear function through `(x, y)` at every query.
pub fn interp<T: Float>(queries: &[T], x: &[T], y: &[T]) -> Vec<T> {
    queries.iter().map(|&q| interp_at(q, x, y)).collect()
}
