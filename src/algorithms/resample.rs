//! Distance-domain resampling of a lap pair.
//!
//! ## Purpose
//!
//! This module projects two laps' elapsed-time traces onto one shared
//! distance grid. Each lap samples time at its own distances; after
//! resampling, index `i` of both time series refers to the same point on
//! the track and the pair becomes directly comparable.
//!
//! ## Design notes
//!
//! * **Overlap window**: The grid spans `[max(first_a, first_b),
//!   min(last_a, last_b)]`, the largest interval both laps cover. The
//!   window is clamped, so interpolation never extrapolates.
//! * **Validation first**: Inputs are checked (non-empty, equal lengths,
//!   non-decreasing distance) before any arithmetic; a non-monotonic
//!   distance trace is rejected rather than silently interpolated.
//! * **Determinism**: Identical inputs produce bit-identical output; there
//!   is no hidden randomness or ordering dependence.
//!
//! ## Invariants
//!
//! * The returned grid has exactly `resolution` points; its first point
//!   equals the overlap low bound and its last point the high bound.
//! * `grid`, `time_a`, and `time_b` always have equal lengths.
//!
//! ## Non-goals
//!
//! * This module does not extract channels from records (the engine does);
//!   inputs are assumed to hold finite values, as channel extraction
//!   guarantees.
//! * This module does not derive the delta (see `algorithms::delta`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::interp::{interp, linspace};
use crate::primitives::constants::MIN_GRID_RESOLUTION;
use crate::primitives::errors::LapDeltaError;

// ============================================================================
// Resampled Pair
// ============================================================================

/// A lap pair projected onto one shared distance grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Resampled<T> {
    /// Shared distance grid, evenly spaced across the overlap window.
    pub grid: Vec<T>,

    /// Driver A's elapsed time at each grid point.
    pub time_a: Vec<T>,

    /// Driver B's elapsed time at each grid point.
    pub time_b: Vec<T>,
}

// ============================================================================
// Input Checks
// ============================================================================

/// Reject empty or length-mismatched channel slices.
fn validate_channel_pair<T: Float>(distance: &[T], time: &[T]) -> Result<(), LapDeltaError> {
    if distance.is_empty() || time.is_empty() {
        return Err(LapDeltaError::EmptyInput);
    }

    if distance.len() != time.len() {
        return Err(LapDeltaError::MismatchedInputs {
            distance_len: distance.len(),
            time_len: time.len(),
        });
    }

    Ok(())
}

/// Reject a distance trace that decreases anywhere.
fn validate_monotonic<T: Float>(distance: &[T]) -> Result<(), LapDeltaError> {
    for (i, pair) in distance.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(LapDeltaError::NonMonotonicDistance { index: i + 1 });
        }
    }

    Ok(())
}

// ============================================================================
// Resampling
// ============================================================================

/// Resample two (distance, time) traces onto a shared grid of `resolution`
/// evenly spaced points across their overlap window.
///
/// # Errors
///
/// * [`LapDeltaError::InvalidGridResolution`]: `resolution < 2`.
/// * [`LapDeltaError::EmptyInput`] / [`LapDeltaError::MismatchedInputs`]:
///   degenerate channel slices.
/// * [`LapDeltaError::NonMonotonicDistance`]: a distance trace decreases.
/// * [`LapDeltaError::NoOverlap`]: the laps share no distance interval.
pub fn resample_pair<T: Float>(
    distance_a: &[T],
    time_a: &[T],
    distance_b: &[T],
    time_b: &[T],
    resolution: usize,
) -> Result<Resampled<T>, LapDeltaError> {
    if resolution < MIN_GRID_RESOLUTION {
        return Err(LapDeltaError::InvalidGridResolution(resolution));
    }

    validate_channel_pair(distance_a, time_a)?;
    validate_channel_pair(distance_b, time_b)?;
    validate_monotonic(distance_a)?;
    validate_monotonic(distance_b)?;

    // Distances are non-decreasing, so the endpoints bound each trace.
    let low = distance_a[0].max(distance_b[0]);
    let high = distance_a[distance_a.len() - 1].min(distance_b[distance_b.len() - 1]);

    if high <= low {
        return Err(LapDeltaError::NoOverlap {
            low: low.to_f64().unwrap_or(f64::NAN),
            high: high.to_f64().unwrap_or(f64::NAN),
        });
    }

    let grid = linspace(low, high, resolution);
    let resampled_a = interp(&grid, distance_a, time_a);
    let resampled_b = interp(&grid, distance_b, time_b);

    Ok(Resampled {
        grid,
        time_a: resampled_a,
        time_b: resampled_b,
    })
}
