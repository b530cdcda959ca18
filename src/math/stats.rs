//! Extrema, mean, and spread over sample slices.
//!
//! ## Purpose
//!
//! This module provides the small statistics used by quality assessment and
//! summary derivation: maximum, arithmetic mean, and sample standard
//! deviation. All functions operate on plain slices of already-defined
//! values; channel-gap filtering happens upstream.
//!
//! ## Design notes
//!
//! * **Empty input**: `max_value` and `mean` return `None` for empty
//!   slices; a missing channel propagates as an absent statistic rather
//!   than a default.
//! * **Spread**: `sample_stddev` uses the n−1 denominator and returns zero
//!   for fewer than two values, so a single stationary coordinate reads as
//!   degenerate.
//!
//! ## Non-goals
//!
//! * This module does not filter undefined values (see
//!   `primitives::telemetry::defined`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Extrema and Mean
// ============================================================================

/// Largest value in the slice, or `None` when empty.
pub fn max_value<T: Float>(values: &[T]) -> Option<T> {
    values.iter().copied().reduce(T::max)
}

/// Arithmetic mean of the slice, or `None` when empty.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }

    let n = T::from(values.len()).unwrap();
    let sum = values.iter().copied().fold(T::zero(), |acc, v| acc + v);
    Some(sum / n)
}

// ============================================================================
// Spread
// ============================================================================

/// Sample standard deviation (n−1 denominator); zero for fewer than two
/// values.
pub fn sample_stddev<T: Float>(values: &[T]) -> T {
    let n = values.len();
    if n < 2 {
        return T::zero();
    }

    let n_t = T::from(n).unwrap();
    let sum = values.iter().copied().fold(T::zero(), |acc, v| acc + v);
    let mean = sum / n_t;

    let ss = values.iter().copied().fold(T::zero(), |acc, v| {
        let d = v - mean;
        acc + d * d
    });

    (ss / (n_t - T::one())).sqrt()
}
