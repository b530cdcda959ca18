#![cfg(feature = "dev")]
//! Tests for slice statistics.
//!
//! These tests verify the statistics backing quality checks and summaries:
//! - Maximum and mean with empty-slice behavior
//! - Sample standard deviation including degenerate inputs
//!
//! ## Test Organization
//!
//! 1. **Extrema and Mean** - Known values, empty slices
//! 2. **Spread** - Known values, constant and short inputs

use approx::assert_relative_eq;

use lapdelta::internals::math::stats::{max_value, mean, sample_stddev};

// ============================================================================
// Extrema and Mean Tests
// ============================================================================

/// Test maximum of a known slice.
#[test]
fn test_max_value() {
    assert_eq!(max_value(&[3.0, 9.5, -2.0, 7.0]), Some(9.5));
    assert_eq!(max_value(&[42.0]), Some(42.0));
}

/// Test maximum of an empty slice.
#[test]
fn test_max_value_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(max_value(&empty), None);
}

/// Test mean of a known slice.
#[test]
fn test_mean() {
    assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
    assert_eq!(mean(&[10.0]), Some(10.0));
}

/// Test mean of an empty slice.
#[test]
fn test_mean_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(mean(&empty), None);
}

// ============================================================================
// Spread Tests
// ============================================================================

/// Test sample standard deviation against a hand-computed value.
#[test]
fn test_sample_stddev() {
    // Values 2, 4, 4, 4, 5, 5, 7, 9: mean 5, sum of squares 32, n-1 = 7.
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    assert_relative_eq!(
        sample_stddev(&values),
        (32.0_f64 / 7.0).sqrt(),
        epsilon = 1e-12
    );
}

/// Test that constant values have zero spread.
#[test]
fn test_sample_stddev_constant() {
    assert_eq!(sample_stddev(&[6.0, 6.0, 6.0, 6.0]), 0.0);
}

/// Test degenerate lengths.
///
/// Fewer than two values carry no spread information; the convention is
/// zero, which reads as degenerate to the position-scatter check.
#[test]
fn test_sample_stddev_short_inputs() {
    let empty: [f64; 0] = [];
    assert_eq!(sample_stddev(&empty), 0.0);
    assert_eq!(sample_stddev(&[3.2]), 0.0);
}
