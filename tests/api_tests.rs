//! Tests for the high-level comparison API.
//!
//! These tests verify the builder pattern, configuration validation, and
//! complete comparison workflows including:
//! - Builder construction and defaults
//! - Duplicate-parameter and threshold validation
//! - End-to-end comparisons over synthetic sessions
//! - Advisory quality findings on successful comparisons
//! - Result formatting
//!
//! ## Test Organization
//!
//! 1. **Builder Construction** - Defaults, validation, duplicate detection
//! 2. **Full Pipeline** - Happy path, custom resolution, self-comparison
//! 3. **Failure Modes** - Missing channels surfaced as named errors
//! 4. **Display** - Human-readable result output

use lapdelta::constants;
use lapdelta::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// A clean lap: monotonic distance/time, plausible speed, scattered
/// positions, spanning well past the minimum lap distance.
fn clean_lap(driver: &str, team: &str, lap_number: u32, lap_time: f64) -> SessionLap<f64> {
    // Constant pace derived from the lap time over a 5.9 km lap.
    let pace = 5900.0 / lap_time;
    let telemetry = (0..60)
        .map(|i| {
            let d = i as f64 * 100.0;
            let angle = i as f64 * 0.105;
            TelemetrySample::new(
                d,
                d / pace,
                160.0 + 80.0 * angle.sin(),
                420.0 * angle.cos(),
                420.0 * angle.sin(),
            )
        })
        .collect();
    SessionLap::new(driver, team, "SOFT", lap_number, Some(lap_time), telemetry)
}

fn two_driver_session() -> Vec<SessionLap<f64>> {
    vec![
        clean_lap("VER", "Red Bull Racing", 9, 93.4),
        clean_lap("VER", "Red Bull Racing", 10, 94.1),
        clean_lap("HAM", "Mercedes", 12, 93.9),
        clean_lap("HAM", "Mercedes", 13, 95.0),
    ]
}

// ============================================================================
// Builder Construction Tests
// ============================================================================

/// Test builder defaults.
///
/// Verifies that an unconfigured builder carries no explicit settings and
/// builds a comparator with the documented defaults.
#[test]
fn test_builder_defaults() {
    let builder = Comparison::<f64>::new();

    assert_eq!(builder.grid_resolution, None, "Resolution not set by default");
    assert_eq!(builder.min_speed, None, "Min speed not set by default");

    let model = builder.build().expect("default build should succeed");
    let config = model.config();

    assert_eq!(config.grid_resolution, constants::DEFAULT_GRID_RESOLUTION);
    assert_eq!(config.quality.min_speed, constants::DEFAULT_MIN_SPEED_KMH);
    assert_eq!(
        config.quality.min_lap_distance,
        constants::DEFAULT_MIN_LAP_DISTANCE_M
    );
    assert_eq!(
        config.quality.min_position_stddev,
        constants::DEFAULT_MIN_POSITION_STDDEV
    );

    // Test Default trait
    let _ = Comparison::<f64>::default();
}

/// Test duplicate parameter detection.
///
/// Verifies that setting a parameter twice fails at build time.
#[test]
fn test_duplicate_parameter_rejected() {
    let res = Comparison::<f64>::new()
        .grid_resolution(500)
        .grid_resolution(800)
        .build();

    assert!(
        matches!(
            res,
            Err(LapDeltaError::DuplicateParameter {
                parameter: "grid_resolution"
            })
        ),
        "Duplicate grid_resolution should error"
    );
}

/// Test grid resolution validation.
///
/// Verifies that a grid with fewer than two points is rejected.
#[test]
fn test_invalid_grid_resolution_rejected() {
    for resolution in [0, 1] {
        let res = Comparison::<f64>::new().grid_resolution(resolution).build();
        assert!(
            matches!(res, Err(LapDeltaError::InvalidGridResolution(r)) if r == resolution),
            "Resolution {resolution} should error"
        );
    }
}

/// Test threshold validation.
///
/// Verifies that non-finite and negative thresholds are rejected with the
/// offending parameter named.
#[test]
fn test_invalid_threshold_rejected() {
    let res = Comparison::new().min_speed(f64::NAN).build();
    assert!(
        matches!(res, Err(LapDeltaError::InvalidThreshold { name: "min_speed", .. })),
        "NaN min_speed should error"
    );

    let res = Comparison::new().min_lap_distance(-5.0).build();
    assert!(
        matches!(
            res,
            Err(LapDeltaError::InvalidThreshold {
                name: "min_lap_distance",
                ..
            })
        ),
        "Negative min_lap_distance should error"
    );

    let res = Comparison::new().min_position_stddev(f64::INFINITY).build();
    assert!(
        matches!(
            res,
            Err(LapDeltaError::InvalidThreshold {
                name: "min_position_stddev",
                ..
            })
        ),
        "Infinite min_position_stddev should error"
    );
}

/// Test that a zero threshold is allowed.
///
/// Zero disables the corresponding check without erroring.
#[test]
fn test_zero_threshold_allowed() {
    let res = Comparison::new().min_speed(0.0).build();
    assert!(res.is_ok(), "Zero min_speed should build");
}

// ============================================================================
// Full Pipeline Tests
// ============================================================================

/// Test the complete happy path.
///
/// Verifies record selection, delta length, summary verdict, and clean
/// quality reports on a well-formed session.
#[test]
fn test_compare_happy_path() {
    let laps = two_driver_session();
    let model = Comparison::new().build().expect("build");

    let result = model.compare(&laps, "VER", "HAM").expect("compare");

    assert_eq!(result.record_a.driver, "VER");
    assert_eq!(result.record_a.lap_number, 9, "Fastest VER lap is lap 9");
    assert_eq!(result.record_b.driver, "HAM");
    assert_eq!(result.record_b.lap_number, 12, "Fastest HAM lap is lap 12");

    assert_eq!(result.delta.len(), constants::DEFAULT_GRID_RESOLUTION);
    assert_eq!(result.summary.faster_driver, FasterDriver::DriverA);
    assert!((result.summary.lap_time_diff - 0.5).abs() < 1e-9);

    assert!(result.is_clean(), "Synthetic laps should be quality-clean");
}

/// Test a custom grid resolution propagates to the delta series.
#[test]
fn test_compare_custom_resolution() {
    let laps = two_driver_session();
    let model = Comparison::new()
        .grid_resolution(250)
        .build()
        .expect("build");

    let result = model.compare(&laps, "VER", "HAM").expect("compare");

    assert_eq!(result.delta.len(), 250);
    assert_eq!(result.delta.distance.len(), 250);
}

/// Test comparing a driver against themselves.
///
/// The same lap on both sides must give an all-zero delta and a dead heat.
#[test]
fn test_compare_driver_against_self() {
    let laps = two_driver_session();
    let model = Comparison::new().build().expect("build");

    let result = model.compare(&laps, "VER", "VER").expect("compare");

    assert_eq!(result.summary.faster_driver, FasterDriver::Equal);
    assert!(
        result.delta.delta.iter().all(|&d| d == 0.0),
        "Self-comparison delta should be identically zero"
    );
}

/// Test that one comparator can serve several pairs.
#[test]
fn test_comparator_is_reusable() {
    let laps = two_driver_session();
    let model = Comparison::new().build().expect("build");

    let first = model.compare(&laps, "VER", "HAM").expect("first");
    let second = model.compare(&laps, "HAM", "VER").expect("second");

    assert_eq!(first.record_a.driver, second.record_b.driver);
}

/// Test that quality findings do not block the pipeline.
///
/// A lap that ends short of the plausible track length still compares; the
/// finding lands in the report instead.
#[test]
fn test_quality_findings_are_advisory() {
    let mut laps = two_driver_session();

    // Truncate HAM's fastest lap to 2.8 km; it still overlaps VER's lap.
    for lap in laps.iter_mut().filter(|l| l.lap_number == 12) {
        lap.telemetry.retain(|s| s.distance.unwrap() <= 2800.0);
    }

    let model = Comparison::new().build().expect("build");
    let result = model.compare(&laps, "VER", "HAM").expect("compare");

    assert!(result.quality_a.is_clean(), "VER lap untouched");
    assert!(!result.quality_b.is_clean(), "HAM lap should be flagged");
    assert!(
        result
            .quality_b
            .messages()
            .iter()
            .any(|m| m.starts_with("Incomplete lap")),
        "Short lap should be reported"
    );
    assert!(!result.is_clean());
}

// ============================================================================
// Failure Mode Tests
// ============================================================================

/// Test that an unknown driver surfaces as NoLapsFound.
#[test]
fn test_unknown_driver_fails() {
    let laps = two_driver_session();
    let model = Comparison::new().build().expect("build");

    let res = model.compare(&laps, "VER", "XXX");
    assert!(
        matches!(res, Err(LapDeltaError::NoLapsFound { ref driver }) if driver == "XXX"),
        "Unknown driver should error with the driver id"
    );
}

/// Test that a lap without a distance channel fails with MissingChannel.
#[test]
fn test_missing_distance_channel_fails() {
    let mut laps = two_driver_session();
    for lap in laps.iter_mut().filter(|l| l.driver == "HAM") {
        for sample in lap.telemetry.iter_mut() {
            sample.distance = None;
        }
    }

    let model = Comparison::new().build().expect("build");
    let res = model.compare(&laps, "VER", "HAM");

    assert!(
        matches!(
            res,
            Err(LapDeltaError::MissingChannel {
                ref driver,
                channel: "distance"
            }) if driver == "HAM"
        ),
        "Distance-less lap should name the missing channel"
    );
}

/// Test that jointly undefined channels are reported as such.
///
/// Distance and time each have defined values, but never on the same
/// sample, so no (distance, time) pair exists to resample.
#[test]
fn test_disjoint_channels_fail() {
    let mut laps = two_driver_session();
    for lap in laps.iter_mut().filter(|l| l.driver == "HAM") {
        for (i, sample) in lap.telemetry.iter_mut().enumerate() {
            if i % 2 == 0 {
                sample.distance = None;
            } else {
                sample.time_offset = None;
            }
        }
    }

    let model = Comparison::new().build().expect("build");
    let res = model.compare(&laps, "VER", "HAM");

    assert!(
        matches!(
            res,
            Err(LapDeltaError::MissingChannel {
                channel: "distance/time",
                ..
            })
        ),
        "Disjoint channels should be reported jointly"
    );
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the human-readable result rendering.
#[test]
fn test_result_display() {
    let laps = two_driver_session();
    let model = Comparison::new().build().expect("build");
    let result = model.compare(&laps, "VER", "HAM").expect("compare");

    let rendered = result.to_string();
    assert!(rendered.contains("Comparison: VER (Red Bull Racing, lap 9)"));
    assert!(rendered.contains("Delta Time:"));
    assert!(rendered.contains("VER faster"), "Verdict should name VER");
    assert!(rendered.contains("..."), "Long tables should be ellipsised");
}

/// Test error messages are user-presentable.
#[test]
fn test_error_display() {
    let err = LapDeltaError::NoLapsFound {
        driver: "PER".into(),
    };
    assert_eq!(err.to_string(), "No laps found for driver PER");

    let err = LapDeltaError::NoOverlap {
        low: 5000.0,
        high: 1000.0,
    };
    assert!(err.to_string().contains("do not overlap"));
}
