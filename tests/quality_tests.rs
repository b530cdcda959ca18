//! Tests for the advisory data-quality assessment.
//!
//! These tests verify the quality checks run on a selected lap record:
//! - Channel classification (missing vs incomplete vs complete)
//! - Threshold checks (position scatter, peak speed, lap distance)
//! - Exact user-facing issue strings
//! - Independence of checks (multiple findings accumulate in order)
//!
//! ## Test Organization
//!
//! 1. **Clean Records** - No findings on well-formed data
//! 2. **Position Checks** - Missing, incomplete, degenerate
//! 3. **Speed Checks** - Missing, incomplete, suspiciously low
//! 4. **Distance Checks** - Missing, incomplete, short lap
//! 5. **Time Check** - Missing
//! 6. **Accumulation** - Multiple independent findings

use lapdelta::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Telemetry covering 3.95 km with scattered positions and plausible speed.
fn clean_telemetry() -> Vec<TelemetrySample<f64>> {
    (0..80)
        .map(|i| {
            let d = i as f64 * 50.0;
            let angle = i as f64 * 0.08;
            TelemetrySample::new(
                d,
                d / 55.0,
                140.0 + 60.0 * angle.sin(),
                350.0 * angle.cos(),
                350.0 * angle.sin(),
            )
        })
        .collect()
}

fn record_from(telemetry: Vec<TelemetrySample<f64>>) -> LapRecord<f64> {
    let lap = SessionLap::new("BOT", "Stake", "MEDIUM", 1, Some(90.0), telemetry);
    select_fastest_lap("BOT", &[lap]).expect("selection should succeed")
}

fn assess(telemetry: Vec<TelemetrySample<f64>>) -> QualityReport<f64> {
    QualityReport::assess(&record_from(telemetry), &QualityConfig::default())
}

// ============================================================================
// Clean Record Tests
// ============================================================================

/// Test that well-formed telemetry yields an empty report.
#[test]
fn test_clean_record_has_no_issues() {
    let report = assess(clean_telemetry());

    assert!(report.is_clean());
    assert!(report.issues().is_empty());
    assert!(report.messages().is_empty());
    assert_eq!(report.to_string(), "no data quality issues");
}

// ============================================================================
// Position Check Tests
// ============================================================================

/// Test a position axis with no defined values at all.
#[test]
fn test_missing_position() {
    let telemetry: Vec<_> = clean_telemetry()
        .into_iter()
        .map(|mut s| {
            s.position_x = None;
            s
        })
        .collect();

    let report = assess(telemetry);

    assert_eq!(report.messages(), vec!["Missing track position data"]);
}

/// Test position axes with scattered gaps.
#[test]
fn test_incomplete_position() {
    let mut telemetry = clean_telemetry();
    telemetry[5].position_y = None;

    let report = assess(telemetry);

    assert_eq!(report.messages(), vec!["Incomplete track position data"]);
}

/// Test that NaN coordinates count as undefined.
#[test]
fn test_nan_position_is_undefined() {
    let mut telemetry = clean_telemetry();
    telemetry[11].position_x = Some(f64::NAN);

    let report = assess(telemetry);

    assert_eq!(report.messages(), vec!["Incomplete track position data"]);
}

/// Test all-constant coordinates.
///
/// A dead positioning feed reports the same point for the whole lap; the
/// per-axis scatter check must flag it.
#[test]
fn test_degenerate_position() {
    let telemetry: Vec<_> = clean_telemetry()
        .into_iter()
        .map(|mut s| {
            s.position_x = Some(128.0);
            s.position_y = Some(-42.5);
            s
        })
        .collect();

    let report = assess(telemetry);

    assert_eq!(report.messages(), vec!["Invalid track position data"]);
}

/// Test that a single flat axis is enough to flag degeneracy.
#[test]
fn test_degenerate_single_axis() {
    let telemetry: Vec<_> = clean_telemetry()
        .into_iter()
        .map(|mut s| {
            s.position_y = Some(0.0);
            s
        })
        .collect();

    let report = assess(telemetry);

    assert_eq!(report.messages(), vec!["Invalid track position data"]);
}

// ============================================================================
// Speed Check Tests
// ============================================================================

/// Test a speed channel with no defined values at all.
#[test]
fn test_missing_speed() {
    let telemetry: Vec<_> = clean_telemetry()
        .into_iter()
        .map(|mut s| {
            s.speed = None;
            s
        })
        .collect();

    let report = assess(telemetry);

    assert_eq!(report.messages(), vec!["Missing speed data"]);
}

/// Test a speed channel with gaps.
#[test]
fn test_incomplete_speed() {
    let mut telemetry = clean_telemetry();
    telemetry[30].speed = None;

    let report = assess(telemetry);

    assert_eq!(report.messages(), vec!["Incomplete speed data"]);
}

/// Test an implausibly low peak speed.
#[test]
fn test_suspiciously_low_speed() {
    let telemetry: Vec<_> = clean_telemetry()
        .into_iter()
        .map(|mut s| {
            s.speed = Some(30.0);
            s
        })
        .collect();

    let report = assess(telemetry);

    assert_eq!(report.messages(), vec!["Suspiciously low speed data"]);
}

/// Test that the speed threshold is configurable.
///
/// Karting peaks well under 50 km/h; with a lowered threshold the same
/// data is acceptable.
#[test]
fn test_speed_threshold_configurable() {
    let telemetry: Vec<_> = clean_telemetry()
        .into_iter()
        .map(|mut s| {
            s.speed = Some(30.0);
            s
        })
        .collect();

    let config = QualityConfig {
        min_speed: 20.0,
        ..QualityConfig::default()
    };
    let report = QualityReport::assess(&record_from(telemetry), &config);

    assert!(report.is_clean(), "30 km/h should pass a 20 km/h threshold");
}

// ============================================================================
// Distance Check Tests
// ============================================================================

/// Test a distance channel with no defined values at all.
#[test]
fn test_missing_distance() {
    let telemetry: Vec<_> = clean_telemetry()
        .into_iter()
        .map(|mut s| {
            s.distance = None;
            s
        })
        .collect();

    let report = assess(telemetry);

    assert_eq!(report.messages(), vec!["Missing distance data"]);
}

/// Test a distance channel with gaps.
#[test]
fn test_incomplete_distance() {
    let mut telemetry = clean_telemetry();
    telemetry[63].distance = None;

    let report = assess(telemetry);

    assert_eq!(report.messages(), vec!["Incomplete distance data"]);
}

/// Test the short-lap boundary.
///
/// Max distance 2800 m is flagged with the formatted message; 3200 m yields
/// no distance-related issue.
#[test]
fn test_short_lap_boundary() {
    let short: Vec<_> = (0..81)
        .map(|i| {
            let d = i as f64 * 35.0; // tops out at 2800 m
            let angle = i as f64 * 0.08;
            TelemetrySample::new(
                d,
                d / 40.0,
                120.0 + 40.0 * angle.sin(),
                300.0 * angle.cos(),
                300.0 * angle.sin(),
            )
        })
        .collect();

    let report = assess(short);
    assert_eq!(report.messages(), vec!["Incomplete lap (only 2800m)"]);

    let long: Vec<_> = (0..81)
        .map(|i| {
            let d = i as f64 * 40.0; // tops out at 3200 m
            let angle = i as f64 * 0.08;
            TelemetrySample::new(
                d,
                d / 40.0,
                120.0 + 40.0 * angle.sin(),
                300.0 * angle.cos(),
                300.0 * angle.sin(),
            )
        })
        .collect();

    let report = assess(long);
    assert!(report.is_clean(), "3200 m lap should pass");
}

// ============================================================================
// Time Check Tests
// ============================================================================

/// Test a time channel with no defined values at all.
#[test]
fn test_missing_time() {
    let telemetry: Vec<_> = clean_telemetry()
        .into_iter()
        .map(|mut s| {
            s.time_offset = None;
            s
        })
        .collect();

    let report = assess(telemetry);

    assert_eq!(report.messages(), vec!["Missing time data"]);
}

// ============================================================================
// Accumulation Tests
// ============================================================================

/// Test that independent findings accumulate in insertion order.
#[test]
fn test_multiple_issues_accumulate() {
    let telemetry: Vec<_> = (0..81)
        .map(|i| {
            let d = i as f64 * 30.0; // tops out at 2400 m
            TelemetrySample {
                distance: Some(d),
                time_offset: None,
                speed: Some(35.0),
                position_x: Some(7.0),
                position_y: Some(7.0),
            }
        })
        .collect();

    let report = assess(telemetry);

    assert_eq!(
        report.messages(),
        vec![
            "Invalid track position data",
            "Suspiciously low speed data",
            "Incomplete lap (only 2400m)",
            "Missing time data",
        ]
    );
}

/// Test that a fully blank sample sequence reports every channel missing.
#[test]
fn test_blank_samples_report_all_channels() {
    let telemetry = vec![TelemetrySample::<f64>::blank(); 4];

    let report = assess(telemetry);

    assert_eq!(
        report.messages(),
        vec![
            "Missing track position data",
            "Missing speed data",
            "Missing distance data",
            "Missing time data",
        ]
    );
}
