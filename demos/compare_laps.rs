//! Lap Comparison Examples
//!
//! This example demonstrates the comparison pipeline end to end:
//! - Basic comparison of two clean laps
//! - Advisory quality findings on degraded telemetry
//! - Custom thresholds for a non-car series
//! - Named data-availability failures
//!
//! The session data is synthetic: two drivers lapping a 5.5 km circuit at
//! slightly different, distance-dependent paces.

#[cfg(feature = "std")]
use lapdelta::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), LapDeltaError> {
    println!("{}", "=".repeat(80));
    println!("lapdelta - Lap Comparison Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_comparison()?;
    example_2_quality_findings()?;
    example_3_custom_thresholds()?;
    example_4_data_failures()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

// ============================================================================
// Synthetic Session Data
// ============================================================================

/// One lap of a 5.5 km circuit.
///
/// The speed profile dips mid-lap (a slow sector) so the delta curve has
/// shape; `pace_scale` shifts the whole lap proportionally.
#[cfg(feature = "std")]
fn synthetic_lap(
    driver: &str,
    team: &str,
    lap_number: u32,
    lap_time: f64,
    pace_scale: f64,
) -> SessionLap<f64> {
    let telemetry = (0..=110)
        .map(|i| {
            let d = i as f64 * 50.0;
            let phase = d / 5500.0 * std::f64::consts::TAU;
            let speed = 210.0 - 90.0 * (phase.sin().abs());
            // Elapsed time grows faster where the lap is slower.
            let t = pace_scale * (d / 58.0 + 4.0 * (d / 5500.0).powi(2));
            TelemetrySample::new(d, t, speed, 700.0 * phase.cos(), 450.0 * phase.sin())
        })
        .collect();
    SessionLap::new(driver, team, "SOFT", lap_number, Some(lap_time), telemetry)
}

#[cfg(feature = "std")]
fn session() -> Vec<SessionLap<f64>> {
    vec![
        synthetic_lap("VER", "Red Bull Racing", 9, 93.210, 1.000),
        synthetic_lap("VER", "Red Bull Racing", 14, 94.655, 1.015),
        synthetic_lap("HAM", "Mercedes", 11, 93.642, 1.005),
        synthetic_lap("HAM", "Mercedes", 16, 95.101, 1.020),
    ]
}

// ============================================================================
// Examples
// ============================================================================

#[cfg(feature = "std")]
/// Example 1: Basic Comparison
/// The zero-configuration path with default grid and thresholds.
fn example_1_basic_comparison() -> Result<(), LapDeltaError> {
    println!("Example 1: Basic Comparison");
    println!("{}", "-".repeat(80));

    let laps = session();

    let model = Comparison::new().build()?;
    let result = model.compare(&laps, "VER", "HAM")?;

    println!("{}", result);

    /* Expected Output (abbreviated):
    Comparison: VER (Red Bull Racing, lap 9) vs HAM (Mercedes, lap 11)

    Summary:
      Lap time A: 93.210 s
      Lap time B: 93.642 s
      Gap:        0.432 s (driver A)
      ...
      Verdict:    VER faster

    Data quality:
      VER: no issues
      HAM: no issues

    Delta Time:
      Distance        Delta
    -----------------------
           0.0        0.000
         ...
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Advisory Quality Findings
/// A degraded lap still compares; the findings ride along in the report.
fn example_2_quality_findings() -> Result<(), LapDeltaError> {
    println!("Example 2: Advisory Quality Findings");
    println!("{}", "-".repeat(80));

    let mut laps = session();

    // Degrade HAM's fastest lap: patchy speed channel, truncated at 2.8 km.
    for lap in laps.iter_mut().filter(|l| l.lap_number == 11) {
        lap.telemetry.retain(|s| s.distance.unwrap() <= 2800.0);
        for sample in lap.telemetry.iter_mut().skip(20) {
            sample.speed = None;
        }
    }

    let model = Comparison::new().build()?;
    let result = model.compare(&laps, "VER", "HAM")?;

    println!("Comparison still succeeds; findings for HAM:");
    for message in result.quality_b.messages() {
        println!("  - {}", message);
    }

    /* Expected Output:
    Comparison still succeeds; findings for HAM:
      - Incomplete speed data
      - Incomplete lap (only 2800m)
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Custom Thresholds
/// Karting data: slower peaks, much shorter laps, coarser grid.
fn example_3_custom_thresholds() -> Result<(), LapDeltaError> {
    println!("Example 3: Custom Thresholds (karting)");
    println!("{}", "-".repeat(80));

    let kart_lap = |driver: &str, lap_time: f64, pace: f64| {
        let telemetry = (0..=60)
            .map(|i| {
                let d = i as f64 * 20.0;
                let phase = d / 1200.0 * std::f64::consts::TAU;
                TelemetrySample::new(
                    d,
                    d / pace,
                    45.0 + 25.0 * phase.sin(),
                    150.0 * phase.cos(),
                    90.0 * phase.sin(),
                )
            })
            .collect();
        SessionLap::new(driver, "Privateer", "SLICK", 1, Some(lap_time), telemetry)
    };

    let laps = vec![kart_lap("K07", 61.22, 19.6), kart_lap("K12", 62.05, 19.3)];

    let model = Comparison::new()
        .grid_resolution(400)
        .min_speed(20.0)
        .min_lap_distance(900.0)
        .build()?;

    let result = model.compare(&laps, "K07", "K12")?;

    println!(
        "Clean under karting thresholds: {} (delta points: {})",
        result.is_clean(),
        result.delta.len()
    );

    /* Expected Output:
    Clean under karting thresholds: true (delta points: 400)
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Data-Availability Failures
/// Failures are named conditions to surface verbatim, not crashes.
fn example_4_data_failures() -> Result<(), LapDeltaError> {
    println!("Example 4: Data-Availability Failures");
    println!("{}", "-".repeat(80));

    let laps = session();
    let model = Comparison::new().build()?;

    // A driver who never took to the track.
    if let Err(e) = model.compare(&laps, "VER", "XXX") {
        println!("  {}", e);
    }

    // A lap with no recorded times at all.
    let mut broken = session();
    for lap in broken.iter_mut().filter(|l| l.driver == "HAM") {
        lap.lap_time = None;
    }
    if let Err(e) = model.compare(&broken, "VER", "HAM") {
        println!("  {}", e);
    }

    /* Expected Output:
      No laps found for driver XXX
      No valid fastest lap for driver HAM
    */

    println!();
    Ok(())
}
