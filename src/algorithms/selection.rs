//! Fastest-lap selection and record shaping.
//!
//! ## Purpose
//!
//! This module picks one driver's fastest valid lap out of a session's laps
//! and shapes it into an immutable [`LapRecord`] for the rest of the
//! pipeline.
//!
//! ## Design notes
//!
//! * **Filtering**: The input may contain the whole session; only laps
//!   whose `driver` field matches are considered. Passing a pre-filtered
//!   slice works identically.
//! * **Usable lap time**: Defined, finite, and positive. In/out laps and
//!   deleted attempts arrive with no recorded time and are skipped.
//! * **Stable tie-break**: On exact lap-time ties the first lap in input
//!   order wins.
//! * **No side effects**: Selection only reads its input; the returned
//!   record owns copies of the winning lap's data.
//!
//! ## Key concepts
//!
//! * **Selection order**: filter by driver → filter by usable time → take
//!   the minimum → reject empty telemetry.
//!
//! ## Non-goals
//!
//! * This module does not judge telemetry quality (see
//!   `evaluation::quality`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LapDeltaError;
use crate::primitives::telemetry::{LapRecord, SessionLap, defined};

// ============================================================================
// Lap Time Filtering
// ============================================================================

/// Lap time usable for selection: defined, finite, positive.
#[inline]
fn usable_lap_time<T: Float>(lap: &SessionLap<T>) -> Option<T> {
    defined(lap.lap_time).filter(|&t| t > T::zero())
}

// ============================================================================
// Fastest-Lap Selection
// ============================================================================

/// Select `driver`'s fastest valid lap from `laps`.
///
/// # Errors
///
/// * [`LapDeltaError::NoLapsFound`]: the driver has no laps at all.
/// * [`LapDeltaError::NoValidFastestLap`]: no lap has a usable lap time.
/// * [`LapDeltaError::EmptyTelemetry`]: the fastest lap carries zero
///   telemetry samples.
pub fn select_fastest_lap<T: Float>(
    driver: &str,
    laps: &[SessionLap<T>],
) -> Result<LapRecord<T>, LapDeltaError> {
    let mut seen_any = false;
    let mut best: Option<(&SessionLap<T>, T)> = None;

    for lap in laps.iter().filter(|l| l.driver == driver) {
        seen_any = true;

        let time = match usable_lap_time(lap) {
            Some(t) => t,
            None => continue,
        };

        // Strict comparison keeps the first lap encountered on exact ties.
        match best {
            Some((_, fastest)) if time >= fastest => {}
            _ => best = Some((lap, time)),
        }
    }

    if !seen_any {
        return Err(LapDeltaError::NoLapsFound {
            driver: String::from(driver),
        });
    }

    let (lap, lap_time) = best.ok_or_else(|| LapDeltaError::NoValidFastestLap {
        driver: String::from(driver),
    })?;

    if lap.telemetry.is_empty() {
        return Err(LapDeltaError::EmptyTelemetry {
            driver: String::from(driver),
        });
    }

    Ok(LapRecord {
        driver: lap.driver.clone(),
        team: lap.team.clone(),
        compound: lap.compound.clone(),
        lap_number: lap.lap_number,
        lap_time,
        samples: lap.telemetry.clone(),
    })
}
