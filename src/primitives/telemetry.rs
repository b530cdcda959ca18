//! Telemetry data structures for lap comparison.
//!
//! ## Purpose
//!
//! This module defines the value types flowing through the pipeline: the
//! raw per-lap input handed over by the telemetry provider (`SessionLap`),
//! the individual measurement point (`TelemetrySample`), and the immutable
//! selected-lap record (`LapRecord`) that the rest of the crate operates on.
//!
//! ## Design notes
//!
//! * **Channel gaps**: Every sample field is `Option<T>`. Telemetry
//!   providers deliver frames with absent columns or NaN entries; `None`
//!   and non-finite values are both treated as *undefined* wherever a field
//!   is read.
//! * **Lifecycle**: A `LapRecord` is constructed once at comparison time
//!   and never mutated afterward. It does not outlive a single comparison
//!   request.
//! * **Generics**: All types are generic over `Float` (`f32`/`f64`).
//!
//! ## Invariants
//!
//! * Within one lap's sample sequence, defined `distance` and `time_offset`
//!   values are non-decreasing. Violations are rejected at resampling time,
//!   not here.
//! * `LapRecord::lap_time` is finite and positive (enforced by selection).
//!
//! ## Non-goals
//!
//! * This module does not fetch, parse, or persist session data.
//! * This module does not validate data quality (see `evaluation::quality`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Channel Helpers
// ============================================================================

/// Filter a channel value down to a *defined* one: present and finite.
///
/// `None` and non-finite entries are both provider representations of a
/// measurement gap and are treated identically.
#[inline]
pub fn defined<T: Float>(value: Option<T>) -> Option<T> {
    value.filter(|v| v.is_finite())
}

// ============================================================================
// Telemetry Sample
// ============================================================================

/// One timestamped measurement point along a lap.
///
/// Units: `distance` in meters (cumulative along the lap), `time_offset` in
/// seconds since lap start, `speed` in km/h, `position_x`/`position_y` in
/// meters of track-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySample<T> {
    /// Cumulative distance from the lap start.
    pub distance: Option<T>,

    /// Elapsed time since the lap start.
    pub time_offset: Option<T>,

    /// Instantaneous speed.
    pub speed: Option<T>,

    /// Track-local x coordinate.
    pub position_x: Option<T>,

    /// Track-local y coordinate.
    pub position_y: Option<T>,
}

impl<T: Float> TelemetrySample<T> {
    /// Create a fully defined sample.
    pub fn new(distance: T, time_offset: T, speed: T, position_x: T, position_y: T) -> Self {
        Self {
            distance: Some(distance),
            time_offset: Some(time_offset),
            speed: Some(speed),
            position_x: Some(position_x),
            position_y: Some(position_y),
        }
    }

    /// Create a sample with every channel undefined.
    ///
    /// Useful as a starting point when building samples with gaps.
    pub fn blank() -> Self {
        Self {
            distance: None,
            time_offset: None,
            speed: None,
            position_x: None,
            position_y: None,
        }
    }
}

// ============================================================================
// Session Lap (provider input)
// ============================================================================

/// One raw lap as delivered by the telemetry provider.
///
/// Each lap row carries its own driver/team/compound metadata, a recorded
/// lap time (absent for in/out laps and red-flagged attempts), and the
/// ordered telemetry sequence linked to the lap.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionLap<T> {
    /// Driver identifier (e.g. a three-letter code).
    pub driver: String,

    /// Team name.
    pub team: String,

    /// Tire compound used for the lap.
    pub compound: String,

    /// Lap number within the session.
    pub lap_number: u32,

    /// Recorded lap time in seconds; `None` when no time was set.
    pub lap_time: Option<T>,

    /// Ordered telemetry samples for the lap.
    pub telemetry: Vec<TelemetrySample<T>>,
}

impl<T: Float> SessionLap<T> {
    /// Create a session lap.
    pub fn new(
        driver: &str,
        team: &str,
        compound: &str,
        lap_number: u32,
        lap_time: Option<T>,
        telemetry: Vec<TelemetrySample<T>>,
    ) -> Self {
        Self {
            driver: String::from(driver),
            team: String::from(team),
            compound: String::from(compound),
            lap_number,
            lap_time,
            telemetry,
        }
    }
}

// ============================================================================
// Lap Record (selected lap)
// ============================================================================

/// One driver's selected fastest lap.
///
/// Constructed once by the lap selector, immutable thereafter, and discarded
/// when a new comparison is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct LapRecord<T> {
    /// Driver identifier.
    pub driver: String,

    /// Team name.
    pub team: String,

    /// Tire compound used for the lap.
    pub compound: String,

    /// Lap number within the session.
    pub lap_number: u32,

    /// Recorded lap time in seconds (finite, positive).
    pub lap_time: T,

    /// Ordered telemetry samples for the lap (non-empty).
    pub samples: Vec<TelemetrySample<T>>,
}

impl<T: Float> LapRecord<T> {
    /// Number of telemetry samples in the record.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Extract the (distance, time) pairs usable for resampling.
    ///
    /// Only samples where *both* channels are defined contribute; gap rows
    /// are skipped so that interpolation never sees an undefined knot. The
    /// two returned vectors always have equal length.
    pub fn distance_time_points(&self) -> (Vec<T>, Vec<T>) {
        let mut distance = Vec::with_capacity(self.samples.len());
        let mut time = Vec::with_capacity(self.samples.len());

        for sample in &self.samples {
            if let (Some(d), Some(t)) = (defined(sample.distance), defined(sample.time_offset)) {
                distance.push(d);
                time.push(t);
            }
        }

        (distance, time)
    }

    /// Collect the defined speed values in sample order.
    pub fn defined_speeds(&self) -> Vec<T> {
        self.samples
            .iter()
            .filter_map(|s| defined(s.speed))
            .collect()
    }
}
