//! Advisory data-quality assessment for lap records.
//!
//! ## Purpose
//!
//! This module inspects a [`LapRecord`] for missing, patchy, or degenerate
//! telemetry channels and produces a [`QualityReport`]. The report is
//! advisory: it never blocks the comparison pipeline, it only annotates the
//! record so downstream consumers can warn the end user.
//!
//! ## Design notes
//!
//! * **Never fails**: Assessment always returns a report, possibly empty.
//! * **Independent checks**: Every applicable check runs; a record may
//!   carry several issues at once. Issue order is insertion order, not
//!   significance.
//! * **Channel classification**: A channel is *Missing* when no sample
//!   holds a defined value, *Incomplete* when some do and some do not, and
//!   *Complete* otherwise. `None` and non-finite entries both count as
//!   undefined.
//! * **Thresholds**: Scatter and magnitude checks evaluate over the defined
//!   values only and are skipped for Missing channels. Defaults live in
//!   `primitives::constants` and are heuristics tuned for car racing, not
//!   hard invariants.
//!
//! ## Key concepts
//!
//! * **Position checks**: absent axes, gaps, and sub-threshold scatter
//!   (all-constant coordinates betray a dead positioning feed).
//! * **Speed checks**: absent channel, gaps, and an implausibly low peak.
//! * **Distance checks**: absent channel, gaps, and a lap that ends short
//!   of a plausible track length.
//! * **Time check**: absent channel.
//!
//! ## Non-goals
//!
//! * This module does not reject records (see `algorithms::resample` for
//!   the failures that abort a comparison).
//! * This module does not repair or impute data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::{String, ToString};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::stats::{max_value, sample_stddev};
use crate::primitives::constants::{
    DEFAULT_MIN_LAP_DISTANCE_M, DEFAULT_MIN_POSITION_STDDEV, DEFAULT_MIN_SPEED_KMH,
};
use crate::primitives::telemetry::{LapRecord, defined};

// ============================================================================
// Quality Configuration
// ============================================================================

/// Thresholds for the quality checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityConfig<T> {
    /// Peak speed (km/h) below which speed data is suspect.
    pub min_speed: T,

    /// Lap distance (m) below which the lap is considered incomplete.
    pub min_lap_distance: T,

    /// Per-axis position standard deviation (m) below which the position
    /// feed is considered degenerate.
    pub min_position_stddev: T,
}

impl<T: Float> Default for QualityConfig<T> {
    fn default() -> Self {
        Self {
            min_speed: T::from(DEFAULT_MIN_SPEED_KMH).unwrap(),
            min_lap_distance: T::from(DEFAULT_MIN_LAP_DISTANCE_M).unwrap(),
            min_position_stddev: T::from(DEFAULT_MIN_POSITION_STDDEV).unwrap(),
        }
    }
}

// ============================================================================
// Quality Issues
// ============================================================================

/// One quality finding on a lap record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QualityIssue<T> {
    /// A position axis has no defined values at all.
    MissingPosition,

    /// Position axes are present but contain undefined values.
    IncompletePosition,

    /// Position scatter is below the degeneracy threshold on some axis.
    DegeneratePosition,

    /// The speed channel has no defined values at all.
    MissingSpeed,

    /// The speed channel contains undefined values.
    IncompleteSpeed,

    /// Peak speed is below the plausibility threshold.
    SuspiciouslyLowSpeed,

    /// The distance channel has no defined values at all.
    MissingDistance,

    /// The distance channel contains undefined values.
    IncompleteDistance,

    /// The lap ends short of a plausible track length.
    ShortLap {
        /// Largest defined distance value, in meters.
        max_distance: T,
    },

    /// The time channel has no defined values at all.
    MissingTime,
}

impl<T: Float + Display> Display for QualityIssue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingPosition => write!(f, "Missing track position data"),
            Self::IncompletePosition => write!(f, "Incomplete track position data"),
            Self::DegeneratePosition => write!(f, "Invalid track position data"),
            Self::MissingSpeed => write!(f, "Missing speed data"),
            Self::IncompleteSpeed => write!(f, "Incomplete speed data"),
            Self::SuspiciouslyLowSpeed => write!(f, "Suspiciously low speed data"),
            Self::MissingDistance => write!(f, "Missing distance data"),
            Self::IncompleteDistance => write!(f, "Incomplete distance data"),
            Self::ShortLap { max_distance } => {
                write!(f, "Incomplete lap (only {max_distance:.0}m)")
            }
            Self::MissingTime => write!(f, "Missing time data"),
        }
    }
}

// ============================================================================
// Channel Classification
// ============================================================================

/// Completeness of one telemetry channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChannelState {
    /// No sample holds a defined value.
    Missing,
    /// Some samples hold defined values, some do not.
    Incomplete,
    /// Every sample holds a defined value.
    Complete,
}

/// One scanned channel: its completeness and its defined values in order.
struct Channel<T> {
    state: ChannelState,
    values: Vec<T>,
}

fn scan_channel<T, I>(channel: I) -> Channel<T>
where
    T: Float,
    I: Iterator<Item = Option<T>>,
{
    let mut values = Vec::new();
    let mut gaps = 0usize;

    for entry in channel {
        match defined(entry) {
            Some(v) => values.push(v),
            None => gaps += 1,
        }
    }

    let state = if values.is_empty() {
        ChannelState::Missing
    } else if gaps > 0 {
        ChannelState::Incomplete
    } else {
        ChannelState::Complete
    };

    Channel { state, values }
}

// ============================================================================
// Quality Report
// ============================================================================

/// Ordered list of quality findings for one lap record; empty = fully valid.
///
/// Computed once per record, never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityReport<T> {
    issues: Vec<QualityIssue<T>>,
}

impl<T: Float> QualityReport<T> {
    /// Run every applicable quality check on `record`.
    pub fn assess(record: &LapRecord<T>, config: &QualityConfig<T>) -> Self {
        let mut issues = Vec::new();

        // Track position: both axes must exist, be gap-free, and scatter.
        let pos_x = scan_channel(record.samples.iter().map(|s| s.position_x));
        let pos_y = scan_channel(record.samples.iter().map(|s| s.position_y));

        if pos_x.state == ChannelState::Missing || pos_y.state == ChannelState::Missing {
            issues.push(QualityIssue::MissingPosition);
        } else {
            if pos_x.state == ChannelState::Incomplete || pos_y.state == ChannelState::Incomplete {
                issues.push(QualityIssue::IncompletePosition);
            }
            if sample_stddev(&pos_x.values) < config.min_position_stddev
                || sample_stddev(&pos_y.values) < config.min_position_stddev
            {
                issues.push(QualityIssue::DegeneratePosition);
            }
        }

        // Speed: channel presence, gaps, plausible peak.
        let speed = scan_channel(record.samples.iter().map(|s| s.speed));
        match speed.state {
            ChannelState::Missing => issues.push(QualityIssue::MissingSpeed),
            state => {
                if state == ChannelState::Incomplete {
                    issues.push(QualityIssue::IncompleteSpeed);
                }
                if let Some(max) = max_value(&speed.values) {
                    if max < config.min_speed {
                        issues.push(QualityIssue::SuspiciouslyLowSpeed);
                    }
                }
            }
        }

        // Distance: channel presence, gaps, plausible lap length.
        let distance = scan_channel(record.samples.iter().map(|s| s.distance));
        match distance.state {
            ChannelState::Missing => issues.push(QualityIssue::MissingDistance),
            state => {
                if state == ChannelState::Incomplete {
                    issues.push(QualityIssue::IncompleteDistance);
                }
                if let Some(max) = max_value(&distance.values) {
                    if max < config.min_lap_distance {
                        issues.push(QualityIssue::ShortLap { max_distance: max });
                    }
                }
            }
        }

        // Time: channel presence only.
        let time = scan_channel(record.samples.iter().map(|s| s.time_offset));
        if time.state == ChannelState::Missing {
            issues.push(QualityIssue::MissingTime);
        }

        Self { issues }
    }

    /// Whether no check fired.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// The findings in insertion order.
    pub fn issues(&self) -> &[QualityIssue<T>] {
        &self.issues
    }
}

impl<T: Float + Display> QualityReport<T> {
    /// The findings rendered as user-facing strings.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.to_string()).collect()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for QualityReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.issues.is_empty() {
            return write!(f, "no data quality issues");
        }

        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }

        Ok(())
    }
}
