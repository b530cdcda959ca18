//! Error types for lap comparison operations.
//!
//! ## Purpose
//!
//! This module defines the failure conditions of the comparison pipeline:
//! lap selection failures, resampling failures, and configuration errors
//! caught at build time.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the values needed for diagnosis (driver
//!   id, overlap bounds, offending sample index).
//! * **Data-availability, not transient**: Selection and resampling errors
//!   describe the session data itself; retrying the same inputs cannot
//!   succeed. Callers should surface the message and let the user pick a
//!   different driver or session.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Selection failures**: No laps, no usable lap time, empty telemetry.
//! 2. **Resampling failures**: Empty or mismatched channels, non-monotonic
//!    distance, non-overlapping distance windows.
//! 3. **Configuration errors**: Invalid grid resolution or thresholds,
//!    parameters set multiple times in the builder.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Quality findings are never represented here; they are advisory and
//!   live in the quality report.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for lap comparison operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LapDeltaError {
    /// Input channel slices are empty.
    EmptyInput,

    /// Distance and time channels must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the distance channel.
        distance_len: usize,
        /// Number of elements in the time channel.
        time_len: usize,
    },

    /// The driver has no laps in the session.
    NoLapsFound {
        /// Driver identifier as given by the session data.
        driver: String,
    },

    /// None of the driver's laps has a usable lap time.
    NoValidFastestLap {
        /// Driver identifier as given by the session data.
        driver: String,
    },

    /// The selected fastest lap has no telemetry samples.
    EmptyTelemetry {
        /// Driver identifier as given by the session data.
        driver: String,
    },

    /// The selected lap has no samples where the named channel is defined,
    /// so the lap cannot be resampled.
    MissingChannel {
        /// Driver identifier as given by the session data.
        driver: String,
        /// Name of the unusable channel.
        channel: &'static str,
    },

    /// Distance values must be non-decreasing along a lap.
    NonMonotonicDistance {
        /// Index of the first sample that decreases.
        index: usize,
    },

    /// The two laps' distance ranges do not overlap.
    NoOverlap {
        /// Lower bound of the attempted overlap window.
        low: f64,
        /// Upper bound of the attempted overlap window.
        high: f64,
    },

    /// Grid resolution must allow at least two distinct endpoints.
    InvalidGridResolution(usize),

    /// A quality threshold must be finite and non-negative.
    InvalidThreshold {
        /// Name of the threshold parameter.
        name: &'static str,
        /// The value provided.
        value: f64,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LapDeltaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input channels are empty"),
            Self::MismatchedInputs {
                distance_len,
                time_len,
            } => {
                write!(
                    f,
                    "Length mismatch: distance has {distance_len} points, time has {time_len}"
                )
            }
            Self::NoLapsFound { driver } => write!(f, "No laps found for driver {driver}"),
            Self::NoValidFastestLap { driver } => {
                write!(f, "No valid fastest lap for driver {driver}")
            }
            Self::EmptyTelemetry { driver } => {
                write!(f, "No telemetry data available for driver {driver}")
            }
            Self::MissingChannel { driver, channel } => {
                write!(f, "Driver {driver} has no usable {channel} data to resample")
            }
            Self::NonMonotonicDistance { index } => {
                write!(f, "Distance decreases at sample {index} (must be non-decreasing)")
            }
            Self::NoOverlap { low, high } => {
                write!(
                    f,
                    "Lap distance ranges do not overlap (window [{low:.1} m, {high:.1} m])"
                )
            }
            Self::InvalidGridResolution(n) => {
                write!(f, "Invalid grid resolution: {n} (must be at least 2)")
            }
            Self::InvalidThreshold { name, value } => {
                write!(
                    f,
                    "Invalid threshold {name}: {value} (must be finite and non-negative)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LapDeltaError {}
