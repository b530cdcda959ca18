//! Summary statistics for a lap pair.
//!
//! ## Purpose
//!
//! This module condenses two selected lap records into the headline numbers
//! of a comparison: lap-time difference, which driver was faster, and each
//! driver's speed extrema and average.
//!
//! ## Design notes
//!
//! * **Native sampling**: Speed statistics are computed over each record's
//!   own sample sequence, never over the resampled grid; averages must
//!   reflect the driver's actual sampling density.
//! * **Explicit tie**: Identical lap times yield [`FasterDriver::Equal`];
//!   no driver is silently favored.
//! * **Absent channels**: Speed statistics are `None` when a record has no
//!   usable speed data, rather than a fabricated zero.
//!
//! ## Non-goals
//!
//! * This module does not compute the delta curve (see `algorithms::delta`).

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::stats::{max_value, mean};
use crate::primitives::telemetry::LapRecord;

// ============================================================================
// Faster Driver
// ============================================================================

/// Which of the two compared drivers set the faster lap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FasterDriver {
    /// Driver A's lap time is strictly lower.
    DriverA,

    /// Driver B's lap time is strictly lower.
    DriverB,

    /// Lap times are exactly equal; neither driver is declared faster.
    Equal,
}

impl Display for FasterDriver {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DriverA => write!(f, "driver A"),
            Self::DriverB => write!(f, "driver B"),
            Self::Equal => write!(f, "dead heat"),
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Headline statistics for one lap pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<T> {
    /// Driver A's lap time in seconds.
    pub lap_time_a: T,

    /// Driver B's lap time in seconds.
    pub lap_time_b: T,

    /// Absolute lap-time difference in seconds.
    pub lap_time_diff: T,

    /// Which driver set the faster lap.
    pub faster_driver: FasterDriver,

    /// Driver A's peak speed (km/h), when speed data exists.
    pub max_speed_a: Option<T>,

    /// Driver B's peak speed (km/h), when speed data exists.
    pub max_speed_b: Option<T>,

    /// Driver A's average speed (km/h) over the lap's own samples.
    pub avg_speed_a: Option<T>,

    /// Driver B's average speed (km/h) over the lap's own samples.
    pub avg_speed_b: Option<T>,

    /// Absolute difference of the peak speeds, when both exist.
    pub max_speed_diff: Option<T>,
}

impl<T: Float> Summary<T> {
    /// Compute the summary for a lap pair.
    pub fn compute(record_a: &LapRecord<T>, record_b: &LapRecord<T>) -> Self {
        let lap_time_a = record_a.lap_time;
        let lap_time_b = record_b.lap_time;

        let faster_driver = if lap_time_a < lap_time_b {
            FasterDriver::DriverA
        } else if lap_time_b < lap_time_a {
            FasterDriver::DriverB
        } else {
            FasterDriver::Equal
        };

        let speeds_a = record_a.defined_speeds();
        let speeds_b = record_b.defined_speeds();

        let max_speed_a = max_value(&speeds_a);
        let max_speed_b = max_value(&speeds_b);

        let max_speed_diff = match (max_speed_a, max_speed_b) {
            (Some(a), Some(b)) => Some((a - b).abs()),
            _ => None,
        };

        Self {
            lap_time_a,
            lap_time_b,
            lap_time_diff: (lap_time_a - lap_time_b).abs(),
            faster_driver,
            max_speed_a,
            max_speed_b,
            avg_speed_a: mean(&speeds_a),
            avg_speed_b: mean(&speeds_b),
            max_speed_diff,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Summary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Lap time A: {:.3} s", self.lap_time_a)?;
        writeln!(f, "  Lap time B: {:.3} s", self.lap_time_b)?;
        writeln!(
            f,
            "  Gap:        {:.3} s ({})",
            self.lap_time_diff, self.faster_driver
        )?;

        if let (Some(a), Some(b)) = (self.max_speed_a, self.max_speed_b) {
            writeln!(f, "  Max speed:  {a:.0} km/h vs {b:.0} km/h")?;
        }
        if let (Some(a), Some(b)) = (self.avg_speed_a, self.avg_speed_b) {
            writeln!(f, "  Avg speed:  {a:.0} km/h vs {b:.0} km/h")?;
        }

        Ok(())
    }
}
