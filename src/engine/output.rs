//! Output types for comparison operations.
//!
//! ## Purpose
//!
//! This module defines the `ComparisonResult` struct: the read-only value
//! object a comparison hands to presentation collaborators. It bundles both
//! selected lap records, their quality reports, the delta series, and the
//! summary statistics.
//!
//! ## Design notes
//!
//! * **Ownership**: The result owns every part; nothing references the
//!   session input, so the caller may drop the raw laps immediately.
//! * **Read-only**: Consumers render or inspect the parts; there is no
//!   further callable behavior and no mutation after construction.
//! * **Ergonomics**: Implements `Display` for human-readable output with a
//!   head/tail view of the delta curve.
//!
//! ## Invariants
//!
//! * `delta.distance` and `delta.delta` have equal lengths.
//! * Quality reports correspond index-for-index to their records.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::delta::DeltaSeries;
use crate::evaluation::quality::QualityReport;
use crate::evaluation::summary::{FasterDriver, Summary};
use crate::primitives::telemetry::LapRecord;

// ============================================================================
// Result Structure
// ============================================================================

/// Complete output of one lap comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult<T> {
    /// Driver A's selected fastest lap.
    pub record_a: LapRecord<T>,

    /// Driver B's selected fastest lap.
    pub record_b: LapRecord<T>,

    /// Quality findings for driver A's lap.
    pub quality_a: QualityReport<T>,

    /// Quality findings for driver B's lap.
    pub quality_b: QualityReport<T>,

    /// Signed time-gap curve over the shared distance grid.
    pub delta: DeltaSeries<T>,

    /// Headline statistics for the pair.
    pub summary: Summary<T>,
}

impl<T: Float> ComparisonResult<T> {
    /// Whether both laps passed every quality check.
    pub fn is_clean(&self) -> bool {
        self.quality_a.is_clean() && self.quality_b.is_clean()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for ComparisonResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(
            f,
            "Comparison: {} ({}, lap {}) vs {} ({}, lap {})",
            self.record_a.driver,
            self.record_a.team,
            self.record_a.lap_number,
            self.record_b.driver,
            self.record_b.team,
            self.record_b.lap_number,
        )?;
        writeln!(f)?;

        write!(f, "{}", self.summary)?;
        match self.summary.faster_driver {
            FasterDriver::DriverA => {
                writeln!(f, "  Verdict:    {} faster", self.record_a.driver)?
            }
            FasterDriver::DriverB => {
                writeln!(f, "  Verdict:    {} faster", self.record_b.driver)?
            }
            FasterDriver::Equal => writeln!(f, "  Verdict:    dead heat")?,
        }
        writeln!(f)?;

        writeln!(f, "Data quality:")?;
        Self::fmt_quality(f, &self.record_a.driver, &self.quality_a)?;
        Self::fmt_quality(f, &self.record_b.driver, &self.quality_b)?;
        writeln!(f)?;

        writeln!(f, "Delta Time:")?;
        writeln!(f, "{:>10} {:>12}", "Distance", "Delta")?;
        writeln!(f, "{:-<23}", "")?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.delta.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>10.1} {:>12.3}",
                self.delta.distance[idx], self.delta.delta[idx]
            )?;
        }

        Ok(())
    }
}

impl<T: Float + Display> ComparisonResult<T> {
    fn fmt_quality(f: &mut Formatter<'_>, driver: &str, report: &QualityReport<T>) -> Result {
        if report.is_clean() {
            return writeln!(f, "  {driver}: no issues");
        }

        for issue in report.issues() {
            writeln!(f, "  {driver}: {issue}")?;
        }

        Ok(())
    }
}
