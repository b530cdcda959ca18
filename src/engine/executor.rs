//! Execution engine for lap comparisons.
//!
//! ## Purpose
//!
//! This module runs the comparison pipeline for one driver pair: select
//! each driver's fastest lap, assess data quality, extract the resampling
//! channels, project both laps onto the shared distance grid, derive the
//! delta curve, and assemble the final result.
//!
//! ## Design notes
//!
//! * **Request-scoped**: One call runs to completion synchronously; there
//!   is no state shared between comparisons and no cancellation point.
//!   Concurrent comparisons for different pairs are independent.
//! * **Advisory quality**: Quality reports are attached to the result and
//!   never gate the pipeline. The only quality-adjacent failure is a lap
//!   with no usable distance/time pairs, which cannot be resampled at all.
//! * **No partial results**: Any failure aborts the pair; a partially
//!   filled result is never returned.
//!
//! ## Invariants
//!
//! * Pipeline order is fixed: selection → quality → resampling → delta.
//! * The result's delta series length equals the configured grid
//!   resolution.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`
//!   at build time).
//! * This module does not retrieve session data (caller's responsibility).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::delta::compute_delta;
use crate::algorithms::resample::resample_pair;
use crate::algorithms::selection::select_fastest_lap;
use crate::engine::output::ComparisonResult;
use crate::evaluation::quality::{QualityConfig, QualityReport};
use crate::evaluation::summary::Summary;
use crate::primitives::constants::DEFAULT_GRID_RESOLUTION;
use crate::primitives::errors::LapDeltaError;
use crate::primitives::telemetry::{LapRecord, SessionLap, defined};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one comparison run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonConfig<T> {
    /// Number of points on the shared distance grid.
    pub grid_resolution: usize,

    /// Thresholds for the quality checks.
    pub quality: QualityConfig<T>,
}

impl<T: Float> Default for ComparisonConfig<T> {
    fn default() -> Self {
        Self {
            grid_resolution: DEFAULT_GRID_RESOLUTION,
            quality: QualityConfig::default(),
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless pipeline executor for lap comparisons.
pub struct DeltaExecutor;

impl DeltaExecutor {
    /// Run the full pipeline for one driver pair.
    pub fn run_with_config<T: Float>(
        laps: &[SessionLap<T>],
        driver_a: &str,
        driver_b: &str,
        config: &ComparisonConfig<T>,
    ) -> Result<ComparisonResult<T>, LapDeltaError> {
        // Per-driver selection and advisory quality assessment.
        let record_a = select_fastest_lap(driver_a, laps)?;
        let record_b = select_fastest_lap(driver_b, laps)?;

        let quality_a = QualityReport::assess(&record_a, &config.quality);
        let quality_b = QualityReport::assess(&record_b, &config.quality);

        // Pairwise alignment onto the shared distance grid.
        let (dist_a, time_a) = Self::resampling_channels(&record_a)?;
        let (dist_b, time_b) = Self::resampling_channels(&record_b)?;

        let resampled = resample_pair(&dist_a, &time_a, &dist_b, &time_b, config.grid_resolution)?;
        let delta = compute_delta(&resampled.grid, &resampled.time_a, &resampled.time_b);

        let summary = Summary::compute(&record_a, &record_b);

        Ok(ComparisonResult {
            record_a,
            record_b,
            quality_a,
            quality_b,
            delta,
            summary,
        })
    }

    /// Extract the (distance, time) channel pair of a record, naming the
    /// unusable channel when extraction comes up empty.
    fn resampling_channels<T: Float>(
        record: &LapRecord<T>,
    ) -> Result<(Vec<T>, Vec<T>), LapDeltaError> {
        let (distance, time) = record.distance_time_points();
        if !distance.is_empty() {
            return Ok((distance, time));
        }

        let channel = if record.samples.iter().all(|s| defined(s.distance).is_none()) {
            "distance"
        } else if record.samples.iter().all(|s| defined(s.time_offset).is_none()) {
            "time"
        } else {
            // Both channels have defined values, just never on the same sample.
            "distance/time"
        };

        Err(LapDeltaError::MissingChannel {
            driver: record.driver.clone(),
            channel,
        })
    }
}
