//! High-level API for lap comparisons.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder pattern for configuring the grid resolution and quality
//! thresholds, producing a reusable [`Comparator`] that runs comparisons
//! for driver pairs.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters; the zero-configuration `Comparison::new().build()` matches
//!   the constants in `primitives::constants`.
//! * **Validated**: Configuration is validated once, when `build()` is
//!   called; comparisons then run without re-checking it.
//! * **Reusable**: One built `Comparator` can serve any number of driver
//!   pairs; each call is independent.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ComparisonBuilder`] via `Comparison::new()`.
//! 2. Chain configuration methods (`.grid_resolution()`, `.min_speed()`, …).
//! 3. Call `.build()` to validate and obtain a [`Comparator`].
//! 4. Call `.compare(&laps, "VER", "HAM")` per driver pair.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::DeltaExecutor;
use crate::engine::validator::Validator;
use crate::primitives::constants::DEFAULT_GRID_RESOLUTION;

// Publicly re-exported types
pub use crate::algorithms::delta::{DeltaSeries, compute_delta};
pub use crate::engine::executor::ComparisonConfig;
pub use crate::algorithms::resample::{Resampled, resample_pair};
pub use crate::algorithms::selection::select_fastest_lap;
pub use crate::engine::output::ComparisonResult;
pub use crate::evaluation::quality::{QualityConfig, QualityIssue, QualityReport};
pub use crate::evaluation::summary::{FasterDriver, Summary};
pub use crate::primitives::errors::LapDeltaError;
pub use crate::primitives::telemetry::{LapRecord, SessionLap, TelemetrySample};

// ============================================================================
// Comparison Builder
// ============================================================================

/// Fluent builder for configuring lap comparisons.
#[derive(Debug, Clone)]
pub struct ComparisonBuilder<T> {
    /// Number of points on the shared distance grid.
    pub grid_resolution: Option<usize>,

    /// Peak-speed plausibility threshold (km/h).
    pub min_speed: Option<T>,

    /// Minimum plausible lap distance (m).
    pub min_lap_distance: Option<T>,

    /// Minimum per-axis position scatter (m).
    pub min_position_stddev: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ComparisonBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ComparisonBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            grid_resolution: None,
            min_speed: None,
            min_lap_distance: None,
            min_position_stddev: None,
            duplicate_param: None,
        }
    }

    /// Set the number of points on the shared distance grid.
    pub fn grid_resolution(mut self, resolution: usize) -> Self {
        if self.grid_resolution.is_some() {
            self.duplicate_param = Some("grid_resolution");
        }
        self.grid_resolution = Some(resolution);
        self
    }

    /// Set the peak-speed plausibility threshold (km/h).
    pub fn min_speed(mut self, threshold: T) -> Self {
        if self.min_speed.is_some() {
            self.duplicate_param = Some("min_speed");
        }
        self.min_speed = Some(threshold);
        self
    }

    /// Set the minimum plausible lap distance (m).
    pub fn min_lap_distance(mut self, threshold: T) -> Self {
        if self.min_lap_distance.is_some() {
            self.duplicate_param = Some("min_lap_distance");
        }
        self.min_lap_distance = Some(threshold);
        self
    }

    /// Set the minimum per-axis position scatter (m).
    pub fn min_position_stddev(mut self, threshold: T) -> Self {
        if self.min_position_stddev.is_some() {
            self.duplicate_param = Some("min_position_stddev");
        }
        self.min_position_stddev = Some(threshold);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the comparator.
    pub fn build(self) -> Result<Comparator<T>, LapDeltaError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let grid_resolution = self.grid_resolution.unwrap_or(DEFAULT_GRID_RESOLUTION);
        Validator::validate_grid_resolution(grid_resolution)?;

        let mut quality = QualityConfig::default();

        if let Some(threshold) = self.min_speed {
            Validator::validate_threshold("min_speed", threshold)?;
            quality.min_speed = threshold;
        }
        if let Some(threshold) = self.min_lap_distance {
            Validator::validate_threshold("min_lap_distance", threshold)?;
            quality.min_lap_distance = threshold;
        }
        if let Some(threshold) = self.min_position_stddev {
            Validator::validate_threshold("min_position_stddev", threshold)?;
            quality.min_position_stddev = threshold;
        }

        Ok(Comparator {
            config: ComparisonConfig {
                grid_resolution,
                quality,
            },
        })
    }
}

// ============================================================================
// Comparator
// ============================================================================

/// A validated, reusable lap comparator.
pub struct Comparator<T: Float> {
    config: ComparisonConfig<T>,
}

impl<T: Float> Comparator<T> {
    /// Compare two drivers' fastest laps from `laps`.
    ///
    /// `laps` may contain the whole session; each driver's laps are picked
    /// out by the `driver` field. Every call is independent and works on
    /// fresh state.
    pub fn compare(
        &self,
        laps: &[SessionLap<T>],
        driver_a: &str,
        driver_b: &str,
    ) -> Result<ComparisonResult<T>, LapDeltaError> {
        DeltaExecutor::run_with_config(laps, driver_a, driver_b, &self.config)
    }

    /// The validated configuration this comparator runs with.
    pub fn config(&self) -> &ComparisonConfig<T> {
        &self.config
    }
}
