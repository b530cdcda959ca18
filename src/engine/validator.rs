//! Configuration validation for lap comparisons.
//!
//! ## Purpose
//!
//! This module validates builder-supplied configuration before a comparator
//! is constructed: grid resolution, quality thresholds, and duplicate
//! parameter use. Data-level validation (emptiness, monotonicity) lives
//! with the resampler, which owns those contracts.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Build-time**: Every check here runs once per `build()`, never per
//!   comparison.
//! * **Generics**: Threshold validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validated configurations satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not inspect telemetry data.
//! * This module does not provide automatic correction of invalid values.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::constants::MIN_GRID_RESOLUTION;
use crate::primitives::errors::LapDeltaError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for comparison configuration.
///
/// Provides static methods returning `Result<(), LapDeltaError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate the resampling grid resolution.
    pub fn validate_grid_resolution(resolution: usize) -> Result<(), LapDeltaError> {
        if resolution < MIN_GRID_RESOLUTION {
            return Err(LapDeltaError::InvalidGridResolution(resolution));
        }
        Ok(())
    }

    /// Validate a quality threshold: finite and non-negative.
    pub fn validate_threshold<T: Float>(name: &'static str, value: T) -> Result<(), LapDeltaError> {
        if !value.is_finite() || value < T::zero() {
            return Err(LapDeltaError::InvalidThreshold {
                name,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), LapDeltaError> {
        if let Some(parameter) = duplicate_param {
            return Err(LapDeltaError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
