//! Named configuration constants for lap comparison.
//!
//! ## Purpose
//!
//! This module gathers the tunable parameters of the comparison pipeline in
//! one place: the resampling grid resolution and the data-quality
//! thresholds. They are defaults, not hard invariants; every one of them can
//! be overridden per comparison through the builder.
//!
//! ## Design notes
//!
//! * **Heuristics**: The speed and distance thresholds are tuned for car
//!   racing on permanent circuits. Karting or oval data may need different
//!   values.
//! * **Advisory**: Quality thresholds only annotate a lap record; they never
//!   abort a comparison.

/// Number of evenly spaced points on the shared distance grid.
pub const DEFAULT_GRID_RESOLUTION: usize = 1000;

/// Smallest grid that still has two distinct endpoints.
pub const MIN_GRID_RESOLUTION: usize = 2;

/// Maximum lap speed (km/h) below which speed data is considered suspect.
pub const DEFAULT_MIN_SPEED_KMH: f64 = 50.0;

/// Maximum lap distance (m) below which the lap is considered incomplete.
pub const DEFAULT_MIN_LAP_DISTANCE_M: f64 = 3000.0;

/// Standard deviation (m) below which a position axis is considered
/// degenerate (all-constant coordinates).
pub const DEFAULT_MIN_POSITION_STDDEV: f64 = 1.0;
