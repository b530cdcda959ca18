//! # lapdelta - Distance-Domain Lap Telemetry Comparison for Rust
//!
//! Compare two drivers' fastest-lap telemetry from a motorsport session:
//! align their unevenly-sampled time/distance traces onto a common distance
//! grid, compute the running time delta along the lap, validate data
//! completeness, and derive summary statistics (lap time, speed extrema).
//!
//! ## What is delta time?
//!
//! Two laps of the same track are sampled at different moments and different
//! positions, so their telemetry cannot be compared index by index. Treating
//! cumulative distance (rather than wall-clock time) as the shared x-axis,
//! each driver's elapsed time becomes a monotone function of distance. After
//! resampling both functions onto one evenly spaced grid over the overlapping
//! distance window, the pointwise difference is the *delta time*: positive
//! where driver A is behind, negative where A is ahead. It shows where on
//! the lap time is gained and lost, not just by how much overall.
//!
//! ## Quick Start
//!
//! ```rust
//! use lapdelta::prelude::*;
//!
//! fn lap(driver: &str, lap_time: f64, pace: f64) -> SessionLap<f64> {
//!     let telemetry = (0..=60)
//!         .map(|i| {
//!             let d = i as f64 * 100.0;
//!             TelemetrySample::new(d, d / pace, pace * 3.6, d.cos() * 400.0, d.sin() * 400.0)
//!         })
//!         .collect();
//!     SessionLap::new(driver, "Team", "SOFT", 1, Some(lap_time), telemetry)
//! }
//!
//! let laps = vec![lap("VER", 93.4, 64.2), lap("HAM", 93.9, 63.9)];
//!
//! // Build the comparison model
//! let model = Comparison::new()
//!     .grid_resolution(1000)  // 1000 shared grid points
//!     .build()?;
//!
//! // Run the comparison for a pair of drivers
//! let result = model.compare(&laps, "VER", "HAM")?;
//!
//! assert_eq!(result.delta.len(), 1000);
//! assert!(result.quality_a.is_clean());
//! println!("{}", result.summary);
//! # Result::<(), LapDeltaError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `compare` returns a `Result<ComparisonResult<T>, LapDeltaError>`.
//!
//! - **`Ok(ComparisonResult<T>)`**: both selected lap records with their
//!   quality reports, the delta series, and the summary statistics.
//! - **`Err(LapDeltaError)`**: a named data-availability failure (e.g., a
//!   driver without laps, or laps whose distance ranges do not overlap).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use lapdelta::prelude::*;
//! # let laps = vec![
//! #     SessionLap::new("LEC", "Ferrari", "MEDIUM", 7, Some(92.1), vec![
//! #         TelemetrySample::new(0.0, 0.0, 180.0, 10.0, 0.0),
//! #         TelemetrySample::new(5300.0, 92.0, 210.0, 0.0, 10.0),
//! #     ]),
//! # ];
//!
//! let model = Comparison::new().build()?;
//!
//! match model.compare(&laps, "LEC", "SAI") {
//!     Ok(result) => println!("{}", result),
//!     Err(e) => eprintln!("Comparison failed: {}", e),
//! }
//! # Result::<(), LapDeltaError>::Ok(())
//! ```
//!
//! Quality findings are *not* errors: an otherwise comparable lap with, say,
//! a patchy speed channel still produces a full result, annotated through
//! its [`prelude::QualityReport`].
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (trackside loggers, embedded
//! analysis units). Disable default features to remove the standard library
//! dependency:
//!
//! ```toml
//! [dependencies]
//! lapdelta = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` samples and a coarser grid resolution to reduce the memory
//! footprint on constrained targets.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - telemetry data structures, errors, constants.
mod primitives;

// Layer 2: Math - pure numerical functions.
mod math;

// Layer 3: Algorithms - lap selection, resampling, delta derivation.
mod algorithms;

// Layer 4: Evaluation - quality assessment and summary statistics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for lap comparisons.
mod api;

// Standard lapdelta prelude.
pub mod prelude {
    pub use crate::api::{
        Comparator, ComparisonBuilder as Comparison, ComparisonConfig, ComparisonResult,
        DeltaSeries, FasterDriver, LapDeltaError, LapRecord, QualityConfig, QualityIssue,
        QualityReport, Resampled, SessionLap, Summary, TelemetrySample, compute_delta,
        resample_pair, select_fastest_lap,
    };
}

// Named defaults for grid resolution and quality thresholds.
pub use crate::primitives::constants;

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
