//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numerical functions: evenly spaced grids,
//! piecewise-linear interpolation over a monotone domain, and the slice
//! statistics used by quality assessment and summaries. It depends only on
//! the primitives layer.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Evenly spaced grids and monotone linear interpolation.
pub mod interp;

/// Extrema, mean, and spread over sample slices.
pub mod stats;
