//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the comparison algorithms: fastest-lap selection,
//! distance-domain resampling of a lap pair, and delta-time derivation. It
//! builds on the math layer and produces the value types the evaluation and
//! engine layers consume.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fastest-lap selection and record shaping.
pub mod selection;

/// Distance-domain resampling of a lap pair.
pub mod resample;

/// Delta-time series derivation.
pub mod delta;
