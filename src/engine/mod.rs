//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the comparison pipeline: lap selection, quality
//! assessment, channel extraction, resampling, and delta derivation, in
//! that order, assembling the final comparison result. It also hosts the
//! configuration validation shared by the builder.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline orchestration.
pub mod executor;

/// Configuration validation utilities.
pub mod validator;

/// Output types for comparison operations.
pub mod output;
