//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer inspects and summarizes lap records: the advisory data-quality
//! assessment and the per-pair summary statistics. Nothing here can fail a
//! comparison; evaluation only annotates and condenses.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Advisory data-quality assessment.
pub mod quality;

/// Summary statistics for a lap pair.
pub mod summary;
