//! Delta-time series derivation.
//!
//! ## Purpose
//!
//! This module derives the signed time-gap curve from a resampled lap pair:
//! at each shared grid point, how far behind (positive) or ahead (negative)
//! driver A is relative to driver B.
//!
//! ## Design notes
//!
//! * **Sign convention**: `delta[i] = time_a[i] - time_b[i]`. Positive
//!   means A reached that distance later (A is behind); negative means A is
//!   ahead.
//! * **Presentation splits**: `ahead_a`/`ahead_b` zero out the opposing
//!   half of the curve. They are pure transforms for area-under-curve
//!   rendering by collaborators, not new computation.
//! * **Ownership**: A `DeltaSeries` belongs to one comparison result and is
//!   recomputed fresh for every new pair; it is never partially updated.
//!
//! ## Invariants
//!
//! * `distance` and `delta` always have equal lengths.
//! * Swapping the two time series negates every delta value exactly.
//!
//! ## Non-goals
//!
//! * This module does not compute summary scalars (see
//!   `evaluation::summary`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Delta Series
// ============================================================================

/// Signed time-gap curve over the shared distance grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaSeries<T> {
    /// Shared distance grid.
    pub distance: Vec<T>,

    /// Time gap at each grid point (`time_a - time_b`).
    pub delta: Vec<T>,
}

impl<T: Float> DeltaSeries<T> {
    /// Number of grid points in the series.
    pub fn len(&self) -> usize {
        self.delta.len()
    }

    /// Whether the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.delta.is_empty()
    }

    /// The curve where driver A is ahead: `delta` where negative, else zero.
    pub fn ahead_a(&self) -> Vec<T> {
        self.delta
            .iter()
            .map(|&d| if d < T::zero() { d } else { T::zero() })
            .collect()
    }

    /// The curve where driver B is ahead: `delta` where positive, else zero.
    pub fn ahead_b(&self) -> Vec<T> {
        self.delta
            .iter()
            .map(|&d| if d > T::zero() { d } else { T::zero() })
            .collect()
    }
}

// ============================================================================
// Delta Computation
// ============================================================================

/// Derive the delta series from two resampled time traces on `grid`.
///
/// All three slices must have equal lengths (guaranteed by
/// [`resample_pair`](crate::algorithms::resample::resample_pair)).
pub fn compute_delta<T: Float>(grid: &[T], time_a: &[T], time_b: &[T]) -> DeltaSeries<T> {
    debug_assert!(grid.len() == time_a.len() && time_a.len() == time_b.len());

    let delta = time_a
        .iter()
        .zip(time_b.iter())
        .map(|(&ta, &tb)| ta - tb)
        .collect();

    DeltaSeries {
        distance: grid.to_vec(),
        delta,
    }
}
