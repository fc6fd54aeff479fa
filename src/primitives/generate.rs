//! Input sequence generation.
//!
//! ## Purpose
//!
//! This module builds random element sequences for the engine's callers:
//! values drawn uniformly from a caller-chosen inclusive range, wrapped in
//! fresh (unflagged) elements.
//!
//! ## Design notes
//!
//! * **Reproducibility**: Alongside the thread-RNG helper there is a
//!   seeded variant, since deterministic runs are preferred when comparing
//!   algorithm behavior across sessions.
//! * Generation is a caller convenience; the engine accepts any element
//!   sequence regardless of origin.

// External dependencies
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Internal dependencies
use crate::primitives::element::{Element, SortValue};

// ============================================================================
// Generators
// ============================================================================

/// Generate `len` elements with values uniform in `[min, max]`.
///
/// Reversed bounds are normalized, so `(max, min)` draws from the same
/// range as `(min, max)`.
pub fn random_sequence<T>(len: usize, min: T, max: T) -> Vec<Element<T>>
where
    T: SortValue + SampleUniform,
{
    let (lo, hi) = ordered_bounds(min, max);
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| Element::new(rng.gen_range(lo..=hi)))
        .collect()
}

/// Generate `len` elements with values uniform in `[min, max]`, from a
/// fixed seed. Reversed bounds are normalized.
pub fn seeded_sequence<T>(len: usize, min: T, max: T, seed: u64) -> Vec<Element<T>>
where
    T: SortValue + SampleUniform,
{
    let (lo, hi) = ordered_bounds(min, max);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| Element::new(rng.gen_range(lo..=hi)))
        .collect()
}

fn ordered_bounds<T: SortValue>(min: T, max: T) -> (T, T) {
    if max < min {
        (max, min)
    } else {
        (min, max)
    }
}
