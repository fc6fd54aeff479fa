//! Layer 3: Algorithms
//!
//! This layer implements the four ordering strategies. Each variant
//! contains only ordering logic, written against the instrumented
//! compare/swap context, so every algorithm reports progress and counts
//! operations identically. Selection happens through the [`Algorithm`]
//! tagged union rather than trait objects.

// External dependencies
use core::fmt::{Display, Formatter};
use core::str::FromStr;

// Internal dependencies
use crate::instrument::context::SortContext;
use crate::primitives::element::SortValue;
use crate::primitives::errors::SortError;

/// Lomuto quicksort.
pub(crate) mod quick;

/// Binary max-heap sort.
pub(crate) mod heap;

/// Leonardo-heap smoothsort.
pub(crate) mod smooth;

/// Depth-bounded hybrid introsort.
pub(crate) mod intro;

// ============================================================================
// Algorithm Selection
// ============================================================================

/// The available sorting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Lomuto-partition quicksort with a deterministic pivot.
    Quick,
    /// Binary max-heap sort.
    Heap,
    /// Adaptive Leonardo-heap smoothsort.
    Smooth,
    /// Hybrid introspective sort with a recursion budget.
    Intro,
}

impl Algorithm {
    /// Every variant, in factory-name order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Smooth,
        Algorithm::Intro,
    ];

    /// Resolve a factory name (`"quick" | "heap" | "smooth" | "intro"`).
    ///
    /// Any other name fails immediately, before any sorting begins, with
    /// the offending name in the error.
    pub fn from_name(name: &str) -> Result<Self, SortError> {
        match name {
            "quick" => Ok(Algorithm::Quick),
            "heap" => Ok(Algorithm::Heap),
            "smooth" => Ok(Algorithm::Smooth),
            "intro" => Ok(Algorithm::Intro),
            other => Err(SortError::UnknownAlgorithm {
                name: other.to_string(),
            }),
        }
    }

    /// The factory name of this variant.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Smooth => "smooth",
            Algorithm::Intro => "intro",
        }
    }

    /// Run this variant over the context's working sequence.
    pub(crate) fn run<T: SortValue>(self, cx: &mut SortContext<'_, T>) {
        match self {
            Algorithm::Quick => quick::sort(cx),
            Algorithm::Heap => heap::sort(cx),
            Algorithm::Smooth => smooth::sort(cx),
            Algorithm::Intro => intro::sort(cx),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
