//! Operation statistics for a single sort run.
//!
//! ## Purpose
//!
//! This module defines the counters the engine accumulates while sorting:
//! exact comparison and swap counts plus elapsed wall-clock time.
//!
//! ## Invariants
//!
//! * Counters only grow during a run.
//! * `duration_ms` covers the whole algorithmic phase, pacing delays
//!   included, so it scales with the configured step delay.
//!
//! ## Non-goals
//!
//! * This module does not measure time itself; the engine stamps
//!   `duration_ms` once the algorithm completes.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Statistics
// ============================================================================

/// Exact operation counters for one sort run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SortStats {
    /// Number of counted comparisons.
    pub comparisons: u64,

    /// Number of counted swaps (a single-value promotion counts as one).
    pub swaps: u64,

    /// Wall-clock duration of the algorithmic phase, in milliseconds.
    pub duration_ms: f64,
}

impl SortStats {
    /// Fresh zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Human-readable duration, e.g. `"12.43ms"`.
    pub fn duration_label(&self) -> String {
        format!("{:.2}ms", self.duration_ms)
    }
}

impl Display for SortStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "comparisons: {}, swaps: {}, duration: {}",
            self.comparisons,
            self.swaps,
            self.duration_label()
        )
    }
}
