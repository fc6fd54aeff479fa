//! Output types and the exportable run report.
//!
//! ## Purpose
//!
//! This module defines [`SortOutput`], the result of one sort run (final
//! sequence plus exact statistics), and [`SortReport`], a host-facing
//! export artifact pairing original values, sorted values, the algorithm
//! name, and human-readable statistics.
//!
//! ## Design notes
//!
//! * **Report shape**: The JSON form mirrors the artifact visualization
//!   hosts download; `duration` is rendered as a `"12.43ms"` string while
//!   the counters stay numeric.
//! * **Ergonomics**: Both types implement `Display`; the report also
//!   serializes with `serde`.
//!
//! ## Non-goals
//!
//! * This module performs no sorting and no validation; it only carries
//!   results.

// External dependencies
use core::fmt::{Display, Formatter};
use serde::Serialize;

// Internal dependencies
use crate::primitives::element::{values_of, Element, SortValue};
use crate::primitives::stats::SortStats;

// ============================================================================
// Sort Output
// ============================================================================

/// Result of one sort run.
#[derive(Debug, Clone, PartialEq)]
pub struct SortOutput<T> {
    /// The sorted sequence, every flag cleared.
    pub sequence: Vec<Element<T>>,

    /// Exact operation counters for the run.
    pub stats: SortStats,
}

impl<T: SortValue> SortOutput<T> {
    /// The sorted raw values.
    pub fn values(&self) -> Vec<T> {
        values_of(&self.sequence)
    }

    /// Whether the sequence is non-decreasing by value.
    pub fn is_sorted(&self) -> bool {
        self.sequence
            .windows(2)
            .all(|w| w[0].value <= w[1].value)
    }
}

impl<T: SortValue + Display> Display for SortOutput<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Elements:    {}", self.sequence.len())?;
        writeln!(f, "  Comparisons: {}", self.stats.comparisons)?;
        writeln!(f, "  Swaps:       {}", self.stats.swaps)?;
        writeln!(f, "  Duration:    {}", self.stats.duration_label())
    }
}

// ============================================================================
// Run Report
// ============================================================================

/// Statistics block of a [`SortReport`], with the duration pre-rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStats {
    /// Number of counted comparisons.
    pub comparisons: u64,

    /// Number of counted swaps.
    pub swaps: u64,

    /// Duration string, e.g. `"12.43ms"`.
    pub duration: String,
}

/// Exportable artifact of one completed sort run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortReport<T> {
    /// Factory name of the algorithm that ran.
    pub algorithm: String,

    /// Raw input values, in original order.
    pub original_array: Vec<T>,

    /// Raw output values, sorted ascending.
    pub sorted_array: Vec<T>,

    /// Human-readable statistics.
    pub statistics: ReportStats,
}

impl<T: SortValue> SortReport<T> {
    /// Assemble a report from the original input and a finished run.
    pub fn new(algorithm: &str, original: &[Element<T>], output: &SortOutput<T>) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            original_array: values_of(original),
            sorted_array: output.values(),
            statistics: ReportStats {
                comparisons: output.stats.comparisons,
                swaps: output.stats.swaps,
                duration: output.stats.duration_label(),
            },
        }
    }
}

impl<T: SortValue + Serialize> SortReport<T> {
    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<T: SortValue + Display> Display for SortReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "  Elements:    {}", self.original_array.len())?;
        writeln!(f, "  Comparisons: {}", self.statistics.comparisons)?;
        writeln!(f, "  Swaps:       {}", self.statistics.swaps)?;
        writeln!(f, "  Duration:    {}", self.statistics.duration)
    }
}
