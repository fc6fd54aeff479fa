//! Instrumented sort context: the shared contract every algorithm
//! variant is written against.
//!
//! ## Purpose
//!
//! This module owns the working sequence, the operation counters, the
//! snapshot probe, and the step pacer, and exposes the two primitives,
//! [`compare`](SortContext::compare) and [`swap`](SortContext::swap),
//! through which every variant mutates or inspects the sequence. Because
//! all instrumentation lives here, every algorithm behaves identically
//! with respect to snapshot granularity and counting.
//!
//! ## Key concepts
//!
//! * **Snapshot-then-pause-then-mutate**: Flags go up, a snapshot is
//!   emitted, the pacer suspends, and only then does the operation happen.
//!   A swap emits a second snapshot (and pauses again) after the exchange;
//!   a comparison clears its flags silently, so comparison highlighting
//!   is never visible past its own frame.
//! * **Copy-on-entry**: The context clones the caller's slice once; the
//!   caller's sequence is never mutated.
//!
//! ## Invariants
//!
//! * Counters only grow.
//! * Every emission happens at a quiescent point: flags and values are
//!   mutually consistent within one snapshot.
//! * `finish` clears every flag; no element leaves the context
//!   highlighted.

// Internal dependencies
use crate::instrument::pacer::StepPacer;
use crate::instrument::probe::Probe;
use crate::primitives::element::{Element, SortValue};
use crate::primitives::stats::SortStats;

// ============================================================================
// Context
// ============================================================================

/// Working state for one sort run: sequence, counters, probe, pacer.
#[derive(Debug)]
pub struct SortContext<'a, T> {
    sequence: Vec<Element<T>>,
    stats: SortStats,
    probe: Probe<'a, T>,
    pacer: StepPacer,
}

impl<'a, T: SortValue> SortContext<'a, T> {
    /// Build a context over a private copy of `input`.
    pub fn new(input: &[Element<T>], probe: Probe<'a, T>, pacer: StepPacer) -> Self {
        Self {
            sequence: input.to_vec(),
            stats: SortStats::new(),
            probe,
            pacer,
        }
    }

    /// Number of elements in the working sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the working sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &SortStats {
        &self.stats
    }

    // ========================================================================
    // Instrumented Primitives
    // ========================================================================

    /// Instrumented comparison: `value[i] < value[j]`.
    ///
    /// Counts one comparison, highlights both elements, emits a snapshot,
    /// pauses, evaluates, then clears the highlight without a second
    /// snapshot.
    pub fn compare(&mut self, i: usize, j: usize) -> bool {
        self.stats.comparisons += 1;
        self.sequence[i].is_comparing = true;
        self.sequence[j].is_comparing = true;
        self.probe.emit(&self.sequence);
        self.pacer.pause();

        let result = self.sequence[i].value < self.sequence[j].value;

        self.sequence[i].is_comparing = false;
        self.sequence[j].is_comparing = false;
        result
    }

    /// Instrumented exchange of positions `i` and `j`.
    ///
    /// Counts one swap, highlights both elements, emits a snapshot,
    /// pauses, exchanges in place, emits a second snapshot, pauses again,
    /// then clears the highlight.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.stats.swaps += 1;
        self.sequence[i].is_swapping = true;
        self.sequence[j].is_swapping = true;
        self.probe.emit(&self.sequence);
        self.pacer.pause();

        self.sequence.swap(i, j);

        self.probe.emit(&self.sequence);
        self.pacer.pause();

        self.sequence[i].is_swapping = false;
        self.sequence[j].is_swapping = false;
    }

    // ========================================================================
    // Teardown
    // ========================================================================

    /// Clear every flag and release the sequence with its counters.
    pub fn finish(mut self) -> (Vec<Element<T>>, SortStats) {
        for element in &mut self.sequence {
            element.clear_flags();
        }
        (self.sequence, self.stats)
    }
}
