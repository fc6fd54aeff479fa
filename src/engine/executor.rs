//! Execution engine for instrumented sort runs.
//!
//! ## Purpose
//!
//! This module orchestrates one sort run: it builds the instrumented
//! context over a private copy of the input, times the algorithmic phase,
//! dispatches the selected variant, clears every visualization flag, and
//! assembles the output. It is the only entry point to algorithmic work;
//! variants are never invoked directly by outside code.
//!
//! ## Design notes
//!
//! * **Copy-on-entry**: The caller's sequence is never mutated; each run
//!   owns an independent working copy and independent counters, so
//!   concurrent runs need no coordination.
//! * **Duration semantics**: The timestamp brackets the whole algorithmic
//!   phase, pacing delays included. `duration_ms` therefore scales with
//!   the configured step delay and is not a pure-CPU cost measure.
//!
//! ## Invariants
//!
//! * The output's value multiset equals the input's.
//! * No element in the output carries an active flag.
//!
//! ## Non-goals
//!
//! * This module does not validate algorithm names (handled by the
//!   factory/API layer before an executor exists).

// External dependencies
use std::time::Instant;

// Internal dependencies
use crate::algorithms::Algorithm;
use crate::engine::output::SortOutput;
use crate::instrument::context::SortContext;
use crate::instrument::pacer::StepPacer;
use crate::instrument::probe::Probe;
use crate::primitives::element::{Element, SortValue};

// ============================================================================
// Executor
// ============================================================================

/// One-shot executor for a configured sort run.
#[derive(Debug)]
pub struct SortExecutor<'a, T> {
    algorithm: Algorithm,
    pacer: StepPacer,
    probe: Probe<'a, T>,
}

impl<'a, T: SortValue> SortExecutor<'a, T> {
    /// Executor for `algorithm` with no pacing and no observer.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            pacer: StepPacer::default(),
            probe: Probe::detached(),
        }
    }

    /// Set the step pacer.
    pub fn pacer(mut self, pacer: StepPacer) -> Self {
        self.pacer = pacer;
        self
    }

    /// Set the snapshot probe.
    pub fn probe(mut self, probe: Probe<'a, T>) -> Self {
        self.probe = probe;
        self
    }

    /// Sort a copy of `input` to completion.
    ///
    /// Infallible: empty and singleton inputs produce an output with
    /// zeroed counters rather than an error.
    pub fn run(self, input: &[Element<T>]) -> SortOutput<T> {
        let mut cx = SortContext::new(input, self.probe, self.pacer);

        let started = Instant::now();
        self.algorithm.run(&mut cx);
        let elapsed = started.elapsed();

        let (sequence, mut stats) = cx.finish();
        stats.duration_ms = elapsed.as_secs_f64() * 1_000.0;

        SortOutput { sequence, stats }
    }
}
