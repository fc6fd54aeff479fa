//! High-level API for instrumented sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder pattern for selecting an algorithm, configuring the step
//! delay, and attaching an optional progress observer.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Deferred validation**: Algorithm-name lookup errors are carried and
//!   surfaced by `build()`, keeping every setter infallible.
//! * **Type-Safe**: Generic over [`SortValue`] types for flexible element types.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: Builder pattern ending in `.build()`.
//! * **Observer**: A closure that receives a full snapshot of the working
//!   sequence at each instrumented step.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SorterBuilder`] via `Sorter::new()`.
//! 2. Chain configuration methods (`.algorithm()`, `.step_delay_ms()`, etc.).
//! 3. Call `.build()` to obtain a [`SortEngine`], then `.sort(&input)`.

// Internal dependencies
use crate::engine::executor::SortExecutor;
use crate::instrument::pacer::StepPacer;
use crate::instrument::probe::Probe;
// Publicly re-exported types
pub use crate::algorithms::Algorithm;
pub use crate::engine::output::{ReportStats, SortOutput, SortReport};
pub use crate::primitives::element::{sequence_from_values, values_of, Element, SortValue};
pub use crate::primitives::errors::SortError;
pub use crate::primitives::generate::{random_sequence, seeded_sequence};
pub use crate::primitives::stats::SortStats;

/// Fluent builder for configuring an instrumented sort run.
pub struct SorterBuilder<'a, T: SortValue> {
    /// Sorting algorithm to run.
    pub algorithm: Option<Algorithm>,

    /// Delay between instrumented steps, in milliseconds.
    pub step_delay: Option<u64>,

    /// Observer invoked with a full snapshot at each step.
    pub(crate) on_progress: Option<Box<dyn FnMut(&[Element<T>]) + 'a>>,

    /// Lookup error carried from `algorithm_name` (surfaced by `build`).
    pub(crate) deferred_error: Option<SortError>,
}

impl<T: SortValue> core::fmt::Debug for SorterBuilder<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SorterBuilder")
            .field("algorithm", &self.algorithm)
            .field("step_delay", &self.step_delay)
            .field("on_progress", &self.on_progress.is_some())
            .field("deferred_error", &self.deferred_error)
            .finish()
    }
}

impl<'a, T: SortValue + 'a> Default for SorterBuilder<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: SortValue + 'a> SorterBuilder<'a, T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            algorithm: None,
            step_delay: None,
            on_progress: None,
            deferred_error: None,
        }
    }

    /// Select the sorting algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Select the sorting algorithm by its registry name.
    ///
    /// Unknown names do not fail here; the error is carried and returned by
    /// [`build`](Self::build) before any work is performed.
    pub fn algorithm_name(mut self, name: &str) -> Self {
        match Algorithm::from_name(name) {
            Ok(algorithm) => self.algorithm = Some(algorithm),
            Err(err) => self.deferred_error = Some(err),
        }
        self
    }

    /// Set the delay between instrumented steps, in milliseconds.
    pub fn step_delay_ms(mut self, millis: u64) -> Self {
        self.step_delay = Some(millis);
        self
    }

    /// Attach a progress observer.
    ///
    /// The observer receives the full working sequence after every counted
    /// comparison and around every exchange, with the elements involved
    /// flagged for highlighting.
    pub fn on_progress<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&[Element<T>]) + 'a,
    {
        self.on_progress = Some(Box::new(observer));
        self
    }

    /// Validate the configuration and produce a ready-to-run engine.
    pub fn build(self) -> Result<SortEngine<'a, T>, SortError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Ok(SortEngine {
            algorithm: self.algorithm.unwrap_or(Algorithm::Quick),
            pacer: StepPacer::from_millis(self.step_delay.unwrap_or(0)),
            probe: match self.on_progress {
                Some(observer) => Probe::attached(observer),
                None => Probe::detached(),
            },
        })
    }
}

/// A validated, ready-to-run sorting engine.
pub struct SortEngine<'a, T: SortValue> {
    algorithm: Algorithm,
    pacer: StepPacer,
    probe: Probe<'a, T>,
}

impl<T: SortValue> core::fmt::Debug for SortEngine<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SortEngine")
            .field("algorithm", &self.algorithm)
            .field("pacer", &self.pacer)
            .field("probe", &self.probe)
            .finish()
    }
}

impl<'a, T: SortValue> SortEngine<'a, T> {
    /// The algorithm this engine will run.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sort a copy of `input`, consuming the engine.
    ///
    /// The input slice is never mutated; the sorted sequence and the exact
    /// operation counters are returned in the output.
    pub fn sort(self, input: &[Element<T>]) -> SortOutput<T> {
        SortExecutor::new(self.algorithm)
            .pacer(self.pacer)
            .probe(self.probe)
            .run(input)
    }
}
