//! # Stepsort — Instrumented Sorting for Rust
//!
//! An instrumented sorting engine that runs classic comparison sorts
//! (QuickSort, HeapSort, SmoothSort, and IntroSort) while counting every
//! comparison and exchange, pacing the run with a configurable step delay,
//! and streaming full-sequence snapshots to an observer.
//!
//! ## What is instrumented sorting?
//!
//! Ordinary sort routines answer one question: what is the sorted order?
//! An instrumented sort also answers how it got there. Every comparison and
//! every exchange flows through a shared context that counts the operation,
//! flags the elements involved, and hands a snapshot of the whole working
//! sequence to an optional observer. The result carries the sorted sequence
//! together with exact operation counters and the wall-clock duration.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use stepsort::prelude::*;
//!
//! let input = sequence_from_values(&[5_i64, 2, 9, 1, 7]);
//!
//! // Build the engine
//! let engine = Sorter::new()
//!     .algorithm(Quick)   // QuickSort (the default)
//!     .build()?;
//!
//! // Run the sort on a copy of the input
//! let output = engine.sort(&input);
//!
//! assert_eq!(output.values(), vec![1, 2, 5, 7, 9]);
//! assert!(output.stats.comparisons > 0);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Observing Progress
//!
//! ```rust
//! use stepsort::prelude::*;
//!
//! let input = sequence_from_values(&[3_i64, 1, 2]);
//! let mut snapshots = 0_usize;
//!
//! let engine = Sorter::new()
//!     .algorithm(Heap)
//!     .step_delay_ms(0)                       // No pause between steps
//!     .on_progress(|frame: &[Element<i64>]| {
//!         // Every snapshot covers the full working sequence.
//!         assert_eq!(frame.len(), 3);
//!         snapshots += 1;
//!     })
//!     .build()?;
//!
//! let output = engine.sort(&input);
//!
//! assert!(output.is_sorted());
//! assert!(snapshots > 0);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Selecting by Name
//!
//! Algorithms can be selected by registry name, which is convenient for
//! configuration files and command-line front ends. Unknown names are
//! reported by `build()` before any work is performed:
//!
//! ```rust
//! use stepsort::prelude::*;
//!
//! let engine = Sorter::<i64>::new().algorithm_name("smooth").build()?;
//! assert_eq!(engine.algorithm(), Smooth);
//!
//! let err = Sorter::<i64>::new().algorithm_name("bogo").build().unwrap_err();
//! assert_eq!(err.to_string(), "Unknown algorithm: bogo");
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Exporting a Report
//!
//! ```rust
//! use stepsort::prelude::*;
//!
//! let input = sequence_from_values(&[4_i64, 3, 2, 1]);
//! let engine = Sorter::new().algorithm(Intro).build()?;
//! let output = engine.sort(&input);
//!
//! let report = SortReport::new("intro", &input, &output);
//! let json = report.to_json()?;
//! assert!(json.contains("\"originalArray\""));
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
//!
//! ## References
//!
//! - Hoare, C. A. R. (1962). "Quicksort"
//! - Williams, J. W. J. (1964). "Algorithm 232: Heapsort"
//! - Dijkstra, E. W. (1981). "Smoothsort, an alternative for sorting in situ"
//! - Musser, D. R. (1997). "Introspective Sorting and Selection Algorithms"

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Instrument - counting, pacing, and snapshot emission.
mod instrument;

// Layer 3: Algorithms - the comparison sort implementations.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for instrumented sorting.
mod api;

// Standard sorting prelude.
pub mod prelude {
    pub use crate::api::{
        random_sequence, seeded_sequence, sequence_from_values, values_of,
        Algorithm,
        Algorithm::Heap,
        Algorithm::Intro,
        Algorithm::Quick,
        Algorithm::Smooth,
        Element, ReportStats, SortEngine, SortError, SortOutput, SortReport, SortStats,
        SortValue, SorterBuilder as Sorter,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod instrument {
        pub use crate::instrument::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
