//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a sort run: it owns the working copy, times
//! the algorithmic phase, dispatches the selected variant, clears the
//! visualization flags, and assembles the output.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Instrument
//!   ↓
//! Layer 1: Primitives
//! ```

/// One-shot run executor.
pub mod executor;

/// Output types and the exportable run report.
pub mod output;
