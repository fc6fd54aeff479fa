//! Error types for the sorting engine.
//!
//! ## Purpose
//!
//! This module defines the single error condition the engine can report:
//! selecting an algorithm by a name the factory does not recognize.
//!
//! ## Design notes
//!
//! * **Contextual**: The error carries the offending name verbatim.
//! * **Construction-time only**: Name resolution fails before any sorting
//!   begins or any snapshot is emitted; a failed build is a caller
//!   programming error and must not be retried.
//! * **Deliberately narrow**: Empty, singleton, degenerate, and
//!   all-duplicate inputs are valid and produce correct results rather
//!   than errors. The engine performs no I/O and has no transient-failure
//!   class.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The requested algorithm name is not one of the supported variants.
    UnknownAlgorithm {
        /// The name that failed to resolve.
        name: String,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::UnknownAlgorithm { name } => write!(f, "Unknown algorithm: {name}"),
        }
    }
}

impl Error for SortError {}
