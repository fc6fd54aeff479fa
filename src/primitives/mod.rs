//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures and utilities used
//! throughout the crate. It has zero internal dependencies within the
//! crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Instrument
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Element model and value bound.
pub mod element;

/// Operation counters.
pub mod stats;

/// Shared error types.
pub mod errors;

/// Random input generation.
pub mod generate;
