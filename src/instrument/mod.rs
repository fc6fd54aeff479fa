//! Layer 2: Instrument
//!
//! # Purpose
//!
//! This layer realizes the instrumentation channel: the snapshot probe an
//! observer attaches to, the pacer that suspends execution at each
//! reported step, and the instrumented compare/swap context every
//! algorithm variant is written against.
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
//! Layer 2: Instrument ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Snapshot observer wrapper.
pub mod probe;

/// Cooperative step delay.
pub mod pacer;

/// Instrumented compare/swap context.
pub mod context;
