//! Step pacer: the cooperative delay primitive.
//!
//! ## Purpose
//!
//! This module paces the engine's reported steps. Each suspension point
//! blocks the sorting thread for a caller-configured delay so a host
//! rendering loop can repaint from the snapshot emitted just before.
//!
//! ## Design notes
//!
//! * **Single-threaded model**: Execution is cooperative on one logical
//!   thread; there is no parallelism and nothing shared between
//!   concurrent sort invocations, so no locking is required.
//! * **Zero-delay degradation**: With a zero delay the suspension point
//!   still yields control once per step but resumes immediately.
//! * **No cancellation**: Once started, a sort runs to completion; a
//!   caller wanting early termination drops interest in the result.

// External dependencies
use std::thread;
use std::time::Duration;

// ============================================================================
// Pacer
// ============================================================================

/// Blocking per-step delay between reported engine steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepPacer {
    delay: Duration,
}

impl StepPacer {
    /// Pacer with the given per-step delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Pacer with a per-step delay in milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// The configured per-step delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Suspend at a step boundary.
    pub fn pause(&self) {
        if self.delay.is_zero() {
            thread::yield_now();
        } else {
            thread::sleep(self.delay);
        }
    }
}
