//! Snapshot probe: the observer side of the instrumentation channel.
//!
//! ## Purpose
//!
//! This module defines the callback contract through which the engine
//! reports intermediate array state to an external observer. The observer
//! receives the entire current working sequence (full-sequence snapshots,
//! not deltas) at quiescent points only, so it never sees a half-mutated
//! element.
//!
//! ## Design notes
//!
//! * **Optional**: A probe with no observer attached turns every emission
//!   into a no-op; headless runs pay nothing but the branch.
//! * **Stateful observers**: The callback is `FnMut`, so observers may
//!   accumulate frames, counters, or channels between emissions.
//!
//! ## Non-goals
//!
//! * The probe does not pace execution (see the pacer) and does not clone
//!   the sequence; an observer that needs retention clones the slice.

// Internal dependencies
use crate::primitives::element::Element;

// ============================================================================
// Probe
// ============================================================================

/// Observer callback signature: receives the full working sequence.
pub type SnapshotFn<'a, T> = dyn FnMut(&[Element<T>]) + 'a;

/// Wrapper around an optional snapshot observer.
pub struct Probe<'a, T> {
    observer: Option<Box<SnapshotFn<'a, T>>>,
}

impl<'a, T> Probe<'a, T> {
    /// A probe with no observer; emissions are no-ops.
    pub fn detached() -> Self {
        Self { observer: None }
    }

    /// A probe forwarding every snapshot to `observer`.
    pub fn attached(observer: impl FnMut(&[Element<T>]) + 'a) -> Self {
        Self {
            observer: Some(Box::new(observer)),
        }
    }

    /// Whether an observer is attached.
    pub fn is_attached(&self) -> bool {
        self.observer.is_some()
    }

    /// Report the current working sequence to the observer, if any.
    pub fn emit(&mut self, sequence: &[Element<T>]) {
        if let Some(observer) = self.observer.as_mut() {
            observer(sequence);
        }
    }
}

impl<'a, T> Default for Probe<'a, T> {
    fn default() -> Self {
        Self::detached()
    }
}

impl<'a, T> core::fmt::Debug for Probe<'a, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Probe")
            .field("attached", &self.is_attached())
            .finish()
    }
}
