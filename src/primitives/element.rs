//! Element model for the sorting engine.
//!
//! ## Purpose
//!
//! This module defines the unit of data the engine operates on: a numeric
//! value paired with two transient boolean flags used only for
//! visualization highlighting.
//!
//! ## Design notes
//!
//! * **Value immutability**: `value` is the content to be ordered; the
//!   engine moves elements around but never rewrites a value.
//! * **Transient flags**: `is_comparing` and `is_swapping` are meaningless
//!   to the ordering outcome and are force-cleared on every element before
//!   a result is returned.
//! * **Generics**: Elements are generic over any ordered numeric type via
//!   the [`SortValue`] bound.
//!
//! ## Invariants
//!
//! * A freshly constructed element has both flags `false`.
//! * No element in a returned result sequence carries an active flag.
//!
//! ## Non-goals
//!
//! * This module does not perform comparisons or moves itself.
//! * Non-numeric keys are not supported.

// External dependencies
use core::fmt::Debug;
use num_traits::Num;

// ============================================================================
// Value Bound
// ============================================================================

/// Bound alias for sortable numeric values.
///
/// Satisfied by the built-in integer and float types. `PartialOrd` drives
/// the comparisons; `Num` pins the intent to numeric keys.
pub trait SortValue: Num + PartialOrd + Copy + Debug {}

impl<T: Num + PartialOrd + Copy + Debug> SortValue for T {}

// ============================================================================
// Element
// ============================================================================

/// A single sortable element: a value plus transient visualization flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element<T> {
    /// The value to be ordered.
    pub value: T,

    /// Set while this element participates in a comparison.
    pub is_comparing: bool,

    /// Set while this element participates in a swap.
    pub is_swapping: bool,
}

impl<T: SortValue> Element<T> {
    /// Create an element with both flags cleared.
    pub fn new(value: T) -> Self {
        Self {
            value,
            is_comparing: false,
            is_swapping: false,
        }
    }

    /// Force both flags back to `false`.
    pub fn clear_flags(&mut self) {
        self.is_comparing = false;
        self.is_swapping = false;
    }

    /// Whether either flag is currently active.
    pub fn is_highlighted(&self) -> bool {
        self.is_comparing || self.is_swapping
    }
}

/// Build an element sequence from raw values.
pub fn sequence_from_values<T: SortValue>(values: &[T]) -> Vec<Element<T>> {
    values.iter().map(|&v| Element::new(v)).collect()
}

/// Extract the raw values of an element sequence.
pub fn values_of<T: SortValue>(sequence: &[Element<T>]) -> Vec<T> {
    sequence.iter().map(|e| e.value).collect()
}
