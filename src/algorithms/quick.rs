//! QuickSort with the classic Lomuto partition.
//!
//! ## Purpose
//!
//! The pivot is the last element of the subrange; a left-to-right scan
//! swaps an element behind the partition boundary whenever it compares
//! below the pivot, and a final swap drops the pivot into its sorted
//! index. Recursion covers both halves around the pivot.
//!
//! ## Design notes
//!
//! * **Deterministic pivot**: No randomization. Reproducible runs matter
//!   more to a step-by-step engine than adversarial-input resistance, so
//!   the worst-case O(n) recursion depth is accepted.
//! * **Unconditional swaps**: The boundary swap fires even when it is a
//!   self-swap, keeping the swap counter in step with the reference
//!   behavior.

// Internal dependencies
use crate::instrument::context::SortContext;
use crate::primitives::element::SortValue;

/// Sort the whole sequence.
pub(crate) fn sort<T: SortValue>(cx: &mut SortContext<'_, T>) {
    let n = cx.len();
    if n > 1 {
        sort_range(cx, 0, n - 1);
    }
}

fn sort_range<T: SortValue>(cx: &mut SortContext<'_, T>, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pivot = partition(cx, low, high);
    if pivot > low {
        sort_range(cx, low, pivot - 1);
    }
    sort_range(cx, pivot + 1, high);
}

/// Lomuto partition of `[low, high]` around the element at `high`.
///
/// Returns the pivot's final index. Shared with the introsort dispatcher.
pub(crate) fn partition<T: SortValue>(
    cx: &mut SortContext<'_, T>,
    low: usize,
    high: usize,
) -> usize {
    let mut boundary = low;
    for j in low..high {
        if cx.compare(j, high) {
            cx.swap(boundary, j);
            boundary += 1;
        }
    }
    cx.swap(boundary, high);
    boundary
}
