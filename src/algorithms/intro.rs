//! IntroSort: quicksort with a recursion budget and two fallbacks.
//!
//! ## Purpose
//!
//! Hybrid dispatcher over a depth budget of `2 * floor(log2(n))`: short
//! subranges go straight to insertion sort, an exhausted budget falls
//! back to a heap sort bounded to the subrange, and everything else is a
//! Lomuto partition (shared with the quicksort module) plus recursion
//! into both halves. This bounds the worst-case recursion depth to
//! O(log n) while keeping quicksort's average-case behavior and insertion
//! sort's small-range efficiency.

// Internal dependencies
use crate::algorithms::{heap, quick};
use crate::instrument::context::SortContext;
use crate::primitives::element::SortValue;

/// Subranges shorter than this go to insertion sort.
const INSERTION_THRESHOLD: usize = 16;

/// Sort the whole sequence.
pub(crate) fn sort<T: SortValue>(cx: &mut SortContext<'_, T>) {
    let n = cx.len();
    if n < 2 {
        return;
    }
    let depth_limit = 2 * n.ilog2() as usize;
    sort_range(cx, 0, n - 1, depth_limit);
}

fn sort_range<T: SortValue>(
    cx: &mut SortContext<'_, T>,
    start: usize,
    end: usize,
    depth_limit: usize,
) {
    if start >= end {
        return;
    }

    if end - start < INSERTION_THRESHOLD {
        insertion_sort(cx, start, end);
        return;
    }

    if depth_limit == 0 {
        heap::sort_range_len(cx, start, end - start + 1);
        return;
    }

    let pivot = quick::partition(cx, start, end);
    if pivot > start {
        sort_range(cx, start, pivot - 1, depth_limit - 1);
    }
    sort_range(cx, pivot + 1, end, depth_limit - 1);
}

/// Insertion sort of `[left, right]`: shift each element left while its
/// left neighbor is strictly greater.
fn insertion_sort<T: SortValue>(cx: &mut SortContext<'_, T>, left: usize, right: usize) {
    for i in left + 1..=right {
        let mut j = i;
        while j > left && cx.compare(j, j - 1) {
            cx.swap(j, j - 1);
            j -= 1;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
