//! HeapSort over a binary max-heap.
//!
//! ## Purpose
//!
//! Build phase heapifies every non-leaf index from `n/2 - 1` down to 0;
//! the extraction phase repeatedly swaps the root with the last unsorted
//! element and re-heapifies the reduced heap.
//!
//! ## Design notes
//!
//! * `sift_down` is written against a `base` offset with heap-relative
//!   child indices, so the introsort fallback can run the same build and
//!   extract structure over an arbitrary subrange. Full-array heap sort
//!   uses `base = 0`.

// Internal dependencies
use crate::instrument::context::SortContext;
use crate::primitives::element::SortValue;

/// Sort the whole sequence.
pub(crate) fn sort<T: SortValue>(cx: &mut SortContext<'_, T>) {
    sort_range_len(cx, 0, cx.len());
}

/// Heap sort the subrange of `len` elements starting at `base`.
pub(crate) fn sort_range_len<T: SortValue>(cx: &mut SortContext<'_, T>, base: usize, len: usize) {
    if len < 2 {
        return;
    }
    for i in (0..len / 2).rev() {
        sift_down(cx, base, len, i);
    }
    for end in (1..len).rev() {
        cx.swap(base, base + end);
        sift_down(cx, base, end, 0);
    }
}

/// Restore the max-heap property for the heap-relative index `i` within
/// the `len`-element heap rooted at `base`.
pub(crate) fn sift_down<T: SortValue>(
    cx: &mut SortContext<'_, T>,
    base: usize,
    len: usize,
    i: usize,
) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < len && cx.compare(base + largest, base + left) {
        largest = left;
    }
    if right < len && cx.compare(base + largest, base + right) {
        largest = right;
    }

    if largest != i {
        cx.swap(base + i, base + largest);
        sift_down(cx, base, len, largest);
    }
}
