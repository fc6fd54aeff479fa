//! SmoothSort: adaptive heap sort over a forest of Leonardo trees.
//!
//! ## Purpose
//!
//! The unsorted prefix is organized as a forest of max-heap-ordered
//! Leonardo trees. The growth phase folds each new element into the
//! forest, merging two equal-order trees whenever the encoding allows;
//! the extraction phase dismantles the forest from the right, popping the
//! maximum and re-balancing the exposed subtrees. Runs in O(n) on already
//! sorted input and O(n log n) otherwise.
//!
//! ## Key concepts
//!
//! * **Leonardo numbers**: `LP[0] = LP[1] = 1`,
//!   `LP[i] = LP[i-1] + LP[i-2] + 1`, the sizes of the balanced trees in
//!   the forest. Precomputed through index 44; `LP[44]` exceeds two
//!   billion elements, far beyond any input this engine paces through.
//! * **Forest encoding**: bit pattern `p` records which tree orders are
//!   present (bit `k` set means a tree of order `pshift + k`), and
//!   `pshift` is the order of the rightmost, smallest tree. Tree
//!   boundaries are found by stripping trailing bits of `p`.
//! * **`sift`** restores heap order inside one tree; **`trinkle`**
//!   restores order across tree roots, with a `trusty` flag that skips
//!   the re-sift when the caller already guarantees local heap order.
//!
//! ## Invariants
//!
//! * `p` is odd between steps; bit 0 always describes the tree at `head`.
//! * A tree of order `k >= 2` rooted at `head` has its right subtree root
//!   at `head - 1` (order `k-2`) and its left subtree root at
//!   `head - 1 - LP[k-2]` (order `k-1`).
//!
//! All probes go through the shared `compare` primitive and every
//! promotion through `swap`, so a single-value relocation is counted as
//! one swap, the same granularity as the other variants.

// Internal dependencies
use crate::instrument::context::SortContext;
use crate::primitives::element::SortValue;

// ============================================================================
// Leonardo Numbers
// ============================================================================

/// Leonardo numbers `LP[0..=44]`.
pub(crate) const LEONARDO: [usize; 45] = leonardo_table();

const fn leonardo_table() -> [usize; 45] {
    let mut lp = [1usize; 45];
    let mut i = 2;
    while i < lp.len() {
        lp[i] = lp[i - 1] + lp[i - 2] + 1;
        i += 1;
    }
    lp
}

// ============================================================================
// Sort Driver
// ============================================================================

/// Sort the whole sequence.
pub(crate) fn sort<T: SortValue>(cx: &mut SortContext<'_, T>) {
    let n = cx.len();
    if n < 2 {
        return;
    }
    let hi = n - 1;

    let mut p: u64 = 1;
    let mut pshift: u32 = 1;
    let mut head: usize = 0;

    // Growth phase: fold elements 1..n-1 into the forest.
    while head < hi {
        if p & 3 == 3 {
            // Two smallest trees have adjacent orders: merge them under
            // the incoming element as a tree of order pshift + 2.
            sift(cx, pshift, head);
            p >>= 2;
            pshift += 2;
        } else {
            // A tree that will never be merged again must be fully
            // ordered against the roots to its left; one that still can
            // grow only needs local heap order.
            if LEONARDO[(pshift - 1) as usize] >= hi - head {
                trinkle(cx, p, pshift, head, false);
            } else {
                sift(cx, pshift, head);
            }

            if pshift == 1 {
                p <<= 1;
                pshift = 0;
            } else {
                p <<= pshift - 1;
                pshift = 1;
            }
        }
        p |= 1;
        head += 1;
    }

    trinkle(cx, p, pshift, head, false);

    // Extraction phase: dismantle the forest from the right.
    while pshift != 1 || p != 1 {
        if pshift <= 1 {
            // Singleton tree: popping it exposes the next boundary.
            let trail = (p & !1u64).trailing_zeros();
            p >>= trail;
            pshift += trail;
        } else {
            // Split the rightmost tree into its two subtrees and restore
            // root order over the exposed roots, left child first. Both
            // subtrees are already heaps, so the roots are trusted.
            p <<= 2;
            p ^= 7;
            pshift -= 2;
            trinkle(
                cx,
                p >> 1,
                pshift + 1,
                head - LEONARDO[pshift as usize] - 1,
                true,
            );
            trinkle(cx, p, pshift, head - 1, true);
        }
        head -= 1;
    }
}

// ============================================================================
// Heap Restoration
// ============================================================================

/// Restore max-heap order within a single Leonardo tree of order
/// `pshift` rooted at `head`.
fn sift<T: SortValue>(cx: &mut SortContext<'_, T>, mut pshift: u32, mut head: usize) {
    while pshift > 1 {
        let rt = head - 1;
        let lf = head - 1 - LEONARDO[(pshift - 2) as usize];

        // Stop once the root dominates both subtree roots.
        if !cx.compare(head, lf) && !cx.compare(head, rt) {
            break;
        }

        if !cx.compare(lf, rt) {
            cx.swap(head, lf);
            head = lf;
            pshift -= 1;
        } else {
            cx.swap(head, rt);
            head = rt;
            pshift -= 2;
        }
    }
}

/// Restore order across tree roots, walking left into smaller adjacent
/// trees while a stepson root exceeds the current value.
///
/// `trusty` means the caller guarantees the tree at `head` is already
/// heap-ordered, which skips both the children consultation during the
/// walk and the final re-sift when no promotion happened.
fn trinkle<T: SortValue>(
    cx: &mut SortContext<'_, T>,
    mut p: u64,
    mut pshift: u32,
    mut head: usize,
    mut trusty: bool,
) {
    while p != 1 {
        let stepson = head - LEONARDO[pshift as usize];

        if !cx.compare(head, stepson) {
            // No stepson exceeds the current root; order holds.
            break;
        }

        if !trusty && pshift > 1 {
            // The true maximum among stepson and the root's own children
            // decides: if either child dominates the stepson, the sift
            // below will finish the job.
            let rt = head - 1;
            let lf = head - 1 - LEONARDO[(pshift - 2) as usize];
            if !cx.compare(rt, stepson) || !cx.compare(lf, stepson) {
                break;
            }
        }

        cx.swap(head, stepson);
        head = stepson;

        let trail = (p & !1u64).trailing_zeros();
        p >>= trail;
        pshift += trail;
        trusty = false;
    }

    if !trusty {
        sift(cx, pshift, head);
    }
}

// ============================================================================
// Tests
// ============================================================================
