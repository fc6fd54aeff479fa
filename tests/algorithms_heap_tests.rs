//! Tests for the HeapSort variant.
//!
//! These tests drive HeapSort through the public API and verify sorted
//! output across input shapes plus the deterministic counters of the
//! build-then-extract structure.
//!
//! ## Test Organization
//!
//! 1. **Correctness** - Sorted output across input shapes
//! 2. **Determinism** - Exact counters on known inputs

use stepsort::prelude::*;

fn heap_sort(values: &[i64]) -> SortOutput<i64> {
    let input = sequence_from_values(values);
    Sorter::new().algorithm(Heap).build().unwrap().sort(&input)
}

// ============================================================================
// Correctness
// ============================================================================

/// Test sorting a shuffled input.
#[test]
fn test_sorts_shuffled_input() {
    let output = heap_sort(&[6, 3, 8, 1, 9, 2, 7, 4, 5]);
    assert_eq!(output.values(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

/// Test sorting a reverse-ordered input.
#[test]
fn test_sorts_reversed_input() {
    let values: Vec<i64> = (0..128).rev().collect();
    let expected: Vec<i64> = (0..128).collect();
    assert_eq!(heap_sort(&values).values(), expected);
}

/// Test that already sorted input stays sorted.
#[test]
fn test_sorted_input_stays_sorted() {
    let values: Vec<i64> = (0..90).collect();
    assert_eq!(heap_sort(&values).values(), values);
}

/// Test that ties survive sorting.
#[test]
fn test_handles_duplicates() {
    let output = heap_sort(&[5, 5, 5, 2, 2, 8, 8, 8, 8]);
    assert_eq!(output.values(), vec![2, 2, 5, 5, 5, 8, 8, 8, 8]);
}

/// Test a two-element heap, the smallest input that does work.
#[test]
fn test_two_elements() {
    let output = heap_sort(&[2, 1]);
    assert_eq!(output.values(), vec![1, 2]);
    assert!(output.stats.swaps >= 1);
}

/// Test a larger seeded input against the standard library.
#[test]
fn test_matches_std_sort() {
    let input = seeded_sequence(300, -500_i64, 500, 23);
    let mut expected = values_of(&input);
    expected.sort_unstable();

    let output = Sorter::new().algorithm(Heap).build().unwrap().sort(&input);
    assert_eq!(output.values(), expected);
}

// ============================================================================
// Determinism
// ============================================================================

/// Test the exact counters of a three-element run.
///
/// `[3, 1, 2]`: the build phase finds the root already maximal (two
/// comparisons), then extraction swaps the root out twice with one
/// re-heapify comparison in between.
#[test]
fn test_exact_counters_small_input() {
    let output = heap_sort(&[3, 1, 2]);
    assert_eq!(output.values(), vec![1, 2, 3]);
    assert_eq!(output.stats.comparisons, 3);
    assert_eq!(output.stats.swaps, 2);
}

/// Test that counters are identical across repeated runs.
#[test]
fn test_counters_are_reproducible() {
    let values: Vec<i64> = (0..75).map(|i| (i * 13 + 7) % 75).collect();
    let first = heap_sort(&values);
    let second = heap_sort(&values);
    assert_eq!(first.stats.comparisons, second.stats.comparisons);
    assert_eq!(first.stats.swaps, second.stats.swaps);
}
