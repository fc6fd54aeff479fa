//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types for
//! convenient usage of the sorting API. The prelude should provide a
//! one-stop import for common functionality.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Type Usage** - Types can be used without qualification
//! 3. **Builder Pattern** - Complete workflows work with prelude imports

use stepsort::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Verifies that the prelude exports all necessary types for basic usage.
#[test]
fn test_prelude_imports() {
    let input = sequence_from_values(&[3_i64, 1, 2]);

    // Verify Sorter (SorterBuilder), Algorithm variants, and output are useable
    let output = Sorter::new().algorithm(Quick).build().unwrap().sort(&input);

    assert!(output.is_sorted(), "Basic sort should work with prelude imports");
}

/// Test Algorithm variants are available.
///
/// Verifies that all Algorithm variants are exported unqualified.
#[test]
fn test_prelude_algorithm_variants() {
    let _ = Sorter::<i64>::new().algorithm(Quick);
    let _ = Sorter::<i64>::new().algorithm(Heap);
    let _ = Sorter::<i64>::new().algorithm(Smooth);
    let _ = Sorter::<i64>::new().algorithm(Intro);
}

/// Test generation helpers are available.
///
/// Verifies that the sequence generators are exported.
#[test]
fn test_prelude_generators() {
    let random = random_sequence(8, 0_i64, 100);
    let seeded = seeded_sequence(8, 0_i64, 100, 42);

    assert_eq!(random.len(), 8);
    assert_eq!(seeded.len(), 8);
}

/// Test output and report types are available.
///
/// Verifies that SortOutput, SortReport, and the statistics types are
/// exported.
#[test]
fn test_prelude_output_types() {
    let input = sequence_from_values(&[2_i64, 1]);
    let output: SortOutput<i64> = Sorter::new().build().unwrap().sort(&input);

    let stats: SortStats = output.stats;
    assert_eq!(stats.comparisons, 1);

    let report: SortReport<i64> = SortReport::new("quick", &input, &output);
    let block: ReportStats = report.statistics;
    assert_eq!(block.comparisons, 1);
}

/// Test the error type is available.
///
/// Verifies that SortError is exported and matchable.
#[test]
fn test_prelude_error_type() {
    let err = Sorter::<i64>::new().algorithm_name("bogus").build().unwrap_err();
    match err {
        SortError::UnknownAlgorithm { name } => assert_eq!(name, "bogus"),
    }
}

// ============================================================================
// Builder Pattern Tests
// ============================================================================

/// Test a complete workflow with prelude imports only.
///
/// Verifies the full configure-build-sort-report pipeline compiles and runs
/// with nothing but `use stepsort::prelude::*`.
#[test]
fn test_prelude_full_workflow() {
    let input = seeded_sequence(32, 0_i64, 500, 7);
    let mut frames = 0_usize;

    let engine = Sorter::new()
        .algorithm(Intro)
        .step_delay_ms(0)
        .on_progress(|frame: &[Element<i64>]| {
            assert_eq!(frame.len(), 32, "Snapshots should cover the full sequence");
            frames += 1;
        })
        .build()
        .unwrap();

    let output = engine.sort(&input);

    assert!(output.is_sorted(), "Full workflow should produce sorted output");
    assert!(frames > 0, "Observer should have been invoked");
}
