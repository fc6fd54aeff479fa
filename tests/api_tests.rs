//! Tests for the high-level builder API.
//!
//! These tests verify builder defaults, algorithm selection by value and
//! by registry name, deferred error reporting, and the factory name
//! round-trip.
//!
//! ## Test Organization
//!
//! 1. **Defaults** - Unconfigured builders produce a working engine
//! 2. **Selection** - Algorithms resolve by value and by name
//! 3. **Errors** - Unknown names fail at build time, before any work

use std::str::FromStr;

use stepsort::prelude::*;

// ============================================================================
// Defaults
// ============================================================================

/// Test that an unconfigured builder produces a working engine.
///
/// Verifies the default algorithm is QuickSort and the default step delay
/// sorts without pausing.
#[test]
fn test_builder_defaults() {
    let input = sequence_from_values(&[5_i64, 3, 4, 1, 2]);
    let engine = Sorter::new().build().unwrap();

    assert_eq!(engine.algorithm(), Quick, "Default algorithm should be quick");

    let output = engine.sort(&input);
    assert_eq!(output.values(), vec![1, 2, 3, 4, 5]);
}

/// Test that `Default` matches `new`.
#[test]
fn test_builder_default_trait() {
    let engine = Sorter::<i64>::default().build().unwrap();
    assert_eq!(engine.algorithm(), Quick);
}

// ============================================================================
// Selection
// ============================================================================

/// Test algorithm selection by value.
///
/// Verifies each variant reaches the engine unchanged.
#[test]
fn test_algorithm_by_value() {
    for algorithm in Algorithm::ALL {
        let engine = Sorter::<i64>::new().algorithm(algorithm).build().unwrap();
        assert_eq!(engine.algorithm(), algorithm);
    }
}

/// Test algorithm selection by registry name.
///
/// Verifies every factory name resolves to its variant.
#[test]
fn test_algorithm_by_name() {
    for (name, expected) in [
        ("quick", Quick),
        ("heap", Heap),
        ("smooth", Smooth),
        ("intro", Intro),
    ] {
        let engine = Sorter::<i64>::new().algorithm_name(name).build().unwrap();
        assert_eq!(engine.algorithm(), expected, "Name {name:?} should resolve");
    }
}

/// Test the name round-trip through the factory.
///
/// Verifies `name()` and `from_name` are inverses and `FromStr` agrees.
#[test]
fn test_name_round_trip() {
    for algorithm in Algorithm::ALL {
        assert_eq!(Algorithm::from_name(algorithm.name()), Ok(algorithm));
        assert_eq!(Algorithm::from_str(algorithm.name()), Ok(algorithm));
        assert_eq!(algorithm.to_string(), algorithm.name());
    }
}

/// Test that later selections override earlier ones.
#[test]
fn test_last_selection_wins() {
    let engine = Sorter::<i64>::new()
        .algorithm(Heap)
        .algorithm_name("smooth")
        .build()
        .unwrap();
    assert_eq!(engine.algorithm(), Smooth);
}

// ============================================================================
// Errors
// ============================================================================

/// Test that an unknown algorithm name fails at build time.
///
/// Verifies the error carries the offending name verbatim and matches the
/// documented message shape.
#[test]
fn test_unknown_name_fails_at_build() {
    let err = Sorter::<i64>::new().algorithm_name("bubble").build().unwrap_err();

    assert_eq!(
        err,
        SortError::UnknownAlgorithm {
            name: "bubble".to_string()
        }
    );
    assert_eq!(err.to_string(), "Unknown algorithm: bubble");
}

/// Test that name lookup is case-sensitive and exact.
///
/// Verifies near-miss names are rejected rather than fuzzily matched.
#[test]
fn test_name_lookup_is_exact() {
    for name in ["Quick", "HEAP", " smooth", "intro ", ""] {
        assert!(
            Sorter::<i64>::new().algorithm_name(name).build().is_err(),
            "Name {name:?} should be rejected"
        );
    }
}

/// Test that a failed lookup fires before any observer call.
///
/// Verifies no snapshot is emitted when `build()` rejects the name.
#[test]
fn test_unknown_name_precedes_observation() {
    let mut frames = 0_usize;
    let err = Sorter::<i64>::new()
        .algorithm_name("stooge")
        .on_progress(|_frame: &[Element<i64>]| frames += 1)
        .build()
        .unwrap_err();

    assert_eq!(err.to_string(), "Unknown algorithm: stooge");
    assert_eq!(frames, 0, "No snapshot should ever be emitted");
}
