// File: crates/energy-charts/tests/series_invariants.rs
// Purpose: Category series construction invariants.

use energy_charts::{CategorySeries, ChartError};

#[test]
fn mismatched_lengths_are_rejected() {
    let err = CategorySeries::new(vec!["a".into(), "b".into()], vec![1.0]).unwrap_err();
    match err {
        ChartError::LengthMismatch { labels, values } => {
            assert_eq!(labels, 2);
            assert_eq!(values, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn matching_lengths_are_accepted() {
    let series = CategorySeries::new(vec!["a".into()], vec![1.5]).unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series.labels(), ["a"]);
    assert_eq!(series.values(), [1.5]);
}

#[test]
fn from_pairs_keeps_insertion_order() {
    let series = CategorySeries::from_pairs([("x", 1.0), ("y", 2.0), ("z", 0.5)]);
    assert_eq!(series.labels(), ["x", "y", "z"]);
    assert_eq!(series.values(), [1.0, 2.0, 0.5]);
    assert_eq!(series.total(), 3.5);
}
