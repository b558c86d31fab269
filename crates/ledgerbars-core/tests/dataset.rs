// File: crates/ledgerbars-core/tests/dataset.rs
// Purpose: CSV decoding behavior: header flexibility, bad rows, missing columns.

use ledgerbars_core::{Dataset, Error};

#[test]
fn sample_dataset_has_twelve_unique_months() {
    let data = Dataset::sample().expect("bundled dataset");
    assert_eq!(data.len(), 12);
    let months = data.months();
    assert_eq!(months.first(), Some(&"Jan"));
    assert_eq!(months.last(), Some(&"Dec"));
    let mut unique = months.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), 12);
}

#[test]
fn loads_with_reordered_and_uppercase_headers() {
    let csv = "SPEND,Month,Earn\n10,Jan,20\n30,Feb,40\n";
    let data = Dataset::from_csv_reader(csv.as_bytes()).expect("decode");
    assert_eq!(data.len(), 2);
    let first = &data.records()[0];
    assert_eq!(first.month, "Jan");
    assert_eq!(first.earn, 20.0);
    assert_eq!(first.spend, 10.0);
}

#[test]
fn missing_column_is_an_error() {
    let csv = "month,earn\nJan,20\n";
    let err = Dataset::from_csv_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::MissingColumn("spend")), "got {err}");
}

#[test]
fn rows_with_unparsable_numbers_are_skipped() {
    let csv = "month,earn,spend\nJan,20,10\nFeb,n/a,10\nMar,30,15\n";
    let data = Dataset::from_csv_reader(csv.as_bytes()).expect("decode");
    assert_eq!(data.months(), vec!["Jan", "Mar"]);
}

#[test]
fn max_amount_spans_both_series() {
    let csv = "month,earn,spend\nJan,20,90\nFeb,45,10\n";
    let data = Dataset::from_csv_reader(csv.as_bytes()).expect("decode");
    assert_eq!(data.max_amount(), 90.0);
}

#[test]
fn empty_dataset_reports_zero_extent() {
    let data = Dataset::new(Vec::new());
    assert!(data.is_empty());
    assert_eq!(data.max_amount(), 0.0);
    assert!(data.months().is_empty());
}
