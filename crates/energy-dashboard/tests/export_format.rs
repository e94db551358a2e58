// File: crates/energy-dashboard/tests/export_format.rs
// Purpose: Consumption export parsing and record counting.

use energy_dashboard::{export, sample};

#[test]
fn sample_export_counts_data_rows() {
    let csv = sample::export_csv();
    let records = export::count_records(&csv).expect("well-formed export");
    assert_eq!(records, 5);
}

#[test]
fn header_only_export_counts_zero() {
    let records = export::count_records("Date;Appliance;kWh;Cost;Tariff;Hours\n").unwrap();
    assert_eq!(records, 0);
}

#[test]
fn empty_body_counts_zero() {
    assert_eq!(export::count_records("").unwrap(), 0);
}
