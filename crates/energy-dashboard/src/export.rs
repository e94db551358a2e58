// File: crates/energy-dashboard/src/export.rs
// Summary: CSV export download: validate, count, write a dated report file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use energy_api::ApiClient;

#[derive(Clone, Debug)]
pub struct ExportReport {
    pub path: PathBuf,
    pub records: usize,
}

/// Count the data rows of a consumption report. The backend emits
/// semicolon-delimited CSV with a header line.
pub fn count_records(csv_text: &str) -> anyhow::Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(csv_text.as_bytes());
    let mut records = 0usize;
    for record in reader.records() {
        record.context("malformed row in consumption export")?;
        records += 1;
    }
    Ok(records)
}

/// Download the consumption report and save it under `out_dir` with the
/// date-stamped name the web client uses for its download.
pub async fn export_report(
    client: &ApiClient,
    out_dir: &Path,
    today: NaiveDate,
) -> anyhow::Result<ExportReport> {
    let text = client
        .export_csv(None)
        .await
        .context("export request failed")?;
    let records = count_records(&text)?;

    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("energy_report_{}.csv", today.format("%Y-%m-%d")));
    std::fs::write(&path, &text)?;
    Ok(ExportReport { path, records })
}
