//! Output formatting and persistence for computed reports.
//!
//! Supports the text table, pretty debug logging, JSON and CSV append.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::record::ResultRecord;
use crate::report::{self, ScoreReport};
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Logs the report using Rust's debug pretty-print format.
pub fn print_pretty(report: &ScoreReport) {
    debug!("{:#?}", report);
}

/// Prints the fixed-width report table to stdout.
pub fn print_table(report: &ScoreReport) {
    print!("{}", report::render(report));
}

/// Prints the report as pretty JSON to stdout.
pub fn print_json(report: &ScoreReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Appends a [`ResultRecord`] for `report` as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, report: &ScoreReport) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("opening result log '{path}'"))?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // headers only on a fresh file
        .from_writer(file);

    writer.serialize(ResultRecord::from_report(report))?;
    writer.flush()?;

    info!(path, total = report.total, "Result appended");
    Ok(())
}
