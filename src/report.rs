//! Benchmark report formatting and CSV export.
//!
//! Two renderings of the same row list: a fixed-width console table and a
//! comma-delimited file for downstream analysis. Rows keep their generation
//! order in both.

use std::io;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::timed_run::Measurement;

/// Console table header; the dash rule below it matches its length.
pub const TABLE_HEADER: &str =
    "ALGO           n  CASE      TIME(ms)   COMPARISONS  SWAPS/MOVES";

/// One measurement of one algorithm against one input case.
///
/// Field order doubles as the CSV column order.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub algo: String,
    pub n: usize,
    pub case: String,
    pub time_ms: f64,
    pub comparisons: u64,
    pub swaps_moves: u64,
}

impl ResultRow {
    pub fn new(algo: &str, n: usize, case: &str, m: Measurement) -> Self {
        ResultRow {
            algo: algo.to_string(),
            n,
            case: case.to_string(),
            time_ms: m.time_ms,
            comparisons: m.comparisons,
            swaps_moves: m.swaps_moves,
        }
    }
}

/// Format one row for the console table.
pub fn fmt_row(row: &ResultRow) -> String {
    format!(
        "{:<14} {:>6} {:<8} {:>10.2} {:>12} {:>12}",
        row.algo, row.n, row.case, row.time_ms, row.comparisons, row.swaps_moves
    )
}

/// Print the full report table to stdout.
pub fn print_table(rows: &[ResultRow]) {
    println!("{}", TABLE_HEADER);
    println!("{}", "-".repeat(TABLE_HEADER.len()));
    for row in rows {
        println!("{}", fmt_row(row));
    }
}

/// Write all rows to `path` as CSV, truncating any previous file.
///
/// The header row comes from the `ResultRow` field names:
/// `algo,n,case,time_ms,comparisons,swaps_moves`.
pub fn write_csv(path: &Path, rows: &[ResultRow]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_rows(&mut writer, rows)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn write_rows<W: io::Write>(writer: &mut csv::Writer<W>, rows: &[ResultRow]) -> csv::Result<()> {
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
