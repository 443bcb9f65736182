//! Benchmark records and their CSV form.
//!
//! Files carry the header `N,Algorithm,Cost,Time`; `Time` is wall-clock
//! seconds.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::algorithm::Algorithm;
use crate::error::Result;

/// Outcome of one solver on one instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionRecord {
    /// Number of cities.
    #[serde(rename = "N")]
    pub n: usize,

    #[serde(rename = "Algorithm")]
    pub algorithm: Algorithm,

    /// Tour length.
    #[serde(rename = "Cost")]
    pub cost: f64,

    /// Elapsed seconds.
    #[serde(rename = "Time")]
    pub time: f64,
}

impl SolutionRecord {
    pub fn new(n: usize, algorithm: Algorithm, cost: f64, time: f64) -> Self {
        Self {
            n,
            algorithm,
            cost,
            time,
        }
    }
}

/// Column names, in file order.
pub const HEADER: [&str; 4] = ["N", "Algorithm", "Cost", "Time"];

/// Writes records as CSV. The header row is written even when `records` is
/// empty.
pub fn write_csv<W: Write>(writer: W, records: &[SolutionRecord]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(HEADER)?;
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes records to `path`, creating parent directories as needed.
pub fn write_csv_file(path: impl AsRef<Path>, records: &[SolutionRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    write_csv(File::create(path)?, records)
}

/// Reads records from CSV.
///
/// Rows that do not deserialize (unknown algorithm, non-numeric cost) are
/// skipped with a warning; I/O failures are returned.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<SolutionRecord>> {
    let mut csv = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (row, entry) in csv.deserialize::<SolutionRecord>().enumerate() {
        match entry {
            Ok(record) => records.push(record),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => log::warn!("skipping row {}: {e}", row + 1),
        }
    }
    Ok(records)
}

pub fn read_csv_file(path: impl AsRef<Path>) -> Result<Vec<SolutionRecord>> {
    read_csv(File::open(path.as_ref())?)
}
