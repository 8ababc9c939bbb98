//! CSV sink for search results.

use std::io::Write;

use crate::error::Result;
use crate::finder::Triplet;

/// Column names written as the first row.
pub const HEADER: [&str; 6] = [
    "Numbers 1",
    "Letters 1",
    "Numbers 2",
    "Letters 2",
    "Numbers 3",
    "Letters 3",
];

/// Writes one row per triplet after a fixed header row.
pub struct CsvEmitter<W: Write> {
    writer: csv::Writer<W>,
    rows: u64,
}

impl<W: Write> CsvEmitter<W> {
    /// Wrap `inner` and write the header row.
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn emit(&mut self, triplet: &Triplet) -> Result<()> {
        self.writer.write_record(triplet.record())?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written so far, excluding the header.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush buffered rows and return the row count.
    pub fn finish(mut self) -> Result<u64> {
        self.writer.flush()?;
        Ok(self.rows)
    }
}
