// File: crates/indicator-core/src/table.rs
// Summary: CSV text -> ordered row records keyed by header column.
// Notes:
// - Cells stay strings here; numeric coercion happens in the normalizer.
// - Short lines are padded with empty cells and long lines truncated, so every
//   row carries exactly the header's keys in header order.
// - Blank lines between records are skipped by the reader; a line of empty
//   cells (",,") is a record. A blank first line means there is no header.

use std::sync::Arc;

use tracing::debug;

use crate::error::DataError;
use crate::options::LoadOptions;

/// One parsed CSV record. Keys are shared with the owning table.
#[derive(Clone, Debug, PartialEq)]
pub struct RawRow {
    headers: Arc<[String]>,
    cells: Vec<String>,
}

impl RawRow {
    pub fn new(headers: Arc<[String]>, mut cells: Vec<String>) -> Self {
        cells.resize(headers.len(), String::new());
        Self { headers, cells }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|h| h == key)
            .map(|i| self.cells[i].as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.headers.iter().map(String::as_str)
    }

    /// `(key, cell)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize { self.cells.len() }

    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
}

/// Immutable row sequence built once per data load.
#[derive(Clone, Debug)]
pub struct RawTable {
    headers: Arc<[String]>,
    rows: Vec<RawRow>,
}

impl Default for RawTable {
    fn default() -> Self {
        Self { headers: Arc::from(Vec::new()), rows: Vec::new() }
    }
}

impl RawTable {
    /// Parse CSV text. A missing or blank header line yields an empty table.
    pub fn parse(text: &str, opts: &LoadOptions) -> Result<Self, DataError> {
        let text = text.trim_start_matches('\u{feff}');
        let header_line = text.lines().next().unwrap_or("");
        if header_line.trim().is_empty() {
            debug!("no header line; empty table");
            return Ok(Self::default());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(opts.delimiter)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Arc<[String]> = rdr.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let cells = rec.iter().take(headers.len()).map(str::to_string).collect();
            rows.push(RawRow::new(Arc::clone(&headers), cells));
        }
        debug!(columns = headers.len(), rows = rows.len(), "parsed csv");
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] { &self.headers }

    pub fn rows(&self) -> &[RawRow] { &self.rows }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}
