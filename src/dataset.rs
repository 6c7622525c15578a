//! Tabular dataset loading.
//!
//! Reference data and submissions arrive as CSV exports of the upstream
//! spreadsheet forms: one header row plus string cells. `Table` keeps every
//! cell as an owned string; trimming and typing happen at the consumer,
//! because the forms pad cells unevenly and a few fields must stay verbatim.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset has no header row")]
    EmptyDataset,
}

/// An in-memory table: one header row plus string cells.
///
/// Data rows are padded or truncated to the header width at load time, so
/// consumers can index cells by resolved column position without bounds
/// anxiety.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from pre-materialized cells (tests and in-process
    /// callers). Rows are normalized to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Table {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Table { headers, rows }
    }

    pub fn from_path(path: &Path) -> Result<Table, DatasetError> {
        let file = std::fs::File::open(path)?;
        Table::from_reader(file)
    }

    /// Parse a CSV byte stream. `flexible` mode tolerates the ragged rows
    /// the spreadsheet exports produce; short rows are padded to the header
    /// width, long rows truncated.
    pub fn from_reader<R: Read>(reader: R) -> Result<Table, DatasetError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(DatasetError::EmptyDataset);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Table { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    /// Header text with all whitespace removed. The upstream forms wrap
    /// header text across lines and pad it with full-width spaces, so
    /// column matching works on the stripped form.
    pub fn normalized_header(raw: &str) -> String {
        raw.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// All headers in normalized form (for error reporting).
    pub fn normalized_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .map(|h| Table::normalized_header(h))
            .collect()
    }

    /// Position of the column whose normalized header equals `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| Table::normalized_header(h) == name)
    }

    /// Positions of every column whose normalized header contains `marker`.
    pub fn columns_containing(&self, marker: &str) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, h)| Table::normalized_header(h).contains(marker))
            .map(|(idx, _)| idx)
            .collect()
    }
}
