//! Submission parsing: the uploaded table becomes check rows.
//!
//! Column headers are matched on their whitespace-stripped form (the form
//! wraps header text across lines). A missing required column rejects the
//! whole submission with no partial output — the message names the column
//! and the columns that were found, so the user can fix the export.

use thiserror::Error;

use super::types::CheckRow;
use crate::dataset::{DatasetError, Table};
use crate::reference::catalog::{Field, FIELD_COUNT};

/// Substring identifying the free-text justification column. The form
/// writes a long header around it (e.g. 「選定理由（具体的に記入すること）」),
/// so the column is resolved by marker rather than by exact name.
pub const JUSTIFICATION_MARKER: &str = "選定理由";

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("列 '{column}' が見つかりません。利用可能な列: {available:?}")]
    MissingColumn {
        column: &'static str,
        available: Vec<String>,
    },

    #[error("'{marker}' を含む列が見つかりません。利用可能な列: {available:?}")]
    JustificationColumnNotFound {
        marker: &'static str,
        available: Vec<String>,
    },

    #[error("'{marker}' を含む列が複数あります: {matches:?}")]
    JustificationColumnAmbiguous {
        marker: &'static str,
        matches: Vec<String>,
    },

    #[error("提出データの読み込みに失敗しました: {0}")]
    Dataset(#[from] DatasetError),
}

/// Resolve the required columns and extract check rows.
///
/// The five identifying fields are trimmed; the justification text is kept
/// verbatim. Row numbers are 1-based in submission order.
pub fn parse_submission(table: &Table) -> Result<Vec<CheckRow>, SubmissionError> {
    let mut field_columns = [0usize; FIELD_COUNT];
    for field in Field::ALL {
        field_columns[field.index()] = table.column(field.submission_header()).ok_or_else(|| {
            SubmissionError::MissingColumn {
                column: field.submission_header(),
                available: table.normalized_headers(),
            }
        })?;
    }

    let justification_column = resolve_justification_column(table)?;

    let rows = (0..table.rows().len())
        .map(|row| CheckRow {
            row_number: row + 1,
            fields: std::array::from_fn(|i| table.cell(row, field_columns[i]).trim().to_string()),
            justification: table.cell(row, justification_column).to_string(),
        })
        .collect();

    Ok(rows)
}

/// The justification column must match the marker exactly once; zero or
/// multiple matches reject the submission with the headers found.
fn resolve_justification_column(table: &Table) -> Result<usize, SubmissionError> {
    let matches = table.columns_containing(JUSTIFICATION_MARKER);
    match matches.as_slice() {
        [column] => Ok(*column),
        [] => Err(SubmissionError::JustificationColumnNotFound {
            marker: JUSTIFICATION_MARKER,
            available: table.normalized_headers(),
        }),
        _ => Err(SubmissionError::JustificationColumnAmbiguous {
            marker: JUSTIFICATION_MARKER,
            matches: matches
                .iter()
                .map(|&col| Table::normalized_header(&table.headers()[col]))
                .collect(),
        }),
    }
}
