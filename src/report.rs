//! Result rendering: the three collections as named sheets.
//!
//! The sheets mirror the workbook the committee downloads — one sheet per
//! detector, written as CSV files named after the sheets.

use std::fs;
use std::path::Path;

use chrono::Local;
use serde::Serialize;
use thiserror::Error;

use crate::check::{CheckReport, MatchStatus, JUSTIFICATION_MARKER};
use crate::reference::catalog::Field;

pub const CROSSREF_SHEET: &str = "目録照合チェック";
pub const WORDING_SHEET: &str = "不正表記チェック";
pub const VOCABULARY_SHEET: &str = "誤字脱字チェック";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

/// One renderable sheet: a header row plus string cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Render the report as the three output sheets.
pub fn to_sheets(report: &CheckReport) -> Vec<Sheet> {
    vec![
        crossref_sheet(report),
        wording_sheet(report),
        vocabulary_sheet(report),
    ]
}

/// Original fields plus the six status columns, one `_check` column per
/// field and the combined 総合チェック.
fn crossref_sheet(report: &CheckReport) -> Sheet {
    let mut headers = vec!["行番号".to_string()];
    headers.extend(Field::ALL.iter().map(|f| f.submission_header().to_string()));
    headers.push(JUSTIFICATION_MARKER.to_string());
    headers.extend(
        Field::ALL
            .iter()
            .map(|f| format!("{}_check", f.submission_header())),
    );
    headers.push("総合チェック".to_string());

    let rows = report
        .rows
        .iter()
        .map(|annotated| {
            let mut cells = vec![annotated.row.row_number.to_string()];
            cells.extend(annotated.row.fields.iter().cloned());
            cells.push(annotated.row.justification.clone());
            cells.extend(
                annotated
                    .judgement
                    .per_field
                    .iter()
                    .map(|status| status.as_str().to_string()),
            );
            cells.push(annotated.judgement.combined.as_str().to_string());
            cells
        })
        .collect();

    Sheet {
        name: CROSSREF_SHEET.to_string(),
        headers,
        rows,
    }
}

fn wording_sheet(report: &CheckReport) -> Sheet {
    Sheet {
        name: WORDING_SHEET.to_string(),
        headers: ["行番号", "教科", "種目", "違反候補"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows: report
            .violations
            .iter()
            .map(|violation| {
                vec![
                    violation.row_number.to_string(),
                    violation.subject.clone(),
                    violation.item_type.clone(),
                    violation.message.clone(),
                ]
            })
            .collect(),
    }
}

fn vocabulary_sheet(report: &CheckReport) -> Sheet {
    Sheet {
        name: VOCABULARY_SHEET.to_string(),
        headers: ["行番号", "教科", "種目", "候補"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows: report
            .unknown_words
            .iter()
            .map(|word| {
                vec![
                    word.row_number.to_string(),
                    word.subject.clone(),
                    word.item_type.clone(),
                    word.surface.clone(),
                ]
            })
            .collect(),
    }
}

/// Write all sheets under `dir`, one CSV file per sheet (the
/// workbook-download equivalent).
pub fn write_csv_dir(report: &CheckReport, dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(dir)?;

    for sheet in to_sheets(report) {
        let path = dir.join(format!("{}.csv", sheet.name));
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(&sheet.headers)?;
        for row in &sheet.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }

    Ok(())
}

/// Counts for the log line and the CLI summary.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generated_at: String,
    pub row_count: usize,
    /// Rows whose combined status is 要確認.
    pub needs_review: usize,
    pub violation_count: usize,
    pub unknown_word_count: usize,
}

pub fn summarize(report: &CheckReport) -> RunSummary {
    RunSummary {
        generated_at: Local::now().to_rfc3339(),
        row_count: report.rows.len(),
        needs_review: report
            .rows
            .iter()
            .filter(|annotated| annotated.judgement.combined == MatchStatus::NeedsReview)
            .count(),
        violation_count: report.violations.len(),
        unknown_word_count: report.unknown_words.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{AnnotatedRow, CheckRow, RowJudgement, UnknownWord, Violation};

    fn sample_report() -> CheckReport {
        let row = CheckRow {
            row_number: 1,
            fields: ["国語", "教科書", "A社", "001", "新しい国語"].map(str::to_string),
            justification: "他社と比較して選定した。".to_string(),
        };
        let judgement = RowJudgement {
            per_field: [MatchStatus::Ok; 5],
            combined: MatchStatus::NeedsReview,
        };
        CheckReport {
            rows: vec![AnnotatedRow { row, judgement }],
            violations: vec![Violation {
                row_number: 1,
                subject: "国語".to_string(),
                item_type: "教科書".to_string(),
                message: "自校の生徒の実態を踏まえた文言を含めてください".to_string(),
            }],
            unknown_words: vec![UnknownWord {
                row_number: 1,
                subject: "国語".to_string(),
                item_type: "教科書".to_string(),
                surface: "蝸牛".to_string(),
            }],
        }
    }

    #[test]
    fn three_sheets_with_expected_names() {
        let sheets = to_sheets(&sample_report());
        let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![CROSSREF_SHEET, WORDING_SHEET, VOCABULARY_SHEET]
        );
    }

    #[test]
    fn crossref_sheet_carries_fields_and_six_statuses() {
        let sheets = to_sheets(&sample_report());
        let crossref = &sheets[0];

        assert_eq!(crossref.headers.len(), 13);
        assert_eq!(crossref.headers[0], "行番号");
        assert_eq!(crossref.headers[7], "教科_check");
        assert_eq!(crossref.headers[12], "総合チェック");

        let row = &crossref.rows[0];
        assert_eq!(row[0], "1");
        assert_eq!(row[1], "国語");
        assert_eq!(row[7], "OK");
        assert_eq!(row[12], "要確認");
    }

    #[test]
    fn wording_sheet_rows_match_violations() {
        let sheets = to_sheets(&sample_report());
        let wording = &sheets[1];
        assert_eq!(wording.headers, vec!["行番号", "教科", "種目", "違反候補"]);
        assert_eq!(wording.rows.len(), 1);
        assert!(wording.rows[0][3].contains("自校の生徒"));
    }

    #[test]
    fn vocabulary_sheet_rows_match_unknown_words() {
        let sheets = to_sheets(&sample_report());
        let vocabulary = &sheets[2];
        assert_eq!(vocabulary.rows[0][3], "蝸牛");
    }

    #[test]
    fn writes_one_csv_per_sheet() {
        let dir = tempfile::tempdir().unwrap();
        write_csv_dir(&sample_report(), dir.path()).unwrap();

        for name in [CROSSREF_SHEET, WORDING_SHEET, VOCABULARY_SHEET] {
            let path = dir.path().join(format!("{name}.csv"));
            assert!(path.exists(), "missing sheet file {name}");
        }

        let written = fs::read_to_string(dir.path().join(format!("{WORDING_SHEET}.csv"))).unwrap();
        assert!(written.contains("違反候補"));
        assert!(written.contains("自校の生徒"));
    }

    #[test]
    fn summary_counts_needs_review_rows() {
        let summary = summarize(&sample_report());
        assert_eq!(summary.row_count, 1);
        assert_eq!(summary.needs_review, 1);
        assert_eq!(summary.violation_count, 1);
        assert_eq!(summary.unknown_word_count, 1);
        assert!(!summary.generated_at.is_empty());
    }
}
