//! The three-part validation engine.
//!
//! A parsed submission runs through three independent detectors — catalog
//! cross-reference, wording-guideline scan, unknown-word detection — each a
//! pure function of one row plus the immutable reference data. Rows have no
//! cross-row dependencies; findings are advisory output, never errors, and
//! one row's findings cannot interrupt another's evaluation.

pub mod crossref;
pub mod submission;
pub mod types;
pub mod vocabulary;
pub mod wording;

pub use submission::{parse_submission, SubmissionError, JUSTIFICATION_MARKER};
pub use types::{
    AnnotatedRow, CheckReport, CheckRow, MatchStatus, RowJudgement, UnknownWord, Violation,
};

use crate::reference::ReferenceData;
use vocabulary::{LexiconTokenizer, Morphology};

/// Run all three detectors over a parsed submission with the built-in
/// tokenizer.
pub fn run_checks(reference: &ReferenceData, rows: &[CheckRow]) -> CheckReport {
    let tokenizer = LexiconTokenizer::new();
    run_checks_with(reference, &tokenizer, rows)
}

/// Variant with a caller-supplied tokenizer (tests inject fakes).
///
/// Findings accumulate in row order, then rule-group order within a row —
/// a presentation convention the report sheets rely on.
pub fn run_checks_with(
    reference: &ReferenceData,
    morphology: &dyn Morphology,
    rows: &[CheckRow],
) -> CheckReport {
    let mut annotated = Vec::with_capacity(rows.len());
    let mut violations = Vec::new();
    let mut unknown_words = Vec::new();

    for row in rows {
        let judgement = crossref::verify_row(&reference.catalog, row);
        violations.extend(wording::scan_justification(&reference.patterns, row));
        unknown_words.extend(vocabulary::detect_unknown_words(morphology, row));
        annotated.push(AnnotatedRow {
            row: row.clone(),
            judgement,
        });
    }

    tracing::debug!(
        rows = annotated.len(),
        violations = violations.len(),
        unknown_words = unknown_words.len(),
        "check run complete"
    );

    CheckReport {
        rows: annotated,
        violations,
        unknown_words,
    }
}
