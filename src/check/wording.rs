//! Wording-guideline violation detection.
//!
//! Three independent rule groups run over each row's justification text:
//! the compiled guideline patterns, the comparative-justification
//! requirement, and the self-reference requirement. Matching is
//! case-sensitive exact substring containment with no word-boundary check
//! and no width folding — a forbidden term that happens to be a substring
//! of a longer unrelated word still triggers. The findings are advisory
//! and reviewed by a human, so a rare false positive is surfaced rather
//! than silently suppressed.

use super::types::{CheckRow, Violation};
use crate::reference::guideline::GuidelinePattern;

/// Phrases satisfying the comparative-justification requirement: the text
/// must state a comparison with other publishers, or that only one
/// publisher issues the book.
const COMPARATIVE_PHRASES: [&str; 2] = ["他社と比較して", "１者のみの発行"];

/// Phrases satisfying the self-reference requirement: the justification
/// must speak to the school's own students.
const SELF_REFERENCE_PHRASES: [&str; 2] = ["本校生徒", "自校の生徒"];

const COMPARATIVE_MESSAGE: &str = "「他社と比較して」または「１者のみの発行」の記載が必要です";

const SELF_REFERENCE_MESSAGE: &str = "自校の生徒の実態を踏まえた文言を含めてください";

/// Scan one row's justification text. Findings come back in rule-group
/// order: pattern violations, then the comparative requirement, then the
/// self-reference requirement.
pub fn scan_justification(patterns: &[GuidelinePattern], row: &CheckRow) -> Vec<Violation> {
    let text = row.justification.as_str();
    let mut violations = Vec::new();

    for pattern in patterns {
        if pattern.quote_required {
            for term in &pattern.incorrect {
                let quoted = format!("「{term}」");
                if text.contains(term.as_str()) && !text.contains(&quoted) {
                    violations.push(violation(
                        row,
                        format!("科目名「{term}」は引用符で囲まれていません"),
                    ));
                }
            }
        } else {
            for term in &pattern.incorrect {
                if text.contains(term.as_str()) {
                    violations.push(violation(
                        row,
                        format!("「{term}」は不正です。正しくは「{}」", pattern.correct),
                    ));
                }
            }
        }
    }

    if !COMPARATIVE_PHRASES.iter().any(|phrase| text.contains(phrase)) {
        violations.push(violation(row, COMPARATIVE_MESSAGE.to_string()));
    }

    if !SELF_REFERENCE_PHRASES.iter().any(|phrase| text.contains(phrase)) {
        violations.push(violation(row, SELF_REFERENCE_MESSAGE.to_string()));
    }

    violations
}

fn violation(row: &CheckRow, message: String) -> Violation {
    Violation {
        row_number: row.row_number,
        subject: row.subject().to_string(),
        item_type: row.item_type().to_string(),
        message,
    }
}
