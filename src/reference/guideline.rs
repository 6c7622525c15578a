//! Wording-guideline compilation.
//!
//! The guideline sheet (かな及び漢字等の書き表し方) lists one correct
//! expression per row; the note cell names the forbidden variants. Rows
//! compile to immutable pattern rules once at startup.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Marker prefixed to the forbidden-variant list in the note cell.
const NOTE_MARKER: char = '×';

/// Delimiter between forbidden variants in the note cell.
const NOTE_DELIMITER: char = '、';

static BRACKET_QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new("「(.+?)」").unwrap());

/// One guideline row as loaded from the reference sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidelineRow {
    /// 使用する表現
    pub expression: String,
    /// 備考
    pub note: String,
}

impl GuidelineRow {
    pub fn new(expression: &str, note: &str) -> GuidelineRow {
        GuidelineRow {
            expression: expression.trim().to_string(),
            note: note.trim().to_string(),
        }
    }
}

/// A compiled wording rule.
///
/// Substitution mode (`quote_required` false): any occurrence of an
/// incorrect variant is a violation. Bracket-quote mode (`quote_required`
/// true): an incorrect variant is a violation only when it appears outside
/// 「」 quoting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelinePattern {
    pub correct: String,
    pub incorrect: Vec<String>,
    pub quote_required: bool,
}

/// Compile the ordered guideline table into pattern rules.
///
/// Rows with an empty note carry no enforceable rule and are skipped. The
/// last table row is special: its 「」-quoted substrings name terms that
/// must always appear quoted, so it compiles to a bracket-quote rule
/// instead of a substitution rule. The special case is tied strictly to
/// table position, matching the published guideline sheet — a last row
/// with an empty note is skipped like any other.
pub fn compile_patterns(rows: &[GuidelineRow]) -> Vec<GuidelinePattern> {
    let last = rows.len().saturating_sub(1);
    let mut patterns = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        if row.note.is_empty() {
            continue;
        }

        if idx == last {
            let incorrect = BRACKET_QUOTED
                .captures_iter(&row.expression)
                .map(|cap| cap[1].to_string())
                .collect();
            patterns.push(GuidelinePattern {
                correct: row.expression.clone(),
                incorrect,
                quote_required: true,
            });
        } else {
            let incorrect = row
                .note
                .trim_start_matches(NOTE_MARKER)
                .split(NOTE_DELIMITER)
                .map(str::trim)
                .filter(|variant| !variant.is_empty())
                .map(str::to_string)
                .collect();
            patterns.push(GuidelinePattern {
                correct: row.expression.clone(),
                incorrect,
                quote_required: false,
            });
        }
    }

    patterns
}
