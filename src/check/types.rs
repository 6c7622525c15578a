use serde::{Deserialize, Serialize};

use crate::reference::catalog::{Field, FIELD_COUNT};

/// Outcome of one catalog comparison, rendered as OK / 要確認.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "要確認")]
    NeedsReview,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Ok => "OK",
            MatchStatus::NeedsReview => "要確認",
        }
    }

    pub fn is_ok(self) -> bool {
        matches!(self, MatchStatus::Ok)
    }
}

/// One submitted justification row.
///
/// The five identifying fields are trimmed at parse time; the justification
/// text is kept verbatim. `row_number` is the 1-based position within the
/// submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRow {
    pub row_number: usize,
    pub fields: [String; FIELD_COUNT],
    pub justification: String,
}

impl CheckRow {
    pub fn field(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    pub fn subject(&self) -> &str {
        self.field(Field::Subject)
    }

    pub fn item_type(&self) -> &str {
        self.field(Field::ItemType)
    }
}

/// The six statuses the cross-reference matcher attaches to a row. Source
/// values are never altered; this rides alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowJudgement {
    pub per_field: [MatchStatus; FIELD_COUNT],
    pub combined: MatchStatus,
}

impl RowJudgement {
    pub fn field_status(&self, field: Field) -> MatchStatus {
        self.per_field[field.index()]
    }
}

/// A wording-guideline finding. Advisory — reviewed by a human, never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub row_number: usize,
    pub subject: String,
    pub item_type: String,
    pub message: String,
}

/// A surface form the morphological lexicon could not resolve; a candidate
/// typo or unlisted term, not a claimed error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownWord {
    pub row_number: usize,
    pub subject: String,
    pub item_type: String,
    pub surface: String,
}

/// One row with its cross-reference judgement attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedRow {
    pub row: CheckRow,
    pub judgement: RowJudgement,
}

/// The three result collections produced by one run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub rows: Vec<AnnotatedRow>,
    pub violations: Vec<Violation>,
    pub unknown_words: Vec<UnknownWord>,
}
