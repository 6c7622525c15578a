//! Catalog cross-reference matching.

use super::types::{CheckRow, MatchStatus, RowJudgement};
use crate::reference::catalog::{CatalogIndex, Field, FIELD_COUNT};

/// A field containing an embedded line break was hand-edited by the
/// reviewing committee and is exempt from catalog verification.
fn is_manual_override(value: &str) -> bool {
    value.contains('\n')
}

/// Judge one row against the catalog index.
///
/// Per-field status: OK when the value is a manual override or appears in
/// that field's membership set. Combined status: OK when any field is a
/// manual override, or one single catalog entry matches all five values.
pub fn verify_row(index: &CatalogIndex, row: &CheckRow) -> RowJudgement {
    let per_field: [MatchStatus; FIELD_COUNT] = std::array::from_fn(|i| {
        let value = &row.fields[i];
        if is_manual_override(value) || index.membership(Field::ALL[i], value) {
            MatchStatus::Ok
        } else {
            MatchStatus::NeedsReview
        }
    });

    let combined = if row.fields.iter().any(|value| is_manual_override(value))
        || index.composite_match(&row.fields)
    {
        MatchStatus::Ok
    } else {
        MatchStatus::NeedsReview
    };

    RowJudgement {
        per_field,
        combined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::catalog::CatalogEntry;

    fn index() -> CatalogIndex {
        CatalogIndex::build(vec![
            CatalogEntry::new("国語", "教科書", "A社", "001", "新しい国語"),
            CatalogEntry::new("数学", "教科書", "B社", "102", "数学の世界"),
        ])
    }

    fn row(fields: [&str; 5]) -> CheckRow {
        CheckRow {
            row_number: 1,
            fields: fields.map(str::to_string),
            justification: String::new(),
        }
    }

    #[test]
    fn exact_catalog_entry_passes_everything() {
        let judgement = verify_row(&index(), &row(["国語", "教科書", "A社", "001", "新しい国語"]));
        assert!(judgement.per_field.iter().all(|s| s.is_ok()));
        assert_eq!(judgement.combined, MatchStatus::Ok);
    }

    #[test]
    fn unknown_field_needs_review() {
        let judgement = verify_row(&index(), &row(["英語", "教科書", "A社", "001", "新しい国語"]));
        assert_eq!(judgement.field_status(Field::Subject), MatchStatus::NeedsReview);
        assert_eq!(judgement.field_status(Field::ItemType), MatchStatus::Ok);
        assert_eq!(judgement.combined, MatchStatus::NeedsReview);
    }

    #[test]
    fn mixed_entries_pass_fields_but_fail_combined() {
        // Every value exists somewhere in the catalog, but no single entry
        // carries this combination.
        let judgement = verify_row(&index(), &row(["国語", "教科書", "B社", "001", "新しい国語"]));
        assert!(judgement.per_field.iter().all(|s| s.is_ok()));
        assert_eq!(judgement.combined, MatchStatus::NeedsReview);
    }

    #[test]
    fn line_break_exempts_its_field() {
        let judgement = verify_row(
            &index(),
            &row(["目録外\nの教科", "教科書", "A社", "001", "新しい国語"]),
        );
        assert_eq!(judgement.field_status(Field::Subject), MatchStatus::Ok);
    }

    #[test]
    fn line_break_anywhere_exempts_combined_status() {
        // All five fields are absent from the catalog; the embedded line
        // break still marks the row as hand-curated.
        let judgement = verify_row(
            &index(),
            &row(["英語", "副読本", "X社", "999", "手引き\n改訂版"]),
        );
        assert_eq!(judgement.combined, MatchStatus::Ok);
        assert_eq!(judgement.field_status(Field::Subject), MatchStatus::NeedsReview);
    }
}
