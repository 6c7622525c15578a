//! Build-once reference data: the trusted catalog index and the compiled
//! wording patterns.
//!
//! Both structures are fully constructed before any submission is
//! processed and never mutated afterward. A failure here is fatal — row
//! results would be meaningless against an incomplete index.

pub mod catalog;
pub mod guideline;

pub use catalog::{CatalogEntry, CatalogIndex, Field, FIELD_COUNT};
pub use guideline::{compile_patterns, GuidelinePattern, GuidelineRow};

use std::path::Path;

use thiserror::Error;

use crate::dataset::{DatasetError, Table};

/// Guideline table column holding the correct expression.
pub const GUIDELINE_EXPRESSION_HEADER: &str = "使用する表現";

/// Guideline table column holding the forbidden-variant note.
pub const GUIDELINE_NOTE_HEADER: &str = "備考";

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("カタログの列 '{column}' が見つかりません。")]
    MissingCatalogColumn { column: &'static str },

    #[error("ガイドラインの列 '{column}' が見つかりません。")]
    MissingGuidelineColumn { column: &'static str },

    #[error("参照データの読み込みに失敗しました ({path}): {source}")]
    Load { path: String, source: DatasetError },
}

/// Immutable reference data shared by every check run.
#[derive(Debug)]
pub struct ReferenceData {
    pub catalog: CatalogIndex,
    pub patterns: Vec<GuidelinePattern>,
}

impl ReferenceData {
    /// Load and index both reference tables from disk.
    pub fn load(catalog_path: &Path, guidelines_path: &Path) -> Result<ReferenceData, ReferenceError> {
        let catalog_table = Table::from_path(catalog_path).map_err(|source| ReferenceError::Load {
            path: catalog_path.display().to_string(),
            source,
        })?;
        let guideline_table =
            Table::from_path(guidelines_path).map_err(|source| ReferenceError::Load {
                path: guidelines_path.display().to_string(),
                source,
            })?;
        ReferenceData::from_tables(&catalog_table, &guideline_table)
    }

    /// Build from already-materialized tables. Tests construct these
    /// directly without touching the filesystem or any shared global.
    pub fn from_tables(
        catalog_table: &Table,
        guideline_table: &Table,
    ) -> Result<ReferenceData, ReferenceError> {
        let catalog = CatalogIndex::from_table(catalog_table)?;
        let patterns = compile_patterns(&guideline_rows(guideline_table)?);

        tracing::info!(
            catalog_entries = catalog.len(),
            patterns = patterns.len(),
            "reference data loaded"
        );

        Ok(ReferenceData { catalog, patterns })
    }
}

fn guideline_rows(table: &Table) -> Result<Vec<GuidelineRow>, ReferenceError> {
    let expression_col = table.column(GUIDELINE_EXPRESSION_HEADER).ok_or(
        ReferenceError::MissingGuidelineColumn {
            column: GUIDELINE_EXPRESSION_HEADER,
        },
    )?;
    let note_col =
        table
            .column(GUIDELINE_NOTE_HEADER)
            .ok_or(ReferenceError::MissingGuidelineColumn {
                column: GUIDELINE_NOTE_HEADER,
            })?;

    Ok((0..table.rows().len())
        .map(|row| GuidelineRow::new(table.cell(row, expression_col), table.cell(row, note_col)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn catalog_table() -> Table {
        Table::new(
            strings(&["教科名", "種目", "発行者略称", "教科書番号", "書籍名"]),
            vec![strings(&["国語", "教科書", "A社", "001", "新しい国語"])],
        )
    }

    fn guideline_table() -> Table {
        Table::new(
            strings(&["使用する表現", "備考"]),
            vec![
                strings(&["子ども", "×子供"]),
                strings(&["「国語」「算数」等の科目名", "科目名は引用符で囲む"]),
            ],
        )
    }

    #[test]
    fn from_tables_builds_index_and_patterns() {
        let reference = ReferenceData::from_tables(&catalog_table(), &guideline_table()).unwrap();
        assert_eq!(reference.catalog.len(), 1);
        assert_eq!(reference.patterns.len(), 2);
        assert!(reference.patterns[1].quote_required);
    }

    #[test]
    fn missing_guideline_column_is_fatal() {
        let bad = Table::new(strings(&["使用する表現"]), vec![]);
        let err = ReferenceData::from_tables(&catalog_table(), &bad).unwrap_err();
        assert!(matches!(
            err,
            ReferenceError::MissingGuidelineColumn { column: "備考" }
        ));
    }

    #[test]
    fn unreadable_path_reports_load_error() {
        let missing = Path::new("/nonexistent/catalog.csv");
        let err = ReferenceData::load(missing, missing).unwrap_err();
        assert!(matches!(err, ReferenceError::Load { .. }));
    }
}
