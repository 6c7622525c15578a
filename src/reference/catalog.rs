//! Trusted catalog index.
//!
//! The catalog (教科書目録) enumerates every valid combination of the five
//! identifying fields. It is indexed once at startup: one membership set
//! per field, plus a set keyed by the full five-field tuple so the combined
//! check is a single hash lookup per row instead of a catalog scan.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ReferenceError;
use crate::dataset::Table;

/// Number of identifying fields shared by catalog entries and check rows.
pub const FIELD_COUNT: usize = 5;

/// The five identifying fields, in the order the forms list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Subject,
    ItemType,
    Publisher,
    BookNumber,
    Title,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Subject,
        Field::ItemType,
        Field::Publisher,
        Field::BookNumber,
        Field::Title,
    ];

    /// Column header in the trusted catalog.
    pub fn catalog_header(self) -> &'static str {
        match self {
            Field::Subject => "教科名",
            Field::ItemType => "種目",
            Field::Publisher => "発行者略称",
            Field::BookNumber => "教科書番号",
            Field::Title => "書籍名",
        }
    }

    /// Column header in the submitted justification form. The form names
    /// the same fields slightly differently from the catalog.
    pub fn submission_header(self) -> &'static str {
        match self {
            Field::Subject => "教科",
            Field::ItemType => "種目",
            Field::Publisher => "発行者の略称",
            Field::BookNumber => "教科書の番号",
            Field::Title => "書名",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One catalog entry: the five identifying fields, whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub fields: [String; FIELD_COUNT],
}

impl CatalogEntry {
    pub fn new(
        subject: &str,
        item_type: &str,
        publisher: &str,
        book_number: &str,
        title: &str,
    ) -> CatalogEntry {
        CatalogEntry {
            fields: [
                subject.trim().to_string(),
                item_type.trim().to_string(),
                publisher.trim().to_string(),
                book_number.trim().to_string(),
                title.trim().to_string(),
            ],
        }
    }

    pub fn field(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }
}

/// Build-once lookup structures over the catalog.
///
/// `membership` answers "does any entry carry this value in this field";
/// `composite_match` answers "does one single entry match all five values
/// simultaneously". A row can pass all five memberships yet fail the
/// composite match when no single entry lines up on every field.
#[derive(Debug)]
pub struct CatalogIndex {
    by_field: [HashSet<String>; FIELD_COUNT],
    composite: HashSet<[String; FIELD_COUNT]>,
    entry_count: usize,
}

impl CatalogIndex {
    pub fn build(entries: Vec<CatalogEntry>) -> CatalogIndex {
        let mut by_field: [HashSet<String>; FIELD_COUNT] = Default::default();
        let mut composite = HashSet::with_capacity(entries.len());
        let entry_count = entries.len();

        for entry in entries {
            for field in Field::ALL {
                by_field[field.index()].insert(entry.field(field).to_string());
            }
            composite.insert(entry.fields);
        }

        CatalogIndex {
            by_field,
            composite,
            entry_count,
        }
    }

    /// Resolve the five catalog columns and index every row.
    pub fn from_table(table: &Table) -> Result<CatalogIndex, ReferenceError> {
        let mut columns = [0usize; FIELD_COUNT];
        for field in Field::ALL {
            columns[field.index()] = table.column(field.catalog_header()).ok_or(
                ReferenceError::MissingCatalogColumn {
                    column: field.catalog_header(),
                },
            )?;
        }

        let entries = (0..table.rows().len())
            .map(|row| CatalogEntry {
                fields: std::array::from_fn(|i| table.cell(row, columns[i]).trim().to_string()),
            })
            .collect();

        Ok(CatalogIndex::build(entries))
    }

    /// Does any catalog entry carry `value` in `field`?
    pub fn membership(&self, field: Field, value: &str) -> bool {
        self.by_field[field.index()].contains(value)
    }

    /// Does one single catalog entry match all five values?
    pub fn composite_match(&self, values: &[String; FIELD_COUNT]) -> bool {
        self.composite.contains(values)
    }

    pub fn len(&self) -> usize {
        self.entry_count
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }
}
