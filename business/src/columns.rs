//! Column derivation for the data browser.

use ustr::Ustr;

use crate::Row;

/// A displayed column: the row key it reads and the header title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    pub key: Ustr,
    pub title: String,
}

impl Column {
    /// Column whose header is the key upper-cased.
    pub fn new(key: &str) -> Self {
        Self {
            key: Ustr::from(key),
            title: key.to_uppercase(),
        }
    }

    pub fn titled(key: &str, title: impl Into<String>) -> Self {
        Self {
            key: Ustr::from(key),
            title: title.into(),
        }
    }
}

/// Where the column set comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnSource {
    /// Keys of the first row, in insertion order.
    #[default]
    FirstRow,
    /// Keys of every row, in first-seen order.
    Union,
    /// Caller-supplied schema.
    Explicit(Vec<Column>),
}

/// Derives the ordered column set for `rows`.
pub fn derive_columns(rows: &[Row], source: &ColumnSource) -> Vec<Column> {
    match source {
        ColumnSource::FirstRow => rows
            .first()
            .map(|row| row.keys().map(Column::new).collect())
            .unwrap_or_default(),
        ColumnSource::Union => {
            let mut keys: Vec<Ustr> = Vec::new();
            for key in rows.iter().flat_map(Row::keys) {
                let key = Ustr::from(key);
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
            keys.iter().map(|key| Column::new(key.as_str())).collect()
        }
        ColumnSource::Explicit(columns) => columns.clone(),
    }
}
