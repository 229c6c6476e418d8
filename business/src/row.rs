//! Open, schema-less rows and the row set handed to the data browser.
//!
//! A [`Row`] is a JSON object whose keys keep their insertion order. The browser
//! never assumes a schema: cell text is derived from whatever value is present,
//! and missing keys render as empty cells.
//!
//! A [`RowSet`] is owned by the caller. Every mutation bumps its revision so
//! that derived views (sorted/filtered order, column set) can be cached against
//! `(id, revision)` instead of being recomputed every frame.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single record: column name to displayable value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from an arbitrary JSON value.
    ///
    /// Objects are used as-is. Anything else is wrapped into a single `value`
    /// column so that the browser still has something to show.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            other => {
                let mut map = Map::new();
                map.insert("value".to_owned(), other);
                Self(map)
            }
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(column.into(), value.into());
        self
    }

    /// Column names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display text of a cell. Missing columns render as the empty string.
    pub fn cell_text(&self, column: &str) -> String {
        self.get(column).map(cell_text).unwrap_or_default()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Row {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Value> for Row {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Best-effort display text for a value.
///
/// Strings are shown without quotes, null as nothing, and nested values as
/// compact JSON so that search can look inside them.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Render identity of a row.
///
/// `Field` is the text of the configured key column. `Position` is the index
/// in the source [`RowSet`], used when no key is configured or the row lacks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowKey {
    Field(String),
    Position(usize),
}

impl RowKey {
    pub fn for_row(row: &Row, position: usize, key_field: Option<&str>) -> Self {
        key_field
            .and_then(|field| row.get(field))
            .filter(|value| !value.is_null())
            .map(|value| Self::Field(cell_text(value)))
            .unwrap_or(Self::Position(position))
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(key) => f.write_str(key),
            Self::Position(position) => write!(f, "#{}", position + 1),
        }
    }
}

static NEXT_ROW_SET_ID: AtomicU64 = AtomicU64::new(1);

fn next_row_set_id() -> u64 {
    NEXT_ROW_SET_ID.fetch_add(1, Ordering::Relaxed)
}

/// Identity of a [`RowSet`] at a point in time.
///
/// Two equal versions are guaranteed to hold the same rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowSetVersion {
    id: u64,
    revision: u64,
}

/// Caller-owned, ordered sequence of rows.
#[derive(Debug)]
pub struct RowSet {
    id: u64,
    revision: u64,
    rows: Vec<Row>,
}

impl Default for RowSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Clone for RowSet {
    /// A clone is a separate row set and gets its own identity.
    fn clone(&self) -> Self {
        Self::new(self.rows.clone())
    }
}

impl PartialEq for RowSet {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl RowSet {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            id: next_row_set_id(),
            revision: 0,
            rows,
        }
    }

    pub fn version(&self) -> RowSetVersion {
        RowSetVersion {
            id: self.id,
            revision: self.revision,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
        self.touch();
    }

    /// Removes the row at `index`, if it exists.
    pub fn remove(&mut self, index: usize) -> Option<Row> {
        if index >= self.rows.len() {
            return None;
        }
        let row = self.rows.remove(index);
        self.touch();
        Some(row)
    }

    /// Removes the first row whose key matches `key`.
    pub fn remove_by_key(&mut self, key: &RowKey, key_field: Option<&str>) -> Option<Row> {
        let index = self
            .rows
            .iter()
            .enumerate()
            .position(|(position, row)| RowKey::for_row(row, position, key_field) == *key)?;
        self.remove(index)
    }

    pub fn replace(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.touch();
    }

    pub fn retain(&mut self, f: impl FnMut(&Row) -> bool) {
        let before = self.rows.len();
        self.rows.retain(f);
        if self.rows.len() != before {
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

impl From<Vec<Row>> for RowSet {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<Row> for RowSet {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
