//! Loading rows from JSON documents.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde_json::Value;

use crate::{Error, Result, Row, RowSet};

/// Parses a JSON array into a [`RowSet`].
///
/// Array elements that are not objects are kept as single `value` rows.
pub fn rows_from_json(text: &str) -> Result<RowSet> {
    let document: Value = serde_json::from_str(text)?;
    rows_from_value(document)
}

pub fn rows_from_value(document: Value) -> Result<RowSet> {
    let Value::Array(items) = document else {
        return Err(Error::InvalidRows {
            found: kind_name(&document),
        });
    };

    let rows: RowSet = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                warn!(
                    "Row {index} is a {} rather than an object, showing it as `value`",
                    kind_name(&item)
                );
            }
            Row::from_value(item)
        })
        .collect();

    debug!("Loaded {} rows", rows.len());
    Ok(rows)
}

/// Reads and parses a JSON rows file.
pub fn rows_from_path(path: &Path) -> Result<RowSet> {
    let text = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
    rows_from_json(&text)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
