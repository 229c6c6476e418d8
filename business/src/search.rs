//! Case-insensitive substring search over every cell of a row.

use crate::{Row, cell_text};

/// A lower-cased search needle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    /// An empty query matches everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// True if the text of at least one value of `row` contains the needle.
    ///
    /// All values of the row take part, not only the displayed columns.
    pub fn matches(&self, row: &Row) -> bool {
        self.is_empty()
            || row
                .values()
                .any(|value| cell_text(value).to_lowercase().contains(&self.needle))
    }
}
