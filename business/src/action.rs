//! Row-level actions reported by the data browser.

use crate::{Row, RowKey};

/// The row an action applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct RowTarget {
    pub key: RowKey,
    /// Index of the row in the source [`crate::RowSet`].
    pub position: usize,
    pub row: Row,
}

/// A trigger clicked in the action column.
///
/// Modify and Delete are independent; what they lead to (an edit view, a
/// confirmation dialog, a request to the backend) is up to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum RowAction {
    Modify(RowTarget),
    Delete(RowTarget),
}

impl RowAction {
    pub fn target(&self) -> &RowTarget {
        match self {
            Self::Modify(target) | Self::Delete(target) => target,
        }
    }

    pub fn into_target(self) -> RowTarget {
        match self {
            Self::Modify(target) | Self::Delete(target) => target,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Modify(_) => "Modify",
            Self::Delete(_) => "Delete",
        }
    }
}
