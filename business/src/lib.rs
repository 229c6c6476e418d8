//! Table browsing logic for the Roost farm front-end.
//!
//! Everything here is UI-free: rows, column derivation, search, sorting,
//! pagination and the per-table view state. The egui crate renders what
//! [`BrowserState::view`] derives and feeds user input back into it.

mod action;
mod columns;
mod config;
mod error;
mod loader;
mod pagination;
mod row;
mod search;
mod sort;
mod state;

pub use action::{RowAction, RowTarget};
pub use columns::{Column, ColumnSource, derive_columns};
pub use config::{AppConfig, BrowserConfig, DEFAULT_KEY_FIELD, ENV_PREFIX, parse_column_source};
pub use error::{Error, Result};
pub use loader::{rows_from_json, rows_from_path, rows_from_value};
pub use pagination::{DEFAULT_PAGE_SIZE, clamp_page, page_range, total_pages};
pub use row::{Row, RowKey, RowSet, RowSetVersion, cell_text};
pub use search::SearchQuery;
pub use sort::{SortConfig, SortDirection, compare_values, sort_indices};
pub use state::{BrowserState, PageView, VisibleRow};
