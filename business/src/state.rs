//! View state of a data browser and the page view derived from it.
//!
//! The UI keeps a [`BrowserState`] per table (either in its own state or in
//! widget memory), mutates it from user input, and asks it for a [`PageView`]
//! every frame:
//!
//! ```text
//! rows ─► sort ─► search filter ─► clamp page ─► page slice
//! ```
//!
//! The column set and the sorted/filtered order are cached and only recomputed
//! when the row set, the column source, the sort or the search term change.

use log::debug;
use ustr::Ustr;

use crate::{
    BrowserConfig, Column, ColumnSource, Row, RowKey, RowSet, RowSetVersion, SearchQuery,
    SortConfig, clamp_page, derive_columns, page_range, sort_indices, total_pages,
};

#[derive(Debug, Clone, Default)]
struct ViewCache {
    columns_key: Option<(RowSetVersion, ColumnSource)>,
    columns: Vec<Column>,
    order_key: Option<(RowSetVersion, Option<SortConfig>, String)>,
    /// Source indices of matching rows, in display order.
    order: Vec<usize>,
}

impl ViewCache {
    fn refresh(
        &mut self,
        rows: &RowSet,
        source: &ColumnSource,
        sort: Option<&SortConfig>,
        search_term: &str,
    ) {
        let version = rows.version();

        let columns_stale = self
            .columns_key
            .as_ref()
            .is_none_or(|(cached, cached_source)| *cached != version || cached_source != source);
        if columns_stale {
            self.columns = derive_columns(rows.rows(), source);
            self.columns_key = Some((version, source.clone()));
        }

        let order_stale = self
            .order_key
            .as_ref()
            .is_none_or(|(cached, cached_sort, cached_term)| {
                *cached != version || cached_sort.as_ref() != sort || cached_term != search_term
            });
        if order_stale {
            let mut order: Vec<usize> = (0..rows.len()).collect();
            if let Some(sort) = sort {
                sort_indices(rows.rows(), &mut order, sort);
            }
            let query = SearchQuery::new(search_term);
            if !query.is_empty() {
                order.retain(|&index| query.matches(&rows.rows()[index]));
            }
            debug!(
                "Recomputed view order: {} of {} rows match",
                order.len(),
                rows.len()
            );
            self.order = order;
            self.order_key = Some((version, sort.copied(), search_term.to_owned()));
        }
    }
}

/// Search text, current page and sort of one data browser.
#[derive(Debug, Clone)]
pub struct BrowserState {
    search_term: String,
    page: usize,
    sort: Option<SortConfig>,
    cache: ViewCache,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            page: 1,
            sort: None,
            cache: ViewCache::default(),
        }
    }
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current 1-based page, as last clamped by [`Self::view`].
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn sort(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    /// Replaces the search text. A change resets the page to 1.
    ///
    /// Returns `true` if the text changed.
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search_term {
            return false;
        }
        debug!("Search changed to {term:?}");
        self.search_term = term;
        self.page = 1;
        true
    }

    /// Handles a click on `column`'s header and resets the page to 1.
    pub fn sort_by(&mut self, column: Ustr) {
        let sort = SortConfig::after_click(self.sort.as_ref(), column);
        debug!("Sort by {} {:?}", sort.column, sort.direction);
        self.sort = Some(sort);
        self.page = 1;
    }

    /// Sets the sort directly, e.g. when restoring a saved view.
    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        if self.sort != sort {
            self.sort = sort;
            self.page = 1;
        }
    }

    /// Goes back one page. Returns `false` on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        debug!("Page {}", self.page);
        true
    }

    /// Goes forward one page. Returns `false` on the last page.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.page >= total_pages {
            return false;
        }
        self.page += 1;
        debug!("Page {}", self.page);
        true
    }

    /// Derives the page to display and clamps the current page into range.
    pub fn view<'r>(&mut self, rows: &'r RowSet, config: &BrowserConfig) -> PageView<'r> {
        self.cache
            .refresh(rows, &config.columns, self.sort.as_ref(), &self.search_term);

        let filtered_count = self.cache.order.len();
        let total_pages = total_pages(filtered_count, config.page_size);
        self.page = clamp_page(self.page, total_pages);

        let key_field = config.key_field();
        let visible = self.cache.order[page_range(self.page, config.page_size, filtered_count)]
            .iter()
            .map(|&position| {
                let row = &rows.rows()[position];
                VisibleRow {
                    key: RowKey::for_row(row, position, key_field),
                    position,
                    row,
                }
            })
            .collect();

        PageView {
            columns: self.cache.columns.clone(),
            rows: visible,
            total_rows: rows.len(),
            filtered_count,
            page: self.page,
            total_pages,
            page_size: config.page_size.max(1),
        }
    }
}

/// A row on the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow<'r> {
    pub key: RowKey,
    /// Index in the source [`RowSet`].
    pub position: usize,
    pub row: &'r Row,
}

/// Everything needed to render one frame of the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'r> {
    pub columns: Vec<Column>,
    pub rows: Vec<VisibleRow<'r>>,
    pub total_rows: usize,
    pub filtered_count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
}

impl PageView<'_> {
    /// Nothing matched (or there was nothing to begin with).
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Pagination controls are only shown for more than one page.
    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn numbered(count: usize) -> RowSet {
        (0..count)
            .map(|i| Row::from_value(json!({"id": i + 1, "name": format!("row {}", i + 1)})))
            .collect()
    }

    #[test]
    fn test_default_state() {
        let state = BrowserState::new();
        assert_eq!(state.page(), 1);
        assert_eq!(state.search_term(), "");
        assert!(state.sort().is_none());
    }

    #[test]
    fn test_unchanged_search_keeps_page() {
        let rows = numbered(30);
        let config = BrowserConfig::default();
        let mut state = BrowserState::new();
        state.view(&rows, &config);
        assert!(state.next_page(3));
        assert!(!state.set_search(""), "same text is not a change");
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_page_is_clamped_when_rows_shrink() {
        let mut rows = numbered(25);
        let config = BrowserConfig::default();
        let mut state = BrowserState::new();

        let view = state.view(&rows, &config);
        assert!(state.next_page(view.total_pages));
        assert!(state.next_page(3));
        assert_eq!(state.page(), 3);

        rows.retain(|row| row.get("id").and_then(|v| v.as_u64()).unwrap_or(0) <= 12);
        let view = state.view(&rows, &config);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.page, 2);
        assert_eq!(state.page(), 2);
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn test_cache_follows_row_mutations() {
        let mut rows = numbered(3);
        let config = BrowserConfig::default();
        let mut state = BrowserState::new();
        state.set_search("row 3");

        assert_eq!(state.view(&rows, &config).filtered_count, 1);

        rows.push(Row::from_value(json!({"id": 30, "name": "row 30"})));
        assert_eq!(
            state.view(&rows, &config).filtered_count,
            2,
            "a pushed row must invalidate the cached order"
        );
    }

    #[test]
    fn test_cache_follows_column_source() {
        let rows: RowSet = vec![
            Row::from_value(json!({"a": 1})),
            Row::from_value(json!({"b": 2})),
        ]
        .into();
        let mut state = BrowserState::new();

        let first = state.view(&rows, &BrowserConfig::default());
        assert_eq!(first.columns.len(), 1);

        let union = BrowserConfig::default().with_columns(ColumnSource::Union);
        assert_eq!(state.view(&rows, &union).columns.len(), 2);
    }

    #[test]
    fn test_visible_rows_use_key_field() {
        let rows = numbered(3);
        let config = BrowserConfig::default().with_key_field("id");
        let mut state = BrowserState::new();
        state.sort_by(Ustr::from("id"));
        state.sort_by(Ustr::from("id"));

        let view = state.view(&rows, &config);
        let keys: Vec<RowKey> = view.rows.iter().map(|r| r.key.clone()).collect();
        assert_eq!(
            keys,
            vec![
                RowKey::Field("3".to_owned()),
                RowKey::Field("2".to_owned()),
                RowKey::Field("1".to_owned()),
            ]
        );
        let positions: Vec<usize> = view.rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![2, 1, 0]);
    }

    #[test]
    fn test_set_sort_resets_page_only_on_change() {
        let rows = numbered(25);
        let config = BrowserConfig::default();
        let mut state = BrowserState::new();
        state.view(&rows, &config);
        state.next_page(3);

        state.set_sort(None);
        assert_eq!(state.page(), 2);

        state.set_sort(Some(SortConfig::descending("id")));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_page_label() {
        let rows = RowSet::default();
        let mut state = BrowserState::new();
        let view = state.view(&rows, &BrowserConfig::default());
        assert_eq!(view.page_label(), "Page 1 of 1");
        assert!(view.is_empty());
        assert!(!view.shows_pagination());
    }
}
