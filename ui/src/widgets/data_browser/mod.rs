//! Data browser widget: a searchable, sortable, paginated table over a [`RowSet`].
//!
//! This module contains the table rendering split into smaller components:
//! - `header`: clickable column headers with the sort arrow
//! - `cells`: value cells and the Modify / Delete triggers
//! - `pagination`: Prev / Next controls
//!
//! The widget derives nothing itself. It asks [`BrowserState::view`] for the
//! current page, renders it, and feeds clicks and typing back into the state.
//! Row actions are reported in [`DataBrowserResponse::action`] and, if
//! registered, through the `on_modify` / `on_delete` callbacks.

mod cells;
mod header;
mod pagination;

use std::hash::Hash;

use egui::{
    Color32, Frame, Grid, Id, InnerResponse, Margin, Response, ScrollArea, Stroke, TextEdit, Ui,
};
use log::debug;
use roost_business::{BrowserConfig, BrowserState, Row, RowAction, RowSet, RowTarget};

pub use cells::ActionKind;
pub use header::{ACTIONS_HEADER, header_text};
pub use pagination::PageNav;

use cells::{render_action_buttons, render_value_cell};
use header::{render_actions_header, render_header_cell};
use pagination::render_pagination;

/// Shown instead of the table when no row matches (or there are no rows).
pub const NO_MATCHING_DATA: &str = "No matching data";

/// Label of the search box.
pub const SEARCH_LABEL: &str = "Search";

/// Border color for Typora-like table style (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color for Typora-like table style (light gray)
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

type RowCallback<'a> = Box<dyn FnMut(&Row) + 'a>;

/// Result of showing a [`DataBrowser`] for one frame.
pub struct DataBrowserResponse {
    pub response: Response,
    /// Modify or Delete clicked this frame.
    pub action: Option<RowAction>,
}

/// Searchable, sortable, paginated table.
///
/// ```ignore
/// let response = DataBrowser::new("batches", &rows)
///     .actionable(true)
///     .config(BrowserConfig::default().with_key_field("id"))
///     .on_delete(|row| log::info!("delete {row:?}"))
///     .show(ui, &mut browser_state);
/// ```
pub struct DataBrowser<'a> {
    id: Id,
    rows: &'a RowSet,
    config: BrowserConfig,
    actionable: bool,
    on_modify: Option<RowCallback<'a>>,
    on_delete: Option<RowCallback<'a>>,
}

impl<'a> DataBrowser<'a> {
    pub fn new(id_salt: impl Hash, rows: &'a RowSet) -> Self {
        Self {
            id: Id::new(id_salt),
            rows,
            config: BrowserConfig::default(),
            actionable: false,
            on_modify: None,
            on_delete: None,
        }
    }

    /// Adds the trailing Modify / Delete column.
    pub fn actionable(mut self, actionable: bool) -> Self {
        self.actionable = actionable;
        self
    }

    pub fn config(mut self, config: BrowserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn on_modify(mut self, callback: impl FnMut(&Row) + 'a) -> Self {
        self.on_modify = Some(Box::new(callback));
        self
    }

    pub fn on_delete(mut self, callback: impl FnMut(&Row) + 'a) -> Self {
        self.on_delete = Some(Box::new(callback));
        self
    }

    /// Shows the browser with its view state kept in egui memory.
    ///
    /// The state lives as long as the widget keeps being shown under the same id.
    pub fn show_in_memory(self, ui: &mut Ui) -> DataBrowserResponse {
        let id = ui.make_persistent_id(self.id);
        let mut state =
            ui.data_mut(|data| std::mem::take(data.get_temp_mut_or_default::<BrowserState>(id)));
        let response = self.show(ui, &mut state);
        ui.data_mut(|data| data.insert_temp(id, state));
        response
    }

    /// Shows the browser with caller-owned view state.
    pub fn show(mut self, ui: &mut Ui, state: &mut BrowserState) -> DataBrowserResponse {
        let InnerResponse {
            inner: action,
            response,
        } = ui.push_id(self.id, |ui| ui.vertical(|ui| self.render(ui, state)).inner);

        if let Some(action) = &action {
            debug!(
                "{} requested for row {}",
                action.label(),
                action.target().key
            );
            let callback = match action {
                RowAction::Modify(_) => self.on_modify.as_mut(),
                RowAction::Delete(_) => self.on_delete.as_mut(),
            };
            if let Some(callback) = callback {
                callback(&action.target().row);
            }
        }

        DataBrowserResponse { response, action }
    }

    fn render(&self, ui: &mut Ui, state: &mut BrowserState) -> Option<RowAction> {
        ui.horizontal(|ui| {
            let label = ui.label(SEARCH_LABEL);
            let mut term = state.search_term().to_owned();
            let edit = ui
                .add(TextEdit::singleline(&mut term).hint_text("Type to filter rows"))
                .labelled_by(label.id);
            if edit.changed() {
                state.set_search(term);
            }
        });
        ui.add_space(4.0);

        let view = state.view(self.rows, &self.config);
        if view.is_empty() {
            ui.label(NO_MATCHING_DATA);
            return None;
        }

        let sort = state.sort().copied();
        let num_columns = view.columns.len() + usize::from(self.actionable);
        let mut clicked_column = None;
        let mut action = None;

        Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::ZERO)
            .show(ui, |ui| {
                ScrollArea::horizontal().show(ui, |ui| {
                    Grid::new("data_browser_rows")
                        .num_columns(num_columns)
                        .striped(true)
                        .spacing([16.0, 0.0])
                        .min_col_width(40.0)
                        .show(ui, |ui| {
                            for column in &view.columns {
                                let clicked = header_cell(ui, |ui| {
                                    render_header_cell(ui, column, sort.as_ref())
                                })
                                .inner;
                                if clicked {
                                    clicked_column = Some(column.key);
                                }
                            }
                            if self.actionable {
                                header_cell(ui, render_actions_header);
                            }
                            ui.end_row();

                            for visible in &view.rows {
                                for column in &view.columns {
                                    data_cell(ui, |ui| {
                                        render_value_cell(ui, visible.row.get(&column.key));
                                    });
                                }

                                if self.actionable {
                                    // Keyed so that trigger ids follow the row, not its slot
                                    let clicked = data_cell(ui, |ui| {
                                        ui.push_id(&visible.key, render_action_buttons).inner
                                    })
                                    .inner;
                                    if let Some(kind) = clicked {
                                        let target = RowTarget {
                                            key: visible.key.clone(),
                                            position: visible.position,
                                            row: visible.row.clone(),
                                        };
                                        action = Some(match kind {
                                            ActionKind::Modify => RowAction::Modify(target),
                                            ActionKind::Delete => RowAction::Delete(target),
                                        });
                                    }
                                }
                                ui.end_row();
                            }
                        });
                });
            });

        if view.shows_pagination() {
            ui.add_space(4.0);
            match render_pagination(ui, &view) {
                Some(PageNav::Prev) => {
                    state.prev_page();
                }
                Some(PageNav::Next) => {
                    state.next_page(view.total_pages);
                }
                None => {}
            }
        }

        if let Some(column) = clicked_column {
            state.sort_by(column);
        }

        action
    }
}
