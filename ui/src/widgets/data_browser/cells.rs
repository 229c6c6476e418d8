//! Cell rendering for the data browser.

use egui::{RichText, Ui};
use roost_business::cell_text;
use serde_json::Value;

/// Which trigger of the action column was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Modify,
    Delete,
}

/// Renders one data cell.
///
/// Nested values are shown as monospace JSON and missing values as an empty
/// cell.
#[inline]
pub fn render_value_cell(ui: &mut Ui, value: Option<&Value>) {
    match value {
        None | Some(Value::Null) => {
            ui.label("");
        }
        Some(value @ (Value::Array(_) | Value::Object(_))) => {
            ui.label(RichText::new(cell_text(value)).monospace().small());
        }
        Some(value) => {
            ui.label(cell_text(value));
        }
    }
}

/// Renders the Modify / Delete triggers of a row.
///
/// Returns the trigger that was clicked, if any.
#[inline]
pub fn render_action_buttons(ui: &mut Ui) -> Option<ActionKind> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        if ui.button("Modify").clicked() {
            clicked = Some(ActionKind::Modify);
        }
        if ui.button("Delete").clicked() {
            clicked = Some(ActionKind::Delete);
        }
    });
    clicked
}
