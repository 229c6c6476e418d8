//! Windows opened from the data browser's action column.

use egui::{Color32, Context, Grid, RichText, Window};
use roost_business::RowTarget;

pub const CONFIRM_DELETE: &str = "Confirm Delete";
pub const CANCEL: &str = "Cancel";
pub const CLOSE: &str = "Done";

/// What the user did with a dialog this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResponse {
    /// Still open, nothing clicked.
    Open,
    /// Closed without confirming.
    Dismissed,
    Confirmed,
}

/// Shows a read-only view of a row, one field per line.
pub fn show_row_details(ctx: &Context, target: &RowTarget) -> DialogResponse {
    let mut open = true;
    let mut response = DialogResponse::Open;

    Window::new(format!("Row {}", target.key))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            Grid::new("row_details")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (key, value) in target.row.as_map() {
                        ui.strong(key.to_uppercase());
                        ui.label(roost_business::cell_text(value));
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            if ui.button(CLOSE).clicked() {
                response = DialogResponse::Dismissed;
            }
        });

    if !open {
        response = DialogResponse::Dismissed;
    }
    response
}

/// Asks before a row is removed.
pub fn show_delete_confirm(ctx: &Context, dataset: &str, target: &RowTarget) -> DialogResponse {
    let mut open = true;
    let mut response = DialogResponse::Open;

    Window::new(format!("Delete Row - {}", target.key))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.colored_label(Color32::from_rgb(255, 165, 0), "⚠️ Warning");
            ui.add_space(4.0);
            ui.label(format!(
                "Are you sure you want to delete row {} from {dataset}?",
                target.key
            ));

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new(CONFIRM_DELETE).color(Color32::RED))
                    .clicked()
                {
                    response = DialogResponse::Confirmed;
                }

                if ui.button(CANCEL).clicked() {
                    response = DialogResponse::Dismissed;
                }
            });
        });

    if !open && response == DialogResponse::Open {
        response = DialogResponse::Dismissed;
    }
    response
}
