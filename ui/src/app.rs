use log::warn;

use crate::state::{DatasetAction, PendingDialog, State};
use crate::widgets::{self, DataBrowser, DialogResponse};

pub struct RoostApp {
    state: State,
}

impl RoostApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &self.state.dialog else {
            return;
        };

        let response = match dialog {
            PendingDialog::Details { target, .. } => widgets::show_row_details(ctx, target),
            PendingDialog::ConfirmDelete { dataset, target } => {
                widgets::show_delete_confirm(ctx, self.state.dataset_title(*dataset), target)
            }
        };

        match response {
            DialogResponse::Open => {}
            DialogResponse::Dismissed => self.state.dismiss_dialog(),
            DialogResponse::Confirmed => {
                self.state.confirm_delete();
            }
        }
    }
}

impl eframe::App for RoostApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                for (index, dataset) in self.state.datasets.iter().enumerate() {
                    ui.selectable_value(&mut self.state.active, index, dataset.title.as_str());
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.state.status.as_deref().unwrap_or("Ready"));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let active = self.state.active;
            let Some(dataset) = self.state.datasets.get_mut(active) else {
                return;
            };

            ui.heading(format!("{} ({} rows)", dataset.title, dataset.rows.len()));
            ui.separator();

            let response = DataBrowser::new(("dataset", active), &dataset.rows)
                .actionable(dataset.actionable)
                .config(dataset.config.clone())
                .show(ui, &mut dataset.view);

            if let Some(action) = response.action {
                let sent = self.state.action_sender.send(DatasetAction {
                    dataset: active,
                    action,
                });
                if sent.is_err() {
                    warn!("Row action channel is closed");
                }
                ctx.request_repaint();
            }
        });

        self.show_dialog(ctx);

        // Row actions are applied after the frame so the tables are never
        // mutated while being drawn
        self.state.poll_row_actions();
    }
}
