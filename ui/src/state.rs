use anyhow::Context as _;
use flume::{Receiver, Sender};
use log::{info, warn};
use roost_business::{
    AppConfig, BrowserConfig, BrowserState, Row, RowAction, RowSet, RowTarget, rows_from_path,
};

use crate::datasets;

/// One tab of the app: a row set and the view state of its browser.
pub struct Dataset {
    pub title: String,
    pub rows: RowSet,
    pub view: BrowserState,
    pub actionable: bool,
    pub config: BrowserConfig,
}

impl Dataset {
    pub fn new(title: impl Into<String>, rows: RowSet, config: BrowserConfig) -> Self {
        Self {
            title: title.into(),
            rows,
            view: BrowserState::new(),
            actionable: false,
            config,
        }
    }

    pub fn actionable(mut self, actionable: bool) -> Self {
        self.actionable = actionable;
        self
    }
}

/// A row action reported by the browser of `dataset`.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetAction {
    pub dataset: usize,
    pub action: RowAction,
}

/// The window currently shown over the tables.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingDialog {
    Details { dataset: usize, target: RowTarget },
    ConfirmDelete { dataset: usize, target: RowTarget },
}

/// The main application state.
///
/// Note: We manually implement Default because the action channel
/// doesn't implement Default.
pub struct State {
    pub config: AppConfig,
    pub datasets: Vec<Dataset>,
    /// Index of the selected tab.
    pub active: usize,
    pub dialog: Option<PendingDialog>,
    /// Last thing that happened, shown at the bottom of the window.
    pub status: Option<String>,
    /// Sender handed to the browsers' row action callbacks.
    pub action_sender: Sender<DatasetAction>,
    /// Drained once per frame by [`State::poll_row_actions`].
    pub action_receiver: Receiver<DatasetAction>,
}

impl Default for State {
    fn default() -> Self {
        Self::with_datasets(AppConfig::default(), Vec::new())
    }
}

impl State {
    /// Builds the state for `config`, loading the configured rows file.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let mut extra = Vec::new();
        if let Some(path) = &config.data_file {
            let rows = rows_from_path(path)
                .with_context(|| format!("Failed to load rows from {}", path.display()))?;
            info!("Loaded {} rows from {}", rows.len(), path.display());
            extra.push(Dataset::new("File", rows, config.browser.clone()).actionable(true));
        }
        Ok(Self::with_datasets(config, extra))
    }

    /// State with the built-in datasets only and default configuration.
    pub fn test() -> Self {
        Self::default()
    }

    fn with_datasets(config: AppConfig, extra: Vec<Dataset>) -> Self {
        let browser = &config.browser;
        let mut all = vec![
            Dataset::new("Batches", datasets::batches(), browser.clone()).actionable(true),
            Dataset::new("Inventory", datasets::inventory(), browser.clone()).actionable(true),
            Dataset::new("Sales", datasets::sales(), browser.clone()).actionable(true),
            Dataset::new("Environment", datasets::environment(), browser.clone()),
        ];
        all.extend(extra);

        let (action_sender, action_receiver) = flume::unbounded();

        Self {
            config,
            datasets: all,
            active: 0,
            dialog: None,
            status: None,
            action_sender,
            action_receiver,
        }
    }

    pub fn active_dataset(&self) -> Option<&Dataset> {
        self.datasets.get(self.active)
    }

    pub fn dataset_title(&self, dataset: usize) -> &str {
        self.datasets
            .get(dataset)
            .map_or("unknown dataset", |d| d.title.as_str())
    }

    /// Applies the row actions sent since the last frame.
    ///
    /// Modify opens the details window. Delete asks for confirmation first.
    pub fn poll_row_actions(&mut self) {
        while let Ok(DatasetAction { dataset, action }) = self.action_receiver.try_recv() {
            let title = self.dataset_title(dataset).to_owned();
            match action {
                RowAction::Modify(target) => {
                    info!("Modify requested for row {} in {title}", target.key);
                    self.status = Some(format!("Editing row {} in {title}", target.key));
                    self.dialog = Some(PendingDialog::Details { dataset, target });
                }
                RowAction::Delete(target) => {
                    info!("Delete requested for row {} in {title}", target.key);
                    self.dialog = Some(PendingDialog::ConfirmDelete { dataset, target });
                }
            }
        }
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// Deletes the row awaiting confirmation, if any.
    pub fn confirm_delete(&mut self) -> Option<Row> {
        let Some(PendingDialog::ConfirmDelete { dataset, target }) = self.dialog.take() else {
            return None;
        };
        let removed = self.delete_row(dataset, &target);
        let title = self.dataset_title(dataset).to_owned();
        self.status = Some(match &removed {
            Some(_) => format!("Deleted row {} from {title}", target.key),
            None => format!("Row {} no longer exists in {title}", target.key),
        });
        removed
    }

    /// Removes `target` from a dataset.
    ///
    /// The recorded position is tried first; if the rows changed since the
    /// action was reported the row is looked up by key.
    pub fn delete_row(&mut self, dataset: usize, target: &RowTarget) -> Option<Row> {
        let Some(dataset) = self.datasets.get_mut(dataset) else {
            warn!("Delete for unknown dataset {dataset}");
            return None;
        };

        if dataset.rows.get(target.position) == Some(&target.row) {
            return dataset.rows.remove(target.position);
        }
        dataset
            .rows
            .remove_by_key(&target.key, dataset.config.key_field())
    }
}
