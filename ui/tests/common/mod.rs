use egui_kittest::Harness;
use roost_business::{BrowserConfig, BrowserState, RowAction, RowSet};
use roost_ui::RoostApp;
use roost_ui::state::State;
use roost_ui::widgets::DataBrowser;

/// A data browser over caller-owned rows, as a page would embed it.
pub struct BrowserCtx {
    pub rows: RowSet,
    pub view: BrowserState,
    pub config: BrowserConfig,
    pub actionable: bool,
    /// Every action the browser reported, oldest first.
    pub actions: Vec<RowAction>,
}

impl BrowserCtx {
    pub fn new(rows: RowSet) -> Self {
        Self {
            rows,
            view: BrowserState::new(),
            config: BrowserConfig::default().with_key_field("id"),
            actionable: false,
            actions: Vec::new(),
        }
    }

    #[allow(unused)]
    pub fn actionable(mut self) -> Self {
        self.actionable = true;
        self
    }

    /// Re-derives the current page, the same way the widget does.
    #[allow(unused)]
    pub fn column_values(&mut self, column: &str) -> Vec<String> {
        self.view
            .view(&self.rows, &self.config)
            .rows
            .iter()
            .map(|visible| visible.row.cell_text(column))
            .collect()
    }
}

#[allow(unused)]
pub fn browser_harness<'a>(ctx: BrowserCtx) -> Harness<'a, BrowserCtx> {
    let _ = env_logger::builder().is_test(true).try_init();

    Harness::new_ui_state(
        |ui, ctx: &mut BrowserCtx| {
            let BrowserCtx {
                rows,
                view,
                config,
                actionable,
                actions,
            } = ctx;

            let response = DataBrowser::new("integration_browser", rows)
                .actionable(*actionable)
                .config(config.clone())
                .show(ui, view);

            actions.extend(response.action);
        },
        ctx,
    )
}

#[allow(unused)]
pub fn app_harness<'a>() -> Harness<'a, RoostApp> {
    let _ = env_logger::builder().is_test(true).try_init();

    let app = RoostApp::new(State::test());
    Harness::new_eframe(|_| app)
}
