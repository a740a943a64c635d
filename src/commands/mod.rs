pub mod chart;
pub mod report;

use tracing::{debug, error, info};

use crate::api::coingecko::CoinGeckoClient;
use crate::config::AppConfig;
use crate::models::{Asset, ChartView};

/// Idle between actions, Busy while an action fetches and writes/renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Busy,
}

/// The two triggers of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GenerateCsv,
    ViewChart,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::GenerateCsv => "Generate CSV report",
            Action::ViewChart => "View chart",
        }
    }

    fn failure_context(self) -> &'static str {
        match self {
            Action::GenerateCsv => "Error generating CSV",
            Action::ViewChart => "Error generating chart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
}

/// A modal message; the main window stays disabled until it is dismissed
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Dialog { kind: DialogKind::Info, title: title.to_string(), message: message.into() }
    }

    pub fn warning(title: &str, message: impl Into<String>) -> Self {
        Dialog { kind: DialogKind::Warning, title: title.to_string(), message: message.into() }
    }

    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Dialog { kind: DialogKind::Error, title: title.to_string(), message: message.into() }
    }
}

/// Everything the window shows, independent of how it is drawn.
///
/// A trigger is a two step affair: `trigger` validates the selection and
/// marks the session Busy, `run_pending` performs the work and returns to
/// Idle. The window draws one frame in between so the Busy state is visible.
pub struct Session {
    pub client: CoinGeckoClient,
    pub config: AppConfig,
    pub selection: Option<Asset>,
    pub state: UiState,
    pub dialog: Option<Dialog>,
    pub chart: Option<ChartView>,
    pending: Option<(Action, Asset)>,
}

impl Session {
    pub fn new(client: CoinGeckoClient, config: AppConfig) -> Self {
        Session {
            client,
            config,
            selection: None,
            state: UiState::Idle,
            dialog: None,
            chart: None,
            pending: None,
        }
    }

    /// Selection control and triggers accept input only when idle and no dialog is up
    pub fn controls_enabled(&self) -> bool {
        self.state == UiState::Idle && self.dialog.is_none()
    }

    pub fn select(&mut self, asset: Asset) {
        if !self.controls_enabled() {
            return;
        }
        debug!("Selected {}", asset.id);
        self.selection = Some(asset);
    }

    pub fn trigger(&mut self, action: Action) {
        if !self.controls_enabled() {
            debug!("Ignoring '{}' while busy", action.label());
            return;
        }

        match self.selection {
            None => {
                self.dialog = Some(Dialog::warning("Attention", "Select a cryptocurrency."));
            }
            Some(asset) => {
                info!("▶️ {} for {}", action.label(), asset.id);
                self.state = UiState::Busy;
                self.pending = Some((action, asset));
            }
        }
    }

    /// Run the action queued by `trigger`; every failure ends in an error dialog
    pub async fn run_pending(&mut self) {
        let Some((action, asset)) = self.pending.take() else {
            self.state = UiState::Idle;
            return;
        };

        let result = match action {
            Action::GenerateCsv => report::execute(self, asset).await,
            Action::ViewChart => chart::execute(self, asset).await,
        };

        if let Err(e) = result {
            error!("❌ {} failed for {}: {}", action.label(), asset.id, e);
            self.dialog = Some(Dialog::error(
                "Error",
                format!("{}:\n{}", action.failure_context(), e),
            ));
        }

        self.state = UiState::Idle;
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn close_chart(&mut self) {
        if let Some(chart) = self.chart.take() {
            debug!("Chart viewer for {} closed", chart.asset_id);
        }
    }
}
