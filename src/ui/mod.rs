//! Main window: selection control, the two triggers, dialogs and the chart viewer

pub mod chart_viewer;
pub mod dialog;

use egui::{Color32, RichText};
use tokio::runtime::Runtime;

use crate::commands::{Action, Session, UiState};
use crate::models::SUPPORTED_ASSETS;
use chart_viewer::ChartViewer;

pub const WINDOW_TITLE: &str = "Cryptocurrency Analyzer";
const WINDOW_SIZE: [f32; 2] = [420.0, 160.0];

const CSV_GREEN: Color32 = Color32::from_rgb(0, 128, 0);
const CHART_BLUE: Color32 = Color32::from_rgb(0, 0, 255);

pub struct AnalyzerApp {
    runtime: Runtime,
    session: Session,
    viewer: ChartViewer,
    /// The last frame showed the Busy controls, so the pending action may block now
    busy_painted: bool,
}

impl AnalyzerApp {
    pub fn new(runtime: Runtime, session: Session) -> Self {
        AnalyzerApp {
            runtime,
            session,
            viewer: ChartViewer::default(),
            busy_painted: false,
        }
    }

    fn draw_main(&mut self, ctx: &egui::Context) {
        let enabled = self.session.controls_enabled();
        let busy = self.session.state == UiState::Busy;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    ui.add_space(6.0);
                    ui.label(RichText::new("Choose a cryptocurrency:").size(15.0));
                    ui.add_space(4.0);

                    let mut selection = self.session.selection;
                    egui::ComboBox::from_id_salt("asset_selection")
                        .width(200.0)
                        .selected_text(selection.map(|a| a.id).unwrap_or(""))
                        .show_ui(ui, |ui| {
                            for asset in SUPPORTED_ASSETS {
                                ui.selectable_value(&mut selection, Some(asset), asset.id)
                                    .on_hover_text(asset.name);
                            }
                        });
                    if let Some(asset) = selection.filter(|a| Some(*a) != self.session.selection) {
                        self.session.select(asset);
                    }

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add_space(20.0);
                        if ui.add(action_button(Action::GenerateCsv, CSV_GREEN)).clicked() {
                            self.session.trigger(Action::GenerateCsv);
                        }
                        if ui.add(action_button(Action::ViewChart, CHART_BLUE)).clicked() {
                            self.session.trigger(Action::ViewChart);
                        }
                    });
                });

                if busy {
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.add_space(140.0);
                        ui.spinner();
                        ui.label("Fetching prices...");
                    });
                }
            });
        });
    }
}

fn action_button(action: Action, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(RichText::new(action.label()).color(Color32::WHITE).strong())
        .fill(fill)
        .min_size(egui::vec2(170.0, 30.0))
}

impl eframe::App for AnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.state == UiState::Busy && self.busy_painted {
            self.runtime.block_on(self.session.run_pending());
            self.viewer.reset();
        }

        let busy = self.session.state == UiState::Busy;
        self.draw_main(ctx);
        dialog::show(ctx, &mut self.session);
        self.viewer.show(ctx, &mut self.session);

        self.busy_painted = busy;
        if self.session.state == UiState::Busy {
            ctx.request_repaint();
        }
    }
}

/// Open the fixed-size main window and block until it is closed
pub fn run(runtime: Runtime, session: Session) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(AnalyzerApp::new(runtime, session)))),
    )
}
