use eframe::egui;

use crate::state::AppState;
use crate::ui::{dialog, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct CsvAnalyzerApp {
    pub state: AppState,
}

impl eframe::App for CsvAnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: column selectors and actions ----
        egui::SidePanel::left("column_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table preview ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::preview_table(ui, &self.state);
        });

        // ---- Floating chart windows and the modal on top ----
        plot::figure_windows(ctx, &mut self.state);
        dialog::message_dialog(ctx, &mut self.state);
    }
}
