mod app;
mod chart;
mod color;
mod data;
mod error;
mod state;
mod ui;

use app::CsvAnalyzerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CSV Analyzer with Min & Max",
        options,
        Box::new(|_cc| Ok(Box::new(CsvAnalyzerApp::default()))),
    )
}
