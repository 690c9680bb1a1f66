use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::PREVIEW_ROWS;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Render the preview of the first rows of the loaded table.
pub fn preview_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Load a CSV file to get started  (File → Open…)");
        });
        return;
    };

    let rows = dataset.preview_rows();
    if dataset.is_empty() {
        ui.label(RichText::new("The file has a header but no data rows").weak());
    } else if dataset.len() > rows {
        ui.label(
            RichText::new(format!(
                "Showing the first {PREVIEW_ROWS} of {} rows",
                dataset.len()
            ))
            .weak(),
        );
    }

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(32.0))
            .columns(Column::auto().at_least(60.0).clip(true), dataset.column_count())
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                for column in dataset.columns() {
                    header.col(|ui| {
                        ui.strong(&column.name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows, |mut row| {
                    let r = row.index();
                    row.col(|ui| {
                        ui.label(RichText::new((r + 1).to_string()).weak());
                    });
                    for c in 0..dataset.column_count() {
                        row.col(|ui| {
                            ui.label(dataset.cell(r, c).to_string());
                        });
                    }
                });
            });
    });
}
