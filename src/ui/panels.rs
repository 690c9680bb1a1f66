use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::chart::ChartKind;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – column selectors and actions
// ---------------------------------------------------------------------------

/// Render the left panel: X/Y selectors and the action buttons.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Columns");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        ui.add_space(8.0);
        action_buttons(ui, state);
        return;
    };

    // Clone what we need so we can mutate state inside the widgets.
    let columns = dataset.column_names();
    let numeric = dataset.numeric_column_names();

    // ---- X axis ----
    ui.strong("X-axis:");
    let current_x = state.x_column.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("x_axis")
        .selected_text(&current_x)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for col in &columns {
                if ui.selectable_label(current_x == *col, col).clicked() {
                    state.set_x_column(col);
                }
            }
        });
    ui.separator();

    // ---- Y axis ----
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Y-axis (multi-select):");
        if ui.small_button("All").clicked() {
            state.select_all_y();
        }
        if ui.small_button("None").clicked() {
            state.clear_y();
        }
    });

    ScrollArea::vertical()
        .id_salt("y_axis")
        .max_height(260.0)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            if numeric.is_empty() {
                ui.label(RichText::new("No numeric columns").italics());
            }
            for col in &numeric {
                if ui
                    .selectable_label(state.is_y_selected(col), col)
                    .clicked()
                {
                    state.toggle_y_column(col);
                }
            }
        });
    ui.separator();

    action_buttons(ui, state);
}

fn action_buttons(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered_justified(|ui: &mut Ui| {
        if ui.button("Plot Line Graph").clicked() {
            state.plot(ChartKind::Line);
        }
        if ui.button("Plot Bar Chart").clicked() {
            state.plot(ChartKind::Bar);
        }
        if ui.button("Show Min & Max").clicked() {
            state.show_min_max();
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        if ui.button("Load CSV File").clicked() {
            open_file_dialog(state);
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            let name = state
                .source
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "dataset".to_string());
            ui.label(format!(
                "{name}: {} rows × {} columns",
                ds.len(),
                ds.column_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if state.dataset.is_some() {
                ui.visuals().weak_text_color()
            } else {
                Color32::RED
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV File")
        .add_filter("CSV Files", &["csv"])
        .pick_file();

    match file {
        Some(path) => state.load_path(&path),
        None => log::debug!("file dialog cancelled"),
    }
}
