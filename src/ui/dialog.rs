use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, DialogLevel};

/// Render the pending message as a modal; dismissing it clears it from state.
pub fn message_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(dialog) = &state.dialog else {
        return;
    };

    let (icon, color) = match dialog.level {
        DialogLevel::Info => ("ℹ", ctx.style().visuals.text_color()),
        DialogLevel::Warning => ("⚠", Color32::from_rgb(230, 160, 20)),
        DialogLevel::Error => ("✖", Color32::RED),
    };

    let mut acknowledged = false;
    let modal = egui::Modal::new(egui::Id::new("message_dialog")).show(ctx, |ui: &mut Ui| {
        ui.set_min_width(320.0);
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new(icon).size(20.0).color(color));
            ui.heading(&dialog.title);
        });
        ui.separator();
        ui.label(&dialog.message);
        ui.add_space(8.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui: &mut Ui| {
            if ui.button("OK").clicked() {
                acknowledged = true;
            }
        });
    });

    if acknowledged || modal.should_close() {
        state.close_dialog();
    }
}
