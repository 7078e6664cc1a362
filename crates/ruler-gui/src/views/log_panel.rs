use eframe::egui;
use log::Level;

use crate::logger::AppLogger;

fn level_color(ui: &egui::Ui, level: Level) -> egui::Color32 {
    match level {
        Level::Error => ui.visuals().error_fg_color,
        Level::Warn => ui.visuals().warn_fg_color,
        _ => ui.visuals().weak_text_color(),
    }
}

pub fn show_log_panel(ui: &mut egui::Ui, logger: &AppLogger) {
    ui.horizontal(|ui| {
        ui.strong("Log");
        if ui.small_button("Clear").clicked() {
            logger.clear();
        }
    });

    egui::ScrollArea::vertical()
        .max_height(120.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in logger.get_entries() {
                ui.horizontal(|ui| {
                    ui.monospace(entry.timestamp.format("%H:%M:%S").to_string());
                    ui.colored_label(level_color(ui, entry.level), entry.level.as_str());
                    ui.label(&entry.message).on_hover_text(&entry.target);
                });
            }
        });
}
