use eframe::egui;
use ruler_core::RulerSpec;
use std::path::PathBuf;

use crate::ui_components::{labeled_checkbox, labeled_number_field};

/// Contents of the modal input dialog
///
/// Invalid input keeps the dialog open with an error message, so retrying is
/// just another frame of the same state.
pub struct InputDialog {
    pub max_cm: String,
    pub pixel_scale: String,
    pub show_fives: bool,
    /// Cancelling the startup dialog quits the application
    pub is_startup: bool,
    pub error: Option<String>,
}

/// What the user did with the dialog this frame
#[derive(Debug, PartialEq)]
pub enum DialogAction {
    None,
    Submit(RulerSpec),
    Cancel,
    LoadSettings { path: PathBuf },
    SaveSettings { spec: RulerSpec, path: PathBuf },
}

impl InputDialog {
    pub fn new(spec: &RulerSpec, is_startup: bool) -> Self {
        let mut dialog = Self {
            max_cm: String::new(),
            pixel_scale: String::new(),
            show_fives: false,
            is_startup,
            error: None,
        };
        dialog.fill(spec);
        dialog
    }

    /// Replace all fields with the values of `spec`
    pub fn fill(&mut self, spec: &RulerSpec) {
        self.max_cm = spec.max_cm.to_string();
        self.pixel_scale = spec.pixel_scale.to_string();
        self.show_fives = spec.show_fives;
        self.error = None;
    }

    /// Parse the fields, recording the error for display on failure.
    pub fn submit(&mut self) -> Option<RulerSpec> {
        match RulerSpec::from_input(&self.max_cm, &self.pixel_scale, self.show_fives) {
            Ok(spec) => {
                self.error = None;
                Some(spec)
            }
            Err(e) => {
                log::warn!("Rejected ruler input: {e}");
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

fn field_is_invalid(text: &str) -> bool {
    text.trim().parse::<i64>().map_or(true, |value| value < 0)
}

pub fn show_input_dialog(ctx: &egui::Context, dialog: &mut InputDialog) -> DialogAction {
    let modal = egui::Modal::new(egui::Id::new("ruler_input_dialog")).show(ctx, |ui| {
        ui.set_width(340.0);
        ui.heading("Input");
        ui.add_space(6.0);

        let show_errors = dialog.error.is_some();
        let max_cm_invalid = show_errors && field_is_invalid(&dialog.max_cm);
        let scale_invalid = show_errors && field_is_invalid(&dialog.pixel_scale);
        egui::Grid::new("ruler_input_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                labeled_number_field(
                    ui,
                    "Upper limit of your ruler in cm:",
                    &mut dialog.max_cm,
                    "e.g. 30",
                    max_cm_invalid,
                );
                labeled_number_field(
                    ui,
                    "Number of pixels between each mm:",
                    &mut dialog.pixel_scale,
                    "e.g. 4",
                    scale_invalid,
                );
                labeled_checkbox(ui, "Indicators every five mm", &mut dialog.show_fives);
            });

        if let Some(error) = &dialog.error {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, error);
        }

        ui.separator();

        let mut action = DialogAction::None;
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                if let Some(spec) = dialog.submit() {
                    action = DialogAction::Submit(spec);
                }
            }
            if ui.button("Cancel").clicked() {
                action = DialogAction::Cancel;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("💾 Save settings…").clicked() {
                    if let Some(spec) = dialog.submit() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("JSON", &["json"])
                            .set_file_name("ruler.json")
                            .save_file()
                        {
                            action = DialogAction::SaveSettings { spec, path };
                        }
                    }
                }
                if ui.button("📂 Load settings…").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON", &["json"])
                        .pick_file()
                    {
                        action = DialogAction::LoadSettings { path };
                    }
                }
            });
        });

        if action == DialogAction::None && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            if let Some(spec) = dialog.submit() {
                action = DialogAction::Submit(spec);
            }
        }

        action
    });

    // Escape or a click outside the dialog counts as Cancel
    if modal.inner == DialogAction::None && modal.should_close() {
        return DialogAction::Cancel;
    }
    modal.inner
}
