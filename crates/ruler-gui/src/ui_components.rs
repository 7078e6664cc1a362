use eframe::egui;

/// Builder for single-line text fields holding a whole number
pub struct NumberFieldBuilder<'a> {
    text: &'a mut String,
    hint: Option<String>,
    width: Option<f32>,
    invalid: bool,
}

impl<'a> NumberFieldBuilder<'a> {
    pub fn new(text: &'a mut String) -> Self {
        Self {
            text,
            hint: None,
            width: None,
            invalid: false,
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Outline the field to point at a value that failed to parse
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let mut edit = egui::TextEdit::singleline(self.text);

        if let Some(hint) = self.hint {
            edit = edit.hint_text(hint);
        }

        if let Some(width) = self.width {
            edit = edit.desired_width(width);
        }

        let response = ui.add(edit);

        if self.invalid {
            ui.painter().rect_stroke(
                response.rect,
                2.0,
                egui::Stroke::new(1.0, ui.visuals().error_fg_color),
                egui::StrokeKind::Outside,
            );
        }

        response
    }
}

/// Grid row with a label on the left and a number field on the right
pub fn labeled_number_field(
    ui: &mut egui::Ui,
    label: &str,
    text: &mut String,
    hint: &str,
    invalid: bool,
) -> bool {
    ui.label(label);
    let changed = NumberFieldBuilder::new(text)
        .hint(hint)
        .width(80.0)
        .invalid(invalid)
        .show(ui)
        .changed();
    ui.end_row();
    changed
}

/// Grid row with a label on the left and a checkbox on the right
pub fn labeled_checkbox(ui: &mut egui::Ui, label: &str, value: &mut bool) -> bool {
    ui.label(label);
    let changed = ui.checkbox(value, "").changed();
    ui.end_row();
    changed
}
