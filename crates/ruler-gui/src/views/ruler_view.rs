use eframe::egui;
use ruler_core::{LabelBlock, RulerLayout};
use ruler_core::constants::LABEL_TEXT_INSET;

const LABEL_FONT_SIZE: f32 = 12.0;

/// Top-center point of a label's text, relative to the layout origin
fn label_anchor(label: &LabelBlock) -> egui::Vec2 {
    egui::vec2(
        label.rect.x + label.rect.width / 2.0,
        label.rect.y + LABEL_TEXT_INSET,
    )
}

/// Paint a ruler layout inside a scroll area.
///
/// Only stripes and labels intersecting the visible viewport are painted, so
/// very long rulers stay cheap to scroll.
pub fn show_ruler(ui: &mut egui::Ui, layout: Option<&RulerLayout>, pending: bool) {
    let Some(layout) = layout else {
        ui.centered_and_justified(|ui| {
            if pending {
                ui.spinner();
            } else {
                ui.label("No ruler yet");
            }
        });
        return;
    };

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show_viewport(ui, |ui, viewport| {
            // Center the ruler horizontally when the pane is wider than it
            let content_width = ui.available_width().max(layout.width);
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(content_width, layout.height),
                egui::Sense::hover(),
            );
            let origin = rect.min + egui::vec2((content_width - layout.width) / 2.0, 0.0);

            let painter = ui.painter();
            let color = ui.visuals().strong_text_color();
            let stroke = egui::Stroke::new(1.0, color);
            let font = egui::FontId::proportional(LABEL_FONT_SIZE);

            for stripe in layout.stripes_in(viewport.min.y, viewport.max.y) {
                let top_left = origin + egui::vec2(stripe.rect.x, stripe.rect.y);
                painter.line_segment(
                    [top_left, top_left + egui::vec2(stripe.cap_length, 0.0)],
                    stroke,
                );
                if stripe.side_line {
                    painter.line_segment(
                        [top_left, top_left + egui::vec2(0.0, stripe.rect.height)],
                        stroke,
                    );
                }
            }

            // Text may overhang a short block, so widen the query by one line
            let overhang = LABEL_TEXT_INSET + LABEL_FONT_SIZE * 2.0;
            for label in layout.labels_in(viewport.min.y - overhang, viewport.max.y + overhang) {
                painter.text(
                    origin + label_anchor(label),
                    egui::Align2::CENTER_TOP,
                    &label.text,
                    font.clone(),
                    color,
                );
            }
        });
}
