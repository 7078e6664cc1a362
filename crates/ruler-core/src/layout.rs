//! Layout assembly
//!
//! Turns ruler geometry into two positioned columns: stripes on the left and
//! labels on the right. Each column keeps its natural size; the shorter one
//! is centered vertically against the taller one.

use crate::constants::{
    LABEL_WIDTH_PER_DIGIT, LEADING_SPACER, MM_PER_CM, STRIPE_WIDTH, TERMINAL_LABEL_HEIGHT,
    TERMINAL_LABEL_WIDTH, TERMINAL_STRIPE_HEIGHT, digit_count,
};
use crate::geometry::{build_geometry, validate_dimensions};
use crate::types::{Emphasis, Rect, Result, RulerGeometry};

/// A tick rendered as a block with a partial top border
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stripe {
    pub rect: Rect,
    pub emphasis: Emphasis,
    /// Length of the top cap line, measured from the left edge
    pub cap_length: f32,
    /// Whether a line runs down the full left edge
    pub side_line: bool,
}

/// A label rendered as a block containing its text
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBlock {
    pub rect: Rect,
    pub value: u32,
    pub text: String,
}

/// Positioned ruler ready for painting
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RulerLayout {
    pub stripes: Vec<Stripe>,
    pub labels: Vec<LabelBlock>,
    pub width: f32,
    pub height: f32,
}

impl RulerLayout {
    /// Stripes intersecting the vertical range `[y_min, y_max]`
    pub fn stripes_in(&self, y_min: f32, y_max: f32) -> &[Stripe] {
        visible_slice(&self.stripes, |s| &s.rect, y_min, y_max)
    }

    /// Label blocks intersecting the vertical range `[y_min, y_max]`
    pub fn labels_in(&self, y_min: f32, y_max: f32) -> &[LabelBlock] {
        visible_slice(&self.labels, |l| &l.rect, y_min, y_max)
    }
}

/// Items are laid out top to bottom, so both bounds can be binary searched.
fn visible_slice<T>(items: &[T], rect: impl Fn(&T) -> &Rect, y_min: f32, y_max: f32) -> &[T] {
    if y_min > y_max {
        return &[];
    }
    let start = items.partition_point(|item| rect(item).bottom() < y_min);
    let end = items.partition_point(|item| rect(item).y <= y_max);
    &items[start..end.max(start)]
}

/// Width of the label column for a ruler ending at `max_cm`.
pub fn label_column_width(max_cm: u32) -> f32 {
    (digit_count(max_cm) as f32 * LABEL_WIDTH_PER_DIGIT).max(TERMINAL_LABEL_WIDTH)
}

/// Arrange geometry into stripe and label columns.
pub fn assemble(geometry: &RulerGeometry, pixel_scale: u32, max_cm: u32) -> RulerLayout {
    let tick_height = pixel_scale as f32;
    let label_height = (pixel_scale * MM_PER_CM) as f32;

    let interior_ticks = geometry.interior_ticks();
    let interior_labels = geometry.labels.iter().filter(|l| !l.terminal).count();
    let has_terminal_tick = interior_ticks.len() < geometry.ticks.len();
    let has_terminal_label = interior_labels < geometry.labels.len();

    let stripes_height = LEADING_SPACER
        + interior_ticks.len() as f32 * tick_height
        + if has_terminal_tick {
            TERMINAL_STRIPE_HEIGHT
        } else {
            0.0
        };
    let labels_height = interior_labels as f32 * label_height
        + if has_terminal_label {
            TERMINAL_LABEL_HEIGHT
        } else {
            0.0
        };

    let height = stripes_height.max(labels_height);
    let stripes_top = (height - stripes_height) / 2.0;
    let labels_top = (height - labels_height) / 2.0;

    // Positions are computed from the index so rounding never accumulates
    let stripes_base = stripes_top + LEADING_SPACER;
    let stripes = geometry
        .ticks
        .iter()
        .enumerate()
        .map(|(index, tick)| {
            let block_height = match tick.emphasis {
                Emphasis::Terminal => TERMINAL_STRIPE_HEIGHT,
                _ => tick_height,
            };
            Stripe {
                rect: Rect::new(
                    0.0,
                    stripes_base + index as f32 * tick_height,
                    STRIPE_WIDTH,
                    block_height,
                ),
                emphasis: tick.emphasis,
                cap_length: STRIPE_WIDTH * tick.emphasis.cap_fraction(),
                side_line: tick.emphasis.has_side_line(),
            }
        })
        .collect();

    // Label column
    let labels_x = STRIPE_WIDTH;
    let labels_width = label_column_width(max_cm);
    let labels = geometry
        .labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let (block_width, block_height) = if label.terminal {
                (TERMINAL_LABEL_WIDTH, TERMINAL_LABEL_HEIGHT)
            } else {
                (label.width_hint as f32, label_height)
            };
            LabelBlock {
                rect: Rect::new(
                    labels_x,
                    labels_top + index as f32 * label_height,
                    block_width,
                    block_height,
                ),
                value: label.value,
                text: format!(" {}", label.value),
            }
        })
        .collect();

    RulerLayout {
        stripes,
        labels,
        width: STRIPE_WIDTH + labels_width,
        height,
    }
}

/// Compute geometry and assemble it in one step.
///
/// This is the entry point used by the GUI worker and the CLI.
pub fn build_ruler_widget(max_cm: i64, pixel_scale: i64, show_fives: bool) -> Result<RulerLayout> {
    let geometry = build_geometry(max_cm, pixel_scale, show_fives)?;
    let (max_cm, pixel_scale) = validate_dimensions(max_cm, pixel_scale)?;
    Ok(assemble(&geometry, pixel_scale, max_cm))
}
