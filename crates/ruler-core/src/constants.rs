//! Shared constants for ruler geometry and layout
//!
//! All lengths are layout units, which the GUI maps 1:1 onto logical pixels.

// =============================================================================
// Input Limits
// =============================================================================

/// Millimeters per centimeter (one decimeter label per this many ticks)
pub const MM_PER_CM: u32 = 10;

/// Largest accepted ruler length in centimeters (1 km)
pub const MAX_CM: i64 = 100_000;

/// Largest accepted scale in pixels per millimeter
pub const MAX_PIXEL_SCALE: i64 = 1_000;

/// Largest accepted ruler extent (`max_cm * 10 * pixel_scale`) in pixels.
///
/// Layout positions are `f32` with half-unit offsets, which stay exact below 2^23.
pub const MAX_RULER_EXTENT: i64 = 8_000_000;

// =============================================================================
// Stripe Column
// =============================================================================

/// Width of every stripe block
pub const STRIPE_WIDTH: f32 = 30.0;

/// Fixed spacer above the first stripe
pub const LEADING_SPACER: f32 = 10.0;

/// Height of the closing block that carries the terminal tick
pub const TERMINAL_STRIPE_HEIGHT: f32 = 10.0;

// =============================================================================
// Label Column
// =============================================================================

/// Label block width contributed by each digit of the largest value
pub const LABEL_WIDTH_PER_DIGIT: f32 = 10.0;

/// Width of the terminal label block
pub const TERMINAL_LABEL_WIDTH: f32 = 30.0;

/// Height of the terminal label block
pub const TERMINAL_LABEL_HEIGHT: f32 = 27.0;

/// Vertical gap between a label block's top edge and its text
pub const LABEL_TEXT_INSET: f32 = 5.0;

/// Count decimal digits of a non-negative value (0 has one digit)
#[inline]
pub fn digit_count(value: u32) -> u32 {
    value.checked_ilog10().map_or(1, |d| d + 1)
}
