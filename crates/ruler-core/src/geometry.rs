//! Tick and label computation
//!
//! Geometry is independent of the pixel scale: the scale only affects how
//! large the assembled layout becomes, never which ticks or labels exist.

use crate::constants::{
    LABEL_WIDTH_PER_DIGIT, MAX_CM, MAX_PIXEL_SCALE, MAX_RULER_EXTENT, MM_PER_CM, digit_count,
};
use crate::types::{DecimeterLabel, Emphasis, Result, RulerError, RulerGeometry, TickMark};

/// Check that a ruler request is within the accepted range.
///
/// Returns the values as unsigned integers on success.
pub fn validate_dimensions(max_cm: i64, pixel_scale: i64) -> Result<(u32, u32)> {
    if max_cm < 0 {
        return Err(RulerError::InvalidArgument(format!(
            "Upper limit must not be negative (got {max_cm})"
        )));
    }
    if pixel_scale < 0 {
        return Err(RulerError::InvalidArgument(format!(
            "Scale must not be negative (got {pixel_scale})"
        )));
    }
    if max_cm > MAX_CM {
        return Err(RulerError::InvalidArgument(format!(
            "Upper limit must be at most {MAX_CM} cm (got {max_cm})"
        )));
    }
    if pixel_scale > MAX_PIXEL_SCALE {
        return Err(RulerError::InvalidArgument(format!(
            "Scale must be at most {MAX_PIXEL_SCALE} pixels per mm (got {pixel_scale})"
        )));
    }

    let extent = max_cm * i64::from(MM_PER_CM) * pixel_scale;
    if extent > MAX_RULER_EXTENT {
        return Err(RulerError::InvalidArgument(format!(
            "Ruler would be {extent} pixels tall, at most {MAX_RULER_EXTENT} are supported"
        )));
    }

    // Both values are bounded above, so the casts cannot truncate
    Ok((max_cm as u32, pixel_scale as u32))
}

/// Emphasis of the interior tick at `position_mm`.
pub fn tick_emphasis(position_mm: u32, show_fives: bool) -> Emphasis {
    let is_decimeter = position_mm % MM_PER_CM == 0;

    if show_fives {
        if position_mm % 5 != 0 {
            Emphasis::Half
        } else if is_decimeter {
            Emphasis::Full
        } else {
            Emphasis::ThreeQuarter
        }
    } else if is_decimeter {
        Emphasis::Full
    } else {
        Emphasis::Half
    }
}

/// Build the tick and label sequences for a ruler from 0 to `max_cm`.
///
/// Interior ticks cover `[0, max_cm * 10)`; the closing millimeter is a
/// separate terminal tick, followed by a terminal label valued `max_cm`.
///
/// # Errors
/// Returns [`RulerError::InvalidArgument`] when either dimension is negative,
/// exceeds the accepted maximum, or the ruler would be too tall to lay out.
pub fn build_geometry(max_cm: i64, pixel_scale: i64, show_fives: bool) -> Result<RulerGeometry> {
    let (max_cm, _) = validate_dimensions(max_cm, pixel_scale)?;

    let end_mm = max_cm * MM_PER_CM;
    let width_hint = digit_count(max_cm) * LABEL_WIDTH_PER_DIGIT as u32;

    let mut ticks = Vec::with_capacity(end_mm as usize + 1);
    let mut labels = Vec::with_capacity(max_cm as usize + 1);

    for position_mm in 0..end_mm {
        ticks.push(TickMark {
            position_mm,
            emphasis: tick_emphasis(position_mm, show_fives),
        });

        if position_mm % MM_PER_CM == 0 {
            labels.push(DecimeterLabel {
                value: position_mm / MM_PER_CM,
                width_hint,
                terminal: false,
            });
        }
    }

    ticks.push(TickMark {
        position_mm: end_mm,
        emphasis: Emphasis::Terminal,
    });
    labels.push(DecimeterLabel {
        value: max_cm,
        width_hint,
        terminal: true,
    });

    Ok(RulerGeometry { ticks, labels })
}
