//! Safe-area clamping for tentative menu positions.

use crate::rect::Layouts;
use crate::resolve::Position;

/// Clamp one axis of a tentative position into `[min_pos, max_pos]`.
///
/// `None` passes through unchanged; an unset field is not the same as `0`.
/// The far clamp runs before the near clamp, so a span narrower than `len`
/// collapses to `min_pos` (the near edge) rather than `max_pos - len`.
pub fn clamp_axis(pos: Option<f64>, len: f64, min_pos: f64, max_pos: f64) -> Option<f64> {
    let mut pos = pos?;
    if pos + len > max_pos {
        pos = max_pos - len;
    }
    if pos < min_pos {
        pos = min_pos;
    }
    Some(pos)
}

/// Fit a tentative position into the safe area, if one was measured.
///
/// Without a safe area this is the identity. Each present field is clamped
/// independently; absent fields stay absent.
pub fn fit_into_safe_area(position: Position, layouts: &Layouts) -> Position {
    let Some(safe_area) = layouts.safe_area else {
        return position;
    };
    let options = layouts.options;
    Position {
        top: clamp_axis(
            position.top,
            options.height,
            safe_area.y,
            safe_area.y + safe_area.height,
        ),
        left: clamp_axis(
            position.left,
            options.width,
            safe_area.x,
            safe_area.x + safe_area.width,
        ),
        // `right` counts from the window's right edge, so its bounds are
        // expressed in the mirrored convention.
        right: clamp_axis(
            position.right,
            options.width,
            layouts.window.width - safe_area.x - safe_area.width,
            safe_area.x,
        ),
    }
}
