//! Resolves the final menu position from measured layouts.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::axis::{AxisPlacement, fit_axis};
use crate::error::InvalidLayout;
use crate::rect::Layouts;
use crate::safe_area::fit_into_safe_area;

/// Horizontal text/layout direction.
///
/// Passed explicitly by the caller; the resolver never reads it from
/// ambient toolkit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Where to place the menu.
///
/// The resolver sets `top` plus exactly one of `left`/`right`, picked by
/// text direction; the other horizontal field stays unset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

/// Compute where the menu renders.
///
/// Runs the axis cascade over both axes with window-relative trigger
/// coordinates, anchors the horizontal offset to the direction-appropriate
/// side, and clamps the result into the safe area.
pub fn resolve(layouts: &Layouts, direction: TextDirection) -> Result<Position, InvalidLayout> {
    layouts.validate()?;
    let vertical = fit_axis(
        layouts.options.height,
        layouts.window.height,
        layouts.trigger.y - layouts.window.y,
        layouts.trigger.height,
    );
    let horizontal = fit_axis(
        layouts.options.width,
        layouts.window.width,
        layouts.trigger.x - layouts.window.x,
        layouts.trigger.width,
    );
    trace!("resolved axes: vertical={vertical:?} horizontal={horizontal:?} {direction:?}");

    let mut position = Position {
        top: Some(vertical.offset),
        ..Position::default()
    };
    // The horizontal cascade is direction-agnostic; only the anchor side flips.
    match direction {
        TextDirection::Ltr => position.left = Some(horizontal.offset),
        TextDirection::Rtl => position.right = Some(horizontal.offset),
    }
    Ok(fit_into_safe_area(position, layouts))
}

/// Report which vertical cascade branch will fire, before the menu is placed.
///
/// Callers use this to pick the open animation's grow direction (downward
/// unless the placement is [`AxisPlacement::anchored_to_end`]). The vertical
/// cascade does not depend on text direction.
pub fn initial_placement(layouts: &Layouts) -> Result<AxisPlacement, InvalidLayout> {
    layouts.validate()?;
    let vertical = fit_axis(
        layouts.options.height,
        layouts.window.height,
        layouts.trigger.y - layouts.window.y,
        layouts.trigger.height,
    );
    Ok(vertical.placement)
}
