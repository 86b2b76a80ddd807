//! Geometry core for the anchored menu overlay.
//!
//! Pure positioning math: given the measured window, trigger, and menu
//! rectangles (plus an optional safe area), decide where the menu renders.
//! Each axis is placed independently by a fallback cascade (anchor to the
//! trigger's near edge, then its far edge, then centered-and-clamped), and
//! the tentative position is clamped into the safe area afterwards.
//!
//! Everything here is a pure function over caller-owned snapshots; identical
//! inputs give identical outputs.

pub mod axis;
mod error;
mod rect;
pub mod resolve;
pub mod safe_area;

pub use axis::{AxisFit, AxisPlacement, fit_axis};
pub use error::{InvalidLayout, RectName};
pub use rect::{Layouts, Rect};
pub use resolve::{Position, TextDirection, initial_placement, resolve};
pub use safe_area::{clamp_axis, fit_into_safe_area};
