//! Single-axis positioning cascade.
//!
//! Both axes use the same fallback order: pin to the window origin when the
//! menu cannot fit at all, anchor to the trigger's near edge, anchor to its
//! far edge, and finally center on the trigger with clamping to the window.

use serde::{Deserialize, Serialize};

/// Which branch of the cascade produced the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisPlacement {
    /// Menu larger than the window; rendered at the window origin.
    Overflow,
    /// Anchored to the trigger's near edge.
    TriggerStart,
    /// Anchored to the trigger's far edge.
    TriggerEnd,
    /// Centered offset fell before the window start and was clamped there.
    ClampedToStart,
    /// Centered offset ran past the window end and was clamped there.
    ClampedToEnd,
    /// Centered on the trigger.
    Centered,
}

impl AxisPlacement {
    /// True when the menu's far edge is pinned to the trigger or window end,
    /// so an open animation should grow towards the axis start.
    pub const fn anchored_to_end(self) -> bool {
        matches!(self, Self::TriggerEnd | Self::ClampedToEnd)
    }
}

/// Offset along one axis plus the branch that produced it.
///
/// Coordinate and classification come out of a single cascade evaluation so
/// they cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFit {
    pub offset: f64,
    pub placement: AxisPlacement,
}

impl AxisFit {
    const fn new(offset: f64, placement: AxisPlacement) -> Self {
        Self { offset, placement }
    }
}

/// Place the menu along one axis.
///
/// `trigger_pos` must already be window-relative (trigger absolute position
/// minus window absolute position). First matching branch wins:
///
/// 1. menu larger than the window → `0`, overflow accepted;
/// 2. menu fits at the trigger position → anchor to the trigger start;
/// 3. far-edge alignment stays non-negative → anchor to the trigger end;
/// 4. center on the trigger, clamped into `[0, window_dim - option_dim]`.
///
/// Only the centered midpoint is rounded (half away from zero); every other
/// branch returns exact arithmetic.
pub fn fit_axis(option_dim: f64, window_dim: f64, trigger_pos: f64, trigger_dim: f64) -> AxisFit {
    if option_dim > window_dim {
        return AxisFit::new(0.0, AxisPlacement::Overflow);
    }
    if trigger_pos + option_dim <= window_dim {
        return AxisFit::new(trigger_pos, AxisPlacement::TriggerStart);
    }
    if trigger_pos + trigger_dim - option_dim >= 0.0 {
        return AxisFit::new(
            trigger_pos + trigger_dim - option_dim,
            AxisPlacement::TriggerEnd,
        );
    }
    let center = (trigger_pos + trigger_dim / 2.0 - option_dim / 2.0).round();
    if center < 0.0 {
        return AxisFit::new(0.0, AxisPlacement::ClampedToStart);
    }
    if center + option_dim > window_dim {
        return AxisFit::new(window_dim - option_dim, AxisPlacement::ClampedToEnd);
    }
    AxisFit::new(center, AxisPlacement::Centered)
}
