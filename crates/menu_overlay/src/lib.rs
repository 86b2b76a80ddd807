//! Stateful presentation shell for the anchored menu overlay.
//!
//! Wraps the pure positioning math of `menu_geometry` in the component
//! lifecycle: mount starts a scale-fade open transition, `close` runs the
//! reverse transition and hands back a future resolved when it finishes,
//! and `placement_style` assembles the per-frame placement style from the
//! resolved position and the sampled animation value.

mod animation;
mod config;
mod overlay;
mod style;

pub use animation::{AnimationBackend, Easing, Transition};
pub use config::{CLOSE_ANIM_DURATION, MenuConfig, OPEN_ANIM_DURATION};
pub use overlay::{CloseFinished, GrowthDirection, MenuOverlay, MenuState, growth_direction};
pub use style::{MENU_WIDTH, OverlayStyle, PixelGrid};
