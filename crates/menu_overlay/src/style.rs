//! Placement style assembly.

use serde::{Deserialize, Serialize};

use menu_geometry::Position;

/// Menu panel width before pixel-grid rounding.
pub const MENU_WIDTH: f64 = 200.0;

/// Rounds layout values onto the device pixel grid.
///
/// The density scale is explicit caller-supplied configuration, never read
/// from ambient toolkit state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelGrid {
    scale: f64,
}

impl PixelGrid {
    /// `scale` is physical pixels per layout unit (e.g. 2.0 on a 2x display).
    /// Non-positive scales fall back to 1.
    pub fn new(scale: f64) -> Self {
        let scale = if scale > 0.0 { scale } else { 1.0 };
        Self { scale }
    }

    pub fn round_to_nearest_pixel(self, value: f64) -> f64 {
        (value * self.scale).round() / self.scale
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Placement style for one rendered frame: the resolved anchor offsets plus
/// the sampled transition value applied as both scale and opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayStyle {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub width: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl OverlayStyle {
    pub fn new(position: Position, driven_value: f64, grid: PixelGrid) -> Self {
        Self {
            top: position.top,
            left: position.left,
            right: position.right,
            width: grid.round_to_nearest_pixel(MENU_WIDTH),
            scale: driven_value,
            opacity: driven_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_the_device_pixel_grid() {
        let grid = PixelGrid::new(2.0);
        assert_eq!(grid.round_to_nearest_pixel(10.3), 10.5);
        assert_eq!(grid.round_to_nearest_pixel(10.2), 10.0);
        assert_eq!(PixelGrid::new(3.0).round_to_nearest_pixel(MENU_WIDTH), 200.0);
    }

    #[test]
    fn bad_density_scale_falls_back_to_one() {
        assert_eq!(PixelGrid::new(0.0).round_to_nearest_pixel(10.4), 10.0);
        assert_eq!(PixelGrid::new(-2.0).round_to_nearest_pixel(10.6), 11.0);
    }

    #[test]
    fn style_carries_the_driven_value_as_scale_and_opacity() {
        let position = Position {
            top: Some(30.0),
            left: Some(20.0),
            right: None,
        };
        let style = OverlayStyle::new(position, 0.4, PixelGrid::default());
        assert_eq!(style.scale, 0.4);
        assert_eq!(style.opacity, 0.4);
        assert_eq!(style.top, Some(30.0));
        assert_eq!(style.left, Some(20.0));
        assert_eq!(style.right, None);
        assert_eq!(style.width, MENU_WIDTH);
    }
}
