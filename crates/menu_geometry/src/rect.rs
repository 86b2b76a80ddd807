use serde::{Deserialize, Serialize};

use crate::error::{InvalidLayout, RectName};

/// A rectangle in the shared layout coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn check(&self, name: RectName) -> Result<(), InvalidLayout> {
        if !(self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite())
        {
            return Err(InvalidLayout::NonFinite { rect: name });
        }
        if self.width < 0.0 {
            return Err(InvalidLayout::NegativeDimension {
                rect: name,
                dimension: "width",
                value: self.width,
            });
        }
        if self.height < 0.0 {
            return Err(InvalidLayout::NegativeDimension {
                rect: name,
                dimension: "height",
                value: self.height,
            });
        }
        Ok(())
    }
}

/// Measured rectangles for one positioning pass.
///
/// Snapshots are captured by the caller before resolving; the positioning
/// functions never mutate them. `safe_area` is optional; without one the
/// safe-area fit is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layouts {
    pub window: Rect,
    pub trigger: Rect,
    pub options: Rect,
    #[serde(default)]
    pub safe_area: Option<Rect>,
}

impl Layouts {
    /// Reject non-finite coordinates and negative dimensions before any
    /// positioning math runs on them.
    pub fn validate(&self) -> Result<(), InvalidLayout> {
        self.window.check(RectName::Window)?;
        self.trigger.check(RectName::Trigger)?;
        self.options.check(RectName::Options)?;
        if let Some(safe_area) = &self.safe_area {
            safe_area.check(RectName::SafeArea)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layouts() -> Layouts {
        Layouts {
            window: Rect::new(0.0, 0.0, 100.0, 100.0),
            trigger: Rect::new(20.0, 30.0, 10.0, 10.0),
            options: Rect::new(0.0, 0.0, 50.0, 40.0),
            safe_area: None,
        }
    }

    #[test]
    fn well_formed_layouts_pass_validation() {
        assert_eq!(layouts().validate(), Ok(()));
    }

    #[test]
    fn nan_coordinate_is_rejected() {
        let mut bad = layouts();
        bad.trigger.x = f64::NAN;
        assert_eq!(
            bad.validate(),
            Err(InvalidLayout::NonFinite {
                rect: RectName::Trigger
            })
        );
    }

    #[test]
    fn negative_dimension_is_rejected() {
        let mut bad = layouts();
        bad.options.height = -1.0;
        assert_eq!(
            bad.validate(),
            Err(InvalidLayout::NegativeDimension {
                rect: RectName::Options,
                dimension: "height",
                value: -1.0,
            })
        );
    }

    #[test]
    fn malformed_safe_area_is_rejected() {
        let mut bad = layouts();
        bad.safe_area = Some(Rect::new(0.0, 0.0, -5.0, 10.0));
        assert_eq!(
            bad.validate(),
            Err(InvalidLayout::NegativeDimension {
                rect: RectName::SafeArea,
                dimension: "width",
                value: -5.0,
            })
        );
    }
}
