use std::fmt;

use thiserror::Error;

/// Which measured rectangle an [`InvalidLayout`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectName {
    Window,
    Trigger,
    Options,
    SafeArea,
}

impl fmt::Display for RectName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Window => "window layout",
            Self::Trigger => "trigger layout",
            Self::Options => "options layout",
            Self::SafeArea => "safe-area layout",
        };
        formatter.write_str(name)
    }
}

/// Rejected layout input.
///
/// Positioning never runs on malformed measurements; `NaN` coordinates and
/// negative dimensions are reported here instead of leaking into a position.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidLayout {
    #[error("{rect} has a negative {dimension}: {value}")]
    NegativeDimension {
        rect: RectName,
        dimension: &'static str,
        value: f64,
    },
    #[error("{rect} contains a non-finite coordinate")]
    NonFinite { rect: RectName },
}
