//! Overlay configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::AnimationBackend;

/// Default length of the open transition.
pub const OPEN_ANIM_DURATION: Duration = Duration::from_millis(225);
/// Default length of the close transition.
pub const CLOSE_ANIM_DURATION: Duration = Duration::from_millis(195);

/// Configuration consumed by the presentation shell.
///
/// The geometry core takes no configuration; durations and the backend flag
/// only shape the open/close transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub open_duration: Duration,
    pub close_duration: Duration,
    pub backend: AnimationBackend,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            open_duration: OPEN_ANIM_DURATION,
            close_duration: CLOSE_ANIM_DURATION,
            backend: AnimationBackend::Timer,
        }
    }
}

impl MenuConfig {
    /// Configuration whose transitions complete synchronously.
    pub fn immediate() -> Self {
        Self {
            backend: AnimationBackend::Immediate,
            ..Self::default()
        }
    }
}
