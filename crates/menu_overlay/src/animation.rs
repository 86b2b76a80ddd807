//! Scale-fade transition driver.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// Selects how transition completion is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationBackend {
    /// Completion follows the tokio clock; requires a running runtime.
    #[default]
    Timer,
    /// Transitions complete synchronously. Used headless and in tests.
    Immediate,
}

/// Easing curves used by the open/close transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Accelerating cubic; the close transition.
    CubicIn,
    /// Decelerating cubic; the open transition.
    CubicOut,
}

impl Easing {
    /// Map normalized time `t` in `[0, 1]` onto the curve. Inputs outside
    /// the unit interval are clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let remaining = 1.0 - t;
                1.0 - remaining * remaining * remaining
            }
        }
    }
}

/// One in-flight animation of the driven scale/opacity value.
///
/// Sampling is pure: the value at any instant is a function of the start
/// instant, endpoints, duration, and easing. The overlay swaps in a new
/// `Transition` on each state change rather than mutating this one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f64,
    to: f64,
    duration: Duration,
    easing: Easing,
    started: Instant,
}

impl Transition {
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing, started: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            started,
        }
    }

    /// A transition already sitting at `value`.
    pub fn settled(value: f64, now: Instant) -> Self {
        Self::new(value, value, Duration::ZERO, Easing::CubicOut, now)
    }

    /// Sample the driven value. Clamps to the endpoints outside the
    /// transition's time range.
    pub fn value_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// The value the transition is heading towards.
    pub const fn target(&self) -> f64 {
        self.to
    }

    /// Instant at which the transition reaches its target.
    pub fn end(&self) -> Instant {
        self.started + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [Easing::CubicIn, Easing::CubicOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn easing_clamps_out_of_range_time() {
        assert_eq!(Easing::CubicIn.apply(-2.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(3.0), 1.0);
    }

    #[test]
    fn cubic_in_starts_slow_cubic_out_starts_fast() {
        assert!(Easing::CubicIn.apply(0.5) < 0.5);
        assert!(Easing::CubicOut.apply(0.5) > 0.5);
    }

    #[test]
    fn transition_samples_endpoints_and_midrange() {
        let start = Instant::now();
        let transition = Transition::new(
            0.1,
            1.0,
            Duration::from_millis(200),
            Easing::CubicOut,
            start,
        );

        assert_eq!(transition.value_at(start), 0.1);
        assert_eq!(transition.value_at(start + Duration::from_millis(200)), 1.0);
        assert_eq!(transition.value_at(start + Duration::from_secs(5)), 1.0);

        let mid = transition.value_at(start + Duration::from_millis(100));
        assert!(mid > 0.1 && mid < 1.0, "mid sample {mid} out of range");
    }

    #[test]
    fn sampling_before_start_returns_the_origin() {
        let start = Instant::now() + Duration::from_secs(1);
        let transition = Transition::new(
            1.0,
            0.0,
            Duration::from_millis(200),
            Easing::CubicIn,
            start,
        );
        assert_eq!(transition.value_at(Instant::now()), 1.0);
    }

    #[test]
    fn settled_transition_holds_its_value() {
        let now = Instant::now();
        let transition = Transition::settled(1.0, now);
        assert_eq!(transition.value_at(now), 1.0);
        assert_eq!(transition.value_at(now + Duration::from_secs(1)), 1.0);
    }
}
