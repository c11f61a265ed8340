//! Transition describes how a pose change is animated: how long it takes
//! and which easing curve shapes it.

use std::time::Duration;

use crate::util::easing::EasingFunction;

/// Timing and easing for one camera move.
///
/// Consumers usually get these from
/// [`TransitionOptions`](crate::options::TransitionOptions); the preset
/// constructors cover tests and ad-hoc drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Total duration of the move.
    pub duration: Duration,
    /// Easing curve applied to normalized elapsed time.
    pub easing: EasingFunction,
}

impl Transition {
    /// Create a transition with explicit timing.
    #[must_use]
    pub const fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self { duration, easing }
    }

    /// Zero-duration move; completes on the first update.
    #[must_use]
    pub const fn snap() -> Self {
        Self {
            duration: Duration::ZERO,
            easing: EasingFunction::Linear,
        }
    }

    /// Standard focus move (2.2s, cubic in-out).
    #[must_use]
    pub const fn focus() -> Self {
        Self {
            duration: Duration::from_millis(2200),
            easing: EasingFunction::CubicInOut,
        }
    }

    /// Standard return move (1.8s, cubic in-out).
    #[must_use]
    pub const fn overview() -> Self {
        Self {
            duration: Duration::from_millis(1800),
            easing: EasingFunction::CubicInOut,
        }
    }

    /// Same easing, different duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Eased time for a given raw progress.
    #[inline]
    #[must_use]
    pub fn eased_t(&self, t: f32) -> f32 {
        self.easing.evaluate(t)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::focus()
    }
}
