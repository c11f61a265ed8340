//! Animation runner executes a single transition.

use std::time::Duration;

use super::interpolation::Interpolate;
use super::transition::Transition;

/// Executes a single transition from a start pose to a target pose.
///
/// Times are points on the session clock
/// ([`FrameClock::now`](crate::util::clock::FrameClock::now)).
#[derive(Debug, Clone)]
pub struct TransitionRunner<P> {
    /// Pose captured when the transition started.
    from: P,
    /// Pose the transition ends on.
    to: P,
    /// Session time the transition started.
    start_time: Duration,
    /// Timing and easing.
    transition: Transition,
}

impl<P: Interpolate> TransitionRunner<P> {
    /// Start a new run at session time `start_time`.
    #[must_use]
    pub fn new(from: P, to: P, transition: Transition, start_time: Duration) -> Self {
        Self {
            from,
            to,
            start_time,
            transition,
        }
    }

    /// Timing and easing of this run.
    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Target pose.
    #[must_use]
    pub fn target(&self) -> P {
        self.to
    }

    /// Calculate normalized progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.start_time);
        let duration = self.transition.duration;

        if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
        }
    }

    /// Whether the run has reached its target.
    #[must_use]
    pub fn is_complete(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated pose at session time `now`. Exactly the target once
    /// complete.
    #[must_use]
    pub fn pose_at(&self, now: Duration) -> P {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from.interpolate(&self.to, self.transition.eased_t(t))
    }
}
