//! Camera transition engine: owns at most one in-flight transition and
//! steps it once per frame.

use std::time::Duration;

use super::interpolation::Interpolate;
use super::runner::TransitionRunner;
use super::transition::Transition;

/// Result of stepping the animator for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionStep<P> {
    /// Transition still running; apply this pose for the frame.
    InProgress(P),
    /// Transition finished on this frame; the pose is exactly the target.
    /// Reported once per run.
    Completed(P),
}

impl<P: Copy> TransitionStep<P> {
    /// The pose to apply this frame.
    #[must_use]
    pub fn pose(&self) -> P {
        match self {
            Self::InProgress(pose) | Self::Completed(pose) => *pose,
        }
    }

    /// Whether this step finished the transition.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Drives pose transitions on the session clock.
///
/// A started transition always runs to completion; there is no
/// cancellation and no blending of two live transitions. Starting while a
/// run is in flight is refused.
#[derive(Debug)]
pub struct CameraAnimator<P> {
    active: Option<TransitionRunner<P>>,
    completed_runs: u64,
}

impl<P: Interpolate> CameraAnimator<P> {
    /// Create an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: None,
            completed_runs: 0,
        }
    }

    /// Begin a transition at session time `now`.
    ///
    /// Returns `false` (and leaves the running transition untouched) if one
    /// is already in flight.
    pub fn start(&mut self, from: P, to: P, transition: Transition, now: Duration) -> bool {
        if self.active.is_some() {
            log::warn!("camera transition already in flight; start refused");
            return false;
        }
        log::debug!(
            "camera transition started ({:?}, {})",
            transition.duration,
            transition.easing.name()
        );
        self.active = Some(TransitionRunner::new(from, to, transition, now));
        true
    }

    /// Step the active transition to session time `now`.
    ///
    /// Returns `None` when idle. The run is discarded on the step that
    /// reports [`TransitionStep::Completed`].
    pub fn update(&mut self, now: Duration) -> Option<TransitionStep<P>> {
        let runner = self.active.as_ref()?;

        if !runner.is_complete(now) {
            return Some(TransitionStep::InProgress(runner.pose_at(now)));
        }

        let target = runner.target();
        self.active = None;
        self.completed_runs += 1;
        log::debug!("camera transition complete");
        Some(TransitionStep::Completed(target))
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Normalized progress of the active transition, if any.
    #[must_use]
    pub fn progress(&self, now: Duration) -> Option<f32> {
        self.active.as_ref().map(|runner| runner.progress(now))
    }

    /// Number of transitions that have run to completion.
    #[must_use]
    pub fn completed_runs(&self) -> u64 {
        self.completed_runs
    }
}

impl<P: Interpolate> Default for CameraAnimator<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::{CameraPose, ViewportPose};
    use crate::util::easing::EasingFunction;

    fn pose(x: f32) -> CameraPose {
        CameraPose::new(Vec3::new(x, 0.0, 0.0), Vec3::ZERO)
    }

    #[test]
    fn idle_animator_yields_nothing() {
        let mut animator = CameraAnimator::<CameraPose>::new();
        assert!(animator.update(Duration::from_secs(1)).is_none());
        assert!(!animator.is_animating());
    }

    #[test]
    fn completes_exactly_once() {
        let mut animator = CameraAnimator::new();
        assert!(animator.start(pose(0.0), pose(4.0), Transition::focus(), Duration::ZERO));

        let mid = animator.update(Duration::from_millis(1100)).unwrap();
        assert!(!mid.is_completed());

        let done = animator.update(Duration::from_millis(2200)).unwrap();
        assert_eq!(done, TransitionStep::Completed(pose(4.0)));

        assert!(animator.update(Duration::from_millis(2300)).is_none());
        assert!(animator.update(Duration::from_secs(60)).is_none());
        assert_eq!(animator.completed_runs(), 1);
    }

    #[test]
    fn second_start_is_refused_while_running() {
        let mut animator = CameraAnimator::new();
        assert!(animator.start(pose(0.0), pose(1.0), Transition::focus(), Duration::ZERO));
        assert!(!animator.start(pose(0.0), pose(9.0), Transition::snap(), Duration::ZERO));

        let done = loop {
            let step = animator.update(Duration::from_secs(3)).unwrap();
            if step.is_completed() {
                break step;
            }
        };
        assert_eq!(done.pose(), pose(1.0));
    }

    #[test]
    fn irregular_frames_do_not_drift() {
        let transition = Transition::new(Duration::from_millis(1000), EasingFunction::Linear);
        let mut animator = CameraAnimator::new();
        assert!(animator.start(pose(0.0), pose(10.0), transition, Duration::ZERO));

        let mut now = Duration::ZERO;
        let mut frames = 0;
        for dt_ms in [16, 16, 300, 2, 2, 90, 500, 16, 16, 16, 16, 16] {
            now += Duration::from_millis(dt_ms);
            frames += 1;
            if animator.update(now).unwrap().is_completed() {
                break;
            }
        }
        // 16+16+300+2+2+90+500+16+16+16+16 = 990 < 1000, the 12th frame ends it.
        assert_eq!(frames, 12);
        assert_eq!(now, Duration::from_millis(1006));
    }

    #[test]
    fn drives_viewport_poses() {
        let mut animator = CameraAnimator::new();
        let target = ViewportPose::new(5.5, -18.0, 38.0);
        assert!(animator.start(
            ViewportPose::IDENTITY,
            target,
            Transition::new(Duration::from_millis(100), EasingFunction::Linear),
            Duration::ZERO,
        ));
        let half = animator.update(Duration::from_millis(50)).unwrap().pose();
        assert!((half.scale - 3.25).abs() < 1e-5);
        let done = animator.update(Duration::from_millis(100)).unwrap();
        assert_eq!(done, TransitionStep::Completed(target));
    }

    #[test]
    fn snap_completes_on_first_update() {
        let mut animator = CameraAnimator::new();
        assert!(animator.start(pose(0.0), pose(2.0), Transition::snap(), Duration::from_secs(1)));
        assert!(animator.progress(Duration::from_secs(1)).is_some());
        let step = animator.update(Duration::from_secs(1)).unwrap();
        assert!(step.is_completed());
    }
}
