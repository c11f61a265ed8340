//! Frame-delta session clock.

use std::time::Duration;

/// Session clock driven by the render loop's per-frame deltas.
///
/// Transitions measure progress against [`now`](Self::now) rather than
/// counting frames, so irregular or throttled frame rates never stretch or
/// shrink a transition.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Total time since the session started.
    now: Duration,
    /// Number of frames advanced.
    frames: u64,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock at session time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            frames: 0,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Advance by one frame and return the new session time.
    pub fn advance(&mut self, dt: Duration) -> Duration {
        self.now = self.now.saturating_add(dt);
        self.frames += 1;

        let frame_time = dt.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.now
    }

    /// Current session time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Frames advanced so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
