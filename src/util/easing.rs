//! Easing functions for camera transitions.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]`, hits both endpoints exactly and
//! is monotonically non-decreasing, so a transition never overshoots its
//! target pose.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for transition curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Cubic ease-in-out: `4t³` below the midpoint, `1 − (−2t+2)³/2` above.
    #[default]
    CubicInOut,
    /// Cubic ease-out (fast start, slow settle). Used for content fades.
    CubicOut,
    /// Quartic ease-in-out. Softer shoulders than cubic; the return zoom.
    QuarticInOut,
    /// Exponential ease-in-out. Long hold at both ends; the focus zoom.
    ExpoInOut,
}

impl EasingFunction {
    /// Canonical camera easing.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingFunction::CubicOut => 1.0 - (1.0 - t).powi(3),
            EasingFunction::QuarticInOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            EasingFunction::ExpoInOut => {
                // Endpoints are pinned; the closed form only approaches them.
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    2f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            EasingFunction::Linear => "linear",
            EasingFunction::CubicInOut => "cubic_in_out",
            EasingFunction::CubicOut => "cubic_out",
            EasingFunction::QuarticInOut => "quartic_in_out",
            EasingFunction::ExpoInOut => "expo_in_out",
        }
    }
}
