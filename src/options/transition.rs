use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::Transition;
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Transitions", inline)]
#[serde(default)]
/// Camera move timing for focusing a hotspot and returning to the overview.
pub struct TransitionOptions {
    /// Duration of the move into a hotspot, in milliseconds.
    #[schemars(title = "Focus Duration (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub focus_ms: u64,
    /// Duration of the move back to the overview, in milliseconds.
    #[schemars(title = "Return Duration (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub return_ms: u64,
    /// Easing of the move into a hotspot.
    #[schemars(title = "Focus Easing")]
    pub focus_easing: EasingFunction,
    /// Easing of the move back to the overview.
    #[schemars(title = "Return Easing")]
    pub return_easing: EasingFunction,
}

impl TransitionOptions {
    /// Transition into a hotspot, honoring a per-hotspot duration override.
    #[must_use]
    pub fn focus(&self, override_duration: Option<Duration>) -> Transition {
        Transition::new(
            override_duration.unwrap_or(Duration::from_millis(self.focus_ms)),
            self.focus_easing,
        )
    }

    /// Transition back to the overview, honoring a per-hotspot duration
    /// override.
    #[must_use]
    pub fn overview(&self, override_duration: Option<Duration>) -> Transition {
        Transition::new(
            override_duration.unwrap_or(Duration::from_millis(self.return_ms)),
            self.return_easing,
        )
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            focus_ms: 2200,
            return_ms: 1800,
            focus_easing: EasingFunction::CubicInOut,
            return_easing: EasingFunction::CubicInOut,
        }
    }
}
