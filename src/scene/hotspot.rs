use std::fmt;
use std::time::Duration;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;

/// Stable hotspot identifier, unique within a registry.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct HotspotId(String);

impl HotspotId {
    /// Wrap a string id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HotspotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HotspotId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for HotspotId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Presentation state of a hotspot marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    /// Visible, not under the pointer.
    #[default]
    Idle,
    /// Visible and under the pointer.
    Hovered,
    /// Hidden while the camera moves or a hotspot is focused.
    Hidden,
}

/// An interactive focal point of the room.
///
/// Everything but the visual state is fixed when the scene loads. The
/// visual state is only written by the hit tester and the navigation
/// controller.
#[derive(Debug, Clone)]
pub struct Hotspot {
    id: HotspotId,
    anchor: Vec3,
    radius: f32,
    view_target: CameraPose,
    transition: Option<Duration>,
    visual_state: VisualState,
}

impl Hotspot {
    /// Hotspot with a bounding sphere of `radius` around `anchor`, focused
    /// from `view_target`.
    #[must_use]
    pub fn new(
        id: impl Into<HotspotId>,
        anchor: Vec3,
        radius: f32,
        view_target: CameraPose,
    ) -> Self {
        Self {
            id: id.into(),
            anchor,
            radius,
            view_target,
            transition: None,
            visual_state: VisualState::Idle,
        }
    }

    /// Override the transition duration for moves into and out of this
    /// hotspot.
    #[must_use]
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition = Some(duration);
        self
    }

    /// Identifier.
    #[must_use]
    pub fn id(&self) -> &HotspotId {
        &self.id
    }

    /// World-space anchor (bounding sphere center).
    #[must_use]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Bounding sphere radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Camera pose when this hotspot is focused.
    #[must_use]
    pub fn view_target(&self) -> CameraPose {
        self.view_target
    }

    /// Per-hotspot transition duration, if overridden.
    #[must_use]
    pub fn transition_duration(&self) -> Option<Duration> {
        self.transition
    }

    /// Current presentation state.
    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        self.visual_state
    }

    pub(crate) fn set_visual_state(&mut self, state: VisualState) {
        self.visual_state = state;
    }
}
