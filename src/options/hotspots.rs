use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::scene::HotspotId;

/// Where a hotspot sits in the room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AnchorConfig {
    /// Position of a named scene-graph node, resolved at load time.
    Node(String),
    /// Fixed world coordinate.
    Point([f32; 3]),
}

/// Explicit focused camera pose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewConfig {
    /// Eye position.
    pub position: [f32; 3],
    /// Look-at point.
    pub look_at: [f32; 3],
}

impl ViewConfig {
    /// As a camera pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(
            Vec3::from_array(self.position),
            Vec3::from_array(self.look_at),
        )
    }
}

fn default_radius() -> f32 {
    0.3
}

/// One `[[hotspots]]` entry of a scene config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotspotConfig {
    /// Unique id.
    pub id: HotspotId,
    /// Anchor node or point.
    pub anchor: AnchorConfig,
    /// Hit sphere radius.
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Focused pose; derived from the anchor when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,
    /// Transition duration override, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl HotspotConfig {
    /// Hotspot anchored to a named scene node.
    #[must_use]
    pub fn at_node(id: impl Into<HotspotId>, node: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            anchor: AnchorConfig::Node(node.into()),
            radius: default_radius(),
            view: None,
            duration_ms: None,
        }
    }

    /// Hotspot anchored to a fixed point.
    #[must_use]
    pub fn at_point(id: impl Into<HotspotId>, point: [f32; 3]) -> Self {
        Self {
            id: id.into(),
            anchor: AnchorConfig::Point(point),
            radius: default_radius(),
            view: None,
            duration_ms: None,
        }
    }

    /// Builder-style radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

/// The eight focal points of the default study room.
pub(super) fn default_room() -> Vec<HotspotConfig> {
    vec![
        HotspotConfig::at_point("person", [0.0, 1.1, -0.6]).with_radius(0.5),
        HotspotConfig::at_point("monitor", [0.8, 1.3, -2.6]).with_radius(0.35),
        HotspotConfig::at_point("ps5", [-1.2, 0.35, -2.2]).with_radius(0.25),
        HotspotConfig::at_point("pc", [-1.8, 0.7, -2.7]).with_radius(0.35),
        HotspotConfig::at_point("bonsai", [-2.6, 1.0, -1.8]).with_radius(0.25),
        HotspotConfig::at_point("clock", [-0.9, 2.3, -2.9]).with_radius(0.2),
        HotspotConfig::at_point("lavalamp", [-2.8, 0.9, -0.9]).with_radius(0.2),
        HotspotConfig::at_point("window", [2.6, 1.8, -2.0]).with_radius(0.6),
    ]
}
