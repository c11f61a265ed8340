use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, overview pose, and focus framing.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Viewport aspect ratio (width / height).
    #[schemars(skip)]
    pub aspect: f32,
    /// Eye position of the overview.
    #[schemars(skip)]
    pub overview_position: [f32; 3],
    /// Look-at point of the overview.
    #[schemars(skip)]
    pub overview_look_at: [f32; 3],
    /// Eye distance from the anchor for hotspots without an explicit view.
    #[schemars(title = "Focus Distance", range(min = 0.25, max = 5.0), extend("step" = 0.05))]
    pub focus_distance: f32,
}

impl CameraOptions {
    /// The default room view.
    #[must_use]
    pub fn overview_pose(&self) -> CameraPose {
        CameraPose::new(
            Vec3::from_array(self.overview_position),
            Vec3::from_array(self.overview_look_at),
        )
    }

    /// Focused pose for an anchor: look at it from `focus_distance` away,
    /// on the side facing the overview eye.
    #[must_use]
    pub fn focus_pose(&self, anchor: Vec3) -> CameraPose {
        let toward_eye = (Vec3::from_array(self.overview_position) - anchor)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        CameraPose::new(anchor + toward_eye * self.focus_distance, anchor)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 50.0,
            znear: 0.05,
            zfar: 100.0,
            aspect: 16.0 / 9.0,
            overview_position: [0.0, 1.6, 4.5],
            overview_look_at: [0.0, 1.1, -1.5],
            focus_distance: 1.2,
        }
    }
}
