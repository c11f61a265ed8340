use serde::{Deserialize, Serialize};

use crate::animation::interpolation::{lerp_f32, Interpolate};

/// Flat 2D viewpoint over a single backdrop image: a zoom factor plus an
/// offset expressed as a percentage of the backdrop's size.
///
/// This is the pose of the image-zoom room variant; it tweens through the
/// same [`CameraAnimator`](crate::animation::CameraAnimator) as
/// [`CameraPose`](super::CameraPose).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportPose {
    /// Zoom factor (1.0 = whole backdrop visible).
    pub scale: f32,
    /// Horizontal offset in percent of backdrop width.
    pub offset_x: f32,
    /// Vertical offset in percent of backdrop height.
    pub offset_y: f32,
}

impl ViewportPose {
    /// Unzoomed, centered backdrop.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    /// Create a viewport pose.
    #[must_use]
    pub const fn new(scale: f32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            scale,
            offset_x,
            offset_y,
        }
    }
}

impl Default for ViewportPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Interpolate for ViewportPose {
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        Self {
            scale: lerp_f32(t, self.scale, target.scale),
            offset_x: lerp_f32(t, self.offset_x, target.offset_x),
            offset_y: lerp_f32(t, self.offset_y, target.offset_y),
        }
    }
}
