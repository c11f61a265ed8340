use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::animation::interpolation::{lerp_vec3, Interpolate};
use crate::options::CameraOptions;

/// Camera viewpoint: eye position plus the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Look-at target position.
    pub look_at: Vec3,
}

impl CameraPose {
    /// Create a pose from eye and target.
    #[must_use]
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Whether both points are within `max_abs_diff` of `other`'s.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f32) -> bool {
        self.position.abs_diff_eq(other.position, max_abs_diff)
            && self.look_at.abs_diff_eq(other.look_at, max_abs_diff)
    }
}

impl Interpolate for CameraPose {
    /// Position and look-at are interpolated independently.
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        Self {
            position: lerp_vec3(t, self.position, target.position),
            look_at: lerp_vec3(t, self.look_at, target.look_at),
        }
    }
}

/// World-space ray with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin (on the near plane for unprojected rays).
    pub origin: Vec3,
    /// Normalized direction.
    pub direction: Vec3,
}

/// Perspective camera defined by a pose and projection parameters.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Current eye and look-at.
    pub pose: CameraPose,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at the overview pose described by `options`.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            pose: options.overview_pose(),
            up: Vec3::Y,
            aspect: options.aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.pose.position, self.pose.look_at, self.view_up());
        // perspective_rh uses a [0,1] depth range
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Up vector for the view matrix. Falls back to a horizontal axis when
    /// the sight line runs (nearly) parallel to `up`, such as a camera
    /// looking straight down at the floor.
    fn view_up(&self) -> Vec3 {
        let Some(forward) = (self.pose.look_at - self.pose.position).try_normalize() else {
            return self.up;
        };
        if forward.dot(self.up).abs() < 0.999 {
            return self.up;
        }
        // Screen-up points away from the overview side of the room.
        if self.up.abs_diff_eq(Vec3::Z, 1e-3) || self.up.abs_diff_eq(Vec3::NEG_Z, 1e-3) {
            Vec3::Y
        } else {
            Vec3::NEG_Z
        }
    }

    /// Convert an NDC point (x right, y up, both in [-1, 1]) into a
    /// world-space ray starting on the near plane.
    #[must_use]
    pub fn ndc_to_ray(&self, ndc: Vec2) -> Ray {
        let inv_view_proj = self.build_matrix().inverse();

        // Unproject near and far points
        let world_near = inv_view_proj * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let world_far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);

        // Perspective divide
        let origin = world_near.truncate() / world_near.w;
        let far = world_far.truncate() / world_far.w;

        Ray {
            origin,
            direction: (far - origin).normalize(),
        }
    }

    /// Project a world point to NDC. `None` if the point is behind the eye.
    #[must_use]
    pub fn project(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.build_matrix() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}
