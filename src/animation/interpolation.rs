//! Interpolation primitives shared by every pose type.

use glam::Vec3;

/// A pose that can be blended toward another pose of the same type.
///
/// `t` is already eased; implementations interpolate linearly on each
/// component and must return `self` at `t = 0` and `target` at `t = 1`.
pub trait Interpolate: Copy {
    /// Blend from `self` toward `target` by `t` in [0, 1].
    #[must_use]
    fn interpolate(&self, target: &Self, t: f32) -> Self;
}

/// Linear interpolation between two Vec3 positions.
#[inline]
#[must_use]
pub fn lerp_vec3(t: f32, start: Vec3, end: Vec3) -> Vec3 {
    start + (end - start) * t
}

/// Linear interpolation between two scalars.
#[inline]
#[must_use]
pub fn lerp_f32(t: f32, start: f32, end: f32) -> f32 {
    start + (end - start) * t
}
