//! Camera types for room navigation.
//!
//! Provides the perspective camera with NDC unprojection used for picking,
//! the 3D pose that transitions interpolate, and the flat 2D viewport pose
//! of the image-zoom room variant.

/// Perspective camera, pose, and ray types.
pub mod core;
/// 2D scale/offset pose.
pub mod viewport;

pub use self::core::{Camera, CameraPose, Ray};
pub use viewport::ViewportPose;
