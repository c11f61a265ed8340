//! CPU ray picking against hotspot bounding spheres.
//!
//! NDC pointer positions are unprojected through the camera's inverse
//! view-projection into a world ray, then tested against every hotspot's
//! sphere. The nearest hit along the ray wins; equal distances go to the
//! hotspot registered first.

use glam::{Vec2, Vec3};

use crate::camera::{Camera, Ray};
use crate::navigation::ViewState;
use crate::scene::{Hotspot, HotspotId, HotspotRegistry, VisualState};

/// Resolves pointer positions to hotspots and maintains hover highlighting.
///
/// Both operations return nothing while a camera transition is in flight,
/// mirroring the navigation controller's input guard.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitTester;

impl HitTester {
    /// Create a hit tester.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hotspot under the NDC point, if any.
    ///
    /// Every registered volume is tested, including hidden ones, so the
    /// focused hotspot can be clicked again to toggle back out.
    #[must_use]
    pub fn pick(
        &self,
        camera: &Camera,
        registry: &HotspotRegistry,
        view: &ViewState,
        ndc: Vec2,
    ) -> Option<HotspotId> {
        if view.is_animating() {
            return None;
        }
        let ray = camera.ndc_to_ray(ndc);
        nearest_hit(&ray, registry.all()).map(|h| h.id().clone())
    }

    /// Refresh hover highlighting for a pointer move.
    ///
    /// The nearest visible hotspot under the pointer becomes
    /// [`VisualState::Hovered`], every other visible hotspot
    /// [`VisualState::Idle`]. Hidden hotspots are neither hit nor touched.
    /// Returns the hovered id for the caller to record.
    pub fn update_hover(
        &self,
        camera: &Camera,
        registry: &mut HotspotRegistry,
        view: &ViewState,
        ndc: Vec2,
    ) -> Option<HotspotId> {
        if view.is_animating() {
            return None;
        }

        let ray = camera.ndc_to_ray(ndc);
        let hovered = nearest_hit(
            &ray,
            registry
                .all()
                .filter(|h| h.visual_state() != VisualState::Hidden),
        )
        .map(|h| h.id().clone());

        let visible: Vec<HotspotId> = registry
            .all()
            .filter(|h| h.visual_state() != VisualState::Hidden)
            .map(|h| h.id().clone())
            .collect();
        for id in &visible {
            let state = if hovered.as_ref() == Some(id) {
                VisualState::Hovered
            } else {
                VisualState::Idle
            };
            registry.set_visual_state(id, state);
        }

        hovered
    }
}

/// Nearest sphere hit along the ray; the first hotspot wins exact ties.
fn nearest_hit<'a>(
    ray: &Ray,
    hotspots: impl Iterator<Item = &'a Hotspot>,
) -> Option<&'a Hotspot> {
    let mut closest_t = f32::INFINITY;
    let mut closest = None;

    for hotspot in hotspots {
        if let Some(t) = ray_sphere_intersect(
            ray.origin,
            ray.direction,
            hotspot.anchor(),
            hotspot.radius(),
        ) {
            if t < closest_t {
                closest_t = t;
                closest = Some(hotspot);
            }
        }
    }

    closest
}

/// Ray-sphere intersection test
/// Returns the distance along the ray to the first intersection, or None if no hit
fn ray_sphere_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_dir.dot(ray_dir);
    let b = 2.0 * oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t > 0.0 {
        Some(t)
    } else {
        // Try the far intersection (we're inside the sphere)
        let t2 = (-b + discriminant.sqrt()) / (2.0 * a);
        (t2 > 0.0).then_some(t2)
    }
}
