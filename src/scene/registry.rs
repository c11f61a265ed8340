use rustc_hash::FxHashMap;

use super::hotspot::{Hotspot, HotspotId, VisualState};
use crate::error::RoomError;

/// The hotspots of one loaded room, in registration order.
///
/// Populated once at scene load; there is no removal. Iteration order is
/// registration order, which is also the hit-test tie-break order.
#[derive(Debug, Default)]
pub struct HotspotRegistry {
    hotspots: Vec<Hotspot>,
    index: FxHashMap<HotspotId, usize>,
}

impl HotspotRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hotspot.
    ///
    /// # Errors
    ///
    /// [`RoomError::DuplicateHotspot`] if the id is already registered.
    pub fn register(&mut self, hotspot: Hotspot) -> Result<(), RoomError> {
        if self.index.contains_key(hotspot.id()) {
            return Err(RoomError::DuplicateHotspot(hotspot.id().clone()));
        }
        let _ = self.index.insert(hotspot.id().clone(), self.hotspots.len());
        self.hotspots.push(hotspot);
        Ok(())
    }

    /// Look up a hotspot by id.
    ///
    /// # Errors
    ///
    /// [`RoomError::UnknownHotspot`] if the id is not registered.
    pub fn get(&self, id: &HotspotId) -> Result<&Hotspot, RoomError> {
        self.index
            .get(id)
            .map(|&i| &self.hotspots[i])
            .ok_or_else(|| RoomError::UnknownHotspot(id.clone()))
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &HotspotId) -> bool {
        self.index.contains_key(id)
    }

    /// All hotspots in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Hotspot> {
        self.hotspots.iter()
    }

    /// All ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &HotspotId> {
        self.hotspots.iter().map(Hotspot::id)
    }

    /// Number of registered hotspots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    /// Whether no hotspots are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    pub(crate) fn set_visual_state(&mut self, id: &HotspotId, state: VisualState) {
        if let Some(&i) = self.index.get(id) {
            self.hotspots[i].set_visual_state(state);
        }
    }

    pub(crate) fn set_all_visual_states(&mut self, state: VisualState) {
        for hotspot in &mut self.hotspots {
            hotspot.set_visual_state(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::CameraPose;

    fn hotspot(id: &str, x: f32) -> Hotspot {
        let anchor = Vec3::new(x, 0.0, 0.0);
        Hotspot::new(id, anchor, 0.5, CameraPose::new(anchor + Vec3::Z, anchor))
    }

    #[test]
    fn preserves_registration_order() {
        let mut registry = HotspotRegistry::new();
        for (i, id) in ["about", "books", "future"].iter().enumerate() {
            registry.register(hotspot(id, i as f32)).unwrap();
        }
        let ids: Vec<&str> = registry.ids().map(HotspotId::as_str).collect();
        assert_eq!(ids, ["about", "books", "future"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let registry = HotspotRegistry::new();
        let err = registry.get(&HotspotId::from("nowhere")).unwrap_err();
        assert!(matches!(err, RoomError::UnknownHotspot(id) if id.as_str() == "nowhere"));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = HotspotRegistry::new();
        registry.register(hotspot("clock", 0.0)).unwrap();
        let err = registry.register(hotspot("clock", 5.0)).unwrap_err();
        assert!(matches!(err, RoomError::DuplicateHotspot(_)));
        // The original registration is kept.
        let kept = registry.get(&HotspotId::from("clock")).unwrap();
        assert_eq!(kept.anchor(), Vec3::ZERO);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn visual_state_updates() {
        let mut registry = HotspotRegistry::new();
        registry.register(hotspot("pc", 0.0)).unwrap();
        registry.register(hotspot("ps5", 1.0)).unwrap();

        registry.set_visual_state(&HotspotId::from("pc"), VisualState::Hovered);
        assert_eq!(
            registry.get(&HotspotId::from("pc")).unwrap().visual_state(),
            VisualState::Hovered
        );

        registry.set_all_visual_states(VisualState::Hidden);
        assert!(registry.all().all(|h| h.visual_state() == VisualState::Hidden));
    }
}
