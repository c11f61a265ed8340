//! Per-hotspot activation handlers.
//!
//! Hotspot-specific side effects (narration cues, analytics, preloading
//! content) hang off a single table keyed by the hit tester's resolved id,
//! instead of one callback wired into each hotspot object.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::scene::{Hotspot, HotspotId};

/// Reacts to a hotspot being activated (an accepted focus request).
pub trait HotspotHandler {
    /// Called once per accepted focus, before the camera starts moving.
    fn on_activate(&mut self, hotspot: &Hotspot);
}

impl<F: FnMut(&Hotspot)> HotspotHandler for F {
    fn on_activate(&mut self, hotspot: &Hotspot) {
        self(hotspot);
    }
}

/// `HotspotId → handler` table with an optional fallback.
#[derive(Default)]
pub struct DispatchTable {
    handlers: FxHashMap<HotspotId, Box<dyn HotspotHandler>>,
    fallback: Option<Box<dyn HotspotHandler>>,
}

impl DispatchTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for `id`, replacing any previous one.
    pub fn register(&mut self, id: impl Into<HotspotId>, handler: impl HotspotHandler + 'static) {
        let _ = self.handlers.insert(id.into(), Box::new(handler));
    }

    /// Handler for hotspots without a dedicated entry.
    pub fn set_fallback(&mut self, handler: impl HotspotHandler + 'static) {
        self.fallback = Some(Box::new(handler));
    }

    /// Run the handler for `hotspot`. Returns whether one ran.
    pub fn dispatch(&mut self, hotspot: &Hotspot) -> bool {
        let Some(handler) = self
            .handlers
            .get_mut(hotspot.id())
            .or(self.fallback.as_mut())
        else {
            return false;
        };
        handler.on_activate(hotspot);
        true
    }

    /// Number of dedicated handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the table has neither dedicated handlers nor a fallback.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty() && self.fallback.is_none()
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.handlers.keys().map(HotspotId::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("DispatchTable")
            .field("handlers", &ids)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
