//! Content surfaces and hotspot overlay visibility.
//!
//! The navigation controller never draws anything. It talks to two host
//! collaborators through the traits here: a [`ContentRenderer`] that shows
//! and hides each hotspot's content panel, and a [`HotspotVisuals`] that
//! toggles the in-world hotspot markers as a group.

mod gate;

use serde::{Deserialize, Serialize};

pub use gate::UiGate;

use crate::scene::HotspotId;

/// Payload handed to the host when a hotspot's content becomes visible.
///
/// Serializable so web hosts can forward it as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEvent {
    /// Hotspot whose content surface to show.
    pub hotspot_id: HotspotId,
}

/// Shows and hides per-hotspot content surfaces.
pub trait ContentRenderer {
    /// Make the hotspot's content visible.
    fn reveal(&mut self, event: &ContentEvent);
    /// Hide the hotspot's content.
    fn conceal(&mut self, hotspot: &HotspotId);
}

/// Toggles the in-world hotspot markers.
pub trait HotspotVisuals {
    /// Markers visible and interactive.
    fn show(&mut self);
    /// Markers hidden for the duration of a transition and while focused.
    fn hide(&mut self);
}

/// Content renderer that only logs. For headless hosts and the demo.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogContent;

impl ContentRenderer for LogContent {
    fn reveal(&mut self, event: &ContentEvent) {
        log::info!("content shown: {}", event.hotspot_id);
    }

    fn conceal(&mut self, hotspot: &HotspotId) {
        log::info!("content hidden: {hotspot}");
    }
}

/// Marker visuals that only log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogVisuals;

impl HotspotVisuals for LogVisuals {
    fn show(&mut self) {
        log::debug!("hotspot markers shown");
    }

    fn hide(&mut self) {
        log::debug!("hotspot markers hidden");
    }
}
