//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it came from a pointer, a key, a
//! host UI button, or a programmatic call, is a `NavCommand`. Consumers
//! construct commands and pass them to
//! [`RoomEngine::execute`](super::RoomEngine::execute).

use glam::Vec2;

use crate::scene::HotspotId;

/// A navigation request the engine can perform.
///
/// ```ignore
/// engine.execute(NavCommand::Select { ndc });
/// engine.execute(NavCommand::Return);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum NavCommand {
    /// Pointer moved; refresh hover highlighting.
    Hover {
        /// Pointer position in NDC.
        ndc: Vec2,
    },

    /// Primary click; pick a hotspot and navigate.
    Select {
        /// Click position in NDC.
        ndc: Vec2,
    },

    /// Fly to a hotspot by id.
    Focus {
        /// Target hotspot.
        hotspot: HotspotId,
    },

    /// Leave the focused hotspot.
    Return,
}
