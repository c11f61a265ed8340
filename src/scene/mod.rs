//! Room scene: hotspot types, the registry, and scene loading.

mod hotspot;
pub mod loader;
mod registry;

pub use hotspot::{Hotspot, HotspotId, VisualState};
pub use loader::{build_registry, LoadedScene, NodeTable, SceneGraph};
pub use registry::HotspotRegistry;
