//! Builds the hotspot registry from a scene config once assets are loaded.
//!
//! Anchors that name scene nodes are resolved through a [`SceneGraph`]
//! supplied by the asset loader. A node that cannot be found drops that one
//! hotspot with a warning; the rest of the room still loads.

use std::time::Duration;

use glam::Vec3;
use rustc_hash::FxHashMap;

use super::hotspot::Hotspot;
use super::registry::HotspotRegistry;
use crate::error::RoomError;
use crate::options::{AnchorConfig, HotspotConfig, SceneConfig};

/// Named-node lookup provided by the external scene loader.
pub trait SceneGraph {
    /// World-space position of the node called `name`, if present.
    fn resolve_node(&self, name: &str) -> Option<Vec3>;
}

/// In-memory [`SceneGraph`]: node name to world position.
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    nodes: FxHashMap<String, Vec3>,
}

impl NodeTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a node.
    pub fn insert(&mut self, name: impl Into<String>, position: Vec3) {
        let _ = self.nodes.insert(name.into(), position);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_node(mut self, name: impl Into<String>, position: Vec3) -> Self {
        self.insert(name, position);
        self
    }
}

impl SceneGraph for NodeTable {
    fn resolve_node(&self, name: &str) -> Option<Vec3> {
        self.nodes.get(name).copied()
    }
}

/// Outcome of loading a scene's hotspots.
#[derive(Debug)]
pub struct LoadedScene {
    /// Hotspots that resolved, in config order.
    pub registry: HotspotRegistry,
    /// One entry per hotspot that was skipped.
    pub skipped: Vec<RoomError>,
}

/// Resolve every configured hotspot and register the ones that succeed.
#[must_use]
pub fn build_registry(config: &SceneConfig, graph: &dyn SceneGraph) -> LoadedScene {
    let mut registry = HotspotRegistry::new();
    let mut skipped = Vec::new();

    for entry in &config.hotspots {
        let result = resolve_hotspot(config, entry, graph)
            .and_then(|hotspot| registry.register(hotspot));
        if let Err(e) = result {
            log::warn!("skipping hotspot: {e}");
            skipped.push(e);
        }
    }

    log::info!(
        "scene loaded: {} hotspots ({} skipped)",
        registry.len(),
        skipped.len()
    );
    LoadedScene { registry, skipped }
}

fn resolve_hotspot(
    config: &SceneConfig,
    entry: &HotspotConfig,
    graph: &dyn SceneGraph,
) -> Result<Hotspot, RoomError> {
    let anchor = match &entry.anchor {
        AnchorConfig::Point(p) => Vec3::from_array(*p),
        AnchorConfig::Node(name) => {
            graph
                .resolve_node(name)
                .ok_or_else(|| RoomError::UnresolvedAnchor {
                    hotspot: entry.id.clone(),
                    node: name.clone(),
                })?
        }
    };

    let view_target = entry.view.as_ref().map_or_else(
        || config.camera.focus_pose(anchor),
        |view| view.pose(),
    );

    let mut hotspot =
        Hotspot::new(entry.id.clone(), anchor, entry.radius, view_target);
    if let Some(ms) = entry.duration_ms {
        hotspot = hotspot.with_transition_duration(Duration::from_millis(ms));
    }
    Ok(hotspot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ViewConfig;
    use crate::scene::HotspotId;

    fn config(hotspots: Vec<HotspotConfig>) -> SceneConfig {
        SceneConfig {
            hotspots,
            ..SceneConfig::default()
        }
    }

    #[test]
    fn resolves_nodes_and_points() {
        let cfg = config(vec![
            HotspotConfig::at_node("books", "shelf_top"),
            HotspotConfig::at_point("future", [1.0, 2.0, 3.0]),
        ]);
        let graph = NodeTable::new().with_node("shelf_top", Vec3::new(-2.0, 1.8, -3.0));

        let loaded = build_registry(&cfg, &graph);
        assert!(loaded.skipped.is_empty());
        let books = loaded.registry.get(&HotspotId::from("books")).unwrap();
        assert_eq!(books.anchor(), Vec3::new(-2.0, 1.8, -3.0));
        let future = loaded.registry.get(&HotspotId::from("future")).unwrap();
        assert_eq!(future.anchor(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn unresolved_anchor_skips_only_that_hotspot() {
        let cfg = config(vec![
            HotspotConfig::at_point("about", [0.0, 1.0, 0.0]),
            HotspotConfig::at_node("books", "missing_node"),
            HotspotConfig::at_point("future", [1.0, 1.0, 0.0]),
        ]);

        let loaded = build_registry(&cfg, &NodeTable::new());
        let ids: Vec<&str> = loaded.registry.ids().map(HotspotId::as_str).collect();
        assert_eq!(ids, ["about", "future"]);
        assert_eq!(loaded.skipped.len(), 1);
        assert!(matches!(
            &loaded.skipped[0],
            RoomError::UnresolvedAnchor { node, .. } if node == "missing_node"
        ));
    }

    #[test]
    fn duplicate_ids_keep_the_first() {
        let cfg = config(vec![
            HotspotConfig::at_point("clock", [0.0, 2.0, 0.0]),
            HotspotConfig::at_point("clock", [9.0, 9.0, 9.0]),
        ]);
        let loaded = build_registry(&cfg, &NodeTable::new());
        assert_eq!(loaded.registry.len(), 1);
        assert!(matches!(loaded.skipped[0], RoomError::DuplicateHotspot(_)));
    }

    #[test]
    fn explicit_view_wins_over_derived() {
        let mut entry = HotspotConfig::at_point("window", [3.0, 2.0, -2.0]);
        entry.view = Some(ViewConfig {
            position: [1.0, 2.0, 0.0],
            look_at: [3.0, 2.0, -2.0],
        });
        entry.duration_ms = Some(900);
        let loaded = build_registry(&config(vec![entry]), &NodeTable::new());

        let window = loaded.registry.get(&HotspotId::from("window")).unwrap();
        assert_eq!(window.view_target().position, Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(window.transition_duration(), Some(Duration::from_millis(900)));
    }

    #[test]
    fn derived_view_looks_at_anchor_from_overview_side() {
        let cfg = config(vec![HotspotConfig::at_point("ps5", [0.0, 0.0, -4.0])]);
        let loaded = build_registry(&cfg, &NodeTable::new());
        let ps5 = loaded.registry.get(&HotspotId::from("ps5")).unwrap();

        let view = ps5.view_target();
        assert_eq!(view.look_at, Vec3::new(0.0, 0.0, -4.0));
        let distance = view.position.distance(view.look_at);
        assert!((distance - cfg.camera.focus_distance).abs() < 1e-4);
        // Camera sits between the anchor and the overview eye.
        let overview = cfg.camera.overview_pose().position;
        assert!(view.position.distance(overview) < ps5.anchor().distance(overview));
    }
}
