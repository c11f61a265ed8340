//! Scene configuration with TOML preset support.
//!
//! A [`SceneConfig`] describes one room variant: camera projection and
//! overview pose, transition timing, the hotspot set, and key bindings.
//! Room variants (different FOV, control limits, or hotspot sets) are
//! presets stored in `assets/scenes/`, not separate code paths.

mod camera;
mod hotspots;
mod transition;

use std::path::Path;

pub use camera::CameraOptions;
pub use hotspots::{AnchorConfig, HotspotConfig, ViewConfig};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::RoomError;
use crate::input::KeyBindings;

/// Top-level scene config. All sections use `#[serde(default)]` so partial
/// TOML files (e.g. only overriding `[transition]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct SceneConfig {
    /// Display name of the room variant.
    pub name: String,
    /// Camera projection and overview pose.
    pub camera: CameraOptions,
    /// Focus/return timing.
    pub transition: TransitionOptions,
    /// Hotspots, in registration order.
    #[schemars(skip)]
    pub hotspots: Vec<HotspotConfig>,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            name: "study".to_owned(),
            camera: CameraOptions::default(),
            transition: TransitionOptions::default(),
            hotspots: hotspots::default_room(),
            keybindings: KeyBindings::default(),
        }
    }
}

impl SceneConfig {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(SceneConfig)
    }

    /// Parse a config from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`RoomError::ConfigParse`] if the text is not a valid config.
    pub fn from_toml(content: &str) -> Result<Self, RoomError> {
        toml::from_str(content).map_err(|e| RoomError::ConfigParse(e.to_string()))
    }

    /// Load a config from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`RoomError::Io`] if the file cannot be read, or
    /// [`RoomError::ConfigParse`] if it is not a valid config.
    pub fn load(path: &Path) -> Result<Self, RoomError> {
        let content = std::fs::read_to_string(path).map_err(RoomError::Io)?;
        Self::from_toml(&content)
    }

    /// Save the config to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`RoomError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), RoomError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoomError::ConfigParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RoomError::Io)?;
        }
        std::fs::write(path, content).map_err(RoomError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn save_then_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("roomview-save-{}", std::process::id()));
        let path = dir.join("presets").join("gallery.toml");
        let cfg = SceneConfig {
            name: "gallery".to_owned(),
            hotspots: vec![HotspotConfig::at_point("rug", [0.0, 0.0, 0.0])],
            ..SceneConfig::default()
        };

        cfg.save(&path).unwrap();
        let loaded = SceneConfig::load(&path).unwrap();
        assert_eq!(loaded, cfg);
        assert_eq!(SceneConfig::list_presets(&dir.join("presets")), ["gallery"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn default_round_trips_through_toml() {
        let cfg = SceneConfig::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed = SceneConfig::from_toml(&toml_str).unwrap();
        assert_eq!(cfg, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[transition]
focus_ms = 1500
focus_easing = "expo_in_out"
"#;
        let cfg = SceneConfig::from_toml(toml_str).unwrap();
        assert_eq!(cfg.transition.focus_ms, 1500);
        assert_eq!(cfg.transition.focus_easing, EasingFunction::ExpoInOut);
        // Everything else should be default
        assert_eq!(cfg.transition.return_ms, 1800);
        assert_eq!(cfg.camera, CameraOptions::default());
        assert_eq!(cfg.hotspots.len(), 8);
    }

    #[test]
    fn hotspot_entries_parse() {
        let toml_str = r#"
name = "gallery"

[[hotspots]]
id = "about"
anchor = { node = "portrait" }

[[hotspots]]
id = "books"
anchor = { point = [-2.0, 1.5, -3.0] }
radius = 0.6
duration_ms = 900
view = { position = [-1.0, 1.5, -1.0], look_at = [-2.0, 1.5, -3.0] }
"#;
        let cfg = SceneConfig::from_toml(toml_str).unwrap();
        assert_eq!(cfg.name, "gallery");
        assert_eq!(cfg.hotspots.len(), 2);
        assert_eq!(cfg.hotspots[0].anchor, AnchorConfig::Node("portrait".to_owned()));
        assert_eq!(cfg.hotspots[0].radius, 0.3);
        assert_eq!(cfg.hotspots[1].radius, 0.6);
        assert_eq!(cfg.hotspots[1].duration_ms, Some(900));
        assert!(cfg.hotspots[1].view.is_some());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SceneConfig::from_toml("[camera]\nfovy = \"wide\"").unwrap_err();
        assert!(matches!(err, RoomError::ConfigParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        use crate::engine::NavCommand;
        let cfg = SceneConfig::default();
        assert_eq!(cfg.keybindings.lookup("Escape"), Some(NavCommand::Return));
        assert_eq!(cfg.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value = serde_json::to_value(SceneConfig::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("transition"));

        // Skipped sections should be absent
        assert!(!props.contains_key("hotspots"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }

    #[test]
    fn bundled_presets_parse() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/scenes");
        let names = SceneConfig::list_presets(&dir);
        assert!(names.contains(&"study".to_owned()));
        for name in names {
            let cfg = SceneConfig::load(&dir.join(format!("{name}.toml"))).unwrap();
            assert!(!cfg.hotspots.is_empty(), "{name} has no hotspots");
        }
    }
}
