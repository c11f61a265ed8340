//! Converts raw pointer and key events into navigation commands.
//!
//! The `InputProcessor` owns the last pointer position and the key-binding
//! map. It is the only thing that sits between raw window events and the
//! engine's [`execute`](crate::RoomEngine::execute) method.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use crate::engine::NavCommand;

/// Maps physical key strings to [`NavCommand`] variants.
///
/// Key strings use the `KeyboardEvent.code` / winit `KeyCode` debug
/// format: `"Escape"`, `"Backspace"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the key-bindable subset of [`NavCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Close the focused hotspot and fly back to the overview.
    Return,
}

impl KeyCommandTag {
    fn to_command(self) -> NavCommand {
        match self {
            Self::Return => NavCommand::Return,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("Escape".into(), KeyCommandTag::Return),
            ("Backspace".into(), KeyCommandTag::Return),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NavCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}

/// Converts raw input into [`NavCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// if let Some(cmd) = input_processor.handle_key_press("Escape") {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Last pointer position in NDC, if the pointer has been seen.
    pointer: Option<Vec2>,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            pointer: None,
            key_bindings,
        }
    }

    /// Last known pointer position in NDC.
    #[must_use]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<NavCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a pointer event and return the command it maps to.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<NavCommand> {
        let ndc = event.ndc();
        if !ndc.is_finite() {
            log::trace!("dropping non-finite pointer event {event:?}");
            return None;
        }
        self.pointer = Some(ndc);

        match event {
            InputEvent::PointerMoved { .. } => Some(NavCommand::Hover { ndc }),
            InputEvent::Click { .. } => Some(NavCommand::Select { ndc }),
        }
    }
}
