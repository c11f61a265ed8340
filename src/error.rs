//! Crate-level error types.

use std::fmt;

use crate::scene::HotspotId;

/// Errors produced by the roomview crate.
///
/// None of these are fatal to a running session: configuration errors abort
/// the offending operation and leave navigation state untouched, and anchor
/// failures drop a single hotspot at load time.
#[derive(Debug)]
pub enum RoomError {
    /// A requested hotspot id does not exist in the registry.
    UnknownHotspot(HotspotId),
    /// A hotspot anchor names a scene node that could not be resolved.
    UnresolvedAnchor {
        /// Hotspot whose anchor failed.
        hotspot: HotspotId,
        /// Scene node name that was looked up.
        node: String,
    },
    /// A hotspot with the same id was already registered.
    DuplicateHotspot(HotspotId),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML scene config parsing/serialization failure.
    ConfigParse(String),
}

impl fmt::Display for RoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownHotspot(id) => write!(f, "unknown hotspot: {id}"),
            Self::UnresolvedAnchor { hotspot, node } => {
                write!(
                    f,
                    "anchor node '{node}' for hotspot {hotspot} not found"
                )
            }
            Self::DuplicateHotspot(id) => {
                write!(f, "hotspot {id} registered twice")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(msg) => {
                write!(f, "scene config parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for RoomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RoomError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
