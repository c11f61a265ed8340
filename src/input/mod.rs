//! Input handling: pointer event types and the input processor that
//! converts raw events into navigation commands.

/// Platform-agnostic pointer events.
pub mod event;
/// Converts raw events into navigation commands.
pub mod processor;

pub use event::{pixels_to_ndc, InputEvent};
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
