//! Input entry points for `RoomEngine`.

use super::{NavCommand, RoomEngine};
use crate::input::InputEvent;

impl RoomEngine {
    /// Process a platform-agnostic pointer event.
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::PointerMoved { x, y });
    /// engine.handle_input(InputEvent::Click { x, y });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle_event(event) {
            self.execute(command);
        }
    }

    /// Process a key press by its physical key string (`"Escape"`, ...).
    /// Returns whether the key is bound.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        let Some(command) = self.input.handle_key_press(key) else {
            return false;
        };
        self.execute(command);
        true
    }

    /// Queue a command for the next [`frame`](Self::frame).
    ///
    /// Hovers coalesce: only the latest pointer position of a frame is
    /// hit-tested. Everything else runs in arrival order.
    pub fn execute(&mut self, command: NavCommand) {
        match command {
            NavCommand::Hover { ndc } => self.pending_hover = Some(ndc),
            other => self.queue.push_back(other),
        }
    }

    /// Commands waiting for the next frame, hovers excluded.
    #[must_use]
    pub fn pending_commands(&self) -> usize {
        self.queue.len()
    }
}
