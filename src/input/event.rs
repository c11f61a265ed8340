use glam::Vec2;

/// Platform-agnostic pointer events.
///
/// Coordinates are normalized device coordinates: x right and y up, both
/// in [-1, 1]. Drivers that track physical pixels convert with
/// [`pixels_to_ndc`].
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`NavCommand`](crate::engine::NavCommand) values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved.
    PointerMoved {
        /// Horizontal NDC position.
        x: f32,
        /// Vertical NDC position.
        y: f32,
    },
    /// Primary button click.
    Click {
        /// Horizontal NDC position.
        x: f32,
        /// Vertical NDC position.
        y: f32,
    },
}

impl InputEvent {
    /// Pointer position carried by the event.
    #[must_use]
    pub fn ndc(&self) -> Vec2 {
        match *self {
            Self::PointerMoved { x, y } | Self::Click { x, y } => Vec2::new(x, y),
        }
    }
}

/// Convert a pixel position (origin top-left, y down) to NDC.
#[must_use]
pub fn pixels_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new((x / width) * 2.0 - 1.0, 1.0 - (y / height) * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_corners_map_to_ndc_corners() {
        assert_eq!(pixels_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(pixels_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(pixels_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    }
}
