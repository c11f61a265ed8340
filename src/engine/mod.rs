//! Per-frame driver tying input, navigation and the camera together.

mod command;
mod input;

use std::collections::VecDeque;
use std::time::Duration;

use glam::Vec2;

pub use self::command::NavCommand;
use crate::camera::{Camera, CameraPose};
use crate::error::RoomError;
use crate::input::InputProcessor;
use crate::navigation::{DispatchTable, NavEvent, NavOutcome, NavigationController, ViewState};
use crate::options::SceneConfig;
use crate::scene::{build_registry, SceneGraph};
use crate::ui::{ContentRenderer, HotspotVisuals};

/// What happened during one [`RoomEngine::frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Camera pose to render this frame.
    pub pose: CameraPose,
    /// Transition that landed this frame, if any.
    pub event: Option<NavEvent>,
    /// One outcome per queued click, focus, or return, in order.
    pub outcomes: Vec<NavOutcome>,
}

/// Per-session driver for one room.
///
/// # Construction
///
/// [`RoomEngine::new`] resolves the config's hotspots against the loaded
/// scene graph and starts at the overview. Hotspots whose anchors do not
/// resolve are skipped and listed by [`load_warnings`](Self::load_warnings).
///
/// # Frame loop
///
/// Forward pointer events with [`handle_input`](Self::handle_input) and
/// keys with [`handle_key_press`](Self::handle_key_press) as they arrive,
/// then call [`frame`](Self::frame) once per rendered frame with the
/// elapsed delta. Within a frame the camera steps first (so a transition
/// that lands is complete before any hit-testing), then the latest hover
/// applies, then queued commands run in arrival order.
pub struct RoomEngine {
    controller: NavigationController,
    /// Pointer and key translation.
    pub(crate) input: InputProcessor,
    /// Latest pointer position since the last frame.
    pub(crate) pending_hover: Option<Vec2>,
    /// Clicks, focus requests, and returns since the last frame.
    pub(crate) queue: VecDeque<NavCommand>,
    load_warnings: Vec<RoomError>,
    scene_name: String,
}

impl RoomEngine {
    /// Build an engine for `config` over a loaded scene graph.
    #[must_use]
    pub fn new(
        config: &SceneConfig,
        graph: &dyn SceneGraph,
        content: Box<dyn ContentRenderer>,
        visuals: Box<dyn HotspotVisuals>,
    ) -> Self {
        let loaded = build_registry(config, graph);
        let camera = Camera::from_options(&config.camera);
        let controller = NavigationController::new(loaded.registry, camera, content, visuals)
            .with_transitions(config.transition.clone());

        log::info!("room '{}' ready", config.name);
        Self {
            controller,
            input: InputProcessor::with_key_bindings(config.keybindings.clone()),
            pending_hover: None,
            queue: VecDeque::new(),
            load_warnings: loaded.skipped,
            scene_name: config.name.clone(),
        }
    }

    /// Replace the activation handlers.
    #[must_use]
    pub fn with_dispatch(mut self, dispatch: DispatchTable) -> Self {
        self.controller = self.controller.with_dispatch(dispatch);
        self
    }

    /// Advance one frame by `dt`.
    pub fn frame(&mut self, dt: Duration) -> FrameOutput {
        let event = self.controller.tick(dt);

        if let Some(ndc) = self.pending_hover.take() {
            let _ = self.controller.hover(ndc);
        }

        let mut outcomes = Vec::with_capacity(self.queue.len());
        while let Some(command) = self.queue.pop_front() {
            let outcome = match command {
                NavCommand::Select { ndc } => self.controller.click(ndc),
                NavCommand::Focus { hotspot } => match self.controller.focus(&hotspot) {
                    Ok(outcome) => outcome,
                    Err(_) => continue,
                },
                NavCommand::Return => self.controller.return_to_overview(),
                NavCommand::Hover { ndc } => {
                    let _ = self.controller.hover(ndc);
                    continue;
                }
            };
            outcomes.push(outcome);
        }

        FrameOutput {
            pose: self.controller.camera().pose,
            event,
            outcomes,
        }
    }

    /// Viewport resized.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.controller.set_aspect(width as f32 / height as f32);
        }
    }

    /// The camera as of the last frame.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.controller.camera()
    }

    /// Current navigation state.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        self.controller.view()
    }

    /// The navigation state machine.
    #[must_use]
    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// Hotspots skipped while loading the scene.
    #[must_use]
    pub fn load_warnings(&self) -> &[RoomError] {
        &self.load_warnings
    }

    /// Name of the loaded scene preset.
    #[must_use]
    pub fn scene_name(&self) -> &str {
        &self.scene_name
    }
}

impl std::fmt::Debug for RoomEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomEngine")
            .field("scene", &self.scene_name)
            .field("controller", &self.controller)
            .field("pending", &self.queue.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::input::InputEvent;
    use crate::navigation::{Destination, NavPhase, Rejection};
    use crate::options::HotspotConfig;
    use crate::scene::{HotspotId, NodeTable};
    use crate::ui::{LogContent, LogVisuals};

    const FRAME: Duration = Duration::from_millis(16);

    fn config() -> SceneConfig {
        SceneConfig {
            name: "test".to_owned(),
            hotspots: vec![
                HotspotConfig::at_node("desk", "desk_node"),
                HotspotConfig::at_point("shelf", [2.0, 1.0, -2.0]),
                HotspotConfig::at_node("ghost", "missing_node"),
            ],
            ..SceneConfig::default()
        }
    }

    fn engine() -> RoomEngine {
        let graph = NodeTable::new().with_node("desk_node", Vec3::new(0.0, 1.1, -1.5));
        RoomEngine::new(
            &config(),
            &graph,
            Box::new(LogContent),
            Box::new(LogVisuals),
        )
    }

    fn click_at(engine: &mut RoomEngine, point: Vec3) {
        let ndc = engine.camera().project(point).unwrap();
        engine.handle_input(InputEvent::Click { x: ndc.x, y: ndc.y });
    }

    #[test]
    fn unresolved_anchor_is_skipped() {
        let engine = engine();
        assert_eq!(engine.controller().registry().len(), 2);
        assert!(matches!(
            engine.load_warnings(),
            [RoomError::UnresolvedAnchor { .. }]
        ));
    }

    #[test]
    fn click_is_queued_until_frame() {
        let mut engine = engine();
        click_at(&mut engine, Vec3::new(0.0, 1.1, -1.5));
        assert_eq!(engine.pending_commands(), 1);
        assert_eq!(engine.controller().phase(), NavPhase::Overview);

        let out = engine.frame(FRAME);
        assert_eq!(
            out.outcomes,
            [NavOutcome::Started(Destination::Focus(HotspotId::from("desk")))]
        );
        assert!(engine.view().is_animating());
        assert_eq!(engine.pending_commands(), 0);
    }

    #[test]
    fn second_click_in_same_frame_is_swallowed() {
        let mut engine = engine();
        click_at(&mut engine, Vec3::new(0.0, 1.1, -1.5));
        click_at(&mut engine, Vec3::new(2.0, 1.0, -2.0));

        let out = engine.frame(FRAME);
        assert_eq!(out.outcomes.len(), 2);
        assert!(out.outcomes[0].is_started());
        assert_eq!(out.outcomes[1], NavOutcome::Rejected(Rejection::Animating));
    }

    #[test]
    fn escape_returns_after_arrival() {
        let mut engine = engine();
        engine.execute(NavCommand::Focus {
            hotspot: "shelf".into(),
        });
        let _ = engine.frame(FRAME);

        let landed = (0..200).find_map(|_| engine.frame(FRAME).event);
        assert_eq!(landed, Some(NavEvent::Focused(HotspotId::from("shelf"))));

        assert!(engine.handle_key_press("Escape"));
        assert!(!engine.handle_key_press("KeyQ"));
        let out = engine.frame(FRAME);
        assert_eq!(out.outcomes, [NavOutcome::Started(Destination::Overview)]);

        let landed = (0..200).find_map(|_| engine.frame(FRAME).event);
        assert_eq!(landed, Some(NavEvent::Overview));
        assert_eq!(engine.camera().pose, engine.controller().overview_pose());
    }

    #[test]
    fn unknown_focus_produces_no_outcome() {
        let mut engine = engine();
        engine.execute(NavCommand::Focus {
            hotspot: "ghost".into(),
        });
        let out = engine.frame(FRAME);
        assert!(out.outcomes.is_empty());
        assert_eq!(engine.controller().phase(), NavPhase::Overview);
    }

    #[test]
    fn hovers_coalesce_to_latest() {
        let mut engine = engine();
        let shelf = engine.camera().project(Vec3::new(2.0, 1.0, -2.0)).unwrap();
        engine.handle_input(InputEvent::PointerMoved { x: -0.99, y: 0.99 });
        engine.handle_input(InputEvent::PointerMoved {
            x: shelf.x,
            y: shelf.y,
        });
        assert_eq!(engine.pending_commands(), 0);

        let _ = engine.frame(FRAME);
        assert_eq!(engine.view().hovered(), Some(&HotspotId::from("shelf")));
    }

    #[test]
    fn resize_updates_aspect() {
        let mut engine = engine();
        engine.resize(1000, 500);
        assert!((engine.camera().aspect - 2.0).abs() < f32::EPSILON);
        engine.resize(0, 500);
        assert!((engine.camera().aspect - 2.0).abs() < f32::EPSILON);
    }
}
