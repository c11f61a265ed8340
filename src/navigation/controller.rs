//! The view state machine.
//!
//! ```text
//!   Overview ──click hotspot──▶ Transitioning(Focus h) ──done──▶ Focused(h)
//!      ▲                                                            │
//!      └──done── Transitioning(Overview) ◀──click h / return────────┘
//! ```
//!
//! Every input arriving while `Transitioning` is swallowed. Clicking a
//! different hotspot while `Focused` is refused; the user returns to the
//! overview first.

use std::time::Duration;

use glam::Vec2;

use super::dispatch::DispatchTable;
use super::state::{Destination, NavEvent, NavOutcome, NavPhase, Rejection, ViewState};
use crate::animation::CameraAnimator;
use crate::camera::{Camera, CameraPose};
use crate::error::RoomError;
use crate::options::TransitionOptions;
use crate::picking::HitTester;
use crate::scene::{HotspotId, HotspotRegistry, VisualState};
use crate::ui::{ContentRenderer, HotspotVisuals, UiGate};
use crate::util::clock::FrameClock;

/// Owns the navigation state and routes clicks, hovers, and frame ticks.
pub struct NavigationController {
    registry: HotspotRegistry,
    camera: Camera,
    overview: CameraPose,
    transitions: TransitionOptions,
    hit_tester: HitTester,
    animator: CameraAnimator<CameraPose>,
    gate: UiGate,
    visuals: Box<dyn HotspotVisuals>,
    dispatch: DispatchTable,
    clock: FrameClock,
    view: ViewState,
    destination: Option<Destination>,
}

impl NavigationController {
    /// Start at the overview. The camera's current pose is the overview
    /// pose returned to after every focus.
    #[must_use]
    pub fn new(
        registry: HotspotRegistry,
        camera: Camera,
        content: Box<dyn ContentRenderer>,
        visuals: Box<dyn HotspotVisuals>,
    ) -> Self {
        let gate = UiGate::new(registry.ids(), content);
        Self {
            overview: camera.pose,
            registry,
            camera,
            transitions: TransitionOptions::default(),
            hit_tester: HitTester::new(),
            animator: CameraAnimator::new(),
            gate,
            visuals,
            dispatch: DispatchTable::new(),
            clock: FrameClock::new(),
            view: ViewState::default(),
            destination: None,
        }
    }

    /// Replace the transition timing.
    #[must_use]
    pub fn with_transitions(mut self, transitions: TransitionOptions) -> Self {
        self.transitions = transitions;
        self
    }

    /// Replace the activation handlers.
    #[must_use]
    pub fn with_dispatch(mut self, dispatch: DispatchTable) -> Self {
        self.dispatch = dispatch;
        self
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// Current navigation state.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> NavPhase {
        if let Some(destination) = &self.destination {
            return NavPhase::Transitioning {
                destination: destination.clone(),
            };
        }
        match self.view.current_view() {
            Some(id) => NavPhase::Focused(id.clone()),
            None => NavPhase::Overview,
        }
    }

    /// The camera as of the last tick.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Pose the camera returns to.
    #[must_use]
    pub fn overview_pose(&self) -> CameraPose {
        self.overview
    }

    /// The room's hotspots.
    #[must_use]
    pub fn registry(&self) -> &HotspotRegistry {
        &self.registry
    }

    /// Content surface visibility.
    #[must_use]
    pub fn gate(&self) -> &UiGate {
        &self.gate
    }

    /// The transition engine.
    #[must_use]
    pub fn animator(&self) -> &CameraAnimator<CameraPose> {
        &self.animator
    }

    /// Session clock.
    #[must_use]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Activation handlers, for registering narration cues and the like.
    pub fn dispatch_mut(&mut self) -> &mut DispatchTable {
        &mut self.dispatch
    }

    /// Update the camera aspect ratio after a viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.camera.aspect = aspect;
        }
    }

    // ── Operations ─────────────────────────────────────────────────────

    /// Handle a primary click at an NDC position.
    pub fn click(&mut self, ndc: Vec2) -> NavOutcome {
        if self.view.is_animating() {
            log::trace!("click swallowed: transition in flight");
            return NavOutcome::Rejected(Rejection::Animating);
        }
        let Some(id) =
            self.hit_tester
                .pick(&self.camera, &self.registry, &self.view, ndc)
        else {
            return NavOutcome::Rejected(Rejection::NoHit);
        };

        match self.view.current_view() {
            None => self.begin_focus(&id),
            Some(current) if *current == id => self.begin_return(),
            Some(current) => {
                log::debug!("click on {id} ignored while {current} is focused");
                NavOutcome::Rejected(Rejection::OtherHotspotFocused)
            }
        }
    }

    /// Handle a pointer move. Returns the hotspot now hovered.
    pub fn hover(&mut self, ndc: Vec2) -> Option<HotspotId> {
        if self.view.is_animating() {
            return None;
        }
        let hovered =
            self.hit_tester
                .update_hover(&self.camera, &mut self.registry, &self.view, ndc);
        if hovered.as_ref() != self.view.hovered() {
            log::trace!("hover -> {hovered:?}");
        }
        self.view.set_hovered(hovered.clone());
        hovered
    }

    /// Fly to a hotspot by id, bypassing picking.
    ///
    /// Follows the same rules as a click: refused while animating or while
    /// another hotspot is focused. Focusing the hotspot that is already
    /// focused does nothing.
    ///
    /// # Errors
    ///
    /// [`RoomError::UnknownHotspot`] if the id is not registered.
    pub fn focus(&mut self, id: &HotspotId) -> Result<NavOutcome, RoomError> {
        if !self.registry.contains(id) {
            log::error!("focus requested for unknown hotspot {id}");
            return Err(RoomError::UnknownHotspot(id.clone()));
        }
        if self.view.is_animating() {
            return Ok(NavOutcome::Rejected(Rejection::Animating));
        }
        Ok(match self.view.current_view() {
            None => self.begin_focus(id),
            Some(current) if current == id => NavOutcome::Rejected(Rejection::AlreadyFocused),
            Some(_) => NavOutcome::Rejected(Rejection::OtherHotspotFocused),
        })
    }

    /// Leave the focused hotspot and fly back to the overview.
    pub fn return_to_overview(&mut self) -> NavOutcome {
        if self.view.is_animating() {
            return NavOutcome::Rejected(Rejection::Animating);
        }
        if self.view.current_view().is_none() {
            return NavOutcome::Rejected(Rejection::AlreadyOverview);
        }
        self.begin_return()
    }

    /// Advance the session clock by `dt` and step the camera.
    ///
    /// Returns an event on the frame a transition lands.
    pub fn tick(&mut self, dt: Duration) -> Option<NavEvent> {
        let now = self.clock.advance(dt);
        let step = self.animator.update(now)?;
        self.camera.pose = step.pose();
        step.is_completed().then(|| self.finish_transition())
    }

    // ── Transitions ────────────────────────────────────────────────────

    fn begin_focus(&mut self, id: &HotspotId) -> NavOutcome {
        let Ok(hotspot) = self.registry.get(id) else {
            return NavOutcome::Rejected(Rejection::NoHit);
        };
        let transition = self.transitions.focus(hotspot.transition_duration());
        let target = hotspot.view_target();

        if !self
            .animator
            .start(self.camera.pose, target, transition, self.clock.now())
        {
            return NavOutcome::Rejected(Rejection::Animating);
        }
        let _ = self.dispatch.dispatch(hotspot);
        log::info!("focusing {id}");
        self.enter_transition(Destination::Focus(id.clone()))
    }

    fn begin_return(&mut self) -> NavOutcome {
        let duration = self
            .view
            .current_view()
            .and_then(|id| self.registry.get(id).ok())
            .and_then(|hotspot| hotspot.transition_duration());
        let transition = self.transitions.overview(duration);

        if !self
            .animator
            .start(self.camera.pose, self.overview, transition, self.clock.now())
        {
            return NavOutcome::Rejected(Rejection::Animating);
        }
        log::info!("returning to overview");
        self.enter_transition(Destination::Overview)
    }

    fn enter_transition(&mut self, destination: Destination) -> NavOutcome {
        self.view.set_animating(true);
        self.view.set_hovered(None);
        self.destination = Some(destination.clone());
        self.registry.set_all_visual_states(VisualState::Hidden);
        self.visuals.hide();
        self.gate.apply(&self.view);
        NavOutcome::Started(destination)
    }

    fn finish_transition(&mut self) -> NavEvent {
        self.view.set_animating(false);
        let event = match self.destination.take() {
            Some(Destination::Focus(id)) => {
                self.view.set_current_view(Some(id.clone()));
                NavEvent::Focused(id)
            }
            Some(Destination::Overview) | None => {
                self.view.set_current_view(None);
                self.registry.set_all_visual_states(VisualState::Idle);
                self.visuals.show();
                NavEvent::Overview
            }
        };
        self.gate.apply(&self.view);
        log::debug!("transition landed: {event:?}");
        event
    }
}

impl std::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("phase", &self.phase())
            .field("camera", &self.camera.pose)
            .field("hotspots", &self.registry.len())
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}
