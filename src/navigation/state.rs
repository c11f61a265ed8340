use crate::scene::HotspotId;

/// Navigation state of one scene session.
///
/// Only the [`NavigationController`](super::NavigationController) writes
/// these fields; everything else reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    current_view: Option<HotspotId>,
    is_animating: bool,
    hovered: Option<HotspotId>,
}

impl ViewState {
    /// Focused hotspot, or `None` for the overview.
    ///
    /// While returning to the overview this is still the hotspot being
    /// left; it clears when the camera arrives.
    #[must_use]
    pub fn current_view(&self) -> Option<&HotspotId> {
        self.current_view.as_ref()
    }

    /// Whether a camera transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Hotspot under the pointer as of the last hover update.
    #[must_use]
    pub fn hovered(&self) -> Option<&HotspotId> {
        self.hovered.as_ref()
    }

    pub(crate) fn set_current_view(&mut self, view: Option<HotspotId>) {
        self.current_view = view;
    }

    pub(crate) fn set_animating(&mut self, animating: bool) {
        self.is_animating = animating;
    }

    pub(crate) fn set_hovered(&mut self, hovered: Option<HotspotId>) {
        self.hovered = hovered;
    }

    #[cfg(test)]
    pub(crate) fn animating_for_test() -> Self {
        Self {
            is_animating: true,
            ..Self::default()
        }
    }
}

/// Where an in-flight transition is headed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Into a close framing of the hotspot.
    Focus(HotspotId),
    /// Back to the room overview.
    Overview,
}

/// Phase of the navigation state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavPhase {
    /// Default room view; hotspots visible and clickable.
    Overview,
    /// Camera moving; hotspots hidden, content hidden, input swallowed.
    Transitioning {
        /// Where the camera is headed.
        destination: Destination,
    },
    /// Camera framing a hotspot; its content is visible.
    Focused(HotspotId),
}

/// Why a navigation request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A transition is in flight; the input was swallowed.
    Animating,
    /// The click hit no hotspot.
    NoHit,
    /// A different hotspot is focused; return to the overview first.
    OtherHotspotFocused,
    /// Focus was requested for the hotspot that is already focused.
    AlreadyFocused,
    /// Return was requested while already at the overview.
    AlreadyOverview,
}

/// Result of a click, focus, or return request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// A transition started toward the destination.
    Started(Destination),
    /// Nothing changed.
    Rejected(Rejection),
}

impl NavOutcome {
    /// Whether a transition started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }
}

/// Emitted by [`tick`](super::NavigationController::tick) when a
/// transition lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Camera arrived at a hotspot; its content is now visible.
    Focused(HotspotId),
    /// Camera arrived back at the overview; hotspots are visible again.
    Overview,
}
