use super::{ContentEvent, ContentRenderer};
use crate::navigation::ViewState;
use crate::scene::HotspotId;

/// Decides which content surface is visible for a view state.
///
/// One surface per hotspot. The visible surface is the focused hotspot's
/// while the camera is at rest, and none otherwise, so at most one surface
/// is ever visible. The renderer is only called for surfaces whose
/// visibility actually changes, which makes [`apply`](Self::apply)
/// idempotent.
pub struct UiGate {
    surfaces: Vec<(HotspotId, bool)>,
    renderer: Box<dyn ContentRenderer>,
}

impl UiGate {
    /// Gate over one hidden surface per id.
    #[must_use]
    pub fn new<'a>(
        ids: impl IntoIterator<Item = &'a HotspotId>,
        renderer: Box<dyn ContentRenderer>,
    ) -> Self {
        Self {
            surfaces: ids.into_iter().map(|id| (id.clone(), false)).collect(),
            renderer,
        }
    }

    /// Bring surface visibility in line with `view`.
    pub fn apply(&mut self, view: &ViewState) {
        let wanted = if view.is_animating() {
            None
        } else {
            view.current_view()
        };

        if let Some(id) = wanted {
            if !self.surfaces.iter().any(|(s, _)| s == id) {
                log::error!("no content surface for hotspot {id}");
            }
        }

        // Conceal before reveal so two surfaces are never up at once.
        for (id, visible) in &mut self.surfaces {
            if *visible && wanted != Some(&*id) {
                self.renderer.conceal(id);
                *visible = false;
            }
        }
        for (id, visible) in &mut self.surfaces {
            if !*visible && wanted == Some(&*id) {
                self.renderer.reveal(&ContentEvent {
                    hotspot_id: id.clone(),
                });
                *visible = true;
            }
        }
    }

    /// The visible surface, if any.
    #[must_use]
    pub fn visible(&self) -> Option<&HotspotId> {
        self.surfaces
            .iter()
            .find(|(_, visible)| *visible)
            .map(|(id, _)| id)
    }

    /// Number of visible surfaces (0 or 1).
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.surfaces.iter().filter(|(_, visible)| *visible).count()
    }
}

impl std::fmt::Debug for UiGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiGate")
            .field("surfaces", &self.surfaces.len())
            .field("visible", &self.visible())
            .finish_non_exhaustive()
    }
}
