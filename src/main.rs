//! Headless tour of a room preset.
//!
//! Loads a scene config (a TOML path, or the built-in study), then clicks
//! through every hotspot on a simulated frame loop with uneven frame
//! deltas, logging each navigation step. `--schema` prints the config's
//! JSON schema instead.

use std::path::Path;
use std::time::Duration;

use glam::Vec3;
use roomview::engine::NavCommand;
use roomview::input::InputEvent;
use roomview::navigation::{DispatchTable, NavEvent};
use roomview::options::SceneConfig;
use roomview::scene::{Hotspot, HotspotId, NodeTable};
use roomview::ui::{LogContent, LogVisuals};
use roomview::{RoomEngine, RoomError};

/// Frame deltas cycled by the tour, in milliseconds.
const FRAME_JITTER_MS: [u64; 8] = [16, 17, 16, 33, 8, 16, 50, 16];

/// Frames to wait for a transition before giving up on it.
const MAX_FRAMES: usize = 2_000;

/// Named nodes of the demo room, as an asset loader would report them.
fn demo_graph() -> NodeTable {
    NodeTable::new()
        .with_node("Desk_Monitor", Vec3::new(0.8, 1.3, -2.6))
        .with_node("Shelf_Books", Vec3::new(2.2, 1.4, -2.7))
        .with_node("Wall_Clock", Vec3::new(-0.9, 2.3, -2.9))
        .with_node("Window_Frame", Vec3::new(2.6, 1.8, -2.0))
}

struct Tour {
    engine: RoomEngine,
    frame: usize,
}

impl Tour {
    fn step(&mut self) -> Option<NavEvent> {
        let dt = FRAME_JITTER_MS[self.frame % FRAME_JITTER_MS.len()];
        self.frame += 1;
        let out = self.engine.frame(Duration::from_millis(dt));
        for outcome in &out.outcomes {
            log::info!("frame {}: {outcome:?}", self.frame);
        }
        out.event
    }

    fn settle(&mut self) -> Option<NavEvent> {
        (0..MAX_FRAMES).find_map(|_| self.step())
    }

    fn click(&mut self, id: &HotspotId) -> bool {
        let Ok(anchor) = self.engine.controller().registry().get(id).map(Hotspot::anchor) else {
            return false;
        };
        let Some(ndc) = self.engine.camera().project(anchor) else {
            log::warn!("{id} is off screen from here");
            return false;
        };
        self.engine.handle_input(InputEvent::PointerMoved { x: ndc.x, y: ndc.y });
        self.engine.handle_input(InputEvent::Click { x: ndc.x, y: ndc.y });
        true
    }

    fn visit(&mut self, id: &HotspotId, leave_with_key: bool) {
        if !self.click(id) {
            return;
        }
        // A second click a few frames in lands mid-transition and is swallowed.
        for _ in 0..3 {
            let _ = self.step();
        }
        let _ = self.click(id);

        let Some(event) = self.settle() else {
            log::error!("transition to {id} never landed");
            return;
        };
        log::info!("landed: {event:?} at {:?}", self.engine.camera().pose);

        if leave_with_key {
            let _ = self.engine.handle_key_press("Escape");
        } else if !self.click(id) {
            self.engine.execute(NavCommand::Return);
        }
        if let Some(event) = self.settle() {
            log::info!("landed: {event:?}");
        }
    }
}

fn load_config(path: Option<&str>) -> Result<SceneConfig, RoomError> {
    match path {
        Some(path) => SceneConfig::load(Path::new(path)),
        None => Ok(SceneConfig::default()),
    }
}

#[allow(clippy::print_stdout)]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--schema") {
        match serde_json::to_string_pretty(&SceneConfig::json_schema()) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("failed to serialize schema: {e}"),
        }
        return;
    }

    let config = load_config(args.first().map(String::as_str)).unwrap_or_else(|e| {
        log::error!("{e}");
        std::process::exit(1)
    });

    let mut dispatch = DispatchTable::new();
    dispatch.register("clock", |h: &Hotspot| {
        log::info!("narration cue: {} ticking away", h.id());
    });
    dispatch.set_fallback(|h: &Hotspot| log::debug!("activated {}", h.id()));

    let engine = RoomEngine::new(
        &config,
        &demo_graph(),
        Box::new(LogContent),
        Box::new(LogVisuals),
    )
    .with_dispatch(dispatch);
    for warning in engine.load_warnings() {
        log::warn!("{warning}");
    }

    let ids: Vec<HotspotId> = engine.controller().registry().ids().cloned().collect();
    let mut tour = Tour { engine, frame: 0 };
    for (i, id) in ids.iter().enumerate() {
        log::info!("visiting {id}");
        tour.visit(id, i % 2 == 1);
    }

    let clock = tour.engine.controller().clock();
    log::info!(
        "tour of '{}' done: {} frames, {:.2}s simulated, ~{:.0} fps",
        tour.engine.scene_name(),
        clock.frames(),
        clock.now().as_secs_f32(),
        clock.fps()
    );
}
