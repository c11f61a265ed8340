//! End-to-end navigation through `RoomEngine`: a three-hotspot room driven
//! by pointer events on a simulated frame loop.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use glam::{Vec2, Vec3};
use roomview::camera::CameraPose;
use roomview::input::InputEvent;
use roomview::navigation::{NavEvent, NavPhase};
use roomview::options::{HotspotConfig, SceneConfig, ViewConfig};
use roomview::scene::{HotspotId, NodeTable, VisualState};
use roomview::ui::{ContentEvent, ContentRenderer, HotspotVisuals};
use roomview::RoomEngine;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Default)]
struct Surfaces {
    shown: Vec<HotspotId>,
    markers_visible: bool,
    reveals: usize,
}

#[derive(Clone)]
struct Host(Rc<RefCell<Surfaces>>);

impl ContentRenderer for Host {
    fn reveal(&mut self, event: &ContentEvent) {
        let mut s = self.0.borrow_mut();
        s.shown.push(event.hotspot_id.clone());
        s.reveals += 1;
    }

    fn conceal(&mut self, hotspot: &HotspotId) {
        self.0.borrow_mut().shown.retain(|id| id != hotspot);
    }
}

impl HotspotVisuals for Host {
    fn show(&mut self) {
        self.0.borrow_mut().markers_visible = true;
    }

    fn hide(&mut self) {
        self.0.borrow_mut().markers_visible = false;
    }
}

fn anchor(id: &str) -> [f32; 3] {
    match id {
        "about" => [-1.5, 1.1, -1.5],
        "books" => [0.0, 1.1, -1.5],
        _ => [1.5, 1.1, -1.5],
    }
}

fn view_target(id: &str) -> CameraPose {
    let at = Vec3::from_array(anchor(id));
    CameraPose::new(at + Vec3::new(0.0, 0.1, 1.5), at)
}

fn room() -> (RoomEngine, Rc<RefCell<Surfaces>>) {
    let hotspots = ["about", "books", "future"]
        .into_iter()
        .map(|id| {
            let pose = view_target(id);
            let mut entry = HotspotConfig::at_point(id, anchor(id)).with_radius(0.4);
            entry.view = Some(ViewConfig {
                position: pose.position.to_array(),
                look_at: pose.look_at.to_array(),
            });
            entry
        })
        .collect();
    let config = SceneConfig {
        name: "scenarios".to_owned(),
        hotspots,
        ..SceneConfig::default()
    };

    let surfaces = Rc::new(RefCell::new(Surfaces {
        markers_visible: true,
        ..Surfaces::default()
    }));
    let host = Host(Rc::clone(&surfaces));
    let engine = RoomEngine::new(
        &config,
        &NodeTable::new(),
        Box::new(host.clone()),
        Box::new(host),
    );
    (engine, surfaces)
}

fn ndc(engine: &RoomEngine, id: &str) -> Vec2 {
    engine
        .camera()
        .project(Vec3::from_array(anchor(id)))
        .unwrap()
}

fn click(engine: &mut RoomEngine, at: Vec2) {
    engine.handle_input(InputEvent::Click { x: at.x, y: at.y });
}

/// Run frames until a transition lands, checking the single-surface rule
/// on every frame.
fn settle(engine: &mut RoomEngine, surfaces: &Rc<RefCell<Surfaces>>) -> NavEvent {
    for _ in 0..1000 {
        let out = engine.frame(FRAME);
        assert!(surfaces.borrow().shown.len() <= 1);
        assert!(engine.controller().gate().visible_count() <= 1);
        if let Some(event) = out.event {
            return event;
        }
    }
    unreachable!("transition never landed");
}

#[test]
fn scenario_a_focus_reveals_content() {
    let (mut engine, surfaces) = room();

    let about = ndc(&engine, "about");
    click(&mut engine, about);
    let event = settle(&mut engine, &surfaces);

    assert_eq!(event, NavEvent::Focused(HotspotId::from("about")));
    assert_eq!(engine.view().current_view(), Some(&HotspotId::from("about")));
    assert_eq!(engine.camera().pose, view_target("about"));
    assert!(!surfaces.borrow().markers_visible);
    assert!(engine
        .controller()
        .registry()
        .all()
        .all(|h| h.visual_state() == VisualState::Hidden));
    assert_eq!(surfaces.borrow().shown, [HotspotId::from("about")]);
}

#[test]
fn scenario_b_same_hotspot_returns_to_overview() {
    let (mut engine, surfaces) = room();
    let overview = engine.camera().pose;

    let about = ndc(&engine, "about");
    click(&mut engine, about);
    let _ = settle(&mut engine, &surfaces);

    let about = ndc(&engine, "about");
    click(&mut engine, about);
    let event = settle(&mut engine, &surfaces);

    assert_eq!(event, NavEvent::Overview);
    assert!(engine.view().current_view().is_none());
    assert_eq!(engine.camera().pose, overview);
    assert!(surfaces.borrow().markers_visible);
    assert!(surfaces.borrow().shown.is_empty());
    assert_eq!(engine.controller().phase(), NavPhase::Overview);
}

#[test]
fn scenario_c_click_during_transition_is_discarded() {
    let (mut engine, surfaces) = room();
    let books = ndc(&engine, "books");
    let future = ndc(&engine, "future");

    click(&mut engine, books);
    let _ = engine.frame(FRAME);
    for _ in 0..20 {
        let _ = engine.frame(FRAME);
    }
    assert!(engine.view().is_animating());
    click(&mut engine, future);

    let future_id = HotspotId::from("future");
    for _ in 0..1000 {
        let out = engine.frame(FRAME);
        assert_ne!(engine.view().current_view(), Some(&future_id));
        if out.event.is_some() {
            break;
        }
    }
    assert_eq!(engine.view().current_view(), Some(&HotspotId::from("books")));
    assert_eq!(surfaces.borrow().shown, [HotspotId::from("books")]);
    assert_eq!(surfaces.borrow().reveals, 1);
}

#[test]
fn irregular_frame_rate_keeps_wall_clock_duration() {
    let (mut engine, _surfaces) = room();
    let books = ndc(&engine, "books");
    click(&mut engine, books);
    let _ = engine.frame(Duration::ZERO);

    // Focus runs 2200 ms by default; alternate slow and fast frames.
    let deltas = [8, 50, 16, 33, 100, 4];
    let mut elapsed = 0;
    let mut landed_at = None;
    for i in 0..400 {
        let dt = deltas[i % deltas.len()];
        elapsed += dt;
        if engine.frame(Duration::from_millis(dt)).event.is_some() {
            landed_at = Some(elapsed);
            break;
        }
    }
    let landed_at = landed_at.unwrap();
    assert!(landed_at >= 2200);
    assert!(landed_at < 2200 + 100);
}

#[test]
fn escape_and_toggle_mix_over_a_full_tour() {
    let (mut engine, surfaces) = room();

    for (i, id) in ["about", "books", "future"].into_iter().enumerate() {
        let at = ndc(&engine, id);
        click(&mut engine, at);
        assert_eq!(settle(&mut engine, &surfaces), NavEvent::Focused(id.into()));

        if i % 2 == 0 {
            assert!(engine.handle_key_press("Escape"));
        } else {
            click(&mut engine, Vec2::ZERO);
        }
        assert_eq!(settle(&mut engine, &surfaces), NavEvent::Overview);
    }
    assert_eq!(surfaces.borrow().reveals, 3);
    assert_eq!(engine.controller().animator().completed_runs(), 6);
}
