// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Hotspot navigation for explorable 3D rooms.
//!
//! A room holds a fixed set of hotspots. Pointing at one highlights it,
//! clicking it flies the camera into a close framing of the hotspot and
//! reveals that hotspot's content once the camera settles. Clicking the
//! same hotspot again (or issuing a return) flies back to the overview.
//!
//! # Key entry points
//!
//! - [`engine::RoomEngine`] - per-session driver: input queue and frame loop
//! - [`navigation::NavigationController`] - the view state machine
//! - [`animation::CameraAnimator`] - eased pose tweening on a session clock
//! - [`picking::HitTester`] - NDC ray casting against hotspot volumes
//! - [`scene::HotspotRegistry`] - the hotspots of the loaded room
//! - [`options::SceneConfig`] - TOML scene presets (camera, timing, hotspots)
//!
//! # Frame model
//!
//! Everything runs on the render-loop thread. Each frame the driver calls
//! [`engine::RoomEngine::frame`] with the elapsed delta: the active
//! transition steps first (its completion fires before any hit-testing of
//! the frame), then the latest pointer move updates hover, then queued
//! clicks are dispatched. While a transition is in flight every click is
//! swallowed, so at most one transition ever runs.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod navigation;
pub mod options;
pub mod picking;
pub mod scene;
pub mod ui;
pub mod util;

pub use engine::RoomEngine;
pub use error::RoomError;
