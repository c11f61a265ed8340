//! Camera transition engine.
//!
//! A [`CameraAnimator`] runs one [`Transition`] at a time between two poses
//! of any [`Interpolate`] type, stepping once per frame against the session
//! clock and reporting completion exactly once.

pub mod animator;
pub mod interpolation;
pub mod runner;
pub mod transition;

pub use animator::{CameraAnimator, TransitionStep};
pub use interpolation::Interpolate;
pub use transition::Transition;
