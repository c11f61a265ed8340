//! Shared utilities.
//!
//! Easing curves and the session clock used by the transition engine.

pub mod clock;
pub mod easing;
