//! Overview / transitioning / focused navigation.

mod controller;
pub mod dispatch;
mod state;

pub use controller::NavigationController;
pub use dispatch::{DispatchTable, HotspotHandler};
pub use state::{Destination, NavEvent, NavOutcome, NavPhase, Rejection, ViewState};
