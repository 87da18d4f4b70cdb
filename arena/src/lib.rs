//! Host-side test bench for the sumo controller.
//!
//! A [`World`](world::World) simulates the ring, the robot body and an
//! opponent, and implements the controller's `Hardware` trait so the real
//! decision loop runs against it millisecond by millisecond.

pub mod body;
pub mod bout;
pub mod opponent;
pub mod report;
pub mod ring;
pub mod scenario;
pub mod world;

pub use bout::run_bout;
pub use report::{Outcome, Report};
pub use scenario::Scenario;
