//! Decision loop of the spiral-hunting sumo robot.
//!
//! The crate is hardware agnostic: everything the controller needs from the
//! robot goes through the [`Hardware`](hardware::Hardware) trait, so the same
//! code runs on the firmware target and inside the host-side arena simulator.
#![cfg_attr(not(test), no_std)]

pub mod controller;
pub mod edge;
pub mod engage;
pub mod hardware;
pub mod motion;
pub mod robot;
pub mod sensors;
pub mod spiral;
pub mod startup;
pub mod tuning;

#[cfg(test)]
mod mock;

pub use controller::{Controller, Tick};
pub use hardware::Hardware;
pub use motion::{Heading, Motion, Rotation, Wheel};
pub use robot::Robot;
pub use sensors::{LineChannel, LineReading, SensorSnapshot, Thresholds};
pub use spiral::{Phase, SpiralState};
pub use tuning::Tuning;
