//! Effect primitives the controller consumes.
//!
//! Implementations are expected to be thin: PWM, ADC sampling and interrupt
//! plumbing live behind these calls and never leak into the decision code.

use crate::motion::Wheel;
use crate::sensors::{LineReading, Thresholds};

pub trait Hardware {
    /// Instantaneous opponent proximity, lower is closer.
    fn ranging_distance(&mut self) -> u16;

    fn line_sensors(&mut self) -> LineReading;

    /// One-time configuration of the reflectance driver's digital levels.
    fn set_line_thresholds(&mut self, thresholds: Thresholds);

    fn drive(&mut self, left: Wheel, right: Wheel);

    fn start_button_pressed(&mut self) -> bool;

    /// Whether the one-shot go pulse (IR start module) has been seen.
    fn go_signal(&mut self) -> bool;

    fn delay_ms(&mut self, ms: u32);

    /// Blocks until the go pulse arrives. Never returns if it never comes.
    fn await_go_signal(&mut self) {
        while !self.go_signal() {
            self.delay_ms(1);
        }
    }

    fn battery_millivolts(&mut self) -> Option<u16> {
        None
    }
}
