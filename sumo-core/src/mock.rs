use std::collections::VecDeque;

use crate::hardware::Hardware;
use crate::motion::{Rotation, Wheel};
use crate::sensors::{LineReading, Thresholds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Drive(Wheel, Wheel),
    Delay(u32),
    Thresholds(Thresholds),
}

/// Scripted robot: queued sensor readings are served first, then the idle
/// values. Delays are recorded, never slept.
pub struct MockHardware {
    pub effects: Vec<Effect>,
    pub lines: VecDeque<LineReading>,
    pub idle_line: LineReading,
    pub distances: VecDeque<u16>,
    pub idle_distance: u16,
    /// Number of polls that read "not pressed" before the button reads pressed.
    pub button_after: u32,
    pub go_after: u32,
    pub battery: Option<u16>,
    pub button_polls: u32,
    pub go_polls: u32,
}

impl Default for MockHardware {
    fn default() -> Self {
        Self {
            effects: Vec::new(),
            lines: VecDeque::new(),
            idle_line: LineReading::default(),
            distances: VecDeque::new(),
            idle_distance: 400,
            button_after: 0,
            go_after: 0,
            battery: None,
            button_polls: 0,
            go_polls: 0,
        }
    }
}

impl MockHardware {
    pub fn drives(&self) -> Vec<(Wheel, Wheel)> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Drive(left, right) => Some((*left, *right)),
                _ => None,
            })
            .collect()
    }

    pub fn reverse_count(&self) -> usize {
        self.drives()
            .iter()
            .filter(|(left, right)| {
                left.rotation == Rotation::Backward && right.rotation == Rotation::Backward
            })
            .count()
    }

    pub fn total_delay(&self) -> u32 {
        self.effects
            .iter()
            .map(|effect| match effect {
                Effect::Delay(ms) => *ms,
                _ => 0,
            })
            .sum()
    }
}

impl Hardware for MockHardware {
    fn ranging_distance(&mut self) -> u16 {
        self.distances.pop_front().unwrap_or(self.idle_distance)
    }

    fn line_sensors(&mut self) -> LineReading {
        self.lines.pop_front().unwrap_or(self.idle_line)
    }

    fn set_line_thresholds(&mut self, thresholds: Thresholds) {
        self.effects.push(Effect::Thresholds(thresholds));
    }

    fn drive(&mut self, left: Wheel, right: Wheel) {
        self.effects.push(Effect::Drive(left, right));
    }

    fn start_button_pressed(&mut self) -> bool {
        let pressed = self.button_polls >= self.button_after;
        self.button_polls += 1;
        pressed
    }

    fn go_signal(&mut self) -> bool {
        let seen = self.go_polls >= self.go_after;
        self.go_polls += 1;
        seen
    }

    fn delay_ms(&mut self, ms: u32) {
        self.effects.push(Effect::Delay(ms));
    }

    fn battery_millivolts(&mut self) -> Option<u16> {
        self.battery
    }
}
