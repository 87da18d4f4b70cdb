use sumo_core::{Hardware, LineReading, Rotation, Thresholds, Wheel};

use crate::devices::{Clock, Motors, Panel, Ranger, Reflectance};
use crate::{SLOT2, SLOT3, SLOT4, SLOT5, SLOT6};

pub struct MmioHardware {
    reflectance: Reflectance,
    motors: Motors,
    ranger: Ranger,
    panel: Panel,
    clock: Clock,
}

impl MmioHardware {
    pub const fn bind() -> Self {
        Self {
            reflectance: Reflectance::bind(SLOT2),
            motors: Motors::bind(SLOT3),
            ranger: Ranger::bind(SLOT4),
            panel: Panel::bind(SLOT5),
            clock: Clock::bind(SLOT6),
        }
    }
}

impl Hardware for MmioHardware {
    fn ranging_distance(&mut self) -> u16 {
        self.ranger.distance()
    }

    fn line_sensors(&mut self) -> LineReading {
        LineReading {
            analog: self.reflectance.analog(),
            digital: self.reflectance.digital(),
        }
    }

    fn set_line_thresholds(&mut self, thresholds: Thresholds) {
        self.reflectance.set_thresholds(thresholds.as_array());
    }

    fn drive(&mut self, left: Wheel, right: Wheel) {
        self.motors.set_direction(
            left.rotation == Rotation::Backward,
            right.rotation == Rotation::Backward,
        );
        self.motors.set_speed(left.speed, right.speed);
    }

    fn start_button_pressed(&mut self) -> bool {
        self.panel.button_pressed()
    }

    fn go_signal(&mut self) -> bool {
        self.panel.go()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.delay_ms(ms);
    }

    fn battery_millivolts(&mut self) -> Option<u16> {
        Some(self.panel.battery_millivolts())
    }
}
