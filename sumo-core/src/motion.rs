use crate::hardware::Hardware;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wheel {
    pub speed: u8,
    pub rotation: Rotation,
}

impl Wheel {
    pub const STOPPED: Wheel = Wheel::forward(0);

    pub const fn forward(speed: u8) -> Self {
        Self {
            speed,
            rotation: Rotation::Forward,
        }
    }

    pub const fn backward(speed: u8) -> Self {
        Self {
            speed,
            rotation: Rotation::Backward,
        }
    }
}

/// Last committed turn direction. The spiral bends towards it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Heading {
    #[default]
    Left,
    Right,
}

/// A motion intent. Fixed-duration maneuvers carry their own timing and block
/// while they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Forward { speed: u8 },
    Stop,
    /// Forward arc; `turn` ranges over `0..=Tuning::turn_range()`, high values
    /// are gentle, zero pivots on the inner wheel.
    Arc { turn: u16, heading: Heading },
    /// Back up for `duration_ms`, then stop.
    Reverse { speed: u8, duration_ms: u32 },
    /// Turn in place towards `heading` for `duration_ms`, then reset both
    /// wheels to forward.
    Spin { duration_ms: u32, heading: Heading },
}

/// Wheel pair for an arc: outer wheel at full speed, inner wheel scaled by the
/// turn value up to `gentlest_arc_percent` of the outer wheel.
pub fn arc_wheels(turn: u16, heading: Heading, tuning: &Tuning) -> (Wheel, Wheel) {
    let outer = u32::from(tuning.max_speed);
    let range = u32::from(tuning.turn_range().max(1));
    let turn = u32::from(turn).min(range);
    let inner = (outer * turn * u32::from(tuning.gentlest_arc_percent) / (range * 100)).min(outer);
    let (outer, inner) = (outer as u8, inner as u8);

    match heading {
        Heading::Left => (Wheel::forward(inner), Wheel::forward(outer)),
        Heading::Right => (Wheel::forward(outer), Wheel::forward(inner)),
    }
}

fn spin_wheels(heading: Heading, speed: u8) -> (Wheel, Wheel) {
    match heading {
        Heading::Left => (Wheel::backward(speed), Wheel::forward(speed)),
        Heading::Right => (Wheel::forward(speed), Wheel::backward(speed)),
    }
}

pub fn execute<H: Hardware + ?Sized>(hardware: &mut H, motion: Motion, tuning: &Tuning) {
    match motion {
        Motion::Forward { speed } => hardware.drive(Wheel::forward(speed), Wheel::forward(speed)),
        Motion::Stop => hardware.drive(Wheel::STOPPED, Wheel::STOPPED),
        Motion::Arc { turn, heading } => {
            let (left, right) = arc_wheels(turn, heading, tuning);
            hardware.drive(left, right);
        }
        Motion::Reverse { speed, duration_ms } => {
            hardware.drive(Wheel::backward(speed), Wheel::backward(speed));
            hardware.delay_ms(duration_ms);
            hardware.drive(Wheel::STOPPED, Wheel::STOPPED);
        }
        Motion::Spin {
            duration_ms,
            heading,
        } => {
            let (left, right) = spin_wheels(heading, tuning.max_speed);
            hardware.drive(left, right);
            hardware.delay_ms(duration_ms);
            hardware.drive(
                Wheel::forward(tuning.max_speed),
                Wheel::forward(tuning.max_speed),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Effect, MockHardware};

    #[test]
    fn arc_inner_wheel_scales_with_turn() {
        let tuning = Tuning::default();
        assert_eq!(
            arc_wheels(240, Heading::Left, &tuning),
            (Wheel::forward(160), Wheel::forward(200))
        );
        assert_eq!(
            arc_wheels(120, Heading::Left, &tuning),
            (Wheel::forward(80), Wheel::forward(200))
        );
        assert_eq!(
            arc_wheels(0, Heading::Right, &tuning),
            (Wheel::forward(200), Wheel::forward(0))
        );
    }

    #[test]
    fn arc_inner_wheel_is_capped_at_outer_speed() {
        let tuning = Tuning {
            gentlest_arc_percent: 100,
            ..Tuning::default()
        };
        let (left, right) = arc_wheels(1_000, Heading::Left, &tuning);
        assert_eq!(left.speed, 200);
        assert_eq!(right.speed, 200);

        let tuning = Tuning {
            gentlest_arc_percent: 250,
            ..Tuning::default()
        };
        let (left, _) = arc_wheels(240, Heading::Left, &tuning);
        assert_eq!(left.speed, 200);
    }

    #[test]
    fn reverse_backs_up_then_stops() {
        let mut hw = MockHardware::default();
        execute(
            &mut hw,
            Motion::Reverse {
                speed: 140,
                duration_ms: 400,
            },
            &Tuning::default(),
        );
        assert_eq!(
            hw.effects,
            vec![
                Effect::Drive(Wheel::backward(140), Wheel::backward(140)),
                Effect::Delay(400),
                Effect::Drive(Wheel::STOPPED, Wheel::STOPPED),
            ]
        );
    }

    #[test]
    fn spin_right_opposes_wheels_then_resets_direction() {
        let mut hw = MockHardware::default();
        execute(
            &mut hw,
            Motion::Spin {
                duration_ms: 22,
                heading: Heading::Right,
            },
            &Tuning::default(),
        );
        assert_eq!(
            hw.effects,
            vec![
                Effect::Drive(Wheel::forward(200), Wheel::backward(200)),
                Effect::Delay(22),
                Effect::Drive(Wheel::forward(200), Wheel::forward(200)),
            ]
        );
    }
}
