use crate::controller::{Controller, Tick};
use crate::hardware::Hardware;
use crate::motion;
use crate::sensors::SensorSnapshot;
use crate::startup::{Sequencer, StartupPhase};
use crate::tuning::Tuning;

/// The controller bound to a robot body. Motor and delay calls happen here and
/// nowhere else.
pub struct Robot<H> {
    hardware: H,
    controller: Controller,
    sequencer: Sequencer,
}

impl<H: Hardware> Robot<H> {
    pub fn new(hardware: H, tuning: Tuning) -> Self {
        Self::from_parts(hardware, Controller::new(tuning))
    }

    pub fn from_parts(hardware: H, controller: Controller) -> Self {
        Self {
            hardware,
            controller,
            sequencer: Sequencer::new(),
        }
    }

    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hardware
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn startup_phase(&self) -> StartupPhase {
        self.sequencer.phase()
    }

    pub fn into_hardware(self) -> H {
        self.hardware
    }

    /// Blocks through the whole start sequence.
    pub fn startup(&mut self) {
        let tuning = *self.controller.tuning();
        let heading = self.sequencer.run(&mut self.hardware, &tuning);
        self.controller.set_heading(heading);
    }

    /// One paced hunt iteration.
    pub fn step(&mut self) -> Tick {
        let tuning = *self.controller.tuning();
        self.hardware.delay_ms(tuning.loop_delay_ms);

        let snapshot = SensorSnapshot::read(&mut self.hardware);
        let tick = self.controller.tick(&snapshot);
        for motion in tick.motions() {
            motion::execute(&mut self.hardware, motion, &tuning);
        }
        tick
    }

    /// Startup, then hunt until power-off.
    pub fn run(mut self) -> ! {
        self.startup();
        loop {
            self.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Effect, MockHardware};
    use crate::motion::{Heading, Motion, Wheel};
    use crate::sensors::LineReading;
    use crate::spiral::{Phase, SpiralState};

    fn both_outer() -> LineReading {
        LineReading {
            analog: [23_000, 3_000, 3_000, 23_000],
            digital: [true, false, false, true],
        }
    }

    #[test]
    fn step_paces_before_reading() {
        let mut robot = Robot::new(MockHardware::default(), Tuning::default());
        robot.step();
        assert_eq!(robot.hardware().effects[0], Effect::Delay(1));
        assert_eq!(robot.hardware().drives().len(), 1);
    }

    #[test]
    fn both_edges_mid_spiral_backs_up_once_and_resets() {
        let tuning = Tuning::default();
        let controller = Controller::new(tuning).with_spiral(SpiralState {
            turn_factor: 3_000,
            phase: Phase::Expanding,
            active: true,
        });
        let mut hw = MockHardware::default();
        hw.lines.push_back(both_outer());
        let mut robot = Robot::from_parts(hw, controller);

        let tick = robot.step();
        assert!(tick.recovery.is_some());
        assert_eq!(robot.hardware().reverse_count(), 1);
        assert_eq!(robot.controller().spiral(), SpiralState::initial(12_000));
        assert_eq!(robot.controller().heading(), Heading::Left);

        robot.step();
        assert_eq!(robot.hardware().reverse_count(), 1);
        assert_eq!(robot.controller().spiral().turn_factor, 11_999);
        assert_eq!(robot.controller().spiral().phase, Phase::Expanding);
    }

    #[test]
    fn charge_then_boundary_resumes_spiral() {
        let tuning = Tuning::default();
        let mut hw = MockHardware::default();
        hw.distances.extend([10, 10, 10]);
        hw.lines
            .extend([LineReading::default(), LineReading::default(), both_outer()]);
        let mut robot = Robot::new(hw, tuning);

        robot.step();
        robot.step();
        assert!(!robot.controller().spiral().active);
        robot.step();
        assert!(robot.controller().spiral().active);

        let tick = robot.step();
        assert_eq!(
            tick.spiral,
            Some(Motion::Arc {
                turn: 11_999 / 50,
                heading: Heading::Left
            })
        );
    }

    #[test]
    fn startup_hands_off_to_hunt() {
        let mut hw = MockHardware::default();
        hw.lines.push_back(both_outer());
        let mut robot = Robot::new(hw, Tuning::default());
        robot.startup();
        assert_eq!(robot.startup_phase(), StartupPhase::Done);

        let drives_before = robot.hardware().drives().len();
        robot.step();
        let drives = robot.hardware().drives();
        assert_eq!(drives.len(), drives_before + 1);
        assert_eq!(
            drives.last(),
            Some(&(Wheel::forward(159), Wheel::forward(200)))
        );
    }
}
