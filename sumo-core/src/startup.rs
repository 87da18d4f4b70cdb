//! Start-of-bout sequence: arm, creep onto the start line, wait for the go
//! pulse, dash to the ring center.
//!
//! Every wait is a blocking poll. A button or go pulse that never arrives
//! means the robot never starts.

use tracing::{info, warn};

use crate::hardware::Hardware;
use crate::motion::{self, Heading, Motion};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StartupPhase {
    #[default]
    Prepare,
    AwaitButton,
    SeekLine,
    AwaitGo,
    Dash,
    Done,
}

#[derive(Debug, Default)]
pub struct Sequencer {
    phase: StartupPhase,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> StartupPhase {
        self.phase
    }

    /// Runs the current phase to completion and moves to the next one.
    pub fn advance<H: Hardware + ?Sized>(&mut self, hardware: &mut H, tuning: &Tuning) -> StartupPhase {
        self.phase = match self.phase {
            StartupPhase::Prepare => {
                prepare(hardware, tuning);
                StartupPhase::AwaitButton
            }
            StartupPhase::AwaitButton => {
                while !hardware.start_button_pressed() {
                    hardware.delay_ms(tuning.poll_delay_ms);
                }
                hardware.delay_ms(tuning.button_settle_ms);
                StartupPhase::SeekLine
            }
            StartupPhase::SeekLine => {
                seek_line(hardware, tuning);
                StartupPhase::AwaitGo
            }
            StartupPhase::AwaitGo => {
                hardware.await_go_signal();
                StartupPhase::Dash
            }
            StartupPhase::Dash => {
                motion::execute(
                    hardware,
                    Motion::Forward {
                        speed: tuning.max_speed,
                    },
                    tuning,
                );
                hardware.delay_ms(tuning.center_dash_ms);
                StartupPhase::Done
            }
            StartupPhase::Done => StartupPhase::Done,
        };
        info!(phase = ?self.phase, "startup");
        self.phase
    }

    /// Runs every remaining phase. Returns the heading the hunt starts with.
    pub fn run<H: Hardware + ?Sized>(&mut self, hardware: &mut H, tuning: &Tuning) -> Heading {
        while self.phase != StartupPhase::Done {
            self.advance(hardware, tuning);
        }
        // Arbitrary at this point; the first spiral bends left.
        Heading::Left
    }
}

fn prepare<H: Hardware + ?Sized>(hardware: &mut H, tuning: &Tuning) {
    // Motors creep at power-up until explicitly stopped.
    motion::execute(hardware, Motion::Stop, tuning);
    hardware.set_line_thresholds(tuning.thresholds);

    match hardware.battery_millivolts() {
        Some(mv) if mv < tuning.low_battery_mv => warn!(mv, "battery low"),
        Some(mv) => info!(mv, "battery"),
        None => {}
    }
}

fn seek_line<H: Hardware + ?Sized>(hardware: &mut H, tuning: &Tuning) {
    loop {
        motion::execute(
            hardware,
            Motion::Forward {
                speed: tuning.seek_speed,
            },
            tuning,
        );
        let on_line = hardware.line_sensors().both_outer();
        if on_line {
            motion::execute(hardware, Motion::Stop, tuning);
        }
        hardware.delay_ms(tuning.poll_delay_ms);
        if on_line {
            return;
        }
    }
}
