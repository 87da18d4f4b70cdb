use color_eyre::eyre::Result;
use sumo_core::Robot;
use tracing::{debug, info};

use crate::report::{RecoveryCounts, Report};
use crate::scenario::Scenario;
use crate::world::World;

/// Runs the controller against a fresh world until the bout is decided.
pub fn run_bout(scenario: &Scenario) -> Result<Report> {
    scenario.validate()?;
    let mut robot = Robot::new(World::new(scenario), scenario.tuning);

    robot.startup();
    let hunt_started_ms = robot.hardware().time_ms();
    info!(hunt_started_ms, "hunting");

    let mut recoveries = RecoveryCounts::default();
    let mut charges = 0;
    let mut charging = false;

    while !robot.hardware().finished() {
        let tick = robot.step();
        if let Some(recovery) = tick.recovery {
            recoveries.record(recovery.kind);
        }
        if tick.charge.is_some() && !charging {
            charges += 1;
            debug!(time_ms = robot.hardware().time_ms(), "charge");
        }
        charging = tick.charge.is_some();
    }

    let world = robot.hardware();
    Ok(Report {
        seed: scenario.bout.seed,
        outcome: world.outcome().unwrap_or(crate::Outcome::TimeUp),
        elapsed_ms: world.time_ms(),
        hunt_started_ms,
        iterations: robot.controller().iterations(),
        recoveries,
        charges,
        contact_ms: world.contact_ms(),
        closest_approach_cm: world.closest_approach(),
        final_spiral: robot.controller().spiral(),
    })
}
