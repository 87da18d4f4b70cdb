use tracing::debug;

use crate::edge::{self, Recovery};
use crate::engage;
use crate::motion::{Heading, Motion};
use crate::sensors::SensorSnapshot;
use crate::spiral::SpiralState;
use crate::tuning::Tuning;

/// Outcome of one hunt iteration, in the order the motions are issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    pub spiral: Option<Motion>,
    pub charge: Option<Motion>,
    pub recovery: Option<Recovery>,
}

impl Tick {
    pub fn motions(self) -> impl Iterator<Item = Motion> {
        self.spiral
            .into_iter()
            .chain(self.charge)
            .chain(self.recovery.map(|recovery| recovery.motion))
    }
}

/// Owns the hunt state. `tick` only decides; the caller performs the motions.
#[derive(Debug, Clone)]
pub struct Controller {
    tuning: Tuning,
    spiral: SpiralState,
    heading: Heading,
    iterations: u64,
}

impl Controller {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            spiral: SpiralState::initial(tuning.max_turn),
            heading: Heading::Left,
            iterations: 0,
            tuning,
        }
    }

    pub fn with_spiral(mut self, spiral: SpiralState) -> Self {
        self.spiral = spiral;
        self
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn spiral(&self) -> SpiralState {
        self.spiral
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn tick(&mut self, snapshot: &SensorSnapshot) -> Tick {
        self.iterations += 1;

        let charge = engage::evaluate(snapshot, &self.tuning);
        if charge.is_some() {
            if self.spiral.active {
                debug!(distance = snapshot.distance, "opponent in range, charging");
            }
            self.spiral.deactivate();
        }

        let spiral = self.spiral.step(self.heading, &self.tuning);

        let recovery = edge::evaluate(&snapshot.line, &self.tuning);
        if let Some(recovery) = recovery {
            debug!(rule = ?recovery.kind, motion = ?recovery.motion, "edge recovery");
            self.heading = recovery.heading;
            self.spiral = recovery.spiral;
        }

        Tick {
            spiral,
            charge,
            recovery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeKind;
    use crate::sensors::LineReading;
    use crate::spiral::Phase;

    fn clear() -> SensorSnapshot {
        SensorSnapshot {
            line: LineReading::default(),
            distance: 400,
        }
    }

    #[test]
    fn quiet_iteration_only_spirals() {
        let mut controller = Controller::new(Tuning::default());
        let tick = controller.tick(&clear());
        assert_eq!(
            tick.motions().collect::<Vec<_>>(),
            [Motion::Arc {
                turn: 239,
                heading: Heading::Left
            }]
        );
        assert_eq!(controller.spiral().turn_factor, 11_999);
        assert_eq!(controller.iterations(), 1);
    }

    #[test]
    fn engagement_freezes_spiral_and_charges() {
        let mut controller =
            Controller::new(Tuning::default()).with_spiral(SpiralState::initial(12_000));
        let before = controller.spiral().turn_factor;
        let tick = controller.tick(&SensorSnapshot {
            distance: 5,
            ..clear()
        });

        assert_eq!(
            tick.motions().collect::<Vec<_>>(),
            [Motion::Forward { speed: 200 }]
        );
        assert!(!controller.spiral().active);
        assert_eq!(controller.spiral().turn_factor, before);
    }

    #[test]
    fn lost_opponent_keeps_spiral_frozen() {
        let mut controller = Controller::new(Tuning::default());
        controller.tick(&SensorSnapshot {
            distance: 5,
            ..clear()
        });
        let tick = controller.tick(&clear());
        assert_eq!(tick.motions().count(), 0);
        assert!(!controller.spiral().active);
    }

    #[test]
    fn edge_recovery_overrides_charge() {
        let mut controller = Controller::new(Tuning::default());
        let tick = controller.tick(&SensorSnapshot {
            line: LineReading {
                analog: [23_000, 0, 0, 23_000],
                digital: [true, false, false, true],
            },
            distance: 5,
        });

        let motions: Vec<_> = tick.motions().collect();
        assert_eq!(motions.len(), 2);
        assert!(matches!(motions[1], Motion::Reverse { .. }));
        assert_eq!(controller.spiral(), SpiralState::initial(12_000));
    }

    #[test]
    fn both_edges_beat_left_edge() {
        let mut controller = Controller::new(Tuning::default());
        controller.set_heading(Heading::Right);
        // Left outer over threshold and right outer over threshold: matches both rules.
        let tick = controller.tick(&SensorSnapshot {
            line: LineReading {
                analog: [23_000, 0, 0, 23_000],
                digital: [true, false, false, true],
            },
            distance: 400,
        });
        assert_eq!(tick.recovery.unwrap().kind, EdgeKind::BothEdges);
        assert_eq!(controller.heading(), Heading::Left);
    }

    #[test]
    fn left_edge_commits_right_heading() {
        let tuning = Tuning::default();
        let mut controller = Controller::new(tuning);
        controller.tick(&SensorSnapshot {
            line: LineReading::from_analog([20_000, 0, 0, 0], &tuning.thresholds),
            distance: 400,
        });
        assert_eq!(controller.heading(), Heading::Right);
        assert_eq!(
            controller.spiral(),
            SpiralState {
                turn_factor: 5_000,
                phase: Phase::Contracting,
                active: true
            }
        );

        let tick = controller.tick(&clear());
        assert_eq!(
            tick.spiral,
            Some(Motion::Arc {
                turn: 5_001 / 50,
                heading: Heading::Right
            })
        );
    }

    #[test]
    fn full_expansion_takes_max_turn_iterations() {
        let mut controller =
            Controller::new(Tuning::default()).with_spiral(SpiralState::initial(12_000));
        for _ in 0..12_000 {
            controller.tick(&clear());
        }
        assert_eq!(controller.spiral().turn_factor, 0);
        assert_eq!(controller.spiral().phase, Phase::Contracting);

        for _ in 0..10 {
            controller.tick(&clear());
        }
        assert_eq!(controller.spiral().turn_factor, 10);
        assert_eq!(controller.spiral().phase, Phase::Contracting);
    }
}
