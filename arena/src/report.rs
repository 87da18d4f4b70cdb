use std::fmt;

use serde::Serialize;
use sumo_core::SpiralState;
use sumo_core::edge::EdgeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    TimeUp,
    PushedOut,
    OpponentOut,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecoveryCounts {
    pub both_edges: u32,
    pub left_edge: u32,
    pub right_edge: u32,
}

impl RecoveryCounts {
    pub fn record(&mut self, kind: EdgeKind) {
        match kind {
            EdgeKind::BothEdges => self.both_edges += 1,
            EdgeKind::LeftEdge => self.left_edge += 1,
            EdgeKind::RightEdge => self.right_edge += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.both_edges + self.left_edge + self.right_edge
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub seed: u64,
    pub outcome: Outcome,
    pub elapsed_ms: u32,
    /// Simulated time at which the hunt loop took over.
    pub hunt_started_ms: u32,
    pub iterations: u64,
    pub recoveries: RecoveryCounts,
    pub charges: u32,
    pub contact_ms: u32,
    /// Smallest gap between robot and opponent, `None` without an opponent.
    pub closest_approach_cm: Option<f32>,
    pub final_spiral: SpiralState,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "outcome:       {:?} after {} ms (seed {})", self.outcome, self.elapsed_ms, self.seed)?;
        writeln!(f, "hunt started:  {} ms, {} iterations", self.hunt_started_ms, self.iterations)?;
        writeln!(
            f,
            "recoveries:    {} (both {}, left {}, right {})",
            self.recoveries.total(),
            self.recoveries.both_edges,
            self.recoveries.left_edge,
            self.recoveries.right_edge
        )?;
        writeln!(f, "charges:       {}, contact {} ms", self.charges, self.contact_ms)?;
        if let Some(gap) = self.closest_approach_cm {
            writeln!(f, "closest:       {gap:.1} cm")?;
        }
        write!(
            f,
            "spiral:        turn factor {} {:?}{}",
            self.final_spiral.turn_factor,
            self.final_spiral.phase,
            if self.final_spiral.active { "" } else { " (frozen)" }
        )
    }
}
