//! Spiral search generator.
//!
//! The turn factor ramps from `max_turn` down to zero and back, one step per
//! hunt iteration, reflecting at both bounds. Driving forward while the arc
//! tightens and relaxes traces an inward/outward spiral without any notion of
//! absolute position. After a recovery resets the ramp the spiral is no longer
//! centered on the ring; that drift is accepted.

use tracing::trace;

use crate::motion::{Heading, Motion};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Turn factor decreasing.
    Expanding,
    /// Turn factor increasing.
    Contracting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralState {
    pub turn_factor: u16,
    pub phase: Phase,
    /// Cleared while charging; frozen until an edge recovery resets it.
    pub active: bool,
}

impl SpiralState {
    pub const fn initial(max_turn: u16) -> Self {
        Self {
            turn_factor: max_turn,
            phase: Phase::Expanding,
            active: true,
        }
    }

    /// Tight re-entry after a single-edge recovery.
    pub const fn head_start(turn_factor: u16) -> Self {
        Self {
            turn_factor,
            phase: Phase::Contracting,
            active: true,
        }
    }

    /// Moves the ramp one step. Returns `true` when the phase flipped.
    pub fn advance(&mut self, max_turn: u16) -> bool {
        self.turn_factor = self.turn_factor.min(max_turn);
        match self.phase {
            Phase::Expanding => {
                self.turn_factor = self.turn_factor.saturating_sub(1);
                if self.turn_factor == 0 {
                    self.phase = Phase::Contracting;
                    return true;
                }
            }
            Phase::Contracting => {
                self.turn_factor = self.turn_factor.saturating_add(1).min(max_turn);
                if self.turn_factor >= max_turn {
                    self.phase = Phase::Expanding;
                    return true;
                }
            }
        }
        false
    }

    /// One generator iteration: advances if active and yields the arc to drive.
    pub fn step(&mut self, heading: Heading, tuning: &Tuning) -> Option<Motion> {
        if !self.active {
            return None;
        }
        if self.advance(tuning.max_turn) {
            trace!(phase = ?self.phase, turn_factor = self.turn_factor, "spiral reversed");
        }
        Some(Motion::Arc {
            turn: self.arc_turn(tuning),
            heading,
        })
    }

    pub fn arc_turn(&self, tuning: &Tuning) -> u16 {
        self.turn_factor / tuning.turn_divisor.max(1)
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
