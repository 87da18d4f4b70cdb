//! Ring boundary recovery.
//!
//! The rules form an ordered table; the first rule whose predicate matches the
//! line reading decides the recovery. Order is precedence.

use crate::motion::{Heading, Motion};
use crate::sensors::{LineChannel, LineReading};
use crate::spiral::SpiralState;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeKind {
    BothEdges,
    LeftEdge,
    RightEdge,
}

/// What a fired rule changes: the maneuver to run and the state the
/// controller continues from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recovery {
    pub kind: EdgeKind,
    pub motion: Motion,
    pub heading: Heading,
    pub spiral: SpiralState,
}

pub struct EdgeRule {
    pub kind: EdgeKind,
    pub matches: fn(&LineReading, &Tuning) -> bool,
    pub respond: fn(&LineReading, &Tuning) -> Recovery,
}

pub const EDGE_RULES: [EdgeRule; 3] = [
    EdgeRule {
        kind: EdgeKind::BothEdges,
        matches: both_edges,
        respond: back_off,
    },
    EdgeRule {
        kind: EdgeKind::LeftEdge,
        matches: left_edge,
        respond: turn_right,
    },
    EdgeRule {
        kind: EdgeKind::RightEdge,
        matches: right_edge,
        respond: turn_left,
    },
];

pub fn evaluate(line: &LineReading, tuning: &Tuning) -> Option<Recovery> {
    EDGE_RULES
        .iter()
        .find(|rule| (rule.matches)(line, tuning))
        .map(|rule| (rule.respond)(line, tuning))
}

/// In-place turn length for a single-edge trigger. The further the channel
/// reads past the line, the shorter and harder the turn.
pub fn turn_delay(analog: u16, tuning: &Tuning) -> u32 {
    tuning.sharp_turn_constant / u32::from(analog.max(1))
}

fn both_edges(line: &LineReading, tuning: &Tuning) -> bool {
    let left = line.over(LineChannel::LeftOuter);
    let right = line.over(LineChannel::RightOuter);
    let margin = tuning.pre_trigger_margin;

    (left && right)
        || (left && line.analog(LineChannel::RightOuter) >= margin)
        || (right && line.analog(LineChannel::LeftOuter) >= margin)
}

fn left_edge(line: &LineReading, _: &Tuning) -> bool {
    line.over(LineChannel::LeftOuter)
}

fn right_edge(line: &LineReading, _: &Tuning) -> bool {
    line.over(LineChannel::RightOuter)
}

fn back_off(_: &LineReading, tuning: &Tuning) -> Recovery {
    Recovery {
        kind: EdgeKind::BothEdges,
        motion: Motion::Reverse {
            speed: tuning.backup_speed,
            duration_ms: tuning.backup_ms,
        },
        heading: Heading::Left,
        spiral: SpiralState::initial(tuning.max_turn),
    }
}

fn turn_right(line: &LineReading, tuning: &Tuning) -> Recovery {
    Recovery {
        kind: EdgeKind::LeftEdge,
        motion: Motion::Spin {
            duration_ms: turn_delay(line.analog(LineChannel::LeftOuter), tuning),
            heading: Heading::Right,
        },
        heading: Heading::Right,
        spiral: SpiralState::head_start(tuning.head_start()),
    }
}

fn turn_left(line: &LineReading, tuning: &Tuning) -> Recovery {
    Recovery {
        kind: EdgeKind::RightEdge,
        motion: Motion::Spin {
            duration_ms: turn_delay(line.analog(LineChannel::RightOuter), tuning),
            heading: Heading::Left,
        },
        heading: Heading::Left,
        spiral: SpiralState::head_start(tuning.head_start()),
    }
}
