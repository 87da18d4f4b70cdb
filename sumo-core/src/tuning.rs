use crate::sensors::Thresholds;

/// Every constant the robot was tuned with on the ring.
///
/// `Default` is the competition tuning. The values are empirical: they were
/// fitted to one robot's motors, reflectance array and ranger, so a different
/// body needs its own set rather than a recomputed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tuning {
    /// Cruise, charge and center-dash wheel speed.
    pub max_speed: u8,
    /// Wheel speed while creeping towards the start line.
    pub seek_speed: u8,
    /// Ranger reading below which the opponent is charged.
    pub hunt_distance: u16,
    pub loop_delay_ms: u32,
    pub poll_delay_ms: u32,
    pub button_settle_ms: u32,
    /// Full-speed run from the start line, long enough to reach the ring center.
    pub center_dash_ms: u32,
    /// Upper bound of the spiral turn factor. Together with `loop_delay_ms`
    /// this sets the length of one spiral sweep (about 12 s each way).
    pub max_turn: u16,
    pub turn_divisor: u16,
    /// Inner wheel speed at the gentlest arc, in percent of the outer wheel.
    pub gentlest_arc_percent: u8,
    /// Turn factor the spiral restarts from after a single-edge recovery.
    pub head_start_turn: u16,
    pub backup_speed: u8,
    pub backup_ms: u32,
    /// Numerator of the in-place turn delay, `sharp_turn_constant / analog`.
    pub sharp_turn_constant: u32,
    /// Analog level on the opposite outer channel that makes a single edge
    /// count as both edges.
    pub pre_trigger_margin: u16,
    pub low_battery_mv: u16,
    pub thresholds: Thresholds,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_speed: 200,
            seek_speed: 80,
            hunt_distance: 20,
            loop_delay_ms: 1,
            poll_delay_ms: 1,
            button_settle_ms: 10,
            center_dash_ms: 700,
            max_turn: 12_000,
            turn_divisor: 50,
            gentlest_arc_percent: 80,
            head_start_turn: 5_000,
            backup_speed: 140,
            backup_ms: 400,
            sharp_turn_constant: 520_000,
            pre_trigger_margin: 10_000,
            low_battery_mv: 4_200,
            thresholds: Thresholds::default(),
        }
    }
}

impl Tuning {
    /// Largest value an arc command can carry, `max_turn / turn_divisor`.
    pub fn turn_range(&self) -> u16 {
        self.max_turn / self.turn_divisor.max(1)
    }

    /// Head start clamped into the spiral's valid range.
    pub fn head_start(&self) -> u16 {
        self.head_start_turn.min(self.max_turn)
    }
}
