use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, ensure};
use serde::{Deserialize, Serialize};
use sumo_core::Tuning;

/// A bout setup, loaded from TOML. Every table and field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub arena: ArenaConfig,
    pub robot: BodyConfig,
    pub opponent: OpponentConfig,
    pub bout: BoutConfig,
    pub tuning: Tuning,
}

/// Ring dimensions in centimetres.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub radius: f32,
    pub border_width: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            radius: 38.5,
            border_width: 2.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub radius: f32,
    pub track_width: f32,
    /// Ground speed of a wheel driven at 255.
    pub top_speed_cm_s: f32,
    /// Distance of the reflectance array ahead of the body center.
    pub sensor_ahead: f32,
    /// Lateral offsets (positive is left) of left-outer, left-inner,
    /// right-inner, right-outer.
    pub sensor_offsets: [f32; 4],
    pub black_reading: u16,
    pub white_reading: u16,
    pub reading_noise: u16,
    pub ranger_half_angle_deg: f32,
    pub ranger_max: u16,
    /// How far outside the rim the robot starts, facing the center.
    pub start_offset: f32,
    pub battery_mv: u16,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            track_width: 8.5,
            top_speed_cm_s: 70.0,
            sensor_ahead: 4.0,
            sensor_offsets: [4.5, 1.5, -1.5, -4.5],
            black_reading: 23_000,
            white_reading: 3_000,
            reading_noise: 500,
            ranger_half_angle_deg: 15.0,
            ranger_max: 400,
            start_offset: 10.0,
            battery_mv: 4_800,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    pub enabled: bool,
    pub position: [f32; 2],
    pub radius: f32,
    /// Random-walk speed; zero keeps the opponent parked.
    pub wander_speed_cm_s: f32,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position: [12.0, 15.0],
            radius: 5.0,
            wander_speed_cm_s: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoutConfig {
    pub duration_ms: u32,
    pub seed: u64,
    pub button_at_ms: u32,
    pub go_at_ms: u32,
}

impl Default for BoutConfig {
    fn default() -> Self {
        Self {
            duration_ms: 30_000,
            seed: 1,
            button_at_ms: 100,
            go_at_ms: 2_000,
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_toml(&text).wrap_err_with(|| format!("invalid scenario {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let arena = &self.arena;
        ensure!(
            arena.border_width > 0.0 && arena.radius > arena.border_width,
            "ring radius must exceed a positive border width"
        );
        ensure!(self.robot.top_speed_cm_s > 0.0, "top speed must be positive");
        ensure!(self.robot.track_width > 0.0, "track width must be positive");
        ensure!(
            self.robot.start_offset > self.robot.sensor_ahead,
            "robot must start with its sensors outside the ring"
        );
        if self.opponent.enabled {
            let [x, y] = self.opponent.position;
            ensure!(
                (x * x + y * y).sqrt() + self.opponent.radius < arena.radius,
                "opponent must start inside the ring"
            );
        }

        // Only delays move simulated time; a zero pacing delay never ends a bout.
        let tuning = &self.tuning;
        ensure!(tuning.loop_delay_ms > 0, "loop_delay_ms must be positive");
        ensure!(tuning.poll_delay_ms > 0, "poll_delay_ms must be positive");
        let black = self.robot.black_reading;
        ensure!(
            tuning.thresholds.left_outer < black && tuning.thresholds.right_outer < black,
            "outer line thresholds must be below the black reading ({black})"
        );
        Ok(())
    }
}
