use std::f32::consts::FRAC_PI_2;

use bevy_math::Vec2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use sumo_core::{Hardware, LineReading, Thresholds, Wheel};
use tracing::{info, warn};

use crate::body::Body;
use crate::opponent::Opponent;
use crate::report::Outcome;
use crate::ring::{Ring, Surface};
use crate::scenario::{BodyConfig, BoutConfig, Scenario};

const STEP_S: f32 = 0.001;

/// Simulated ring, robot and opponent. Time only moves inside `delay_ms`,
/// one millisecond of physics per simulated millisecond, and stops once the
/// bout is decided.
pub struct World {
    ring: Ring,
    config: BodyConfig,
    bout: BoutConfig,
    body: Body,
    wheels: (Wheel, Wheel),
    opponent: Option<Opponent>,
    thresholds: Thresholds,
    rng: StdRng,
    time_ms: u32,
    entered: bool,
    outcome: Option<Outcome>,
    closest_approach: Option<f32>,
    contact_ms: u32,
}

impl World {
    pub fn new(scenario: &Scenario) -> Self {
        let ring = Ring {
            radius: scenario.arena.radius,
            border_width: scenario.arena.border_width,
        };
        // Outside the rim, facing the center.
        let body = Body {
            position: Vec2::new(0.0, -(ring.radius + scenario.robot.start_offset)),
            angle: FRAC_PI_2,
        };

        Self {
            ring,
            config: scenario.robot.clone(),
            bout: scenario.bout.clone(),
            body,
            wheels: (Wheel::STOPPED, Wheel::STOPPED),
            opponent: scenario
                .opponent
                .enabled
                .then(|| Opponent::new(&scenario.opponent)),
            thresholds: scenario.tuning.thresholds,
            rng: StdRng::seed_from_u64(scenario.bout.seed),
            time_ms: 0,
            entered: false,
            outcome: None,
            closest_approach: None,
            contact_ms: 0,
        }
    }

    pub fn time_ms(&self) -> u32 {
        self.time_ms
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn opponent(&self) -> Option<&Opponent> {
        self.opponent.as_ref()
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn closest_approach(&self) -> Option<f32> {
        self.closest_approach
    }

    pub fn contact_ms(&self) -> u32 {
        self.contact_ms
    }

    /// Decided outcome, or `TimeUp` once the bout clock has run out.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
            .or((self.time_ms >= self.bout.duration_ms).then_some(Outcome::TimeUp))
    }

    pub fn finished(&self) -> bool {
        self.outcome().is_some()
    }

    fn advance(&mut self) {
        if self.finished() {
            return;
        }
        self.time_ms += 1;

        let (left, right) = self.wheels;
        self.body.integrate(left, right, STEP_S, &self.config);
        if let Some(opponent) = self.opponent.as_mut() {
            opponent.wander(&mut self.rng, &self.ring, STEP_S);
        }
        self.resolve_contact();
        self.track_position();
    }

    /// The robot shoves the opponent along the contact normal.
    fn resolve_contact(&mut self) {
        let Some(opponent) = self.opponent.as_mut() else {
            return;
        };
        let between = opponent.position - self.body.position;
        let gap = between.length() - self.config.radius - opponent.radius;
        let closest = self.closest_approach.get_or_insert(f32::INFINITY);
        *closest = closest.min(gap.max(0.0));

        if gap < 0.0 {
            self.contact_ms += 1;
            opponent.position += between.normalize_or_zero() * -gap;
            if !self.ring.contains(opponent.position) {
                info!(time_ms = self.time_ms, "opponent pushed out");
                self.outcome = Some(Outcome::OpponentOut);
            }
        }
    }

    fn track_position(&mut self) {
        let position = self.body.position;
        if !self.entered && self.ring.inside_band(position) {
            info!(time_ms = self.time_ms, "robot entered the ring");
            self.entered = true;
        }
        if self.entered && !self.ring.contains(position) {
            warn!(time_ms = self.time_ms, x = position.x, y = position.y, "robot left the ring");
            self.outcome = Some(Outcome::PushedOut);
        }
    }

    fn reflectance(&mut self, point: Vec2) -> u16 {
        let base = match self.ring.surface_at(point) {
            Surface::Black => self.config.black_reading,
            Surface::White => self.config.white_reading,
        };
        let noise = i32::from(self.config.reading_noise);
        let jitter = if noise > 0 {
            self.rng.random_range(-noise..=noise)
        } else {
            0
        };
        (i32::from(base) + jitter).clamp(0, i32::from(u16::MAX)) as u16
    }
}

impl Hardware for World {
    fn ranging_distance(&mut self) -> u16 {
        let max = self.config.ranger_max;
        let Some(opponent) = self.opponent.as_ref() else {
            return max;
        };
        opponent
            .range_from(
                self.body.ranger_origin(&self.config),
                self.body.forward(),
                self.config.ranger_half_angle_deg.to_radians(),
            )
            .map_or(max, |distance| (distance.round() as u16).min(max))
    }

    fn line_sensors(&mut self) -> LineReading {
        // A decided bout reads as on the line so a pending seek ends.
        if self.finished() {
            return LineReading {
                analog: [self.config.black_reading; 4],
                digital: [true; 4],
            };
        }
        let points = self.body.sensor_points(&self.config);
        let analog = points.map(|point| self.reflectance(point));
        LineReading::from_analog(analog, &self.thresholds)
    }

    fn set_line_thresholds(&mut self, thresholds: Thresholds) {
        self.thresholds = thresholds;
    }

    fn drive(&mut self, left: Wheel, right: Wheel) {
        self.wheels = (left, right);
    }

    fn start_button_pressed(&mut self) -> bool {
        self.finished() || self.time_ms >= self.bout.button_at_ms
    }

    fn go_signal(&mut self) -> bool {
        self.finished() || self.time_ms >= self.bout.go_at_ms
    }

    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.advance();
        }
    }

    fn battery_millivolts(&mut self) -> Option<u16> {
        Some(self.config.battery_mv)
    }
}
