use bevy_math::Vec2;
use rand::Rng;

use crate::ring::Ring;
use crate::scenario::OpponentConfig;

/// A disc-shaped opponent. It never attacks; it either sits still or wanders.
#[derive(Debug, Clone, Copy)]
pub struct Opponent {
    pub position: Vec2,
    pub radius: f32,
    velocity: Vec2,
    wander_speed: f32,
}

impl Opponent {
    pub fn new(config: &OpponentConfig) -> Self {
        Self {
            position: Vec2::from(config.position),
            radius: config.radius,
            velocity: Vec2::ZERO,
            wander_speed: config.wander_speed_cm_s,
        }
    }

    pub fn wander(&mut self, rng: &mut impl Rng, ring: &Ring, dt_s: f32) {
        if self.wander_speed <= 0.0 {
            return;
        }
        let jitter = Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0));
        self.velocity =
            (self.velocity + jitter * self.wander_speed * 4.0 * dt_s).clamp_length_max(self.wander_speed);

        let next = self.position + self.velocity * dt_s;
        // Stays clear of the band on its own; only pushing moves it out.
        if next.length() + self.radius < ring.radius - ring.border_width {
            self.position = next;
        } else {
            self.velocity = -self.velocity;
        }
    }

    /// Ranging distance seen from `origin` looking along `forward`, or `None`
    /// when the opponent is outside the cone.
    pub fn range_from(&self, origin: Vec2, forward: Vec2, half_angle: f32) -> Option<f32> {
        let to = self.position - origin;
        let distance = to.length();
        if distance <= self.radius {
            return Some(0.0);
        }
        let cos = forward.dot(to) / distance;
        (cos >= half_angle.cos()).then_some(distance - self.radius)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn parked(position: [f32; 2]) -> Opponent {
        Opponent::new(&OpponentConfig {
            position,
            ..OpponentConfig::default()
        })
    }

    #[test]
    fn range_respects_the_cone() {
        let opponent = parked([0.0, 30.0]);
        let half = 15f32.to_radians();
        let range = opponent.range_from(Vec2::ZERO, Vec2::Y, half).unwrap();
        assert!((range - 25.0).abs() < 1e-4);
        assert_eq!(opponent.range_from(Vec2::ZERO, Vec2::X, half), None);
        assert_eq!(
            opponent.range_from(Vec2::new(0.0, 28.0), Vec2::Y, half),
            Some(0.0)
        );
    }

    #[test]
    fn wandering_stays_inside_the_band() {
        let ring = Ring {
            radius: 38.5,
            border_width: 2.5,
        };
        let mut opponent = Opponent::new(&OpponentConfig {
            wander_speed_cm_s: 40.0,
            ..OpponentConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20_000 {
            opponent.wander(&mut rng, &ring, 0.001);
            assert!(opponent.position.length() + opponent.radius < ring.radius - ring.border_width);
        }
    }
}
