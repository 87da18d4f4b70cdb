use bevy_math::Vec2;
use sumo_core::{Rotation, Wheel};

use crate::scenario::BodyConfig;

/// Differential-drive robot pose.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub position: Vec2,
    /// Heading in radians, counter-clockwise from +x.
    pub angle: f32,
}

fn wheel_velocity(wheel: Wheel, config: &BodyConfig) -> f32 {
    let magnitude = f32::from(wheel.speed) / 255.0 * config.top_speed_cm_s;
    match wheel.rotation {
        Rotation::Forward => magnitude,
        Rotation::Backward => -magnitude,
    }
}

impl Body {
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    pub fn left(&self) -> Vec2 {
        self.forward().perp()
    }

    pub fn integrate(&mut self, left: Wheel, right: Wheel, dt_s: f32, config: &BodyConfig) {
        let vl = wheel_velocity(left, config);
        let vr = wheel_velocity(right, config);
        let v = (vl + vr) / 2.0;
        let omega = (vr - vl) / config.track_width;

        self.angle += omega * dt_s;
        self.position += self.forward() * v * dt_s;
    }

    /// World positions of the reflectance channels, left-outer first.
    pub fn sensor_points(&self, config: &BodyConfig) -> [Vec2; 4] {
        let base = self.position + self.forward() * config.sensor_ahead;
        let left = self.left();
        config.sensor_offsets.map(|offset| base + left * offset)
    }

    pub fn ranger_origin(&self, config: &BodyConfig) -> Vec2 {
        self.position + self.forward() * config.radius
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn body() -> Body {
        Body {
            position: Vec2::ZERO,
            angle: FRAC_PI_2,
        }
    }

    #[test]
    fn equal_wheels_drive_straight() {
        let config = BodyConfig::default();
        let mut body = body();
        body.integrate(Wheel::forward(255), Wheel::forward(255), 1.0, &config);
        assert!((body.position.y - 70.0).abs() < 1e-3);
        assert!(body.position.x.abs() < 1e-3);
        assert!((body.angle - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn opposed_wheels_spin_in_place() {
        let config = BodyConfig::default();
        let mut body = body();
        body.integrate(Wheel::forward(200), Wheel::backward(200), 0.01, &config);
        assert!(body.position.length() < 1e-4);
        // Right wheel backwards turns clockwise.
        assert!(body.angle < FRAC_PI_2);
    }

    #[test]
    fn sensors_are_ordered_left_to_right() {
        let config = BodyConfig::default();
        let points = body().sensor_points(&config);
        assert!((points[0] - Vec2::new(-4.5, 4.0)).length() < 1e-4);
        assert!((points[3] - Vec2::new(4.5, 4.0)).length() < 1e-4);
    }
}
