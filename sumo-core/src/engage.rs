use crate::motion::Motion;
use crate::sensors::SensorSnapshot;
use crate::tuning::Tuning;

/// Charge command when the opponent is inside hunt distance.
///
/// The caller freezes the spiral when this fires so the charge runs straight.
/// Edge recovery is evaluated afterwards and overrides the charge.
pub fn evaluate(snapshot: &SensorSnapshot, tuning: &Tuning) -> Option<Motion> {
    (snapshot.distance < tuning.hunt_distance).then_some(Motion::Forward {
        speed: tuning.max_speed,
    })
}
