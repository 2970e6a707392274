//! Keeps the boat inside the annulus around the waterfall.
//!
//! Outside the zone the steering impulse is replaced outright, not blended,
//! so crossing a limit can produce a visible snap.

use crate::config::ContainmentZone;
use crate::constants::CONTAINMENT_GAIN;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Containment {
    Inside,
    TooClose { overshoot: f32 },
    TooFar { overshoot: f32 },
}

impl ContainmentZone {
    pub fn classify(&self, distance: f32) -> Containment {
        if distance < self.near_limit {
            Containment::TooClose {
                overshoot: (distance - self.near_limit).abs(),
            }
        } else if distance > self.far_limit {
            Containment::TooFar {
                overshoot: (distance - self.far_limit).abs(),
            }
        } else {
            Containment::Inside
        }
    }
}

/// Horizontal direction from `from` to `to`.
///
/// The vertical component is dropped after normalising, so the result is
/// only unit length when both points share a height.
#[inline]
fn flat_direction(from: Vec3, to: Vec3) -> Vec3 {
    let mut dir = (to - from).normalize_or_zero();
    dir.y = 0.0;
    dir
}

/// Corrective impulse replacing steering thrust, or `None` inside the zone.
pub fn containment_impulse(
    position: Vec3,
    landmark: Vec3,
    zone: &ContainmentZone,
    impulse_strength: f32,
    dt: f32,
) -> (Containment, Option<Vec3>) {
    let distance = position.distance(landmark);
    let state = zone.classify(distance);
    let push = match state {
        Containment::Inside => None,
        Containment::TooClose { overshoot } => Some(
            flat_direction(landmark, position) * overshoot * impulse_strength * dt * CONTAINMENT_GAIN,
        ),
        Containment::TooFar { overshoot } => Some(
            flat_direction(position, landmark) * overshoot * impulse_strength * dt * CONTAINMENT_GAIN,
        ),
    };
    (state, push)
}

/// Steering impulse after the containment decision. Torque is never touched.
#[inline]
pub fn resolve_impulse(steering_impulse: Vec3, containment: Option<Vec3>) -> Vec3 {
    containment.unwrap_or(steering_impulse)
}
