//! Keyboard steering: four held flags in, one impulse and one torque out.

use crate::constants::ACCEL_TURN_DAMPING;
use glam::Vec3;

/// Directional keys held during this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionalInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalInput {
    #[inline]
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteeringCommand {
    /// World-space linear impulse along the hull's forward axis.
    pub impulse: Vec3,
    /// Angular impulse; only `y` is ever non-zero.
    pub torque: Vec3,
    /// `power * dt`, reused by containment to scale its correction.
    pub impulse_strength: f32,
    pub active: bool,
}

/// Turn the held keys into impulse requests.
///
/// Thrusting damps any turn requested in the same tick by
/// `max(0, 1 - 10 * dt)`, once per thrust key.
pub fn steer(
    input: DirectionalInput,
    forward_dir: Vec3,
    dt: f32,
    power: f32,
    steer_power: f32,
) -> SteeringCommand {
    let impulse_strength = power * dt;
    let torque_strength = steer_power * dt;
    let turn_damping = (1.0 - ACCEL_TURN_DAMPING * dt).max(0.0);

    let mut thrust = 0.0;
    let mut torque_y = 0.0;

    if input.left {
        torque_y += torque_strength;
    }
    if input.right {
        torque_y -= torque_strength;
    }
    if input.forward {
        thrust += impulse_strength;
        torque_y *= turn_damping;
    }
    if input.backward {
        thrust -= impulse_strength;
        torque_y *= turn_damping;
    }

    SteeringCommand {
        impulse: forward_dir.normalize_or_zero() * thrust,
        torque: Vec3::new(0.0, torque_y, 0.0),
        impulse_strength,
        active: input.any(),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SteeringState {
    #[default]
    Idle,
    Active,
}

impl SteeringState {
    #[inline]
    pub fn from_active(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Idle
        }
    }

    /// Next state for this tick's activity, or `None` when nothing changed.
    #[inline]
    pub fn transition(self, active: bool) -> Option<Self> {
        let next = Self::from_active(active);
        (next != self).then_some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_cancel() {
        let input = DirectionalInput {
            left: true,
            right: true,
            ..Default::default()
        };
        let cmd = steer(input, Vec3::Z, 0.016, 10.0, 0.8);
        assert_eq!(cmd.torque.y, 0.0);
        assert!(cmd.active);
    }

    #[test]
    fn idle_stays_idle() {
        assert_eq!(SteeringState::Idle.transition(false), None);
        assert_eq!(
            SteeringState::Idle.transition(true),
            Some(SteeringState::Active)
        );
    }
}
