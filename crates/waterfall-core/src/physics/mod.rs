//! Narrow seam to the rigid-body engine.
//!
//! The controllers never integrate anything themselves: they read a
//! [`BodyPose`] and submit impulses. Whoever implements [`PhysicsWorld`] owns
//! velocity and integration.

use glam::{Quat, Vec3};

#[cfg(feature = "rapier")]
mod rapier;
#[cfg(feature = "rapier")]
pub use rapier::RapierWorld;

/// World transform of the tracked body plus the uniform scale of its visual
/// hierarchy (anchors and floaters are authored in unscaled local units).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl BodyPose {
    pub fn new(translation: Vec3, rotation: Quat, scale: f32) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.translation + self.rotation * (local * self.scale)
    }

    /// Unit vector along the body's local +Z axis.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        (self.rotation * Vec3::Z).normalize_or_zero()
    }
}

impl Default for BodyPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY, 1.0)
    }
}

pub trait PhysicsWorld {
    fn pose(&self) -> BodyPose;
    fn apply_impulse(&mut self, impulse: Vec3);
    fn apply_torque_impulse(&mut self, torque: Vec3);
    fn apply_impulse_at_point(&mut self, impulse: Vec3, point: Vec3);
    /// Integrate the world forward by `dt` seconds.
    fn step(&mut self, dt: f32);
}
