//! Four-point buoyancy.
//!
//! Each floater is tested against a flat water plane independently. Impulses
//! are applied at the floater's world position, so uneven submersion rocks
//! the hull instead of just lifting it.

use crate::config::{BuoyancyConfig, FloaterArea};
use crate::constants::{BUOYANCY_GAIN, BUOYANCY_MAX_DT};
use crate::physics::{BodyPose, PhysicsWorld};
use glam::Vec3;

impl FloaterArea {
    /// Local floater offsets: two at the bow (0.8 depth), two at the stern
    /// (-0.4 depth).
    pub fn floaters(&self) -> [Vec3; 4] {
        let half_w = self.width * 0.5;
        let bow = self.depth * 0.8;
        let stern = -self.depth * 0.4;
        [
            Vec3::new(-half_w, 0.0, bow),
            Vec3::new(half_w, 0.0, bow),
            Vec3::new(-half_w, 0.0, stern),
            Vec3::new(half_w, 0.0, stern),
        ]
    }
}

/// Upward impulse for one sample, `None` when it is not below the surface.
#[inline]
pub fn floater_impulse(sample_y: f32, water_height: f32, floating_power: f32, dt: f32) -> Option<Vec3> {
    let difference = sample_y - water_height;
    if difference < 0.0 {
        let magnitude = difference.abs() * floating_power * dt.min(BUOYANCY_MAX_DT) * BUOYANCY_GAIN;
        Some(Vec3::Y * magnitude)
    } else {
        None
    }
}

/// Cached floater offsets, rebuilt only when the area changes.
#[derive(Clone, Debug)]
pub struct Buoyancy {
    area: FloaterArea,
    floaters: [Vec3; 4],
}

impl Buoyancy {
    pub fn new(area: FloaterArea) -> Self {
        Self {
            area,
            floaters: area.floaters(),
        }
    }

    pub fn set_area(&mut self, area: FloaterArea) {
        if area != self.area {
            self.area = area;
            self.floaters = area.floaters();
        }
    }

    pub fn floaters(&self) -> &[Vec3; 4] {
        &self.floaters
    }

    pub fn sample_points(&self, pose: &BodyPose) -> [Vec3; 4] {
        self.floaters.map(|local| pose.to_world(local))
    }

    /// Apply one tick of buoyancy; returns the number of submerged samples.
    pub fn apply<W: PhysicsWorld + ?Sized>(
        &self,
        world: &mut W,
        config: &BuoyancyConfig,
        dt: f32,
    ) -> usize {
        let pose = world.pose();
        let mut submerged = 0;
        for point in self.sample_points(&pose) {
            if let Some(impulse) =
                floater_impulse(point.y, config.water_height, config.floating_power, dt)
            {
                world.apply_impulse_at_point(impulse, point);
                submerged += 1;
            }
        }
        submerged
    }
}
