use super::{BodyPose, PhysicsWorld};
use crate::config::SceneConfig;
use glam::{Quat, Vec3};
use rapier3d::prelude::*;

#[inline]
fn to_vector(v: Vec3) -> Vector<Real> {
    vector![v.x, v.y, v.z]
}

#[inline]
fn to_point(v: Vec3) -> Point<Real> {
    point![v.x, v.y, v.z]
}

/// Single-body Rapier world holding the boat hull.
pub struct RapierWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    boat: RigidBodyHandle,
    scale: f32,
}

impl RapierWorld {
    pub fn new(config: &SceneConfig) -> Self {
        let boat_cfg = &config.boat;
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        let (axis, angle) = boat_cfg.spawn_rotation().to_axis_angle();
        let body = RigidBodyBuilder::dynamic()
            .translation(to_vector(boat_cfg.spawn_position))
            .rotation(to_vector(axis * angle))
            .linear_damping(boat_cfg.linear_damping)
            .angular_damping(boat_cfg.angular_damping)
            .build();
        let boat = bodies.insert(body);

        let half = boat_cfg.hull_half_extents * boat_cfg.scale;
        let hull = ColliderBuilder::cuboid(half.x, half.y, half.z).build();
        colliders.insert_with_parent(hull, boat, &mut bodies);

        log::info!(
            "[physics] boat spawned at ({:.2},{:.2},{:.2}) yaw={:.3}",
            boat_cfg.spawn_position.x,
            boat_cfg.spawn_position.y,
            boat_cfg.spawn_position.z,
            boat_cfg.spawn_yaw
        );

        Self {
            gravity: to_vector(config.gravity),
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies,
            colliders,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            boat,
            scale: boat_cfg.scale,
        }
    }

    pub fn linear_velocity(&self) -> Vec3 {
        self.bodies
            .get(self.boat)
            .map(|b| {
                let v = b.linvel();
                Vec3::new(v.x, v.y, v.z)
            })
            .unwrap_or(Vec3::ZERO)
    }
}

impl PhysicsWorld for RapierWorld {
    fn pose(&self) -> BodyPose {
        match self.bodies.get(self.boat) {
            Some(b) => {
                let t = b.translation();
                let q = b.rotation().coords;
                BodyPose::new(
                    Vec3::new(t.x, t.y, t.z),
                    Quat::from_xyzw(q.x, q.y, q.z, q.w),
                    self.scale,
                )
            }
            None => BodyPose::default(),
        }
    }

    fn apply_impulse(&mut self, impulse: Vec3) {
        if let Some(b) = self.bodies.get_mut(self.boat) {
            b.apply_impulse(to_vector(impulse), true);
        }
    }

    fn apply_torque_impulse(&mut self, torque: Vec3) {
        if let Some(b) = self.bodies.get_mut(self.boat) {
            b.apply_torque_impulse(to_vector(torque), true);
        }
    }

    fn apply_impulse_at_point(&mut self, impulse: Vec3, point: Vec3) {
        if let Some(b) = self.bodies.get_mut(self.boat) {
            b.apply_impulse_at_point(to_vector(impulse), to_point(point), true);
        }
    }

    fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.integration_parameters.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }
}
