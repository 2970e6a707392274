//! Damped chase camera.
//!
//! Purely cosmetic: each axis of the eye eases toward an anchor behind the
//! boat, and the look target is nudged by a smoothed pointer.

use crate::config::CameraConfig;
use crate::math::damp;
use crate::physics::BodyPose;
use glam::{Mat4, Vec2, Vec3};

/// Chase camera state handed to the renderer each frame.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// World to clip space, column-major, ready to upload as a uniform.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Debug)]
pub struct CameraFollow {
    config: CameraConfig,
    pub camera: Camera,
    pointer: Vec2,
}

impl CameraFollow {
    pub fn new(config: CameraConfig) -> Self {
        let camera = Camera {
            eye: config.start_position,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: config.fovy_radians,
            znear: config.znear,
            zfar: config.zfar,
        };
        Self {
            config,
            camera,
            pointer: Vec2::ZERO,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.camera.aspect = aspect;
        }
    }

    pub fn smoothed_pointer(&self) -> Vec2 {
        self.pointer
    }

    /// `pointer` is in normalized device coordinates, y up.
    pub fn update(&mut self, pose: &BodyPose, pointer: Vec2, dt: f32) {
        let cfg = &self.config;
        let anchor = pose.to_world(cfg.anchor_local);
        let eye = &mut self.camera.eye;
        eye.x = damp(eye.x, anchor.x, cfg.damping.x, dt);
        eye.y = damp(eye.y, anchor.y, cfg.damping.y, dt);
        eye.z = damp(eye.z, anchor.z, cfg.damping.z, dt);

        self.pointer.x = damp(self.pointer.x, pointer.x, cfg.pointer_damping, dt);
        self.pointer.y = damp(self.pointer.y, pointer.y, cfg.pointer_damping, dt);

        let mut look = pose.to_world(cfg.look_at_local);
        look.x += self.pointer.x * cfg.look_pointer_offset[0];
        look.y += self.pointer.y * cfg.look_pointer_offset[1] + cfg.look_height_bias;
        self.camera.target = look;
    }
}
