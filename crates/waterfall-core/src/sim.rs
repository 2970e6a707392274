//! Per-frame driver.
//!
//! One call to [`Simulation::tick`] runs every stage exactly once, in
//! [`TickStage::ORDER`]. Nothing is registered dynamically; adding a stage
//! means adding it to that array.

use crate::audio::{AudioSink, ProximityMixer};
use crate::buoyancy::Buoyancy;
use crate::camera::CameraFollow;
use crate::config::SceneConfig;
use crate::containment::{containment_impulse, resolve_impulse, Containment};
use crate::context::AppContext;
use crate::error::ConfigError;
use crate::physics::PhysicsWorld;
use crate::steering::{steer, DirectionalInput, SteeringCommand};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickStage {
    Input,
    Steering,
    Physics,
    Buoyancy,
    Audio,
    Camera,
}

impl TickStage {
    pub const ORDER: [TickStage; 6] = [
        TickStage::Input,
        TickStage::Steering,
        TickStage::Physics,
        TickStage::Buoyancy,
        TickStage::Audio,
        TickStage::Camera,
    ];
}

/// Input polled once per frame by the front-end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickInput {
    pub keys: DirectionalInput,
    /// Pointer in normalized device coordinates.
    pub pointer: Vec2,
}

#[derive(Clone, Debug, Default)]
pub struct TickReport {
    pub stages: Vec<TickStage>,
    pub steering: Option<SteeringCommand>,
    pub containment: Option<Containment>,
    pub applied_impulse: Vec3,
    pub submerged: usize,
    pub bucket: f32,
    pub commands: usize,
    pub skipped: bool,
}

/// Counts commands on their way to the real sink.
struct Counting<'a> {
    inner: &'a mut dyn AudioSink,
    sent: usize,
}

impl AudioSink for Counting<'_> {
    fn send(&mut self, command: crate::audio::AudioCommand) {
        self.sent += 1;
        self.inner.send(command);
    }
}

pub struct Simulation<W: PhysicsWorld> {
    config: SceneConfig,
    world: W,
    buoyancy: Buoyancy,
    mixer: ProximityMixer,
    camera: CameraFollow,
    context: AppContext,
    last_keys: DirectionalInput,
}

impl<W: PhysicsWorld> Simulation<W> {
    pub fn new(config: SceneConfig, world: W) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            buoyancy: Buoyancy::new(config.buoyancy.floater_area),
            mixer: ProximityMixer::new(config.mix),
            camera: CameraFollow::new(config.camera.clone()),
            context: AppContext::new(),
            last_keys: DirectionalInput::default(),
            world,
            config,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn camera(&self) -> &CameraFollow {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraFollow {
        &mut self.camera
    }

    pub fn mixer(&self) -> &ProximityMixer {
        &self.mixer
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut AppContext {
        &mut self.context
    }

    pub fn buoyancy(&self) -> &Buoyancy {
        &self.buoyancy
    }

    pub fn toggle_muted(&mut self, audio: &mut dyn AudioSink) {
        if let Some(cmd) = self.context.toggle_muted() {
            audio.send(cmd);
        }
    }

    /// Explicit user gesture outside the steering keys (e.g. a click).
    pub fn notify_interaction(&mut self, audio: &mut dyn AudioSink) {
        for cmd in self.context.mark_interacted() {
            audio.send(cmd);
        }
    }

    pub fn tick(&mut self, input: &TickInput, dt: f32, audio: &mut dyn AudioSink) -> TickReport {
        let mut report = TickReport::default();
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("[sim] skipping tick with dt={}", dt);
            report.skipped = true;
            return report;
        }
        let mut audio = Counting {
            inner: audio,
            sent: 0,
        };

        for stage in TickStage::ORDER {
            match stage {
                TickStage::Input => {
                    if input.keys != self.last_keys {
                        self.last_keys = input.keys;
                        for cmd in self.context.mark_interacted() {
                            audio.send(cmd);
                        }
                    }
                }
                TickStage::Steering => {
                    let pose = self.world.pose();
                    let boat = &self.config.boat;
                    let cmd = steer(input.keys, pose.forward(), dt, boat.power, boat.steer_power);
                    let (state, push) = containment_impulse(
                        pose.translation,
                        self.config.landmark,
                        &self.config.containment,
                        cmd.impulse_strength,
                        dt,
                    );
                    let impulse = resolve_impulse(cmd.impulse, push);
                    self.world.apply_impulse(impulse);
                    self.world.apply_torque_impulse(cmd.torque);
                    if let Some(motor) = self.mixer.update_steering(cmd.active) {
                        audio.send(motor);
                    }
                    report.steering = Some(cmd);
                    report.containment = Some(state);
                    report.applied_impulse = impulse;
                }
                TickStage::Physics => self.world.step(dt),
                TickStage::Buoyancy => {
                    report.submerged = self.buoyancy.apply(&mut self.world, &self.config.buoyancy, dt);
                }
                TickStage::Audio => {
                    let position = self.world.pose().translation;
                    for cmd in self.mixer.update_proximity(position, self.config.landmark) {
                        audio.send(cmd);
                    }
                    report.bucket = self.mixer.bucket();
                }
                TickStage::Camera => {
                    let pose = self.world.pose();
                    self.camera.update(&pose, input.pointer, dt);
                }
            }
            report.stages.push(stage);
        }
        report.commands = audio.sent;
        report
    }
}
