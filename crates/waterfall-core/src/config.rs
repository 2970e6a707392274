//! Tunable scene parameters.
//!
//! Everything here is plain data built from `constants.rs`. A front-end may
//! tweak values before handing the config to [`crate::Simulation`], which
//! validates it once; nothing is re-validated per frame.

use crate::constants::*;
use crate::error::ConfigError;
use glam::{Quat, Vec3};

#[derive(Clone, Debug)]
pub struct BoatConfig {
    pub power: f32,
    pub steer_power: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub scale: f32,
    pub spawn_position: Vec3,
    pub spawn_yaw: f32,
    pub hull_half_extents: Vec3,
}

impl Default for BoatConfig {
    fn default() -> Self {
        Self {
            power: BOAT_POWER,
            steer_power: BOAT_STEER_POWER,
            linear_damping: BOAT_LINEAR_DAMPING,
            angular_damping: BOAT_ANGULAR_DAMPING,
            scale: BOAT_SCALE,
            spawn_position: Vec3::new(0.0, WATER_HEIGHT, BOAT_SPAWN_DISTANCE),
            spawn_yaw: BOAT_SPAWN_YAW,
            hull_half_extents: Vec3::from_array(BOAT_HULL_HALF_EXTENTS),
        }
    }
}

impl BoatConfig {
    pub fn spawn_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.spawn_yaw)
    }
}

/// Annulus around the landmark in which the boat moves freely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainmentZone {
    pub near_limit: f32,
    pub far_limit: f32,
}

impl Default for ContainmentZone {
    fn default() -> Self {
        Self {
            near_limit: WATERFALL_NEAR_LIMIT,
            far_limit: WATERFALL_FAR_LIMIT,
        }
    }
}

impl ContainmentZone {
    pub fn new(near_limit: f32, far_limit: f32) -> Result<Self, ConfigError> {
        let zone = Self {
            near_limit,
            far_limit,
        };
        zone.validate()?;
        Ok(zone)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.near_limit.is_finite()
            && self.far_limit.is_finite()
            && self.near_limit >= 0.0
            && self.near_limit < self.far_limit;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidContainment {
                near: self.near_limit,
                far: self.far_limit,
            })
        }
    }
}

/// Rectangle spanned by the four floaters, in unscaled hull units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloaterArea {
    pub width: f32,
    pub depth: f32,
}

impl Default for FloaterArea {
    fn default() -> Self {
        Self {
            width: FLOATER_AREA_WIDTH,
            depth: FLOATER_AREA_DEPTH,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BuoyancyConfig {
    pub water_height: f32,
    pub floating_power: f32,
    pub floater_area: FloaterArea,
}

impl Default for BuoyancyConfig {
    fn default() -> Self {
        Self {
            water_height: WATER_HEIGHT,
            floating_power: FLOATING_POWER,
            floater_area: FloaterArea::default(),
        }
    }
}

/// One end of the waterfall mix table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MixSnapshot {
    pub gain: f32,
    pub reverb_decay: f32,
    pub reverb_wet: f32,
    pub filter_frequency: f32,
}

/// `min` is used at proximity 0 (far), `max` at proximity 1 (near).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaterfallMix {
    pub min: MixSnapshot,
    pub max: MixSnapshot,
}

impl Default for WaterfallMix {
    fn default() -> Self {
        Self {
            min: MixSnapshot {
                gain: MIX_MIN_GAIN,
                reverb_decay: MIX_MIN_REVERB_DECAY,
                reverb_wet: MIX_MIN_REVERB_WET,
                filter_frequency: MIX_MIN_FILTER_HZ,
            },
            max: MixSnapshot {
                gain: MIX_MAX_GAIN,
                reverb_decay: MIX_MAX_REVERB_DECAY,
                reverb_wet: MIX_MAX_REVERB_WET,
                filter_frequency: MIX_MAX_FILTER_HZ,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraConfig {
    pub anchor_local: Vec3,
    pub look_at_local: Vec3,
    pub damping: Vec3,
    pub pointer_damping: f32,
    pub look_pointer_offset: [f32; 2],
    pub look_height_bias: f32,
    pub start_position: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            anchor_local: Vec3::from_array(CAMERA_ANCHOR_LOCAL),
            look_at_local: Vec3::from_array(LOOK_AT_ANCHOR_LOCAL),
            damping: Vec3::from_array(CAMERA_DAMPING),
            pointer_damping: POINTER_DAMPING,
            look_pointer_offset: LOOK_POINTER_OFFSET,
            look_height_bias: LOOK_HEIGHT_BIAS,
            start_position: Vec3::from_array(CAMERA_START),
            fovy_radians: CAMERA_FOVY,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub landmark: Vec3,
    pub gravity: Vec3,
    pub boat: BoatConfig,
    pub containment: ContainmentZone,
    pub buoyancy: BuoyancyConfig,
    pub mix: WaterfallMix,
    pub camera: CameraConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            landmark: landmark_vec3(),
            gravity: Vec3::new(0.0, GRAVITY_Y, 0.0),
            boat: BoatConfig::default(),
            containment: ContainmentZone::default(),
            buoyancy: BuoyancyConfig::default(),
            mix: WaterfallMix::default(),
            camera: CameraConfig::default(),
        }
    }
}

fn finite(value: f32, name: &'static str) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite(name))
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.landmark.is_finite() {
            return Err(ConfigError::NonFinite("landmark"));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFinite("gravity"));
        }
        finite(self.boat.power, "boat.power")?;
        finite(self.boat.steer_power, "boat.steer_power")?;
        finite(self.boat.linear_damping, "boat.linear_damping")?;
        finite(self.boat.angular_damping, "boat.angular_damping")?;
        finite(self.boat.scale, "boat.scale")?;
        finite(self.boat.spawn_yaw, "boat.spawn_yaw")?;
        if !self.boat.spawn_position.is_finite() {
            return Err(ConfigError::NonFinite("boat.spawn_position"));
        }
        self.containment.validate()?;

        finite(self.buoyancy.water_height, "buoyancy.water_height")?;
        finite(self.buoyancy.floating_power, "buoyancy.floating_power")?;
        let area = self.buoyancy.floater_area;
        if !(area.width > 0.0 && area.depth > 0.0 && area.width.is_finite() && area.depth.is_finite())
        {
            return Err(ConfigError::InvalidFloaterArea {
                width: area.width,
                depth: area.depth,
            });
        }

        for snap in [&self.mix.min, &self.mix.max] {
            finite(snap.gain, "mix.gain")?;
            finite(snap.reverb_wet, "mix.reverb_wet")?;
            finite(snap.reverb_decay, "mix.reverb_decay")?;
            if !(snap.filter_frequency > 0.0 && snap.filter_frequency.is_finite()) {
                return Err(ConfigError::InvalidMixRange("mix.filter_frequency"));
            }
        }
        Ok(())
    }
}
