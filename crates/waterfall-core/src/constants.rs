use glam::Vec3;

// Shared tuning constants for the boat, the waterfall mix and the follow camera.

// Scene layout
pub const LANDMARK_POSITION: [f32; 3] = [0.0, 0.0, 0.0]; // waterfall sits at world origin
pub const GRAVITY_Y: f32 = -1.0; // low gravity keeps the hull floaty

// Containment annulus around the waterfall
pub const WATERFALL_NEAR_LIMIT: f32 = 6.0;
pub const WATERFALL_FAR_LIMIT: f32 = 30.0;
pub const CONTAINMENT_GAIN: f32 = 50.0; // makes containment dominate steering near the edge

// Boat handling
pub const BOAT_POWER: f32 = 10.0;
pub const BOAT_STEER_POWER: f32 = 0.8;
pub const BOAT_LINEAR_DAMPING: f32 = 0.5;
pub const BOAT_ANGULAR_DAMPING: f32 = 0.5;
pub const BOAT_SCALE: f32 = 0.6; // uniform scale applied to every local anchor
pub const BOAT_SPAWN_DISTANCE: f32 = 27.0; // spawn z
pub const BOAT_SPAWN_YAW: f32 = std::f32::consts::PI * 1.02;
pub const BOAT_HULL_HALF_EXTENTS: [f32; 3] = [0.75, 0.3, 1.0]; // unscaled
pub const ACCEL_TURN_DAMPING: f32 = 10.0; // torque *= max(0, 1 - k*dt) while thrusting

// Buoyancy
pub const WATER_HEIGHT: f32 = 0.05;
pub const FLOATING_POWER: f32 = 1.5;
pub const FLOATER_AREA_WIDTH: f32 = 1.5;
pub const FLOATER_AREA_DEPTH: f32 = 2.0;
pub const BUOYANCY_MAX_DT: f32 = 0.05; // frame-time clamp after stalls
pub const BUOYANCY_GAIN: f32 = 10.0;

// Proximity mix: distance [far, near] maps to bucket [0, 1]
pub const PROXIMITY_FAR_DISTANCE: f32 = 25.0;
pub const PROXIMITY_NEAR_DISTANCE: f32 = 10.0;
pub const PROXIMITY_DECIMALS: i32 = 1;
pub const WATERFALL_GAIN_RAMP_SEC: f32 = 1.0;
pub const WATERFALL_FILTER_RAMP_SEC: f32 = 2.0;

// Waterfall mix table
pub const MIX_MIN_GAIN: f32 = 0.2;
pub const MIX_MAX_GAIN: f32 = 0.3;
pub const MIX_MIN_REVERB_DECAY: f32 = 1.0;
pub const MIX_MAX_REVERB_DECAY: f32 = 10.0;
pub const MIX_MIN_REVERB_WET: f32 = 0.2;
pub const MIX_MAX_REVERB_WET: f32 = 0.1;
pub const MIX_MIN_FILTER_HZ: f32 = 320.0;
pub const MIX_MAX_FILTER_HZ: f32 = 5000.0;

// Other channels
pub const MOTORBOAT_ACTIVE_GAIN: f32 = 0.4;
pub const MOTORBOAT_IDLE_GAIN: f32 = 0.0;
pub const MOTORBOAT_RAMP_SEC: f32 = 2.0;
pub const MASTER_UNLOCKED_GAIN: f32 = 0.5;
pub const MASTER_UNLOCK_RAMP_SEC: f32 = 1.0;
pub const INITIAL_MASTER_GAIN: f32 = 0.0;
pub const INITIAL_WATERFALL_GAIN: f32 = 0.5;
pub const INITIAL_MOTORBOAT_GAIN: f32 = 0.0;
pub const INITIAL_WAVES_GAIN: f32 = 0.02;

// Camera
pub const CAMERA_ANCHOR_LOCAL: [f32; 3] = [0.0, 3.0, -5.0];
pub const LOOK_AT_ANCHOR_LOCAL: [f32; 3] = [0.0, 1.0, 3.0];
pub const CAMERA_DAMPING: [f32; 3] = [0.5, 0.1, 0.5]; // per-axis rate
pub const POINTER_DAMPING: f32 = 0.05;
pub const LOOK_POINTER_OFFSET: [f32; 2] = [0.8, 0.5];
pub const LOOK_HEIGHT_BIAS: f32 = 0.3;
pub const CAMERA_START: [f32; 3] = [0.0, 8.0, 10.0];
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.01;
pub const CAMERA_ZFAR: f32 = 100.0;

// Damping helpers assume this frame rate for their `rate` argument
pub const DAMP_TARGET_FPS: f32 = 60.0;

#[inline]
pub fn landmark_vec3() -> Vec3 {
    Vec3::from_array(LANDMARK_POSITION)
}
