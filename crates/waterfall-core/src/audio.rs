//! Audio commands and the distance-driven waterfall mix.
//!
//! The core never touches an audio API. It emits [`AudioCommand`]s into an
//! [`AudioSink`]; the web front-end maps them onto WebAudio params and the
//! native driver just logs them.

use crate::config::{MixSnapshot, WaterfallMix};
use crate::constants::*;
use crate::math::{clamp, lerp, map_range, round_to};
use crate::steering::SteeringState;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioParam {
    MasterGain,
    WaterfallGain,
    WaterfallFilterFrequency,
    WaterfallReverbWet,
    MotorboatGain,
    WavesGain,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AudioCommand {
    /// Jump to `value` immediately.
    Set { param: AudioParam, value: f32 },
    /// Exponential approach to `target` over `duration_sec`.
    Ramp {
        param: AudioParam,
        target: f32,
        duration_sec: f32,
    },
    /// Resume the audio context after the first user gesture.
    Unlock,
    SetMuted(bool),
}

pub type CommandBuf = SmallVec<[AudioCommand; 4]>;

pub trait AudioSink {
    fn send(&mut self, command: AudioCommand);
}

impl AudioSink for Vec<AudioCommand> {
    fn send(&mut self, command: AudioCommand) {
        self.push(command);
    }
}

impl WaterfallMix {
    pub fn at(&self, p: f32) -> MixSnapshot {
        MixSnapshot {
            gain: lerp(self.min.gain, self.max.gain, p),
            reverb_decay: lerp(self.min.reverb_decay, self.max.reverb_decay, p),
            reverb_wet: lerp(self.min.reverb_wet, self.max.reverb_wet, p),
            filter_frequency: lerp(self.min.filter_frequency, self.max.filter_frequency, p),
        }
    }
}

/// Quantised closeness to the landmark: 0.0 at 25 units or more, 1.0 at 10
/// units or less, in steps of 0.1.
#[inline]
pub fn proximity_bucket(distance: f32) -> f32 {
    let p = map_range(
        distance,
        PROXIMITY_FAR_DISTANCE,
        PROXIMITY_NEAR_DISTANCE,
        0.0,
        1.0,
    );
    round_to(clamp(p, 0.0, 1.0), PROXIMITY_DECIMALS)
}

/// Edge-triggered proximity state. Starts at bucket 0, so a boat spawned far
/// away leaves the graph at its initial values until it moves closer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Proximity {
    pub bucket: f32,
}

impl Default for Proximity {
    fn default() -> Self {
        Self { bucket: 0.0 }
    }
}

impl Proximity {
    /// Next state for `distance`, or `None` when the bucket is unchanged.
    #[inline]
    pub fn transition(self, distance: f32) -> Option<Self> {
        let bucket = proximity_bucket(distance);
        (bucket != self.bucket).then_some(Self { bucket })
    }
}

/// Commands for a freshly entered proximity bucket.
pub fn waterfall_mix_commands(mix: &WaterfallMix, p: f32) -> CommandBuf {
    let snap = mix.at(p);
    let mut out = CommandBuf::new();
    out.push(AudioCommand::Ramp {
        param: AudioParam::WaterfallGain,
        target: snap.gain,
        duration_sec: WATERFALL_GAIN_RAMP_SEC,
    });
    out.push(AudioCommand::Set {
        param: AudioParam::WaterfallReverbWet,
        value: snap.reverb_wet,
    });
    out.push(AudioCommand::Ramp {
        param: AudioParam::WaterfallFilterFrequency,
        target: snap.filter_frequency,
        duration_sec: WATERFALL_FILTER_RAMP_SEC,
    });
    out
}

#[inline]
pub fn motorboat_command(state: SteeringState) -> AudioCommand {
    let target = match state {
        SteeringState::Active => MOTORBOAT_ACTIVE_GAIN,
        SteeringState::Idle => MOTORBOAT_IDLE_GAIN,
    };
    AudioCommand::Ramp {
        param: AudioParam::MotorboatGain,
        target,
        duration_sec: MOTORBOAT_RAMP_SEC,
    }
}

/// Owns the two edge-triggered audio paths driven by the boat.
#[derive(Clone, Debug)]
pub struct ProximityMixer {
    mix: WaterfallMix,
    proximity: Proximity,
    steering: SteeringState,
}

impl ProximityMixer {
    pub fn new(mix: WaterfallMix) -> Self {
        Self {
            mix,
            proximity: Proximity::default(),
            steering: SteeringState::Idle,
        }
    }

    pub fn bucket(&self) -> f32 {
        self.proximity.bucket
    }

    pub fn steering(&self) -> SteeringState {
        self.steering
    }

    /// Recompute the bucket for `position`; emits only when it changed.
    pub fn update_proximity(&mut self, position: Vec3, landmark: Vec3) -> CommandBuf {
        let distance = position.distance(landmark);
        match self.proximity.transition(distance) {
            Some(next) => {
                log::debug!(
                    "[mix] proximity {:.1} -> {:.1} (d={:.2})",
                    self.proximity.bucket,
                    next.bucket,
                    distance
                );
                self.proximity = next;
                waterfall_mix_commands(&self.mix, next.bucket)
            }
            None => CommandBuf::new(),
        }
    }

    /// Ramp the motorboat channel on Idle/Active changes only.
    pub fn update_steering(&mut self, active: bool) -> Option<AudioCommand> {
        let next = self.steering.transition(active)?;
        log::debug!("[mix] steering {:?} -> {:?}", self.steering, next);
        self.steering = next;
        Some(motorboat_command(next))
    }
}

/// Values the graph is built with before any command arrives.
pub fn initial_levels(mix: &WaterfallMix) -> [(AudioParam, f32); 6] {
    [
        (AudioParam::MasterGain, INITIAL_MASTER_GAIN),
        (AudioParam::WaterfallGain, INITIAL_WATERFALL_GAIN),
        (AudioParam::WaterfallFilterFrequency, mix.min.filter_frequency),
        (AudioParam::WaterfallReverbWet, mix.min.reverb_wet),
        (AudioParam::MotorboatGain, INITIAL_MOTORBOAT_GAIN),
        (AudioParam::WavesGain, INITIAL_WAVES_GAIN),
    ]
}
