//! Application-wide UI/audio flags with a single owner.

use crate::audio::{AudioCommand, AudioParam, CommandBuf};
use crate::constants::{MASTER_UNLOCKED_GAIN, MASTER_UNLOCK_RAMP_SEC};

#[derive(Clone, Debug, Default)]
pub struct AppContext {
    is_loaded: bool,
    is_muted: bool,
    has_user_interacted: bool,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn has_user_interacted(&self) -> bool {
        self.has_user_interacted
    }

    pub fn set_loaded(&mut self, loaded: bool) {
        self.is_loaded = loaded;
    }

    pub fn set_muted(&mut self, muted: bool) -> Option<AudioCommand> {
        if self.is_muted == muted {
            return None;
        }
        self.is_muted = muted;
        log::debug!("[ctx] muted={}", muted);
        Some(AudioCommand::SetMuted(muted))
    }

    pub fn toggle_muted(&mut self) -> Option<AudioCommand> {
        self.set_muted(!self.is_muted)
    }

    /// First call unlocks audio and fades the master bus in; later calls are
    /// no-ops.
    pub fn mark_interacted(&mut self) -> CommandBuf {
        let mut out = CommandBuf::new();
        if self.has_user_interacted {
            return out;
        }
        self.has_user_interacted = true;
        log::debug!("[ctx] first interaction, unlocking audio");
        out.push(AudioCommand::Unlock);
        out.push(AudioCommand::Ramp {
            param: AudioParam::MasterGain,
            target: MASTER_UNLOCKED_GAIN,
            duration_sec: MASTER_UNLOCK_RAMP_SEC,
        });
        out
    }
}
