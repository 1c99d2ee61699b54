//! Mute and volume preferences
//!
//! None of these ever feed back into game logic; they scale playback
//! volume only.

use serde::{Deserialize, Serialize};

/// Audio preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Global mute toggle
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.3,
        }
    }
}

impl Settings {
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        log::info!("audio {}", if self.muted { "muted" } else { "unmuted" });
    }

    /// Effective sound-effect volume (0 while muted)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Effective music volume (0 while muted)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }
}
