//! Game-event to sound-cue routing
//!
//! The sim emits discrete `GameEvent`s; this module turns them into playback
//! cues for whatever audio frontend is attached, without touching any audio
//! device itself. Mute and volume come from `Settings` and only ever affect
//! the cue volume, never game logic.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// The falling loop plays quieter than the one-shot effects
const FALLING_LOOP_VOLUME: f32 = 0.3;

/// A playback instruction for the audio frontend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SoundCue {
    /// Begin the looping falling whoosh
    StartFallingLoop { volume: f32 },
    /// Stop the looping falling whoosh
    StopFallingLoop,
    /// One-shot landing thump
    Landing { volume: f32 },
    /// One-shot splat on game over
    Splat { volume: f32 },
}

/// Maps drained game events to sound cues, tracking whether the falling
/// loop is live so stop cues are never emitted redundantly.
#[derive(Debug, Default)]
pub struct CueRouter {
    loop_playing: bool,
}

impl CueRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one frame's drained events into playback cues
    pub fn route(&mut self, events: &[GameEvent], settings: &Settings) -> Vec<SoundCue> {
        let sfx = settings.effective_sfx_volume();
        let mut cues = Vec::new();

        for event in events {
            match event {
                GameEvent::FallStarted => {
                    if !self.loop_playing {
                        cues.push(SoundCue::StartFallingLoop {
                            volume: sfx * FALLING_LOOP_VOLUME,
                        });
                        self.loop_playing = true;
                    }
                }
                GameEvent::Landed => {
                    if self.loop_playing {
                        cues.push(SoundCue::StopFallingLoop);
                        self.loop_playing = false;
                    }
                    cues.push(SoundCue::Landing { volume: sfx });
                }
                GameEvent::Splat => {
                    if self.loop_playing {
                        cues.push(SoundCue::StopFallingLoop);
                        self.loop_playing = false;
                    }
                    cues.push(SoundCue::Splat { volume: sfx });
                }
            }
        }

        cues
    }

    /// Forget playback state between runs
    pub fn reset(&mut self) {
        self.loop_playing = false;
    }
}
