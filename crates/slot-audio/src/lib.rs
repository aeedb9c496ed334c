//! Slot Audio - cues and background music (Kira backend)
//!
//! Provides audio playback for the cabinet:
//! - `AudioEngine` - wraps Kira AudioManager and the sound cache
//! - `AudioTrigger` - maps SlotEvents to cue playback
//! - `MusicLoop` - replays the background track with a gap between plays
//! - `AudioSystem` - the three together, driven once per frame

pub mod engine;
pub mod music;
pub mod trigger;

use engine::AudioEngine;
use music::MusicLoop;
use slot_core::{AssetConfig, Millis, Result};
use slot_runtime::SlotEvent;
use trigger::{AudioCommand, AudioTrigger, SPIN_CUE, WIN_CUE};

/// Cache key of the background track
pub const MUSIC: &str = "music";

/// Top-level audio system integrating engine, triggers and music
pub struct AudioSystem {
    pub engine: AudioEngine,
    pub triggers: AudioTrigger,
    music: Option<MusicLoop>,
}

impl AudioSystem {
    pub fn new(engine: AudioEngine) -> Self {
        Self {
            engine,
            triggers: AudioTrigger::new(),
            music: None,
        }
    }

    /// Load every cue and the music track. Any missing file is an error.
    pub fn load(&mut self, assets: &AssetConfig) -> Result<()> {
        self.engine.load_sound(SPIN_CUE, &assets.path(&assets.spin_sound))?;
        self.engine.load_sound(WIN_CUE, &assets.path(&assets.win_sound))?;
        self.engine.load_sound(MUSIC, &assets.path(&assets.music))?;

        let length_ms = self
            .engine
            .duration(MUSIC)
            .map(|d| d.as_millis() as Millis)
            .unwrap_or_default();
        self.music = Some(MusicLoop::new(length_ms, assets.music_gap_ms));
        Ok(())
    }

    /// Process slot events and drive the music loop
    pub fn update(&mut self, events: &[SlotEvent], now: Millis) {
        if !self.engine.is_available() {
            return;
        }

        for cmd in self.triggers.process_events(events) {
            self.execute(cmd);
        }

        if let Some(music) = &mut self.music {
            if music.poll(now) {
                if let Err(e) = self.engine.play_music(MUSIC, 0.6) {
                    log::warn!("Audio: {e}");
                }
            }
        }
    }

    fn execute(&mut self, cmd: AudioCommand) {
        match cmd {
            AudioCommand::Play { sound, volume } => {
                if let Err(e) = self.engine.play(&sound, volume) {
                    log::warn!("Audio: {e}");
                }
            }
            AudioCommand::StopMusic => self.engine.stop_music(),
        }
    }

    /// Stop the music for good (on quit)
    pub fn shutdown(&mut self) {
        if let Some(music) = &mut self.music {
            music.stop();
        }
        self.execute(AudioCommand::StopMusic);
    }
}
