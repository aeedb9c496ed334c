//! Audio engine wrapping Kira's AudioManager
//!
//! Handles sound loading and playback.
//! Degrades gracefully when no audio device is available.

use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use kira::{AudioManager, AudioManagerSettings, DefaultBackend, Tween};
use slot_core::{Result, SlotError};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Wraps Kira's AudioManager with sound caching
pub struct AudioEngine {
    manager: Option<AudioManager<DefaultBackend>>,
    sound_cache: HashMap<String, StaticSoundData>,
    music: Option<StaticSoundHandle>,
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEngine {
    pub fn new() -> Self {
        // Try to create the audio manager; gracefully fail if no device
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| log::warn!("Audio: no device available ({e}), running silent"))
            .ok();

        Self {
            manager,
            ..Self::silent()
        }
    }

    /// An engine that never opens a device. Sounds still load, so missing
    /// files are reported the same way.
    pub fn silent() -> Self {
        Self {
            manager: None,
            sound_cache: HashMap::new(),
            music: None,
        }
    }

    /// Whether audio is actually available
    pub fn is_available(&self) -> bool {
        self.manager.is_some()
    }

    /// Load a sound file into the cache
    pub fn load_sound(&mut self, name: &str, path: &Path) -> Result<()> {
        if self.sound_cache.contains_key(name) {
            return Ok(());
        }

        let sound_data = StaticSoundData::from_file(path).map_err(|e| {
            SlotError::AssetError(format!("Failed to load sound '{}': {}", path.display(), e))
        })?;

        self.sound_cache.insert(name.to_string(), sound_data);
        Ok(())
    }

    /// Check if a sound is already loaded
    pub fn has_sound(&self, name: &str) -> bool {
        self.sound_cache.contains_key(name)
    }

    /// Playback length of a cached sound
    pub fn duration(&self, name: &str) -> Option<Duration> {
        self.sound_cache.get(name).map(|data| data.duration())
    }

    fn prepared(&self, name: &str, volume: f64) -> Result<StaticSoundData> {
        let sound_data = self
            .sound_cache
            .get(name)
            .ok_or_else(|| SlotError::AudioError(format!("Sound not cached: {name}")))?
            .clone();
        Ok(sound_data.volume(amplitude_to_db(volume)))
    }

    /// Fire-and-forget playback of a cached sound
    pub fn play(&mut self, name: &str, volume: f64) -> Result<()> {
        if self.manager.is_none() {
            return Ok(());
        }
        let data = self.prepared(name, volume)?;
        if let Some(manager) = &mut self.manager {
            manager
                .play(data)
                .map_err(|e| SlotError::AudioError(format!("Failed to play '{name}': {e}")))?;
        }
        Ok(())
    }

    /// Start the music track, replacing any track already playing
    pub fn play_music(&mut self, name: &str, volume: f64) -> Result<()> {
        if self.manager.is_none() {
            return Ok(());
        }
        let data = self.prepared(name, volume)?;
        self.stop_music();
        if let Some(manager) = &mut self.manager {
            let handle = manager
                .play(data)
                .map_err(|e| SlotError::AudioError(format!("Failed to play '{name}': {e}")))?;
            self.music = Some(handle);
        }
        Ok(())
    }

    pub fn stop_music(&mut self) {
        if let Some(mut handle) = self.music.take() {
            handle.stop(Tween {
                duration: Duration::from_millis(250),
                ..Default::default()
            });
        }
    }
}

/// Convert linear amplitude (0.0–2.0) to decibels
fn amplitude_to_db(amplitude: f64) -> kira::Decibels {
    if amplitude <= 0.0 {
        kira::Decibels(-60.0) // silence
    } else {
        kira::Decibels((20.0 * (amplitude as f32).log10()).max(-60.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_gain_is_zero_db() {
        assert!(amplitude_to_db(1.0).0.abs() < 1e-6);
    }

    #[test]
    fn silence_floors_at_minus_sixty() {
        assert_eq!(amplitude_to_db(0.0).0, -60.0);
        assert_eq!(amplitude_to_db(1e-9).0, -60.0);
    }

    #[test]
    fn missing_file_is_an_asset_error() {
        let mut engine = AudioEngine::silent();
        let err = engine
            .load_sound("spin", Path::new("/nonexistent/spin.ogg"))
            .unwrap_err();
        assert!(matches!(err, SlotError::AssetError(_)));
        assert!(err.to_string().contains("spin.ogg"));
        assert!(!engine.has_sound("spin"));
    }

    #[test]
    fn silent_engine_ignores_playback() {
        let mut engine = AudioEngine::silent();
        assert!(!engine.is_available());
        assert!(engine.play("anything", 1.0).is_ok());
        assert!(engine.play_music("anything", 1.0).is_ok());
        engine.stop_music();
    }
}
