//! Audio trigger system: maps SlotEvents to sound playback

use slot_runtime::SlotEvent;

/// Cache key of the spin-start cue
pub const SPIN_CUE: &str = "spin";
/// Cache key of the win cue
pub const WIN_CUE: &str = "win";

/// A sound to play in response to a slot event
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    Play { sound: String, volume: f64 },
    StopMusic,
}

/// Which cue answers which event
pub struct AudioTrigger {
    on_spin: Option<String>,
    on_win: Option<String>,
    volume: f64,
}

impl Default for AudioTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioTrigger {
    pub fn new() -> Self {
        Self {
            on_spin: Some(SPIN_CUE.to_string()),
            on_win: Some(WIN_CUE.to_string()),
            volume: 1.0,
        }
    }

    /// Process a list of slot events and generate audio commands
    pub fn process_events(&self, events: &[SlotEvent]) -> Vec<AudioCommand> {
        let mut commands = Vec::new();

        for event in events {
            let sound = match event {
                SlotEvent::SpinStarted { .. } => self.on_spin.as_ref(),
                SlotEvent::Win { .. } => self.on_win.as_ref(),
                _ => None,
            };
            if let Some(sound) = sound {
                commands.push(AudioCommand::Play {
                    sound: sound.clone(),
                    volume: self.volume,
                });
            }
        }

        commands
    }
}
