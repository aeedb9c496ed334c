//! Background music scheduling: play the track, wait for it to finish plus a
//! fixed gap, play it again.

use slot_core::Millis;

/// Decides on which frames the music track should (re)start
#[derive(Debug, Clone)]
pub struct MusicLoop {
    length_ms: Millis,
    gap_ms: Millis,
    next_start: Option<Millis>,
    stopped: bool,
}

impl MusicLoop {
    pub fn new(length_ms: Millis, gap_ms: Millis) -> Self {
        Self {
            length_ms,
            gap_ms,
            next_start: None,
            stopped: false,
        }
    }

    /// Returns true when the track should be started on this frame
    pub fn poll(&mut self, now: Millis) -> bool {
        if self.stopped {
            return false;
        }
        match self.next_start {
            Some(at) if now < at => false,
            _ => {
                self.next_start = Some(now + self.length_ms + self.gap_ms);
                true
            }
        }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
