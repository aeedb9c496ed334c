//! Per-reel motion state as a tagged variant.
//!
//! Speed only exists inside the moving variants, so an idle reel has no speed
//! to get out of sync. `step` is the whole transition table.

use crate::easing::{ease_in_out_quad, ease_out_quad, progress};
use slot_core::{Millis, TimingConfig};

/// Fraction of the spin duration the stopping ease is stretched over
const STOP_EASE_FRACTION: f32 = 0.3;

/// Motion state of one reel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ReelPhase {
    /// At rest, showing its symbols
    #[default]
    Idle,
    /// Ramping up towards the speed cap
    Spinning { speed: f32, started_at: Millis },
    /// Braking towards rest
    Stopping { speed: f32, started_at: Millis },
}

/// Variant tag without payload, for read-only consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Idle,
    Spinning,
    Stopping,
}

impl ReelPhase {
    /// A fresh spin. `started_at` may lie in the future when the reel is staggered.
    pub fn spin(now: Millis, start_delay: Millis) -> Self {
        ReelPhase::Spinning {
            speed: 0.0,
            started_at: now.saturating_add(start_delay),
        }
    }

    /// Advance one tick.
    ///
    /// `column` shifts the braking deadline right by `column × stop_delay`, which
    /// makes the reels stop left to right.
    pub fn step(self, column: usize, now: Millis, timing: &TimingConfig) -> Self {
        match self {
            ReelPhase::Idle => ReelPhase::Idle,
            ReelPhase::Spinning { speed, started_at } => {
                let speed = (speed + timing.acceleration).min(timing.max_spin_speed);
                let brake_at = started_at
                    .saturating_add(timing.spin_duration_ms)
                    .saturating_add(column as Millis * timing.stop_delay_ms);
                if now > brake_at {
                    ReelPhase::Stopping {
                        speed,
                        started_at: now,
                    }
                } else {
                    ReelPhase::Spinning { speed, started_at }
                }
            }
            ReelPhase::Stopping { speed, started_at } => {
                let speed = (speed - timing.deceleration).max(0.0);
                if speed == 0.0 {
                    ReelPhase::Idle
                } else {
                    ReelPhase::Stopping { speed, started_at }
                }
            }
        }
    }

    pub fn kind(&self) -> PhaseKind {
        match self {
            ReelPhase::Idle => PhaseKind::Idle,
            ReelPhase::Spinning { .. } => PhaseKind::Spinning,
            ReelPhase::Stopping { .. } => PhaseKind::Stopping,
        }
    }

    pub fn speed(&self) -> f32 {
        match self {
            ReelPhase::Idle => 0.0,
            ReelPhase::Spinning { speed, .. } | ReelPhase::Stopping { speed, .. } => *speed,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ReelPhase::Idle)
    }

    /// Vertical displacement of the reel's cells, in pixels.
    ///
    /// Derived from elapsed time only; never stored. Elapsed time saturates at
    /// zero, so a staggered start or a clock stepping backwards reads as "not
    /// started yet".
    pub fn offset(&self, now: Millis, spin_duration_ms: Millis, screen_height: f32) -> f32 {
        let spin = spin_duration_ms as f32;
        match *self {
            ReelPhase::Idle => 0.0,
            ReelPhase::Spinning { started_at, .. } => {
                let t = progress(now.saturating_sub(started_at), spin);
                ease_in_out_quad(t) * screen_height
            }
            ReelPhase::Stopping { started_at, .. } => {
                let t = progress(now.saturating_sub(started_at), spin * STOP_EASE_FRACTION);
                (1.0 - ease_out_quad(t)) * screen_height
            }
        }
    }
}
