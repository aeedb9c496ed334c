//! Slot Reels - reel animation engine
//!
//! Provides the per-reel motion model:
//! - `ReelPhase` - tagged Idle / Spinning / Stopping state with its transition function
//! - `ReelEngine` - the three reels, staggered starts, re-roll on settle
//! - `easing` - pure progress curves used for the visual offset
//! - `layout` - where a cell lands on screen for a given offset

pub mod easing;
mod engine;
pub mod layout;
mod phase;

pub use engine::ReelEngine;
pub use phase::{PhaseKind, ReelPhase};
