//! Slot Player - standalone cabinet library
//!
//! This crate provides the `PlayerApp` application handler that runs the
//! slot machine in a window with gamepad input, audio and an egui overlay.

pub mod assets;
pub mod gamepad;
mod hud;
mod player_app;
mod render;

pub use player_app::PlayerApp;
