//! Slot Player - Standalone cabinet binary
//!
//! Opens the slot machine window and runs until closed.
//!
//! Usage:
//!   slot-player [--config <cabinet.toml>] [--assets <dir>] [--seed <n>] [--fullscreen] [--mute]

use anyhow::{Context, Result};
use clap::Parser;
use slot_audio::engine::AudioEngine;
use slot_audio::AudioSystem;
use slot_core::{GameConfig, RandomSymbols};
use slot_player::assets::{load_icon, load_symbol_images};
use slot_player::gamepad::{parse_button, Gamepads};
use slot_player::PlayerApp;
use slot_runtime::SlotMachine;
use std::path::PathBuf;
use std::sync::Arc;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "slot-player")]
#[command(about = "Arcade slot machine - three reels, one button")]
struct Args {
    /// Path to a cabinet config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the asset directory
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Seed for the symbol draws (reproducible sessions)
    #[arg(long)]
    seed: Option<u64>,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,

    /// Do not open an audio device
    #[arg(long)]
    mute: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config =
        GameConfig::load_or_default(args.config.as_deref()).context("Failed to load config")?;
    if args.fullscreen {
        config.display.fullscreen = true;
    }
    if let Some(assets) = args.assets {
        config.assets.root = assets;
    }
    let config = Arc::new(config);

    // Assets are all-or-nothing
    let images = load_symbol_images(&config.assets).context("Failed to load symbol images")?;
    let icon = load_icon(&config.assets).context("Failed to load window icon")?;

    let engine = if args.mute {
        AudioEngine::silent()
    } else {
        AudioEngine::new()
    };
    let mut audio = AudioSystem::new(engine);
    audio
        .load(&config.assets)
        .context("Failed to load audio")?;

    let spin_button = parse_button(&config.input.spin_button).context("Invalid input config")?;
    let gamepads = Gamepads::new(spin_button);

    if let Some(seed) = args.seed {
        log::info!("Symbol seed: {seed}");
    }
    let machine = SlotMachine::new(config.clone(), RandomSymbols::new(args.seed));

    log::info!(
        "Score {} | spin cost {} | each matching row pays {}",
        config.economy.initial_score,
        config.economy.base_spin_cost,
        config.economy.score_per_win
    );
    if config.input.keyboard_spin {
        log::info!("Controls: gamepad {} or Space to spin, Escape to quit", config.input.spin_button);
    } else {
        log::info!("Controls: gamepad {} to spin, Escape to quit", config.input.spin_button);
    }

    // Create and run the event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = PlayerApp::new(machine, audio, gamepads, &images, icon);
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
