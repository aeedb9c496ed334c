//! Slot Core - Foundational types for the slot cabinet
//!
//! This crate provides the types every other slot crate depends on:
//! - `Symbol`, `Reel`, `Grid` - the closed symbol set and the 3x3 board
//! - `SymbolSource` / `RandomSymbols` - injectable, seedable symbol draws
//! - `GameConfig` - every tunable constant, loaded once from TOML
//! - `evaluate` - row-match win evaluation
//! - Error types and Result alias

mod config;
mod error;
mod symbol;
mod win;

pub use config::{
    AssetConfig, DisplayConfig, EconomyConfig, GameConfig, InputConfig, TimingConfig,
};
pub use error::{Result, SlotError};
pub use symbol::{Grid, RandomSymbols, Reel, Symbol, SymbolSource, REEL_COUNT, ROW_COUNT};
pub use win::{evaluate, WinningRows};

/// Milliseconds on the monotonic game clock
pub type Millis = u64;
