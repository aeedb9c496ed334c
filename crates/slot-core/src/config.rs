//! Cabinet configuration - every tunable constant in one TOML-backed struct.
//!
//! Components never carry their own literals; they read the sections below by
//! reference. Every field has a default, so an empty file (or no file) gives
//! the stock cabinet.

use crate::error::{Result, SlotError};
use crate::symbol::Symbol;
use crate::Millis;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub display: DisplayConfig,
    pub timing: TimingConfig,
    pub economy: EconomyConfig,
    pub input: InputConfig,
    pub assets: AssetConfig,
}

/// Screen and layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    /// Left edge of each reel column, in pixels
    pub reel_x: [f32; 3],
    /// Top edge of each row at rest, in pixels
    pub row_y: [f32; 3],
    /// Symbols are drawn as squares of this size
    pub icon_size: f32,
    /// Fixed simulation rate (Hz)
    pub frame_rate: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 700,
            height: 600,
            fullscreen: false,
            reel_x: [150.0, 300.0, 450.0],
            row_y: [150.0, 250.0, 350.0],
            icon_size: 100.0,
            frame_rate: 60.0,
        }
    }
}

/// Reel motion and timers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// How long a reel spins before it starts braking (ms)
    pub spin_duration_ms: Millis,
    /// Start delay added per column (ms)
    pub start_stagger_ms: Millis,
    /// Extra spin time added per column before braking (ms)
    pub stop_delay_ms: Millis,
    /// Speed gained per tick while spinning
    pub acceleration: f32,
    /// Speed lost per tick while stopping
    pub deceleration: f32,
    pub max_spin_speed: f32,
    /// How long "GAME OVER" stays up before the cabinet resets (ms)
    pub game_over_display_ms: Millis,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: 3000,
            start_stagger_ms: 150,
            stop_delay_ms: 300,
            acceleration: 2.0,
            deceleration: 1.0,
            max_spin_speed: 40.0,
            game_over_display_ms: 3000,
        }
    }
}

/// Score and wager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub initial_score: i64,
    pub base_spin_cost: i64,
    /// Credit per winning row
    pub score_per_win: i64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            initial_score: 100,
            base_spin_cost: 20,
            score_per_win: 50,
        }
    }
}

/// Spin trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Minimum gap between accepted triggers (ms)
    pub cooldown_ms: Millis,
    /// Gamepad button name (gilrs naming, e.g. "South")
    pub spin_button: String,
    /// Also accept Space on the keyboard
    pub keyboard_spin: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 200,
            spin_button: "South".to_string(),
            keyboard_spin: true,
        }
    }
}

/// Asset file locations, relative to `root`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub root: PathBuf,
    pub seven: String,
    pub cherries: String,
    pub bars: String,
    pub window_icon: String,
    pub spin_sound: String,
    pub win_sound: String,
    pub music: String,
    /// Silence between the end of the music and its next start (ms)
    pub music_gap_ms: Millis,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            seven: "seven.png".to_string(),
            cherries: "cherries.png".to_string(),
            bars: "bars.png".to_string(),
            window_icon: "slot-machine.png".to_string(),
            spin_sound: "spin.ogg".to_string(),
            win_sound: "win.ogg".to_string(),
            music: "music/casino_loop.ogg".to_string(),
            music_gap_ms: 2000,
        }
    }
}

impl AssetConfig {
    /// Resolve a file name against the asset root
    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Image file for a symbol
    pub fn symbol_image(&self, symbol: Symbol) -> PathBuf {
        let file = match symbol {
            Symbol::Seven => &self.seven,
            Symbol::Cherries => &self.cherries,
            Symbol::Bars => &self.bars,
        };
        self.path(file)
    }
}

impl GameConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the file when given, stock defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let d = &self.display;
        if d.width == 0 || d.height == 0 {
            return Err(SlotError::invalid("display.width/height", "must be non-zero"));
        }
        if !(d.frame_rate > 0.0) {
            return Err(SlotError::invalid("display.frame_rate", "must be positive"));
        }
        if !(d.icon_size > 0.0) {
            return Err(SlotError::invalid("display.icon_size", "must be positive"));
        }

        let t = &self.timing;
        if t.spin_duration_ms == 0 {
            return Err(SlotError::invalid("timing.spin_duration_ms", "must be non-zero"));
        }
        if !(t.acceleration > 0.0) {
            return Err(SlotError::invalid("timing.acceleration", "must be positive"));
        }
        if !(t.deceleration > 0.0) {
            return Err(SlotError::invalid("timing.deceleration", "must be positive"));
        }
        if !(t.max_spin_speed > 0.0) {
            return Err(SlotError::invalid("timing.max_spin_speed", "must be positive"));
        }

        let e = &self.economy;
        if e.base_spin_cost < 0 {
            return Err(SlotError::invalid("economy.base_spin_cost", "must not be negative"));
        }
        if e.initial_score < 0 {
            return Err(SlotError::invalid("economy.initial_score", "must not be negative"));
        }
        if e.score_per_win < 0 {
            return Err(SlotError::invalid("economy.score_per_win", "must not be negative"));
        }

        Ok(())
    }

    /// Length of one fixed simulation step (seconds)
    pub fn fixed_timestep(&self) -> f64 {
        1.0 / self.display.frame_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_cabinet_matches_defaults() {
        let content = include_str!("../../../cabinet.example.toml");
        let config = GameConfig::from_toml_str(content).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.economy.initial_score, 100);
        assert_eq!(config.economy.base_spin_cost, 20);
        assert_eq!(config.input.cooldown_ms, 200);
        assert_eq!(config.timing.game_over_display_ms, 3000);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            [economy]
            initial_score = 500

            [timing]
            stop_delay_ms = 450
            "#,
        )
        .unwrap();
        assert_eq!(config.economy.initial_score, 500);
        assert_eq!(config.economy.base_spin_cost, 20);
        assert_eq!(config.timing.stop_delay_ms, 450);
        assert_eq!(config.timing.spin_duration_ms, 3000);
    }

    #[test]
    fn rejects_zero_acceleration() {
        let err = GameConfig::from_toml_str("[timing]\nacceleration = 0.0\n").unwrap_err();
        assert!(matches!(err, SlotError::InvalidConfig { .. }));
    }

    #[test]
    fn rejects_negative_cost() {
        let err = GameConfig::from_toml_str("[economy]\nbase_spin_cost = -5\n").unwrap_err();
        assert!(err.to_string().contains("economy.base_spin_cost"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = GameConfig::from_toml_str("[economy\n").unwrap_err();
        assert!(matches!(err, SlotError::TomlParseError(_)));
    }

    #[test]
    fn symbol_images_resolve_under_root() {
        let assets = AssetConfig::default();
        assert_eq!(
            assets.symbol_image(Symbol::Cherries),
            PathBuf::from("assets").join("cherries.png")
        );
    }

    #[test]
    fn load_from_file() {
        let dir = std::env::temp_dir().join("slot_config_test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("cabinet.toml");
        std::fs::write(&path, "[input]\nkeyboard_spin = false\n").unwrap();

        let config = GameConfig::load_or_default(Some(&path)).unwrap();
        assert!(!config.input.keyboard_spin);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GameConfig::load(Path::new("/nonexistent/cabinet.toml")).unwrap_err();
        assert!(matches!(err, SlotError::IoError(_)));
    }
}
