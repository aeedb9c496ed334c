//! Error types for the slot cabinet

use thiserror::Error;

/// The main error type for slot operations
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Invalid config: {field} {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Asset error: {0}")]
    AssetError(String),

    #[error("Audio error: {0}")]
    AudioError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}

/// Result type alias for slot operations
pub type Result<T> = std::result::Result<T, SlotError>;

impl From<toml::de::Error> for SlotError {
    fn from(err: toml::de::Error) -> Self {
        SlotError::TomlParseError(err.to_string())
    }
}

impl SlotError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        SlotError::InvalidConfig {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
