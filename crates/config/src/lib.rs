//! Configuration management for the Bangla utilities
//!
//! Supports loading configuration from:
//! - TOML/YAML/JSON files under `config/` (`default`, then `{env}`)
//! - Environment variables (`BANGLA_UTILS` prefix, `__` separator)
//! - In-memory strings

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, load_settings_file, load_settings_from, parse_settings, CalendarConfig,
    DigitsConfig, MathConfig, Settings,
};

// Re-exported so callers can build settings without another dependency
pub use bangla_utils_number::CurrencyOptions;
pub use config::FileFormat;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => ConfigError::MissingField(key),
            other => ConfigError::ParseError(other.to_string()),
        }
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
