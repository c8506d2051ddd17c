//! Watcher configuration system.
//!
//! Provides TOML-based configuration for the model connection, persona
//! text, status indicator, and logging. All config sections use defaults
//! so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use watcher_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{WatcherConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;
use watcher_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<WatcherConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<WatcherConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WatcherConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = WatcherConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"model\""));
        assert!(json.contains("\"persona\""));
        assert!(json.contains("\"status\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"gemini-2.5-flash\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[status]\ninterval_ms = 5\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[model]\ntemperature = 0.0\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.model.temperature, 0.0);
    }
}
