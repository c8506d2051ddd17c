//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod model;
mod persona;


use crate::schema::WatcherConfig;
use watcher_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WatcherConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    model::validate_model(&mut errors, config);
    persona::validate_persona(&mut errors, config);
    persona::validate_status(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
