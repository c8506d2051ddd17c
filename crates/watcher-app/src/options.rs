//! Translate the loaded config into client and session settings.

use std::time::Duration;

use watcher_ai::{Credential, GeminiConfig, SessionOptions};
use watcher_config::WatcherConfig;

pub fn gemini_config(config: &WatcherConfig) -> GeminiConfig {
    let model = &config.model;
    GeminiConfig::new(Credential::Env(model.api_key_env.clone()))
        .with_model(model.name.clone())
        .with_temperature(model.temperature)
        .with_system_instruction(config.persona.system_instruction.clone())
        .with_base_url(model.base_url.clone())
        .with_timeout(Duration::from_secs(u64::from(model.timeout_secs)))
}

pub fn session_options(config: &WatcherConfig) -> SessionOptions {
    let persona = &config.persona;
    SessionOptions {
        welcome_message: persona.welcome_message.clone(),
        failure_notice: persona.failure_notice.clone(),
        image_prompt: persona.image_prompt.clone(),
        loading_messages: persona.loading_messages.clone(),
        status_interval: Duration::from_millis(config.status.interval_ms),
        suggested_queries: persona.suggested_queries.clone(),
    }
}

/// Log filter: command line first, then the config file.
pub fn log_directive(cli: Option<&str>, config: Option<&WatcherConfig>) -> String {
    match (cli, config) {
        (Some(directive), _) => directive.to_string(),
        (None, Some(config)) => config.logging.level.directive().to_string(),
        (None, None) => "watcher=info".to_string(),
    }
}
