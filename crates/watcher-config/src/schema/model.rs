//! Generative model connection settings.

use serde::{Deserialize, Serialize};
use watcher_common::persona;

/// Model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model identifier, e.g. `gemini-2.5-flash`.
    pub name: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Name of the environment variable holding the API key.
    /// The variable is read on every request, not at startup.
    pub api_key_env: String,
    pub base_url: String,
    /// Whole-request timeout in seconds (valid range: 5-600).
    pub timeout_secs: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: persona::DEFAULT_MODEL.into(),
            temperature: persona::DEFAULT_TEMPERATURE,
            api_key_env: persona::DEFAULT_API_KEY_ENV.into(),
            base_url: persona::DEFAULT_BASE_URL.into(),
            timeout_secs: 120,
        }
    }
}
