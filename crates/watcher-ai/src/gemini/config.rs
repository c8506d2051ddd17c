//! Gemini API client configuration.

use std::fmt;
use std::time::Duration;

use crate::GatewayError;

/// Where the API key comes from. Resolved on every request so a missing
/// key only surfaces when a turn is actually sent.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Read the named environment variable.
    Env(String),
    /// A key supplied directly.
    Static(String),
}

impl Credential {
    pub fn resolve(&self) -> Result<String, GatewayError> {
        match self {
            Credential::Env(var) => match std::env::var(var) {
                Ok(key) if !key.trim().is_empty() => Ok(key),
                _ => Err(GatewayError::Configuration(format!(
                    "API key not found. Set the {var} environment variable."
                ))),
            },
            Credential::Static(key) if !key.trim().is_empty() => Ok(key.clone()),
            Credential::Static(_) => Err(GatewayError::Configuration("API key is empty".into())),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Env(var) => f.debug_tuple("Env").field(var).finish(),
            Credential::Static(_) => f.debug_tuple("Static").field(&"[REDACTED]").finish(),
        }
    }
}

/// Gemini API client configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub credential: Credential,
    pub model: String,
    pub temperature: f64,
    /// Sent as `systemInstruction`; omitted when empty.
    pub system_instruction: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            model: watcher_common::persona::DEFAULT_MODEL.to_string(),
            temperature: watcher_common::persona::DEFAULT_TEMPERATURE,
            system_instruction: String::new(),
            base_url: watcher_common::persona::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
