//! Persona text and status indicator configuration.

use serde::{Deserialize, Serialize};
use watcher_common::persona;

/// Persona configuration. Every string is passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    pub system_instruction: String,
    pub welcome_message: String,
    pub failure_notice: String,
    /// Text sent when an image arrives without a question.
    pub image_prompt: String,
    pub loading_messages: Vec<String>,
    pub suggested_queries: Vec<String>,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            system_instruction: persona::SYSTEM_INSTRUCTION.into(),
            welcome_message: persona::WELCOME_MESSAGE.into(),
            failure_notice: persona::FAILURE_NOTICE.into(),
            image_prompt: persona::IMAGE_PROMPT.into(),
            loading_messages: persona::loading_messages(),
            suggested_queries: persona::suggested_queries(),
        }
    }
}

/// Pending-status indicator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Milliseconds between phrase changes (valid range: 100-60000).
    pub interval_ms: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            interval_ms: persona::STATUS_INTERVAL_MS,
        }
    }
}
