//! Gemini API client struct, request building, and response parsing.

use std::time::Duration;

use tracing::warn;

use crate::request::Content;
use crate::GatewayError;

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, contents: &[Content]) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "temperature": self.config.temperature,
            }
        });

        if !self.config.system_instruction.is_empty() {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": self.config.system_instruction }]
            });
        }

        body
    }

    /// Extract the reply text: every `text` part of the first candidate,
    /// concatenated.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, GatewayError> {
        let first = json["candidates"].as_array().and_then(|c| c.first());
        let Some(first) = first else {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                warn!(reason, "prompt blocked by the model");
                return Err(GatewayError::EmptyResponse(format!(
                    "prompt blocked: {reason}"
                )));
            }
            return Err(GatewayError::EmptyResponse("no candidates in response".into()));
        };

        let text: String = first["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            let reason = first["finishReason"].as_str().unwrap_or("unknown");
            return Err(GatewayError::EmptyResponse(format!(
                "candidate contained no text (finish reason: {reason})"
            )));
        }

        Ok(text)
    }
}
