//! ModelClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::request::Content;
use crate::{GatewayError, ModelClient};

use super::client::GeminiClient;

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, contents: &[Content]) -> Result<String, GatewayError> {
        // Checked before any network activity.
        let api_key = self.config.credential.resolve()?;

        let body = self.build_request_body(contents);
        let url = self.api_url();

        debug!(
            model = %self.config.model,
            turns = contents.len(),
            "Gemini API request"
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        self.parse_response(json)
    }
}
