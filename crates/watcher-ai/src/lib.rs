//! Conversation engine for the Watcher assistant.
//!
//! Provides:
//! - an append-only conversation store seeded with a welcome message
//! - a request builder producing Gemini `contents` (history text plus
//!   the current turn, optionally with one inline image)
//! - a non-streaming Gemini `generateContent` client
//! - a session controller with busy/idle state and a rotating status line

pub mod conversation;
pub mod gemini;
pub mod image;
pub mod message;
pub mod request;
pub mod session;
pub mod status;

use async_trait::async_trait;

pub use conversation::Conversation;
pub use gemini::{Credential, GeminiClient, GeminiConfig};
pub use image::{ImageData, ImageError};
pub use message::{Message, Role};
pub use request::{build_contents, Content, InlineData, Part, INLINE_IMAGE_MIME};
pub use session::{Draft, Session, SessionError, SessionOptions, SessionStatus, TurnOutcome};
pub use status::{RotationHandle, StatusRotation};

/// A generative model that answers one request with one block of text.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, contents: &[Content]) -> Result<String, GatewayError>;
}

/// Failure taxonomy surfaced to the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Missing or invalid credential/configuration. Persists until fixed.
    Configuration,
    /// Transport, HTTP, or decoding failure.
    Gateway,
    /// The service answered but produced no usable text.
    EmptyResponse,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("empty response: {0}")]
    EmptyResponse(String),
}

impl GatewayError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GatewayError::Configuration(_) => FailureKind::Configuration,
            GatewayError::Network(_) | GatewayError::Api { .. } | GatewayError::Parse(_) => {
                FailureKind::Gateway
            }
            GatewayError::EmptyResponse(_) => FailureKind::EmptyResponse,
        }
    }
}
