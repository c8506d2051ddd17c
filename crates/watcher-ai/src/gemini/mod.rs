//! Google Gemini API client.
//!
//! Implements the `ModelClient` trait with a single non-streaming
//! `generateContent` call to the Generative Language API.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::{Credential, GeminiConfig};
