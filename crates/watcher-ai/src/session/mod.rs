//! Conversation session management.
//!
//! A `Session` holds the conversation, the draft being composed, and the
//! busy/idle state of the single in-flight request.

mod chat;
mod manager;
mod types;


pub use manager::Session;
pub use types::{Draft, SessionError, SessionOptions, SessionStatus, TurnOutcome};
