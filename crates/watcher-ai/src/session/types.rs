//! Session types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use watcher_common::persona;

use crate::image::ImageData;
use crate::FailureKind;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session is busy with another request")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Pending,
}

/// Result of an accepted or skipped submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing to send; the conversation is unchanged.
    Skipped,
    /// The model replied and the reply was appended.
    Answered,
    /// The call failed and the failure notice was appended.
    Failed(FailureKind),
}

/// Input the user is composing but has not sent yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub text: String,
    pub image: Option<ImageData>,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.image.is_none()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.image = None;
    }
}

/// Persona text and timing a session runs with.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub welcome_message: String,
    pub failure_notice: String,
    pub image_prompt: String,
    pub loading_messages: Vec<String>,
    pub status_interval: Duration,
    pub suggested_queries: Vec<String>,
}

impl SessionOptions {
    /// User-facing text for a failed turn. Every kind shows the same
    /// notice; the error detail only goes to the log.
    pub fn reply_for_failure(&self, kind: FailureKind) -> &str {
        match kind {
            FailureKind::Configuration | FailureKind::Gateway | FailureKind::EmptyResponse => {
                &self.failure_notice
            }
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            welcome_message: persona::WELCOME_MESSAGE.into(),
            failure_notice: persona::FAILURE_NOTICE.into(),
            image_prompt: persona::IMAGE_PROMPT.into(),
            loading_messages: persona::loading_messages(),
            status_interval: Duration::from_millis(persona::STATUS_INTERVAL_MS),
            suggested_queries: persona::suggested_queries(),
        }
    }
}

/// Guard that clears the `busy` flag on drop, ensuring it is always released
/// even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy lock. Returns `Err` if already busy.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, SessionError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(SessionError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
