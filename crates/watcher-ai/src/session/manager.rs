//! Session struct, state accessors, and draft management.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use watcher_common::SessionId;

use crate::conversation::Conversation;
use crate::image::ImageData;
use crate::message::Message;
use crate::status::StatusRotation;
use crate::ModelClient;

use super::types::{Draft, SessionOptions, SessionStatus};

/// Suggestions are offered only while the conversation is shorter than this.
const SUGGESTION_CUTOFF: usize = 3;

/// One conversation with the model. Owns the message log, the pending
/// input, and the busy flag that allows a single request in flight.
pub struct Session {
    pub(super) id: SessionId,
    pub(super) conversation: RwLock<Conversation>,
    pub(super) draft: Mutex<Draft>,
    pub(super) client: Arc<dyn ModelClient>,
    pub(super) status: StatusRotation,
    pub(super) options: SessionOptions,
    /// Whether the session is currently processing a request.
    pub(super) busy: AtomicBool,
}

impl Session {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self::with_options(client, SessionOptions::default())
    }

    pub fn with_options(client: Arc<dyn ModelClient>, options: SessionOptions) -> Self {
        Self {
            id: SessionId::new(),
            conversation: RwLock::new(Conversation::new(options.welcome_message.clone())),
            draft: Mutex::new(Draft::default()),
            client,
            status: StatusRotation::new(options.loading_messages.clone(), options.status_interval),
            options,
            busy: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Copy of the conversation as it stands now.
    pub fn conversation(&self) -> Vec<Message> {
        self.read_conversation().snapshot()
    }

    pub fn message_count(&self) -> usize {
        self.read_conversation().len()
    }

    pub fn last_message(&self) -> Option<Message> {
        self.read_conversation().last().cloned()
    }

    pub fn status(&self) -> SessionStatus {
        if self.busy.load(Ordering::Acquire) {
            SessionStatus::Pending
        } else {
            SessionStatus::Idle
        }
    }

    /// The rotating status phrase, only while a request is pending.
    pub fn status_text(&self) -> Option<String> {
        match self.status() {
            SessionStatus::Pending => Some(self.status.current().to_string()),
            SessionStatus::Idle => None,
        }
    }

    /// Starter questions, offered on a fresh idle conversation.
    pub fn suggestions(&self) -> &[String] {
        if self.status() == SessionStatus::Idle && self.message_count() < SUGGESTION_CUTOFF {
            &self.options.suggested_queries
        } else {
            &[]
        }
    }

    pub fn draft(&self) -> Draft {
        self.lock_draft().clone()
    }

    pub fn set_draft_text(&self, text: impl Into<String>) {
        self.lock_draft().text = text.into();
    }

    pub fn attach_image(&self, image: ImageData) {
        self.lock_draft().image = Some(image);
    }

    pub fn clear_image(&self) {
        self.lock_draft().image = None;
    }

    // Writers only push or replace whole values, so poisoned data is intact.
    pub(super) fn read_conversation(&self) -> RwLockReadGuard<'_, Conversation> {
        self.conversation
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn write_conversation(&self) -> RwLockWriteGuard<'_, Conversation> {
        self.conversation
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn lock_draft(&self) -> MutexGuard<'_, Draft> {
        self.draft.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
