//! Append-only conversation log.

use crate::message::Message;

/// Ordered turns of one session. Always starts with the welcome message;
/// the only write is `append`.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new(welcome_text: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::welcome(welcome_text)],
        }
    }

    /// Add a message to the end and return the full sequence.
    pub fn append(&mut self, message: Message) -> &[Message] {
        debug_assert!(
            self.messages.iter().all(|m| m.id() != message.id()),
            "duplicate message id {}",
            message.id()
        );
        self.messages.push(message);
        &self.messages
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Owned copy for readers outside the session lock.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Never true: the welcome message is always present.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
