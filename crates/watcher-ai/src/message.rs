//! Conversation turns.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::image::ImageData;

/// Id of the welcome message that opens every conversation.
pub const WELCOME_ID: &str = "welcome";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One turn. Fields are private so a message cannot change after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    id: String,
    role: Role,
    text: String,
    image: Option<ImageData>,
    timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>, image: Option<ImageData>) -> Self {
        Self::build(watcher_common::new_id(), Role::User, text.into(), image)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::build(watcher_common::new_id(), Role::Model, text.into(), None)
    }

    pub(crate) fn welcome(text: impl Into<String>) -> Self {
        Self::build(WELCOME_ID.to_string(), Role::Model, text.into(), None)
    }

    fn build(id: String, role: Role, text: String, image: Option<ImageData>) -> Self {
        Self {
            id,
            role,
            text,
            image,
            timestamp: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
        assert_eq!(Role::Model.as_str(), "model");
    }

    #[test]
    fn user_message_keeps_image() {
        let img = ImageData::from_bytes("image/png", b"px");
        let msg = Message::user("", Some(img.clone()));
        assert_eq!(msg.role(), Role::User);
        assert_eq!(msg.text(), "");
        assert_eq!(msg.image(), Some(&img));
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = Message::model("a");
        let b = Message::model("b");
        assert_ne!(a.id(), b.id());
        assert_ne!(a.id(), WELCOME_ID);
    }

    #[test]
    fn welcome_uses_fixed_id() {
        let msg = Message::welcome("hello");
        assert_eq!(msg.id(), WELCOME_ID);
        assert_eq!(msg.role(), Role::Model);
    }
}
