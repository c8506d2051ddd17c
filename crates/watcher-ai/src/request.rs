//! Conversion of the conversation into Gemini `contents`.
//!
//! History turns are sent as text only; an image is forwarded only when it
//! belongs to the turn being sent. This keeps request size flat as the
//! conversation grows.

use serde::Serialize;
use tracing::debug;

use crate::message::{Message, Role};

/// Mime type declared for every inline image, whatever the upload was.
pub const INLINE_IMAGE_MIME: &str = "image/jpeg";

/// One role-tagged entry of the request `contents` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64 payload, without the data URI header.
    pub data: String,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn inline_image(data: impl Into<String>) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: INLINE_IMAGE_MIME.to_string(),
                data: data.into(),
            },
        }
    }

    pub fn is_inline_data(&self) -> bool {
        matches!(self, Part::InlineData { .. })
    }
}

/// Build the request contents for a conversation whose last message is the
/// turn being sent.
///
/// `image_prompt` replaces the text of a current turn that has none.
/// Returns an empty list for an empty slice.
pub fn build_contents(messages: &[Message], image_prompt: &str) -> Vec<Content> {
    let Some((current, history)) = messages.split_last() else {
        return Vec::new();
    };

    let mut contents: Vec<Content> = history
        .iter()
        .map(|msg| Content {
            role: msg.role(),
            parts: vec![Part::text(msg.text())],
        })
        .collect();

    let mut parts = Vec::with_capacity(2);
    if let Some(image) = current.image() {
        if image.declared_mime() != INLINE_IMAGE_MIME {
            debug!(
                declared = %image.declared_mime(),
                "forwarding image with mime {INLINE_IMAGE_MIME}"
            );
        }
        parts.push(Part::inline_image(image.payload()));
    }

    let text = if current.text().is_empty() {
        image_prompt
    } else {
        current.text()
    };
    parts.push(Part::text(text));

    contents.push(Content {
        role: Role::User,
        parts,
    });
    contents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageData;

    const PROMPT: &str = "Explain this page to me. Identify any specific rules, tables, or events.";

    fn png() -> ImageData {
        ImageData::from_data_uri("data:image/png;base64,UEFHRQ==").unwrap()
    }

    #[test]
    fn empty_input_builds_nothing() {
        assert!(build_contents(&[], PROMPT).is_empty());
    }

    #[test]
    fn history_maps_roles_and_text() {
        let messages = vec![
            Message::model("welcome"),
            Message::user("How does Collision work?", None),
            Message::model("Tokens collide."),
            Message::user("And knockback?", None),
        ];
        let contents = build_contents(&messages, PROMPT);

        assert_eq!(contents.len(), 4);
        assert_eq!(contents[0].role, Role::Model);
        assert_eq!(contents[1].role, Role::User);
        assert_eq!(contents[2].role, Role::Model);
        assert_eq!(contents[2].parts, vec![Part::text("Tokens collide.")]);
        assert_eq!(contents[3].role, Role::User);
        assert_eq!(contents[3].parts, vec![Part::text("And knockback?")]);
    }

    #[test]
    fn history_images_are_dropped() {
        let messages = vec![
            Message::model("welcome"),
            Message::user("What is this?", Some(png())),
            Message::model("A hunt board."),
            Message::user("Where do I start?", None),
        ];
        let contents = build_contents(&messages, PROMPT);

        assert_eq!(contents[1].parts, vec![Part::text("What is this?")]);
        assert!(contents
            .iter()
            .flat_map(|c| c.parts.iter())
            .all(|p| !p.is_inline_data()));
    }

    #[test]
    fn image_without_text_uses_prompt() {
        let messages = vec![Message::model("welcome"), Message::user("", Some(png()))];
        let contents = build_contents(&messages, PROMPT);
        let current = contents.last().unwrap();

        assert_eq!(current.role, Role::User);
        assert_eq!(current.parts.len(), 2);
        assert_eq!(current.parts[0], Part::inline_image("UEFHRQ=="));
        assert_eq!(current.parts[1], Part::text(PROMPT));
    }

    #[test]
    fn image_with_text_keeps_text() {
        let messages = vec![
            Message::model("welcome"),
            Message::user("Read the table", Some(png())),
        ];
        let current = build_contents(&messages, PROMPT).pop().unwrap();
        assert_eq!(current.parts[1], Part::text("Read the table"));
    }

    #[test]
    fn inline_mime_is_always_jpeg() {
        let messages = vec![Message::model("welcome"), Message::user("", Some(png()))];
        let current = build_contents(&messages, PROMPT).pop().unwrap();
        match &current.parts[0] {
            Part::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "image/jpeg");
                assert_eq!(inline_data.data, "UEFHRQ==");
            }
            other => panic!("expected inline data, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_text_is_sent_verbatim() {
        let messages = vec![Message::model("welcome"), Message::user("  ", Some(png()))];
        let current = build_contents(&messages, PROMPT).pop().unwrap();
        assert_eq!(current.parts[1], Part::text("  "));
    }

    #[test]
    fn parts_serialize_to_wire_shape() {
        let content = Content {
            role: Role::User,
            parts: vec![Part::inline_image("QUJD"), Part::text("hi")],
        };
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "role": "user",
                "parts": [
                    { "inlineData": { "mimeType": "image/jpeg", "data": "QUJD" } },
                    { "text": "hi" }
                ]
            })
        );
    }
}
