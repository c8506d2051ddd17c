//! Turn submission: optimistic append, one model call, reply or notice.

use tracing::{debug, info, warn};

use crate::image::ImageData;
use crate::message::Message;
use crate::request::build_contents;

use super::manager::Session;
use super::types::{BusyGuard, SessionError, TurnOutcome};

impl Session {
    /// Send one user turn and wait for the reply.
    ///
    /// Blank text without an image is skipped. While another turn is in
    /// flight the call is rejected with [`SessionError::Busy`]. Otherwise the
    /// user message is appended at once, the draft is cleared, and exactly
    /// one model message (the reply or the failure notice) follows.
    pub async fn submit(
        &self,
        text: impl Into<String>,
        image: Option<ImageData>,
    ) -> Result<TurnOutcome, SessionError> {
        let text = text.into();
        if text.trim().is_empty() && image.is_none() {
            debug!(session = %self.id.short(), "nothing to send");
            return Ok(TurnOutcome::Skipped);
        }

        let _busy = BusyGuard::acquire(&self.busy)?;

        let has_image = image.is_some();
        let contents = {
            let mut conversation = self.write_conversation();
            let messages = conversation.append(Message::user(text, image));
            build_contents(messages, &self.options.image_prompt)
        };
        self.lock_draft().clear();

        // Declared after `_busy` so the ticker stops and rewinds before the
        // session reports idle again.
        let _rotation = self.status.start();

        info!(
            session = %self.id.short(),
            turns = contents.len(),
            has_image,
            "sending turn"
        );

        let reply = match self.client.generate(&contents).await {
            Ok(text) => {
                debug!(session = %self.id.short(), chars = text.len(), "model replied");
                self.write_conversation().append(Message::model(text));
                TurnOutcome::Answered
            }
            Err(e) => {
                let kind = e.kind();
                warn!(session = %self.id.short(), ?kind, error = %e, "model call failed");
                let notice = self.options.reply_for_failure(kind).to_string();
                self.write_conversation().append(Message::model(notice));
                TurnOutcome::Failed(kind)
            }
        };

        Ok(reply)
    }

    /// Submit whatever is in the draft.
    pub async fn submit_draft(&self) -> Result<TurnOutcome, SessionError> {
        let draft = self.draft();
        self.submit(draft.text, draft.image).await
    }
}
