//! Free-form conversation with the backend.

use kiln_core::{Conversation, GenerateRequest};
use kiln_error::{ConfigError, KilnResult};
use kiln_interface::KilnDriver;
use kiln_pipeline::GenerationSettings;
use tracing::{debug, instrument};

/// System message that opens every chat session.
pub const CHAT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant for front-end developers building React components.";

/// A running conversation; each successful exchange is kept as history.
pub struct ChatSession<D: KilnDriver> {
    driver: D,
    settings: GenerationSettings,
    conversation: Conversation,
}

impl<D: KilnDriver> ChatSession<D> {
    /// Starts an empty session.
    pub fn new(driver: D, settings: GenerationSettings) -> Self {
        Self {
            driver,
            settings,
            conversation: Conversation::new(CHAT_SYSTEM_PROMPT),
        }
    }

    /// History so far, starting with the system message.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Sends one user turn and returns the trimmed reply.
    ///
    /// History only grows when the backend answers; a failed turn leaves it
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the call fails.
    #[instrument(skip_all, fields(turns = self.conversation.len()))]
    pub async fn send(&mut self, input: &str) -> KilnResult<String> {
        let pending = self.conversation.clone().with_user(input);
        let request = GenerateRequest::builder()
            .messages(pending.messages().to_vec())
            .model(self.settings.model().clone())
            .temperature(*self.settings.temperature())
            .max_tokens(*self.settings.max_tokens())
            .build()
            .map_err(|e| ConfigError::new(e.to_string()))?;

        let reply = self.driver.generate(&request).await?.into_text();
        let reply = reply.trim().to_string();
        debug!(chars = reply.len(), "Chat reply received");

        self.conversation = pending;
        self.conversation.push_assistant(reply.clone());
        Ok(reply)
    }
}
