//! Message and conversation types.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a conversation.
///
/// # Examples
///
/// ```
/// use kiln_core::{Message, Role};
///
/// let message = Message::new(Role::User, "Hello!");
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Hello!");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The text content of the message
    content: String,
}

impl Message {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Returns a builder for constructing a Message.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}

/// An ordered message sequence that always starts with exactly one system message.
///
/// The only way to add a system message is [`Conversation::new`], so the
/// invariant holds by construction.
///
/// # Examples
///
/// ```
/// use kiln_core::{Conversation, Role};
///
/// let conversation = Conversation::new("You write React components.")
///     .with_user("Category: 3d-scenes\n\nDescription: a spinning cube");
///
/// assert_eq!(conversation.len(), 2);
/// assert_eq!(*conversation.messages()[0].role(), Role::System);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Starts a conversation with the given system prompt.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::new(Role::System, system_prompt)],
        }
    }

    /// Appends a user turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::new(Role::User, content));
    }

    /// Appends an assistant turn.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::new(Role::Assistant, content));
    }

    /// Builder-style variant of [`Conversation::push_user`].
    pub fn with_user(mut self, content: impl Into<String>) -> Self {
        self.push_user(content);
        self
    }

    /// The system message that opens the conversation.
    pub fn system(&self) -> &Message {
        &self.messages[0]
    }

    /// All messages in order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent user message, if any.
    pub fn last_user(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|m| *m.role() == Role::User)
    }

    /// Number of messages, including the system message.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false; a conversation holds at least its system message.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Consumes the conversation, returning the messages.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}
