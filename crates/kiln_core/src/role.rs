//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Sender of a message in a conversation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the whole exchange
    System,
    /// The person asking for a component
    User,
    /// Replies from the model (interactive chat history only)
    Assistant,
}
