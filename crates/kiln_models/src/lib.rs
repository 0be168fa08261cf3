//! Text-generation backend clients for Kiln.
//!
//! The only backend shipped is [`OpenAICompatibleClient`], which speaks the
//! OpenAI chat completions format used by LM Studio and most local servers.

pub mod openai_compat;

pub use openai_compat::{OpenAICompatError, OpenAICompatibleClient};
