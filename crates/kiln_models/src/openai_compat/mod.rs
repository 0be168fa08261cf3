//! Generic OpenAI-compatible API client.
//!
//! Works against any server exposing `/chat/completions` in the OpenAI
//! format, including LM Studio, Ollama's compatibility layer and vLLM.

mod client;
mod conversions;
mod dto;

pub use client::OpenAICompatibleClient;
pub use conversions::{from_chat_response, to_chat_request};
pub use dto::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatResponseMessage, ChatUsage,
    OpenAICompatError,
};
