//! Core data types for the Kiln component generator.
//!
//! This crate provides the data model shared by every other Kiln crate:
//! conversation messages, the fixed category set, generation requests and
//! validation outcomes.

mod category;
mod few_shot;
mod message;
mod request;
mod role;
mod validation;

pub use category::Category;
pub use few_shot::FewShotExample;
pub use message::{Conversation, Message, MessageBuilder};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerationRequest,
    GenerationRequestBuilder,
};
pub use role::Role;
pub use validation::{ValidationResult, truncate_for_display};

/// File extension of generated artifacts.
pub const ARTIFACT_EXTENSION: &str = "tsx";
