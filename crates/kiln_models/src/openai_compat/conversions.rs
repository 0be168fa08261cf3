//! Type conversions between Kiln and OpenAI formats.

use crate::openai_compat::{ChatMessage, ChatRequest, ChatResponse, OpenAICompatError};
use kiln_core::{GenerateRequest, GenerateResponse};

/// Converts a Kiln GenerateRequest to OpenAI chat format.
///
/// The model in the request wins over the client's default model.
pub fn to_chat_request(
    req: &GenerateRequest,
    default_model: &str,
) -> Result<ChatRequest, OpenAICompatError> {
    if req.messages().is_empty() {
        return Err(OpenAICompatError::InvalidRequest(
            "Request has no messages".to_string(),
        ));
    }

    let messages: Vec<ChatMessage> = req
        .messages()
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role().to_string(),
            content: msg.content().clone(),
        })
        .collect();

    let model = if req.model().is_empty() {
        default_model.to_string()
    } else {
        req.model().clone()
    };

    ChatRequest::builder()
        .model(model)
        .messages(messages)
        .max_tokens(Some(*req.max_tokens()))
        .temperature(Some(*req.temperature()))
        .build()
        .map_err(|e| OpenAICompatError::Builder(format!("Failed to build request: {}", e)))
}

/// Converts an OpenAI chat response to a Kiln GenerateResponse.
///
/// Takes the first choice and trims surrounding whitespace.
pub fn from_chat_response(response: &ChatResponse) -> Result<GenerateResponse, OpenAICompatError> {
    let choice = response
        .choices
        .first()
        .ok_or_else(|| OpenAICompatError::ResponseParsing("No choices in response".to_string()))?;

    let content = choice.message.content.as_deref().ok_or_else(|| {
        OpenAICompatError::ResponseParsing("First choice has no content".to_string())
    })?;

    Ok(GenerateResponse::new(content.trim()))
}
