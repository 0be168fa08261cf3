//! Request and response types for component generation.

use crate::{Category, Message};
use derive_getters::Getters;
use kiln_error::KilnResult;
use serde::{Deserialize, Serialize};

/// A user's request for one component.
///
/// The category is already validated; use [`GenerationRequest::parse`] to
/// build one from raw user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Natural-language description of the component
    description: String,
    /// Category the component belongs to
    category: Category,
    /// Explicit component name; derived from the description when absent
    #[builder(default)]
    name: Option<String>,
    /// Web page to fetch as reference material
    #[builder(default)]
    reference_url: Option<String>,
    /// Image URL the component should incorporate
    #[builder(default)]
    reference_image: Option<String>,
}

impl GenerationRequest {
    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Creates a request from raw input, rejecting unknown categories.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `category` is not one of the fixed names.
    ///
    /// # Examples
    ///
    /// ```
    /// use kiln_core::{Category, GenerationRequest};
    ///
    /// let req = GenerationRequest::parse("magnetic button", "micro-interactions").unwrap();
    /// assert_eq!(*req.category(), Category::MicroInteractions);
    /// assert!(GenerationRequest::parse("magnetic button", "widgets").is_err());
    /// ```
    pub fn parse(description: impl Into<String>, category: &str) -> KilnResult<Self> {
        let category = Category::from_name(category)?;
        Ok(Self {
            description: description.into(),
            category,
            name: None,
            reference_url: None,
            reference_image: None,
        })
    }

    /// Sets an explicit component name.
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Sets the reference page URL.
    pub fn with_reference_url(mut self, url: Option<String>) -> Self {
        self.reference_url = url;
        self
    }

    /// Sets the reference image URL.
    pub fn with_reference_image(mut self, url: Option<String>) -> Self {
        self.reference_image = url;
        self
    }
}

/// Backend call: the model, the ordered messages and fixed sampling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Ordered messages, starting with the system message
    messages: Vec<Message>,
    /// Model identifier
    model: String,
    /// Sampling temperature
    temperature: f32,
    /// Maximum tokens to generate
    max_tokens: u32,
}

impl GenerateRequest {
    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Backend reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerateResponse {
    /// Generated text
    text: String,
}

impl GenerateResponse {
    /// Creates a response holding the generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Consumes the response, returning the text.
    pub fn into_text(self) -> String {
        self.text
    }
}
