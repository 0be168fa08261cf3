//! Generic client for OpenAI-compatible APIs.

use crate::openai_compat::{ChatResponse, OpenAICompatError, conversions};
use async_trait::async_trait;
use kiln_core::{GenerateRequest, GenerateResponse};
use kiln_error::{BackendError, KilnResult};
use kiln_interface::KilnDriver;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Default request timeout. Local models can take minutes on long components.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Generic client for any OpenAI-compatible API.
///
/// # Examples
///
/// ```
/// use kiln_models::OpenAICompatibleClient;
///
/// let client = OpenAICompatibleClient::new(
///     "EMPTY".to_string(),
///     "openai/gpt-oss-20b".to_string(),
///     "http://localhost:1234/v1".to_string(),
///     "lmstudio",
/// )
/// .unwrap();
/// assert_eq!(client.endpoint(), "http://localhost:1234/v1/chat/completions");
/// ```
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    provider_name: &'static str,
}

impl OpenAICompatibleClient {
    /// Creates a new OpenAI-compatible client with the default timeout.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key for authentication (local servers accept any value)
    /// * `model` - Default model identifier
    /// * `base_url` - Base URL including the `/v1` suffix
    /// * `provider_name` - Name of the provider (for logging/tracing)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        provider_name: &'static str,
    ) -> Result<Self, OpenAICompatError> {
        Self::with_timeout(
            api_key,
            model,
            base_url,
            provider_name,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Creates a new client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    #[instrument(skip(api_key), fields(provider = provider_name, model = %model))]
    pub fn with_timeout(
        api_key: String,
        model: String,
        base_url: String,
        provider_name: &'static str,
        timeout: Duration,
    ) -> Result<Self, OpenAICompatError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OpenAICompatError::Http(format!("Failed to build client: {}", e)))?;

        debug!(
            provider = provider_name,
            model = %model,
            url = %base_url,
            timeout_secs = timeout.as_secs(),
            "Created OpenAI-compatible client"
        );

        Ok(Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            provider_name,
        })
    }

    /// Full URL of the chat completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Generates a response from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self, req), fields(provider = self.provider_name, model = %self.model))]
    pub async fn chat(&self, req: &GenerateRequest) -> Result<GenerateResponse, OpenAICompatError> {
        let chat_request = conversions::to_chat_request(req, &self.model)?;

        debug!(
            provider = self.provider_name,
            model = %chat_request.model(),
            message_count = chat_request.messages().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(provider = self.provider_name, error = ?e, "HTTP request failed");
                OpenAICompatError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                provider = self.provider_name,
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(OpenAICompatError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(provider = self.provider_name, error = ?e, "Failed to parse response");
            OpenAICompatError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(
            provider = self.provider_name,
            choices = chat_response.choices.len(),
            total_tokens = chat_response.usage.as_ref().and_then(|u| u.total_tokens),
            "Received response"
        );

        conversions::from_chat_response(&chat_response)
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl KilnDriver for OpenAICompatibleClient {
    async fn generate(&self, req: &GenerateRequest) -> KilnResult<GenerateResponse> {
        self.chat(req)
            .await
            .map_err(|e| BackendError::new(e.to_string()).into())
    }

    fn provider_name(&self) -> &'static str {
        self.provider_name
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
