//! HTTP-backed context fetcher.

use crate::html::{strip_html, truncate_chars};
use async_trait::async_trait;
use derive_getters::Getters;
use kiln_error::{HttpError, KilnResult};
use kiln_interface::ContextFetcher;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Character cap on fetched page text.
pub const DEFAULT_MAX_CHARS: usize = 3000;

/// Limits and identity used when fetching reference pages.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct FetcherConfig {
    /// Maximum characters of page text returned
    #[builder(default = "DEFAULT_MAX_CHARS")]
    max_chars: usize,
    /// Per-request timeout
    #[builder(default = "Duration::from_secs(10)")]
    timeout: Duration,
    /// User-Agent header
    #[builder(default = "\"CreativeAgent/1.0\".to_string()")]
    user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            timeout: Duration::from_secs(10),
            user_agent: "CreativeAgent/1.0".to_string(),
        }
    }
}

impl FetcherConfig {
    /// Returns a builder for constructing a FetcherConfig.
    pub fn builder() -> FetcherConfigBuilder {
        FetcherConfigBuilder::default()
    }
}

/// Fetches reference pages over HTTP and formats image guidance.
#[derive(Debug, Clone)]
pub struct HttpContextFetcher {
    client: reqwest::Client,
    config: FetcherConfig,
}

impl HttpContextFetcher {
    /// Creates a fetcher with the given limits.
    ///
    /// Falls back to a default reqwest client if the configured one cannot be
    /// built; fetching is best-effort either way.
    pub fn new(config: FetcherConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(*config.timeout())
            .user_agent(config.user_agent().as_str())
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default HTTP client for context fetching");
                reqwest::Client::new()
            });
        Self { client, config }
    }

    /// Current limits.
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetches a page and returns its bounded plain text.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error if the request fails, the status is not a
    /// success or the body cannot be read.
    pub async fn try_fetch(&self, url: &str) -> KilnResult<String> {
        let html = self.fetch_text(url).await?;
        Ok(truncate_chars(&strip_html(&html), self.config.max_chars))
    }

    async fn fetch_text(&self, url: &str) -> Result<String, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::new(format!("HTTP {}", status)));
        }

        // Invalid UTF-8 is replaced rather than rejected.
        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for HttpContextFetcher {
    fn default() -> Self {
        Self::new(FetcherConfig::default())
    }
}

#[async_trait]
impl ContextFetcher for HttpContextFetcher {
    #[instrument(skip(self))]
    async fn fetch_url(&self, url: &str) -> String {
        match self.fetch_text(url).await {
            Ok(html) => {
                let text = truncate_chars(&strip_html(&html), self.config.max_chars);
                debug!(chars = text.chars().count(), "Fetched reference page");
                text
            }
            Err(e) => {
                warn!(error = %e, "Could not fetch reference page");
                fetch_failure_placeholder(&e.message)
            }
        }
    }

    fn describe_image(&self, url: &str) -> String {
        describe_image(url)
    }
}

/// Inline text injected into the prompt when a page cannot be fetched.
pub fn fetch_failure_placeholder(reason: &str) -> String {
    format!("[Could not fetch URL: {}]", reason)
}

/// Guidance text telling the model how to use a reference image.
///
/// # Examples
///
/// ```
/// use kiln_context::describe_image;
///
/// let text = describe_image("https://example.com/mood.jpg");
/// assert!(text.starts_with("The user provided a reference image at: https://example.com/mood.jpg"));
/// assert!(text.contains("useTexture('https://example.com/mood.jpg')"));
/// ```
pub fn describe_image(url: &str) -> String {
    format!(
        "The user provided a reference image at: {url}\n\
         Incorporate this image URL as a prop default or background.\n\
         Use <img src='{url}' /> or Three.js useTexture('{url}') as appropriate."
    )
}
