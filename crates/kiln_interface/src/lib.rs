//! Trait definitions for the Kiln component generator.
//!
//! The pipeline talks to its three collaborators only through these traits:
//! the text-generation backend, the context fetchers and the artifact checker.

use async_trait::async_trait;
use kiln_core::{GenerateRequest, GenerateResponse, ValidationResult};
use kiln_error::KilnResult;
use std::path::Path;

/// A text-generation backend.
///
/// Implementations must not retry on their own; a failure is returned as a
/// backend error and ends the run.
#[async_trait]
pub trait KilnDriver: Send + Sync {
    /// Sends the request and returns the raw generated text.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the call cannot complete.
    async fn generate(&self, req: &GenerateRequest) -> KilnResult<GenerateResponse>;

    /// Provider name, for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}

/// Retrieves external reference material for a prompt.
///
/// Neither method can fail: retrieval problems are described inline in the
/// returned text so the prompt still carries something useful.
#[async_trait]
pub trait ContextFetcher: Send + Sync {
    /// Fetches a web page and returns bounded plain text.
    async fn fetch_url(&self, url: &str) -> String;

    /// Produces guidance text describing how to use a reference image.
    fn describe_image(&self, url: &str) -> String;
}

/// Statically checks a written artifact.
///
/// A checker that cannot run (missing tool, missing configuration, timeout)
/// reports [`ValidationResult::Clean`].
#[async_trait]
pub trait ArtifactChecker: Send + Sync {
    /// Checks the file at `path`.
    async fn check(&self, path: &Path) -> ValidationResult;
}

#[async_trait]
impl<T: KilnDriver + ?Sized> KilnDriver for std::sync::Arc<T> {
    async fn generate(&self, req: &GenerateRequest) -> KilnResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
