//! Wiring of the concrete collaborators from a [`KilnConfig`].

use crate::KilnConfig;
use kiln_context::HttpContextFetcher;
use kiln_error::{HttpError, KilnResult};
use kiln_models::OpenAICompatibleClient;
use kiln_pipeline::{ComponentPipeline, PromptAssembler, PromptLibrary};
use kiln_validate::TypeScriptChecker;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Provider label attached to backend logs.
pub const PROVIDER_NAME: &str = "lm-studio";

/// Creates the backend client.
///
/// # Errors
///
/// Returns an HTTP error if the HTTP client cannot be constructed.
pub fn build_client(config: &KilnConfig) -> KilnResult<OpenAICompatibleClient> {
    OpenAICompatibleClient::with_timeout(
        config.api_key().clone(),
        config.model().clone(),
        config.base_url().clone(),
        PROVIDER_NAME,
        config.request_timeout(),
    )
    .map_err(|e| HttpError::new(e.to_string()).into())
}

/// Prompt material from `prompts_dir` when configured, otherwise the built-ins.
///
/// # Errors
///
/// Returns an error if the configured directory cannot be loaded.
pub async fn load_library(config: &KilnConfig) -> KilnResult<PromptLibrary> {
    match config.prompts_dir() {
        Some(dir) => PromptLibrary::from_dir(dir).await,
        None => PromptLibrary::builtin(),
    }
}

/// Assembles the production pipeline.
///
/// # Errors
///
/// Returns an error if the client or the prompt library cannot be created.
#[instrument(skip_all, fields(root = %config.root().display(), model = %config.model()))]
pub async fn build_pipeline(
    config: &KilnConfig,
) -> KilnResult<ComponentPipeline<OpenAICompatibleClient>> {
    let client = build_client(config)?;
    let library = load_library(config).await?;
    debug!(examples = library.examples().len(), "Prompt library ready");

    Ok(ComponentPipeline::new(
        client,
        Arc::new(TypeScriptChecker::new(config.checker_config())),
        Arc::new(HttpContextFetcher::default()),
        PromptAssembler::new(library),
        config.generation_settings(),
        config.layout(),
    ))
}
