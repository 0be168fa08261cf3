//! The generate, validate and repair-once controller.

use crate::{PromptAssembler, derive_component_name, normalize};
use crate::{GenerationSettings, ProjectLayout};
use derive_getters::Getters;
use kiln_core::{GenerateRequest, GenerationRequest, ValidationResult, truncate_for_display};
use kiln_error::{ConfigError, KilnResult};
use kiln_interface::{ArtifactChecker, ContextFetcher, KilnDriver};
use kiln_manifest::{ManifestEntry, ManifestStore, write_atomic};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Repair attempts allowed after the first validation failure.
pub const MAX_REPAIR_ATTEMPTS: u32 = 1;

/// Characters of a diagnostic shown in the final warning.
pub const DIAGNOSTIC_DISPLAY_CHARS: usize = 500;

/// Result of a completed pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GenerationOutcome {
    /// Component name used for the file and the manifest entry
    name: String,
    /// Absolute location of the artifact
    file_path: PathBuf,
    /// Location relative to the components directory, as recorded in the manifest
    relative_path: String,
    /// Backend calls made: 1, or 2 when a repair was attempted
    attempts: u32,
    /// Result of the last validation
    validation: ValidationResult,
}

impl GenerationOutcome {
    /// True when the kept artifact has unresolved diagnostics.
    pub fn has_issues(&self) -> bool {
        !self.validation.is_clean()
    }
}

/// Orchestrates one generation request end to end.
///
/// Runs are strictly sequential: fetch context, generate, write, validate,
/// optionally repair once, then record the manifest entry.
pub struct ComponentPipeline<D: KilnDriver> {
    driver: D,
    checker: Arc<dyn ArtifactChecker>,
    fetcher: Arc<dyn ContextFetcher>,
    assembler: PromptAssembler,
    settings: GenerationSettings,
    layout: ProjectLayout,
    manifest: ManifestStore,
}

impl<D: KilnDriver> ComponentPipeline<D> {
    /// Creates a pipeline from its collaborators.
    pub fn new(
        driver: D,
        checker: Arc<dyn ArtifactChecker>,
        fetcher: Arc<dyn ContextFetcher>,
        assembler: PromptAssembler,
        settings: GenerationSettings,
        layout: ProjectLayout,
    ) -> Self {
        let manifest = ManifestStore::new(layout.manifest_path().clone());
        Self {
            driver,
            checker,
            fetcher,
            assembler,
            settings,
            layout,
            manifest,
        }
    }

    /// The backend driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The manifest this pipeline records into.
    pub fn manifest(&self) -> &ManifestStore {
        &self.manifest
    }

    /// The on-disk layout.
    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Generates, writes and validates one component, repairing at most once.
    ///
    /// A second validation failure keeps the artifact and is reported through
    /// [`GenerationOutcome::validation`], not as an error.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unusable explicit name, a backend
    /// error if a generation call fails and a storage error if the artifact or
    /// manifest cannot be written.
    #[instrument(
        skip(self, request),
        fields(
            category = %request.category(),
            provider = self.driver.provider_name(),
            model = %self.settings.model(),
        )
    )]
    pub async fn generate(&self, request: &GenerationRequest) -> KilnResult<GenerationOutcome> {
        let category = *request.category();
        let name = resolve_name(request)?;
        let file_path = self.layout.artifact_path(category, &name);
        let relative_path = self.layout.relative_path(category, &name);
        info!(name = %name, file = %relative_path, "Generating component");

        let url_context = match request.reference_url() {
            Some(url) => Some(self.fetcher.fetch_url(url).await),
            None => None,
        };
        let image_context = request
            .reference_image()
            .as_deref()
            .map(|url| self.fetcher.describe_image(url));

        let mut attempts = 0;
        let mut prior_error: Option<String> = None;
        let validation = loop {
            attempts += 1;
            let conversation = self.assembler.assemble(
                request.description(),
                category,
                url_context.as_deref(),
                image_context.as_deref(),
                prior_error.as_deref(),
            );
            let generate_request = GenerateRequest::builder()
                .messages(conversation.into_messages())
                .model(self.settings.model().clone())
                .temperature(*self.settings.temperature())
                .max_tokens(*self.settings.max_tokens())
                .build()
                .map_err(|e| ConfigError::new(e.to_string()))?;

            let response = self.driver.generate(&generate_request).await?;
            let source = normalize(response.text());
            write_atomic(&file_path, source.as_bytes()).await?;
            info!(attempt = attempts, bytes = source.len(), "Artifact written");

            match self.checker.check(&file_path).await {
                ValidationResult::Clean => {
                    if attempts > 1 {
                        info!("Repair succeeded");
                    } else {
                        debug!("Artifact validated clean");
                    }
                    break ValidationResult::Clean;
                }
                ValidationResult::Failed(diagnostic) if attempts <= MAX_REPAIR_ATTEMPTS => {
                    warn!(
                        attempt = attempts,
                        "Validation failed, retrying with diagnostic"
                    );
                    prior_error = Some(diagnostic);
                }
                ValidationResult::Failed(diagnostic) => {
                    warn!(
                        attempt = attempts,
                        diagnostic = truncate_for_display(&diagnostic, DIAGNOSTIC_DISPLAY_CHARS),
                        "Validation still failing, keeping artifact"
                    );
                    break ValidationResult::Failed(diagnostic);
                }
            }
        };

        self.manifest
            .upsert(ManifestEntry::new(
                name.clone(),
                category,
                relative_path.clone(),
                request.description().clone(),
            ))
            .await?;

        info!(attempts, clean = validation.is_clean(), "Generation complete");
        Ok(GenerationOutcome {
            name,
            file_path,
            relative_path,
            attempts,
            validation,
        })
    }
}

/// Explicit name when given and non-blank, otherwise derived from the description.
fn resolve_name(request: &GenerationRequest) -> KilnResult<String> {
    match request.name().as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => {
            if name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(ConfigError::new(format!(
                    "component name must be a plain file name, got '{}'",
                    name
                ))
                .into());
            }
            Ok(name.to_string())
        }
        _ => Ok(derive_component_name(request.description())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::Category;

    fn request(name: Option<&str>) -> GenerationRequest {
        GenerationRequest::parse("magnetic button", "micro-interactions")
            .unwrap()
            .with_name(name.map(String::from))
    }

    #[test]
    fn test_resolve_name_prefers_explicit() {
        assert_eq!(resolve_name(&request(Some("Magnet"))).unwrap(), "Magnet");
    }

    #[test]
    fn test_resolve_name_blank_derives() {
        assert_eq!(resolve_name(&request(Some("  "))).unwrap(), "MagneticButton");
        assert_eq!(resolve_name(&request(None)).unwrap(), "MagneticButton");
    }

    #[test]
    fn test_resolve_name_rejects_paths() {
        for bad in ["../Escape", "a/b", "a\\b", ".."] {
            let err = resolve_name(&request(Some(bad))).unwrap_err();
            assert!(err.is_config(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_outcome_has_issues() {
        let outcome = GenerationOutcome {
            name: "X".into(),
            file_path: PathBuf::from("x.tsx"),
            relative_path: format!("{}/X.tsx", Category::ThreeDScenes),
            attempts: 2,
            validation: ValidationResult::Failed("err".into()),
        };
        assert!(outcome.has_issues());
    }
}
