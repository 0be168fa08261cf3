//! Kiln: creative React component generation with a local LLM.
//!
//! This facade re-exports the workspace crates and adds process-level
//! concerns: configuration, logging and wiring of the concrete backend,
//! fetcher and checker.
//!
//! ```no_run
//! use kiln::{GenerationRequest, KilnConfig, build_pipeline};
//!
//! # async fn run() -> kiln::KilnResult<()> {
//! let config = KilnConfig::from_env()?;
//! let pipeline = build_pipeline(&config).await?;
//! let request = GenerationRequest::parse("a floating 3D crystal", "3d-scenes")?;
//! let outcome = pipeline.generate(&request).await?;
//! println!("{}", outcome.file_path().display());
//! # Ok(())
//! # }
//! ```

mod chat;
mod config;
mod logging;
mod runtime;

pub use chat::{CHAT_SYSTEM_PROMPT, ChatSession};
pub use config::{
    ENV_API_KEY, ENV_BASE_URL, ENV_MODEL, ENV_PROMPTS_DIR, ENV_ROOT, ENV_TEMPERATURE, KilnConfig,
    KilnConfigBuilder,
};
pub use logging::{DEFAULT_LOG_FILTER, init_tracing};
pub use runtime::{PROVIDER_NAME, build_client, build_pipeline, load_library};

pub use kiln_core::{
    ARTIFACT_EXTENSION, Category, Conversation, FewShotExample, GenerateRequest,
    GenerateResponse, GenerationRequest, Message, Role, ValidationResult, truncate_for_display,
};
pub use kiln_error::{KilnError, KilnErrorKind, KilnResult};
pub use kiln_interface::{ArtifactChecker, ContextFetcher, KilnDriver};
pub use kiln_manifest::{ManifestEntry, ManifestStore};
pub use kiln_pipeline::{
    ComponentPipeline, DIAGNOSTIC_DISPLAY_CHARS, GenerationOutcome, GenerationSettings,
    MAX_REPAIR_ATTEMPTS, ProjectLayout, PromptAssembler, PromptLibrary,
};
