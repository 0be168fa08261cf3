//! Process-wide configuration.
//!
//! Built once at startup and passed down explicitly. Sources, lowest
//! precedence first: built-in defaults, an optional TOML file, environment
//! variables.

use derive_getters::Getters;
use kiln_error::{ConfigError, KilnResult};
use kiln_pipeline::{GenerationSettings, ProjectLayout};
use kiln_validate::CheckerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Backend base URL.
pub const ENV_BASE_URL: &str = "LM_STUDIO_URL";
/// Backend credential.
pub const ENV_API_KEY: &str = "LM_STUDIO_KEY";
/// Model identifier.
pub const ENV_MODEL: &str = "LM_STUDIO_MODEL";
/// Sampling temperature.
pub const ENV_TEMPERATURE: &str = "AGENT_TEMPERATURE";
/// Project root holding `generated_components/` and `preview/`.
pub const ENV_ROOT: &str = "KILN_ROOT";
/// Directory with prompt overrides.
pub const ENV_PROMPTS_DIR: &str = "KILN_PROMPTS_DIR";

const DEFAULT_BASE_URL: &str = "http://localhost:1234/v1";
const DEFAULT_API_KEY: &str = "EMPTY";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
const DEFAULT_CHECKER_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the generator.
///
/// # Examples
///
/// ```
/// use kiln::KilnConfig;
///
/// let config = KilnConfig::builder()
///     .model("qwen2.5-coder-7b")
///     .temperature(0.4_f32)
///     .build()
///     .unwrap();
/// assert_eq!(config.model(), "qwen2.5-coder-7b");
/// assert_eq!(config.base_url(), "http://localhost:1234/v1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct KilnConfig {
    /// OpenAI-compatible endpoint including the `/v1` suffix
    base_url: String,
    /// Bearer credential; local servers accept any value
    api_key: String,
    /// Model identifier
    model: String,
    /// Sampling temperature
    temperature: f32,
    /// Output token cap
    max_tokens: u32,
    /// Backend request timeout
    request_timeout_secs: u64,
    /// Project root
    root: PathBuf,
    /// Prompt override directory; built-in prompts when absent
    prompts_dir: Option<PathBuf>,
    /// Wall-clock budget for the type-checker
    checker_timeout_secs: u64,
}

impl Default for KilnConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            model: kiln_pipeline::DEFAULT_MODEL.to_string(),
            temperature: kiln_pipeline::DEFAULT_TEMPERATURE,
            max_tokens: kiln_pipeline::DEFAULT_MAX_TOKENS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            root: PathBuf::from("."),
            prompts_dir: None,
            checker_timeout_secs: DEFAULT_CHECKER_TIMEOUT_SECS,
        }
    }
}

impl KilnConfig {
    /// Returns a builder seeded with the defaults.
    pub fn builder() -> KilnConfigBuilder {
        KilnConfigBuilder::default()
    }

    /// Defaults overridden by environment variables.
    ///
    /// Reads `LM_STUDIO_URL`, `LM_STUDIO_KEY`, `LM_STUDIO_MODEL`,
    /// `AGENT_TEMPERATURE`, `KILN_ROOT` and `KILN_PROMPTS_DIR`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `AGENT_TEMPERATURE` is not a number.
    pub fn from_env() -> KilnResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Loads a TOML file; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> KilnResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(model = %config.model, root = %config.root.display(), "Loaded config file");
        Ok(config)
    }

    /// Applies overrides from a variable lookup (the environment, in production).
    ///
    /// Unset and empty variables leave the current value in place.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the temperature is not a number.
    pub fn with_overrides<F>(mut self, lookup: F) -> KilnResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(base_url) = get(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(api_key) = get(ENV_API_KEY) {
            self.api_key = api_key;
        }
        if let Some(model) = get(ENV_MODEL) {
            self.model = model;
        }
        if let Some(temperature) = get(ENV_TEMPERATURE) {
            self.temperature = temperature.trim().parse().map_err(|_| {
                ConfigError::new(format!(
                    "{} must be a number, got '{}'",
                    ENV_TEMPERATURE, temperature
                ))
            })?;
        }
        if let Some(root) = get(ENV_ROOT) {
            self.root = PathBuf::from(root);
        }
        if let Some(dir) = get(ENV_PROMPTS_DIR) {
            self.prompts_dir = Some(PathBuf::from(dir));
        }
        Ok(self)
    }

    /// Sampling settings for the pipeline.
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings::new(self.model.clone(), self.temperature, self.max_tokens)
    }

    /// Artifact and manifest locations under the project root.
    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::under(&self.project_root())
    }

    /// Type-checker invocation for the project's preview app.
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig::typescript(&self.project_root())
            .with_timeout(Duration::from_secs(self.checker_timeout_secs))
    }

    /// Root resolved against the current directory, so paths handed to the
    /// checker stay valid from its working directory.
    fn project_root(&self) -> PathBuf {
        std::path::absolute(&self.root).unwrap_or_else(|_| self.root.clone())
    }

    /// Backend request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
