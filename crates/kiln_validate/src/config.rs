//! Checker invocation settings.

use derive_getters::Getters;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Wall-clock budget for one checker run.
pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(30);

/// Compiler flags passed ahead of the artifact path.
pub const TSC_FLAGS: &[&str] = &[
    "tsc",
    "--noEmit",
    "--esModuleInterop",
    "--jsx",
    "react-jsx",
    "--moduleResolution",
    "bundler",
    "--skipLibCheck",
];

/// How to launch the external checker.
///
/// The artifact path is appended after `args`. The run is skipped (and treated
/// as clean) when `config_file` does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct CheckerConfig {
    /// Executable to launch
    program: String,
    /// Arguments placed before the artifact path
    #[builder(default)]
    args: Vec<String>,
    /// Working directory for the process
    working_dir: PathBuf,
    /// File that must exist for checking to be attempted
    config_file: PathBuf,
    /// Wall-clock budget
    #[builder(default = "DEFAULT_CHECK_TIMEOUT")]
    timeout: Duration,
}

impl CheckerConfig {
    /// Returns a builder for constructing a CheckerConfig.
    pub fn builder() -> CheckerConfigBuilder {
        CheckerConfigBuilder::default()
    }

    /// `npx tsc` run inside `<root>/preview` against its `tsconfig.json`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kiln_validate::CheckerConfig;
    /// use std::path::Path;
    ///
    /// let config = CheckerConfig::typescript(Path::new("/srv/app"));
    /// assert_eq!(config.program(), "npx");
    /// assert_eq!(config.working_dir(), Path::new("/srv/app/preview"));
    /// assert_eq!(config.config_file(), Path::new("/srv/app/preview/tsconfig.json"));
    /// ```
    pub fn typescript(root: &Path) -> Self {
        let preview = root.join("preview");
        Self {
            program: "npx".to_string(),
            args: TSC_FLAGS.iter().map(|s| s.to_string()).collect(),
            config_file: preview.join("tsconfig.json"),
            working_dir: preview,
            timeout: DEFAULT_CHECK_TIMEOUT,
        }
    }

    /// Same configuration with a different timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
