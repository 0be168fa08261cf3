//! Subprocess-backed artifact checker.

use crate::CheckerConfig;
use async_trait::async_trait;
use kiln_core::ValidationResult;
use kiln_interface::ArtifactChecker;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

/// Runs an external type-checker against an artifact.
///
/// Fails open: a missing configuration file, a program that cannot be
/// launched and a run that exceeds its timeout all yield
/// [`ValidationResult::Clean`].
#[derive(Debug, Clone)]
pub struct TypeScriptChecker {
    config: CheckerConfig,
}

impl TypeScriptChecker {
    /// Creates a checker with the given invocation settings.
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    /// Invocation settings.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }
}

#[async_trait]
impl ArtifactChecker for TypeScriptChecker {
    #[instrument(skip(self, path), fields(path = %path.display(), program = %self.config.program()))]
    async fn check(&self, path: &Path) -> ValidationResult {
        if !self.config.config_file().exists() {
            debug!(
                config_file = %self.config.config_file().display(),
                "Checker configuration missing, skipping validation"
            );
            return ValidationResult::Clean;
        }

        // The checker runs from its own working directory.
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let mut cmd = Command::new(self.config.program());
        cmd.args(self.config.args())
            .arg(&path)
            .current_dir(self.config.working_dir())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(*self.config.timeout(), cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                debug!(error = %e, "Checker could not be launched, skipping validation");
                return ValidationResult::Clean;
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.config.timeout().as_secs_f64(),
                    "Checker timed out, skipping validation"
                );
                return ValidationResult::Clean;
            }
        };

        if output.status.success() {
            debug!("Checker reported no issues");
            return ValidationResult::Clean;
        }

        let diagnostic = collect_diagnostic(&output.stdout, &output.stderr);
        info!(
            exit_code = ?output.status.code(),
            diagnostic_len = diagnostic.len(),
            "Checker reported issues"
        );
        ValidationResult::Failed(diagnostic)
    }
}

/// Joins stdout and stderr into one diagnostic block.
fn collect_diagnostic(stdout: &[u8], stderr: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let stderr = String::from_utf8_lossy(stderr);
    let parts: Vec<&str> = [stdout.trim(), stderr.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        "Checker exited with a failure status and no output".to_string()
    } else {
        parts.join("\n")
    }
}
