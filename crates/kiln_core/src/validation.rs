//! Outcome of checking a written artifact.

use serde::{Deserialize, Serialize};

/// Result of running the external checker against an artifact.
///
/// An unavailable checker is reported as [`ValidationResult::Clean`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "diagnostic", rename_all = "lowercase")]
pub enum ValidationResult {
    /// No issues found, or no checker available
    Clean,
    /// The checker reported diagnostics (stdout and stderr, untruncated)
    Failed(String),
}

impl ValidationResult {
    /// True for [`ValidationResult::Clean`].
    pub fn is_clean(&self) -> bool {
        matches!(self, ValidationResult::Clean)
    }

    /// Diagnostic text for a failed check.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            ValidationResult::Clean => None,
            ValidationResult::Failed(text) => Some(text),
        }
    }
}

/// Shortens diagnostic text for terminal output.
///
/// Only used for display; the retry prompt always receives the full text.
///
/// # Examples
///
/// ```
/// use kiln_core::truncate_for_display;
///
/// assert_eq!(truncate_for_display("abcdef", 3), "abc");
/// assert_eq!(truncate_for_display("abc", 10), "abc");
/// ```
pub fn truncate_for_display(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
