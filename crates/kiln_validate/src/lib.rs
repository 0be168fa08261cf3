//! External type-checker integration for generated components.
//!
//! Validation is best-effort. The checker is an external process whose
//! output is treated as opaque diagnostic text; when it is absent or hangs,
//! the artifact is considered clean.

mod checker;
mod config;

pub use checker::TypeScriptChecker;
pub use config::{CheckerConfig, CheckerConfigBuilder, DEFAULT_CHECK_TIMEOUT, TSC_FLAGS};
