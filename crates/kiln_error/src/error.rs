//! Crate-level error aggregation.

use crate::{BackendError, ConfigError, HttpError, JsonError, StorageError};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum KilnErrorKind {
    /// HTTP transport error
    #[display("{}", _0)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[display("{}", _0)]
    Json(JsonError),
    /// Generation backend error
    #[display("{}", _0)]
    Backend(BackendError),
    /// Configuration error
    #[display("{}", _0)]
    Config(ConfigError),
    /// Artifact or manifest storage error
    #[display("{}", _0)]
    Storage(StorageError),
}

/// Kiln error with kind discrimination.
///
/// # Examples
///
/// ```
/// use kiln_error::{ConfigError, KilnError, KilnErrorKind};
///
/// let err = KilnError::from(ConfigError::new("bad category"));
/// assert!(matches!(err.kind(), KilnErrorKind::Config(_)));
/// assert!(err.is_config());
/// ```
#[derive(Debug, derive_more::Display)]
#[display("Kiln Error: {}", _0)]
pub struct KilnError(Box<KilnErrorKind>);

impl KilnError {
    /// Create a new error from a kind.
    pub fn new(kind: KilnErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &KilnErrorKind {
        &self.0
    }

    /// True when the run was rejected by configuration (e.g. unknown category).
    pub fn is_config(&self) -> bool {
        matches!(*self.0, KilnErrorKind::Config(_))
    }

    /// True for transport failures outside the generation backend.
    pub fn is_http(&self) -> bool {
        matches!(*self.0, KilnErrorKind::Http(_))
    }

    /// True when the generation backend failed.
    pub fn is_backend(&self) -> bool {
        matches!(*self.0, KilnErrorKind::Backend(_))
    }
}

impl std::error::Error for KilnError {}

// Generic From implementation for any type that converts to KilnErrorKind
impl<T> From<T> for KilnError
where
    T: Into<KilnErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Kiln operations.
pub type KilnResult<T> = std::result::Result<T, KilnError>;
