//! Storage error types for artifacts and the manifest.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Directory could not be created
    #[display("Failed to create directory {}: {}", path, message)]
    CreateDir {
        /// Directory path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// File could not be read
    #[display("Failed to read {}: {}", path, message)]
    Read {
        /// File path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// File could not be written or moved into place
    #[display("Failed to write {}: {}", path, message)]
    Write {
        /// File path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Manifest document exists but is not a valid entry list
    #[display("Corrupt manifest {}: {}", path, message)]
    CorruptManifest {
        /// Manifest path
        path: String,
        /// Parser message
        message: String,
    },
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use kiln_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Read {
///     path: "index.json".to_string(),
///     message: "permission denied".to_string(),
/// });
/// assert!(format!("{}", err).contains("index.json"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorageErrorKind {
        &self.kind
    }
}
