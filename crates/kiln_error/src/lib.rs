//! Error types for the Kiln component generator.
//!
//! Every error records the source line and file where it was created.
//! [`KilnError`] wraps all of them and is what crosses crate boundaries.

mod backend;
mod config;
mod error;
mod http;
mod json;
mod storage;

pub use backend::BackendError;
pub use config::ConfigError;
pub use error::{KilnError, KilnErrorKind, KilnResult};
pub use http::HttpError;
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
