//! Manifest of generated components.
//!
//! Every successful generation run records one [`ManifestEntry`] in a JSON
//! document next to the generated files. [`write_atomic`] is also used for
//! the artifacts themselves.

mod atomic;
mod entry;
mod store;

pub use atomic::write_atomic;
pub use entry::{ManifestEntry, PROMPT_HASH_LEN, prompt_hash};
pub use store::ManifestStore;
