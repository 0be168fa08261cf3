//! Manifest entry record.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use kiln_core::Category;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of hex characters kept from the prompt digest.
pub const PROMPT_HASH_LEN: usize = 12;

/// Short content hash of a prompt: the first twelve hex characters of its SHA-256.
///
/// # Examples
///
/// ```
/// use kiln_manifest::prompt_hash;
///
/// let hash = prompt_hash("a floating 3D crystal");
/// assert_eq!(hash.len(), 12);
/// assert_eq!(hash, prompt_hash("a floating 3D crystal"));
/// ```
pub fn prompt_hash(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(PROMPT_HASH_LEN);
    hex
}

/// One generated component recorded in the manifest.
///
/// Entries are keyed by `name`: upserting an entry with an existing name
/// replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ManifestEntry {
    /// Component name
    name: String,
    /// Category the component was generated for
    category: Category,
    /// Artifact path relative to the components directory, e.g. `3d-scenes/Cube.tsx`
    file: String,
    /// The user's original description (not the assembled prompt)
    prompt: String,
    /// [`prompt_hash`] of `prompt`
    prompt_hash: String,
    /// Time the entry was written
    generated_at: DateTime<Utc>,
}

impl ManifestEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        file: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self::at(name, category, file, prompt, Utc::now())
    }

    /// Creates an entry with an explicit timestamp.
    pub fn at(
        name: impl Into<String>,
        category: Category,
        file: impl Into<String>,
        prompt: impl Into<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let prompt = prompt.into();
        Self {
            name: name.into(),
            category,
            file: file.into(),
            prompt_hash: prompt_hash(&prompt),
            prompt,
            generated_at,
        }
    }
}
