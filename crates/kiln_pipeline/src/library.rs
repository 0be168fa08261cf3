//! System prompt and few-shot example set.

use derive_getters::Getters;
use kiln_core::{Category, FewShotExample};
use kiln_error::{JsonError, KilnResult, StorageError, StorageErrorKind};
use std::path::Path;
use tracing::{debug, instrument};

/// File name of the system prompt inside a prompts directory.
pub const SYSTEM_PROMPT_FILE: &str = "system_creative.txt";
/// File name of the few-shot example set inside a prompts directory.
pub const FEW_SHOT_FILE: &str = "few_shot_examples.json";

const BUILTIN_SYSTEM_PROMPT: &str = include_str!("../prompts/system_creative.txt");
const BUILTIN_FEW_SHOT: &str = include_str!("../prompts/few_shot_examples.json");

/// Immutable prompt material: the base system prompt and an ordered example set.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PromptLibrary {
    /// Base system prompt text
    system_prompt: String,
    /// Few-shot examples in file order
    examples: Vec<FewShotExample>,
}

impl PromptLibrary {
    /// Creates a library from already-loaded material.
    pub fn new(system_prompt: impl Into<String>, examples: Vec<FewShotExample>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            examples,
        }
    }

    /// The prompt material compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns a JSON error if the bundled example set does not parse.
    pub fn builtin() -> KilnResult<Self> {
        Ok(Self::new(BUILTIN_SYSTEM_PROMPT, parse_examples(BUILTIN_FEW_SHOT)?))
    }

    /// Loads `system_creative.txt` and `few_shot_examples.json` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if either file cannot be read and a JSON error
    /// if the example set does not parse.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub async fn from_dir(dir: &Path) -> KilnResult<Self> {
        let system_prompt = read(&dir.join(SYSTEM_PROMPT_FILE)).await?;
        let examples = parse_examples(&read(&dir.join(FEW_SHOT_FILE)).await?)?;
        debug!(examples = examples.len(), "Loaded prompt library");
        Ok(Self::new(system_prompt, examples))
    }

    /// Examples for `category`, in their original order.
    pub fn examples_for(&self, category: Category) -> impl Iterator<Item = &FewShotExample> {
        self.examples
            .iter()
            .filter(move |example| *example.category() == category)
    }
}

fn parse_examples(raw: &str) -> KilnResult<Vec<FewShotExample>> {
    serde_json::from_str(raw)
        .map_err(|e| JsonError::new(format!("Invalid few-shot example set: {}", e)).into())
}

async fn read(path: &Path) -> KilnResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_parses() {
        let library = PromptLibrary::builtin().unwrap();
        assert!(!library.system_prompt().is_empty());
        assert!(!library.examples().is_empty());
    }

    #[test]
    fn test_builtin_covers_every_category() {
        let library = PromptLibrary::builtin().unwrap();
        for category in Category::all() {
            assert!(
                library.examples_for(category).next().is_some(),
                "no example for {}",
                category
            );
        }
    }
}
