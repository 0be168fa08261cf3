//! Few-shot example reference data.

use crate::Category;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A (prompt, expected output) pair that primes the model for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct FewShotExample {
    /// Category this example applies to
    category: Category,
    /// Example user description
    prompt: String,
    /// Abbreviated component source the model should imitate
    output_snippet: String,
}

impl FewShotExample {
    /// Creates a new example.
    pub fn new(
        category: Category,
        prompt: impl Into<String>,
        output_snippet: impl Into<String>,
    ) -> Self {
        Self {
            category,
            prompt: prompt.into(),
            output_snippet: output_snippet.into(),
        }
    }
}
