//! Fixed generation settings and on-disk layout.

use derive_getters::Getters;
use kiln_core::{ARTIFACT_EXTENSION, Category};
use std::path::{Path, PathBuf};

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
/// Default output token cap.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Sampling settings sent with every backend call.
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationSettings {
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Sampling temperature
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
    /// Maximum tokens to generate
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
}

impl GenerationSettings {
    /// Returns a builder for constructing GenerationSettings.
    pub fn builder() -> GenerationSettingsBuilder {
        GenerationSettingsBuilder::default()
    }

    /// Settings with every field given.
    pub fn new(model: impl Into<String>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            temperature,
            max_tokens,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Where artifacts and the manifest live.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ProjectLayout {
    /// Root of the generated component tree
    components_dir: PathBuf,
    /// Manifest document
    manifest_path: PathBuf,
}

impl ProjectLayout {
    /// Standard layout under a project root.
    ///
    /// # Examples
    ///
    /// ```
    /// use kiln_core::Category;
    /// use kiln_pipeline::ProjectLayout;
    /// use std::path::Path;
    ///
    /// let layout = ProjectLayout::under(Path::new("/srv/app"));
    /// assert_eq!(layout.manifest_path(), Path::new("/srv/app/generated_components/index.json"));
    /// assert_eq!(
    ///     layout.relative_path(Category::MicroInteractions, "MagneticButton"),
    ///     "micro-interactions/MagneticButton.tsx"
    /// );
    /// ```
    pub fn under(root: &Path) -> Self {
        let components_dir = root.join("generated_components");
        Self {
            manifest_path: components_dir.join("index.json"),
            components_dir,
        }
    }

    /// Layout with explicit locations.
    pub fn new(components_dir: impl Into<PathBuf>, manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            components_dir: components_dir.into(),
            manifest_path: manifest_path.into(),
        }
    }

    /// `{category}/{name}.tsx`, always with forward slashes.
    pub fn relative_path(&self, category: Category, name: &str) -> String {
        format!("{}/{}.{}", category, name, ARTIFACT_EXTENSION)
    }

    /// Absolute artifact location for a category and component name.
    pub fn artifact_path(&self, category: Category, name: &str) -> PathBuf {
        self.components_dir
            .join(category.name())
            .join(format!("{}.{}", name, ARTIFACT_EXTENSION))
    }
}
