//! The fixed set of component categories.

use kiln_error::{ConfigError, KilnResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Kind of component requested.
///
/// Declaration order matters: the first variant is the CLI default and the
/// order is the one shown to users.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
pub enum Category {
    /// Three.js / react-three-fiber scenes
    #[default]
    #[serde(rename = "3d-scenes")]
    #[strum(serialize = "3d-scenes")]
    ThreeDScenes,
    /// Scroll-driven animations
    #[serde(rename = "scroll-animations")]
    #[strum(serialize = "scroll-animations")]
    ScrollAnimations,
    /// Small interactive affordances (buttons, loaders, toggles)
    #[serde(rename = "micro-interactions")]
    #[strum(serialize = "micro-interactions")]
    MicroInteractions,
    /// Fragment-shader driven backgrounds
    #[serde(rename = "shader-backgrounds")]
    #[strum(serialize = "shader-backgrounds")]
    ShaderBackgrounds,
    /// Route and page transitions
    #[serde(rename = "page-transitions")]
    #[strum(serialize = "page-transitions")]
    PageTransitions,
}

impl Category {
    /// All categories in declaration order.
    pub fn all() -> Vec<Category> {
        Category::iter().collect()
    }

    /// Kebab-case names of all categories, in order.
    pub fn names() -> Vec<&'static str> {
        Category::iter().map(Category::name).collect()
    }

    /// Kebab-case name used on disk, in prompts and in the manifest.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parses a category name, rejecting anything outside the fixed set.
    ///
    /// # Examples
    ///
    /// ```
    /// use kiln_core::Category;
    ///
    /// assert_eq!(Category::from_name("micro-interactions").unwrap(), Category::MicroInteractions);
    /// assert!(Category::from_name("sparkles").is_err());
    /// ```
    pub fn from_name(name: &str) -> KilnResult<Self> {
        Category::from_str(name).map_err(|_| {
            tracing::debug!(category = name, "Rejected unknown category");
            ConfigError::new(format!(
                "category must be one of [{}], got '{}'",
                Category::names().join(", "),
                name
            ))
            .into()
        })
    }
}
