//! Component name derivation.

/// Name used when the description yields no usable words.
pub const FALLBACK_COMPONENT_NAME: &str = "GeneratedComponent";

/// Maximum number of description words that form a derived name.
pub const MAX_NAME_WORDS: usize = 3;

/// Derives a PascalCase component name from a description.
///
/// Takes whitespace-delimited words, drops every character that is not an
/// ASCII letter or digit, keeps words longer than two characters and
/// capitalizes the first three of them.
///
/// # Examples
///
/// ```
/// use kiln_pipeline::{FALLBACK_COMPONENT_NAME, derive_component_name};
///
/// assert_eq!(derive_component_name("a floating 3D crystal"), "FloatingCrystal");
/// assert_eq!(derive_component_name("magnetic button"), "MagneticButton");
/// assert_eq!(derive_component_name("a b c"), FALLBACK_COMPONENT_NAME);
/// ```
pub fn derive_component_name(description: &str) -> String {
    let name: String = description
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
        })
        .filter(|word| word.len() > 2)
        .take(MAX_NAME_WORDS)
        .map(|word| capitalize(&word))
        .collect();

    if name.is_empty() {
        FALLBACK_COMPONENT_NAME.to_string()
    } else {
        name
    }
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
