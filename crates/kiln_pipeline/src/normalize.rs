//! Code-fence removal for raw model output.

const FENCE: &str = "```";

/// Strips Markdown code fences wrapped around the model's output.
///
/// A leading line that opens a fence (with or without a language tag) and a
/// trailing line that closes one are removed, then the text is trimmed. This
/// repeats until no outer fence remains, so `normalize(normalize(x)) ==
/// normalize(x)`.
///
/// # Examples
///
/// ```
/// use kiln_pipeline::normalize;
///
/// assert_eq!(normalize("```tsx\nexport default X;\n```"), "export default X;");
/// assert_eq!(normalize("  export default X;\n"), "export default X;");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut text = raw.trim();
    loop {
        let stripped = strip_closing_fence(strip_opening_fence(text)).trim();
        if stripped == text {
            return text.to_string();
        }
        text = stripped;
    }
}

fn strip_opening_fence(text: &str) -> &str {
    if !text.starts_with(FENCE) {
        return text;
    }
    match text.find('\n') {
        Some(idx) => &text[idx + 1..],
        None => "",
    }
}

fn strip_closing_fence(text: &str) -> &str {
    match text.rfind('\n') {
        Some(idx) if text[idx + 1..].trim() == FENCE => &text[..idx],
        None if text.trim() == FENCE => "",
        _ => text,
    }
}
