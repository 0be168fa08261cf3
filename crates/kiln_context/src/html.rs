//! HTML to plain text.

use regex::Regex;
use std::sync::LazyLock;

static HIDDEN_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<noscript\b[^>]*>.*?</noscript\s*>",
    )
    .expect("hidden element pattern is valid")
});

static COMMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

static TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"));

/// Named and numeric entities decoded after tags are removed.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&amp;", "&"),
];

/// Extracts visible text from an HTML document.
///
/// Script, style and noscript content is dropped entirely, every other tag is
/// replaced by a space and whitespace runs collapse to a single space.
///
/// # Examples
///
/// ```
/// use kiln_context::strip_html;
///
/// let html = "<html><head><style>p { color: red }</style></head>\
///             <body><h1>Hello</h1><script>alert(1)</script><p>world &amp; more</p></body></html>";
/// assert_eq!(strip_html(html), "Hello world & more");
/// ```
pub fn strip_html(html: &str) -> String {
    let without_hidden = HIDDEN_ELEMENTS.replace_all(html, " ");
    let without_comments = COMMENTS.replace_all(&without_hidden, " ");
    let text = TAGS.replace_all(&without_comments, " ");

    // &amp; is last in the table so "&amp;lt;" decodes to "&lt;" and no further.
    let decoded = ENTITIES
        .iter()
        .fold(text.into_owned(), |acc, (entity, replacement)| {
            acc.replace(entity, replacement)
        });

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates to at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_drops_noscript_and_comments() {
        let html = "<div>Visible<!-- hidden --></div><noscript>Enable JS</noscript><span>Too</span>";
        assert_eq!(strip_html(html), "Visible Too");
    }

    #[test]
    fn test_strip_html_handles_attributes_and_case() {
        let html = r#"<SCRIPT type="module">let x = "<p>";</SCRIPT><a href="/x">Link</a>"#;
        assert_eq!(strip_html(html), "Link");
    }

    #[test]
    fn test_strip_html_plain_text_passthrough() {
        assert_eq!(strip_html("  just   text\n here "), "just text here");
    }

    #[test]
    fn test_truncate_chars_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
