//! Reference context for Kiln prompts.
//!
//! Fetches web pages as bounded plain text and turns image URLs into
//! guidance text. Failures never propagate: they become inline placeholder
//! strings so the generation run continues.

mod fetcher;
mod html;

pub use fetcher::{
    DEFAULT_MAX_CHARS, FetcherConfig, FetcherConfigBuilder, HttpContextFetcher, describe_image,
    fetch_failure_placeholder,
};
pub use html::{strip_html, truncate_chars};
