//! # Message Formatting
//!
//! File: cli/src/assistant/format.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! Turns message text into display markup:
//! 1. HTML-special characters are escaped (unless legacy parity is requested).
//! 2. Every `http://` / `https://` URL, up to the next whitespace, becomes a link.
//! 3. Every `\n` becomes `<br>`.
//!
//! The transformation is not reentrant: formatting already-formatted markup
//! escapes the markup again.
//!
use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern is a valid regex"));

const LINK_STYLE: &str = "color: #93c5fd; text-decoration: underline;";

/// Knobs for [`format_for_display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Escape `& < > " '` before substitution. Turning this off reproduces the
    /// legacy widget, which injected raw text as markup.
    pub escape_html: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { escape_html: true }
    }
}

impl FormatOptions {
    pub fn legacy() -> Self {
        Self { escape_html: false }
    }
}

/// Renders `content` as display markup.
pub fn format_for_display(content: &str, options: FormatOptions) -> String {
    let text = if options.escape_html {
        escape_html(content)
    } else {
        content.to_string()
    };
    let linked = URL_PATTERN.replace_all(&text, |caps: &regex::Captures<'_>| {
        let url = &caps[0];
        format!(
            r#"<a href="{url}" target="_blank" style="{style}">{url}</a>"#,
            url = url,
            style = LINK_STYLE
        )
    });
    linked.replace('\n', "<br>")
}

/// Escapes the five HTML-special characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
