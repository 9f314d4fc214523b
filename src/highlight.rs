//! Whole-word, case-insensitive keyword highlighting.
//!
//! Matching runs on the raw paragraph text, never on rendered markup, so a keyword can not
//! match inside an entity or a tag. Matched text keeps its original case.

use crate::render::escape_html;
use regex::Regex;
use std::ops::Range;

/// Class of the element wrapped around each highlighted occurrence.
pub const HIGHLIGHT_CLASS: &str = "keyword-highlight";

/// Byte ranges of every whole-word, case-insensitive occurrence of `keyword` in `text`.
#[must_use]
pub fn find_matches(text: &str, keyword: &str) -> Vec<Range<usize>> {
    if keyword.trim().is_empty() {
        return Vec::new();
    }
    let Ok(re) = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword))) else {
        return Vec::new();
    };
    re.find_iter(text).map(|m| m.range()).collect()
}

/// Escapes `text` for HTML and wraps each keyword occurrence in a highlight span.
#[must_use]
pub fn highlight_html(text: &str, keyword: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for range in find_matches(text, keyword) {
        out.push_str(&escape_html(&text[last..range.start]));
        out.push_str("<span class=\"");
        out.push_str(HIGHLIGHT_CLASS);
        out.push_str("\">");
        out.push_str(&escape_html(&text[range.clone()]));
        out.push_str("</span>");
        last = range.end;
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

#[cfg(test)]
#[path = "tests/highlight.rs"]
mod tests;
