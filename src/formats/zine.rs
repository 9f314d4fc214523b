//! Plain-text zine markup: `__Title__` headers, a "Table of Contents" block and `CH<n>` tags.
//!
//! The concrete markers come from [`Config`], so the same scanner handles zines that use a
//! different wrapper or tag convention.

use crate::config::Config;
use crate::error::Error;
use crate::formats::Format;
use regex::Regex;

/// Zine markup heuristics compiled from configuration.
pub struct ZineFormat {
    header_marker: String,
    toc_marker: String,
    chapter_tag: Regex,
}

impl ZineFormat {
    /// Compiles the markup heuristics named in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `chapter_tag_pattern` is not a valid regex.
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            header_marker: config.header_marker.clone(),
            toc_marker: config.toc_marker.clone(),
            chapter_tag: Regex::new(&config.chapter_tag_pattern)?,
        })
    }
}

impl Format for ZineFormat {
    fn header_title<'a>(&self, line: &'a str) -> Option<&'a str> {
        if self.header_marker.is_empty() {
            return None;
        }
        let inner = line
            .trim()
            .strip_prefix(self.header_marker.as_str())?
            .strip_suffix(self.header_marker.as_str())?
            .trim();
        // A rule of underscores is decoration, not a header
        inner.chars().any(char::is_alphanumeric).then_some(inner)
    }

    fn is_toc_marker(&self, line: &str) -> bool {
        !self.toc_marker.is_empty() && line.contains(self.toc_marker.as_str())
    }

    fn chapter_tag(&self, text: &str) -> Option<String> {
        let caps = self.chapter_tag.captures(text)?;
        caps.get(1)
            .or_else(|| caps.get(0))
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
#[path = "../tests/zine_format.rs"]
mod tests;
