//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! We look for a zinemap.toml, and if present load settings from there. Every heuristic the
//! scanner, keyword extractor and TOC resolver rely on lives here rather than in the matching
//! code, so a zine with different markup can be handled by configuration alone.

use crate::error::Error;
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// File consulted when no explicit configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "zinemap.toml";

/// Words too common to summarise a paragraph.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from",
    "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does", "did",
    "will", "would", "should", "could", "may", "might", "must", "can", "this", "that", "these",
    "those", "i", "you", "he", "she", "it", "we", "they", "them", "their", "my", "your", "our",
    "me", "him", "her",
];

fn default_stop_words() -> Vec<String> {
    STOP_WORDS.iter().map(|w| (*w).to_string()).collect()
}

#[derive(Facet, Clone, Debug, PartialEq)]
/// Reader preferences loaded from zinemap.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "tsm.txt".to_string())]
    /// Relative path of the zine text.
    pub source_path: String,
    #[facet(default = "__".to_string())]
    /// Marker that must open and close a header line.
    pub header_marker: String,
    #[facet(default = "Table of Contents".to_string())]
    /// Literal phrase whose line opens the table-of-contents block.
    pub toc_marker: String,
    #[facet(default = "Table of Contents".to_string())]
    /// Heading shown above the enhanced table of contents.
    pub toc_heading: String,
    #[facet(default = r"CH(\d+)".to_string())]
    /// Chapter tag regex; capture group 1 (or the whole match) identifies the chapter.
    pub chapter_tag_pattern: String,
    #[facet(default = 20)]
    /// Paragraphs with fewer characters than this get no keyword.
    pub min_paragraph_length: usize,
    #[facet(default = 4)]
    /// Shortest token, in characters, that may become a keyword.
    pub min_keyword_length: usize,
    #[facet(default = default_stop_words())]
    /// Lower-case words never chosen as keywords.
    pub stop_words: Vec<String>,
    #[facet(default = 500)]
    /// Delay between scrolling to a paragraph and highlighting its keyword.
    pub highlight_delay_ms: u64,
    #[facet(default = 300)]
    /// Page scroll offset in pixels past which the back-to-top button shows.
    pub back_to_top_threshold: u32,
    #[facet(default = 10)]
    /// Reader scroll offset in rows past which the back-to-top hint shows.
    pub reader_back_to_top_rows: usize,
    #[facet(default = "Zine".to_string())]
    /// Title of the generated page.
    pub page_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: "tsm.txt".to_string(),
            header_marker: "__".to_string(),
            toc_marker: "Table of Contents".to_string(),
            toc_heading: "Table of Contents".to_string(),
            chapter_tag_pattern: r"CH(\d+)".to_string(),
            min_paragraph_length: 20,
            min_keyword_length: 4,
            stop_words: default_stop_words(),
            highlight_delay_ms: 500,
            back_to_top_threshold: 300,
            reader_back_to_top_rows: 10,
            page_title: "Zine".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from zinemap.toml if present.
    ///
    /// An unreadable or malformed implicit config is not fatal: it is logged and the defaults
    /// are used instead.
    pub fn load() -> Self {
        match Self::load_from(Path::new(DEFAULT_CONFIG_FILE)) {
            Ok(config) => config,
            Err(Error::Config { path, message }) => {
                tracing::warn!("Ignoring {path}: {message}");
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring {DEFAULT_CONFIG_FILE}: {e}");
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path, using defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents).map_err(|message| Error::Config {
                path: path.display().to_string(),
                message,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Parse configuration from TOML text; absent keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the parser's message if the text is not valid for this schema.
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
