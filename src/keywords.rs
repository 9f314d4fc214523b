//! Keyword extraction for paragraph sub-links in the table of contents.
//!
//! A keyword is a single word that stands in for a paragraph. Proper nouns make the best
//! labels, so the first capitalised word that is not a stop word wins, however short; failing
//! that, the first significant word of the lower-cased text is title-cased. "Significant" means
//! long enough and not a stop word. The extractor is pure: the same text always yields the same keyword.

use crate::config::Config;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Capitalised run: one upper-case letter followed by lower-case letters, from a word start.
///
/// No trailing boundary, so "JavaScript" yields "Java".
static CAPITALISED_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+").unwrap());

/// Picks a representative keyword for a paragraph.
pub struct KeywordExtractor {
    min_text_length: usize,
    min_keyword_length: usize,
    stop_words: HashSet<String>,
}

impl KeywordExtractor {
    #[must_use]
    /// Builds an extractor from the configured thresholds and stop-word list.
    pub fn new(config: &Config) -> Self {
        Self {
            min_text_length: config.min_paragraph_length,
            min_keyword_length: config.min_keyword_length,
            stop_words: config.stop_words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    #[must_use]
    /// Returns the keyword for `text`, or `None` when it is too short or has no candidate.
    pub fn extract(&self, text: &str) -> Option<String> {
        if text.chars().count() < self.min_text_length {
            return None;
        }

        if let Some(word) = CAPITALISED_WORD
            .find_iter(text)
            .map(|m| m.as_str())
            .find(|w| !self.stop_words.contains(&w.to_lowercase()))
        {
            return Some(word.to_string());
        }

        tokens(text)
            .into_iter()
            .find(|t| self.is_significant(t))
            .map(|t| capitalise(&t))
    }

    fn is_significant(&self, token: &str) -> bool {
        token.chars().count() >= self.min_keyword_length && !self.stop_words.contains(token)
    }
}

/// Lower-cases `text`, blanks out punctuation and splits on whitespace.
fn tokens(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "tests/keywords.rs"]
mod tests;
