//! Format trait and implementations for different zine markups.
//!
//! This module defines the `Format` trait which abstracts over the line-level heuristics the
//! scanner relies on: what a header looks like, where the table of contents starts, and how
//! chapters are tagged.

pub mod zine;

/// Line-level markup heuristics used by the structural scanner and the TOC resolver.
pub trait Format {
    /// Returns the header title when `line` is a header line.
    fn header_title<'a>(&self, line: &'a str) -> Option<&'a str>;
    /// Whether `line` opens the table-of-contents block.
    fn is_toc_marker(&self, line: &str) -> bool;
    /// Returns the chapter identifier tagged somewhere in `text`.
    fn chapter_tag(&self, text: &str) -> Option<String>;
}
