//! zinemap: navigable pages and a terminal reader for plain-text zines.
//!
//! A zine is scanned for `__wrapped__` section headers and a hand-written table of contents.
//! TOC lines are matched to the sections they name, each paragraph gets a keyword, and the
//! result is rendered as anchored HTML together with a navigation model that front-ends use
//! to scroll and highlight.

pub mod app_state;
pub mod config;
pub mod error;
pub mod formats;
pub mod highlight;
pub mod input;
pub mod interaction;
pub mod keywords;
pub mod reader;
pub mod render;
pub mod scanner;
pub mod section;
pub mod telemetry;
pub mod toc;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;
