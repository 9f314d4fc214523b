//! The single source of truth for a loaded zine.
//!
//! A page starts out [`Page::Loading`], fetches its text once, and ends up either
//! [`Page::Ready`] with an [`AppState`] or [`Page::Failed`] with a message for the reader.
//! The state is built in one go from the fetched text and only read afterwards, except for the
//! one active keyword highlight, which is replaced by each keyword click.

use crate::config::Config;
use crate::error::{Error, FetchError};
use crate::formats::zine::ZineFormat;
use crate::input::Source;
use crate::interaction::NavModel;
use crate::keywords::KeywordExtractor;
use crate::render::{self, Rendered};
use crate::scanner;
use crate::section::ScannedDocument;
use crate::toc::{self, TocLink};
use std::time::Duration;

/// Message shown when the source answered with something other than zine text.
pub const REJECTED_MESSAGE: &str = "Error loading zine content.";

#[derive(Clone, Debug, PartialEq, Eq)]
/// The keyword currently marked in the page.
pub struct ActiveHighlight {
    /// Anchor of the highlighted paragraph.
    pub target: String,
    /// Highlighted keyword.
    pub keyword: String,
}

/// Compiled heuristics that turn zine text into an [`AppState`].
pub struct Navigator {
    format: ZineFormat,
    keywords: KeywordExtractor,
    toc_heading: String,
    highlight_delay: Duration,
}

impl Navigator {
    /// Compiles the heuristics named in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the chapter tag pattern does not compile.
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            format: ZineFormat::new(config)?,
            keywords: KeywordExtractor::new(config),
            toc_heading: config.toc_heading.clone(),
            highlight_delay: Duration::from_millis(config.highlight_delay_ms),
        })
    }

    #[must_use]
    /// Scans, resolves and renders `text` in a single synchronous pass.
    pub fn build(&self, text: &str) -> AppState {
        let document = scanner::scan(text, &self.format, &self.keywords);
        let toc = toc::resolve(&document);
        let rendered = render::render(&document, &toc, &self.toc_heading);
        AppState {
            document,
            toc,
            rendered,
            highlight: None,
            highlight_delay: self.highlight_delay,
        }
    }
}

/// Everything derived from one successfully loaded zine, plus the active highlight.
pub struct AppState {
    document: ScannedDocument,
    toc: Vec<TocLink>,
    rendered: Rendered,
    highlight: Option<ActiveHighlight>,
    highlight_delay: Duration,
}

impl AppState {
    #[must_use]
    /// The scanned source.
    pub fn document(&self) -> &ScannedDocument {
        &self.document
    }

    #[must_use]
    /// Resolved table of contents in source order.
    pub fn toc(&self) -> &[TocLink] {
        &self.toc
    }

    #[must_use]
    /// Rendered fragment and navigation model.
    pub fn rendered(&self) -> &Rendered {
        &self.rendered
    }

    #[must_use]
    /// Navigation model of the rendered fragment.
    pub fn nav(&self) -> &NavModel {
        &self.rendered.nav
    }

    #[must_use]
    /// Delay between scrolling to a keyword's paragraph and highlighting it.
    pub fn highlight_delay(&self) -> Duration {
        self.highlight_delay
    }

    #[must_use]
    /// The highlight currently applied, if any.
    pub fn highlight(&self) -> Option<&ActiveHighlight> {
        self.highlight.as_ref()
    }

    /// Makes `highlight` the active one, returning the highlight it replaces.
    pub fn set_highlight(&mut self, highlight: ActiveHighlight) -> Option<ActiveHighlight> {
        self.highlight.replace(highlight)
    }

    #[must_use]
    /// Source text of an anchored element, lines joined as rendered.
    pub fn target_text(&self, anchor: &str) -> Option<String> {
        let span = self.nav().targets.get(anchor)?;
        let lines = self
            .document
            .lines
            .get(span.line_start..span.line_start + span.line_count)?;
        Some(lines.join("\n"))
    }
}

/// Load lifecycle of the page.
pub enum Page {
    /// The fetch has not completed yet.
    Loading,
    /// The zine was fetched and processed.
    Ready(Box<AppState>),
    /// The fetch failed; nothing was rendered.
    Failed {
        /// Message shown in place of the content.
        message: String,
    },
}

impl Page {
    /// Fetches the zine from `source` and builds the page state.
    ///
    /// Fetch failures are logged and turned into [`Page::Failed`]; no retry is attempted.
    pub fn load<S: Source + ?Sized>(source: &S, navigator: &Navigator) -> Self {
        match source.fetch() {
            Ok(text) => {
                tracing::info!(source = source.location(), bytes = text.len(), "Loaded zine");
                Self::Ready(Box::new(navigator.build(&text)))
            }
            Err(e) => {
                tracing::error!("Error loading content: {e}");
                Self::Failed {
                    message: failure_message(&e),
                }
            }
        }
    }

    #[must_use]
    /// Whether the loading indicator is shown.
    pub fn loading_visible(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    /// The error message occupying the content area, if the load failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    #[must_use]
    /// The loaded state, if the load succeeded.
    pub fn state(&self) -> Option<&AppState> {
        match self {
            Self::Ready(state) => Some(&**state),
            _ => None,
        }
    }
}

fn failure_message(error: &FetchError) -> String {
    match error {
        FetchError::Rejected { .. } => REJECTED_MESSAGE.to_string(),
        FetchError::Unavailable { path, .. } => {
            format!("Error loading content. Please make sure {path} is in the same directory.")
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
