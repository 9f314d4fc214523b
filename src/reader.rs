//! Terminal reader state: a TOC pane driving a scrolling body pane.
//!
//! The reader is a second front-end for the navigation model. Selecting a TOC row dispatches
//! the same click the generated page would, and the resulting effects are applied to a
//! line-based viewport instead of a browser window.

use crate::app_state::{ActiveHighlight, AppState};
use crate::interaction::{self, Effect, ScrollAlign};
use crate::render::{keyword_link_anchor, toc_entry_anchor, TOC_ANCHOR};
use std::time::Instant;

#[derive(Clone, Debug, PartialEq, Eq)]
/// One line of the TOC pane.
pub struct TocRow {
    /// Text shown in the pane.
    pub label: String,
    /// Navigation link activated by Enter, absent for unresolved entries.
    pub link: Option<String>,
    /// Nesting depth: 0 for entries, 1 for keywords.
    pub depth: usize,
}

/// Viewport and selection state of the terminal reader.
pub struct Reader {
    /// Loaded zine and active highlight.
    pub state: AppState,
    /// Flattened table of contents.
    pub rows: Vec<TocRow>,
    /// Selected row in the TOC pane.
    pub selected: usize,
    /// First body line shown.
    pub scroll: usize,
    /// Body lines that fit on screen, updated on every draw.
    pub viewport_height: usize,
    /// Scroll offset past which the back-to-top hint shows.
    pub back_to_top_rows: usize,
    /// Highlight currently painted in the body.
    pub shown_highlight: Option<ActiveHighlight>,
    pending_highlight: Option<(Instant, ActiveHighlight)>,
}

impl Reader {
    #[must_use]
    /// Builds the reader over a loaded zine.
    pub fn new(state: AppState, back_to_top_rows: usize) -> Self {
        let rows = toc_rows(&state);
        Self {
            state,
            rows,
            selected: 0,
            scroll: 0,
            viewport_height: 1,
            back_to_top_rows,
            shown_highlight: None,
            pending_highlight: None,
        }
    }

    /// Moves the TOC selection down one row.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    /// Moves the TOC selection up one row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Follows the selected row's link, if it has one.
    pub fn activate(&mut self, now: Instant) {
        let Some(link) = self.rows.get(self.selected).and_then(|r| r.link.clone()) else {
            return;
        };
        let effects = interaction::dispatch(&mut self.state, &link);
        self.apply(effects, now);
    }

    /// Scrolls the body by `delta` lines, staying within the document.
    pub fn scroll_by(&mut self, delta: isize) {
        let scroll = self.scroll.saturating_add_signed(delta);
        self.scroll = scroll.min(self.max_scroll());
    }

    /// Jumps back to the table of contents, or to the top when there is none.
    pub fn back_to_top(&mut self, now: Instant) {
        let effect = interaction::back_to_top(self.state.nav());
        self.apply(vec![effect], now);
    }

    #[must_use]
    /// Whether the back-to-top hint shows.
    pub fn back_to_top_visible(&self) -> bool {
        interaction::back_to_top_visible(self.scroll, self.back_to_top_rows)
    }

    /// Carries out effects against the viewport.
    pub fn apply(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::ScrollIntoView { target, align } => self.scroll_to(&target, align),
                Effect::ScrollToTop => self.scroll = 0,
                Effect::ClearHighlight { .. } => {
                    self.shown_highlight = None;
                    self.pending_highlight = None;
                }
                Effect::Highlight {
                    target,
                    keyword,
                    after,
                } => {
                    self.pending_highlight =
                        Some((now + after, ActiveHighlight { target, keyword }));
                }
            }
        }
    }

    /// Paints a pending highlight once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self
            .pending_highlight
            .as_ref()
            .is_some_and(|(due, _)| now >= *due)
        {
            self.shown_highlight = self.pending_highlight.take().map(|(_, h)| h);
        }
    }

    fn scroll_to(&mut self, target: &str, align: ScrollAlign) {
        if target == TOC_ANCHOR {
            self.selected = 0;
            self.scroll = 0;
            return;
        }
        let Some(span) = self.state.nav().targets.get(target).copied() else {
            return;
        };
        let scroll = match align {
            ScrollAlign::Start => span.line_start,
            ScrollAlign::Center => {
                (span.line_start + span.line_count / 2).saturating_sub(self.viewport_height / 2)
            }
        };
        self.scroll = scroll.min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        self.state.document().lines.len().saturating_sub(1)
    }
}

fn toc_rows(state: &AppState) -> Vec<TocRow> {
    let mut rows = Vec::new();
    for entry in state.toc() {
        rows.push(TocRow {
            label: entry.text.trim().to_string(),
            link: entry
                .target
                .as_ref()
                .map(|_| toc_entry_anchor(entry.line_index)),
            depth: 0,
        });
        if let Some(target) = &entry.target {
            rows.extend(target.keywords.iter().map(|k| TocRow {
                label: k.keyword.clone(),
                link: Some(keyword_link_anchor(entry.line_index, k.paragraph_position)),
                depth: 1,
            }));
        }
    }
    rows
}

#[cfg(test)]
#[path = "tests/reader.rs"]
mod tests;
