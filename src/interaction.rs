//! What is clickable, and what a click does.
//!
//! Rendering produces a [`NavModel`]: every link with its own identifier, the identifier it
//! targets, and its kind. [`dispatch`] turns a click on one of those links into a list of
//! [`Effect`]s without touching any page; a front-end (the generated page script or the
//! terminal reader) carries the effects out. The only state a click changes is the single
//! active highlight held by [`AppState`].

use crate::app_state::{ActiveHighlight, AppState};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Distinguishes section jumps from keyword jumps.
pub enum LinkKind {
    /// Link from a TOC entry to a section header.
    Section,
    /// Link from a keyword to the paragraph it was extracted from.
    Keyword,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Where the target ends up in the viewport after scrolling.
pub enum ScrollAlign {
    /// Target at the top of the viewport.
    Start,
    /// Target in the middle of the viewport.
    Center,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One clickable element of the rendered page.
pub struct NavLink {
    /// Identifier of the link element itself.
    pub id: String,
    /// Identifier of the element the link scrolls to.
    pub target: String,
    /// Kind of jump.
    pub kind: LinkKind,
    /// Keyword to highlight, for keyword links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// Source lines covered by an anchored element.
pub struct LineSpan {
    /// First line of the element.
    pub line_start: usize,
    /// Number of lines the element covers.
    pub line_count: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// Navigation model emitted alongside the rendered page.
pub struct NavModel {
    /// Links in page order: each TOC entry followed by its keyword links.
    pub links: Vec<NavLink>,
    /// Every anchored element and the source lines it covers.
    pub targets: BTreeMap<String, LineSpan>,
    /// Anchor of the table of contents, when the page has one.
    pub toc_anchor: Option<String>,
}

impl NavModel {
    #[must_use]
    /// Looks up a link by its own identifier.
    pub fn link(&self, id: &str) -> Option<&NavLink> {
        self.links.iter().find(|l| l.id == id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A page-level action requested by a click.
pub enum Effect {
    /// Scroll the element with this identifier into view.
    ScrollIntoView {
        /// Element identifier.
        target: String,
        /// Viewport alignment.
        align: ScrollAlign,
    },
    /// Restore the element left highlighted by an earlier click.
    ClearHighlight {
        /// Element identifier.
        target: String,
    },
    /// Wrap each occurrence of the keyword inside the element, once the delay has passed.
    Highlight {
        /// Element identifier.
        target: String,
        /// Keyword to mark.
        keyword: String,
        /// Time to wait so the scroll animation can start first.
        after: Duration,
    },
    /// Scroll to the very top of the page.
    ScrollToTop,
}

/// Resolves a click on link `id` into effects, updating the active highlight.
///
/// Unknown identifiers produce no effects.
pub fn dispatch(state: &mut AppState, id: &str) -> Vec<Effect> {
    let Some(link) = state.nav().link(id).cloned() else {
        tracing::debug!(id, "Click on unknown link ignored");
        return Vec::new();
    };

    match (link.kind, link.keyword) {
        (LinkKind::Keyword, Some(keyword)) => {
            let previous = state.set_highlight(ActiveHighlight {
                target: link.target.clone(),
                keyword: keyword.clone(),
            });
            let mut effects = Vec::with_capacity(3);
            if let Some(previous) = previous {
                effects.push(Effect::ClearHighlight {
                    target: previous.target,
                });
            }
            effects.push(Effect::ScrollIntoView {
                target: link.target.clone(),
                align: ScrollAlign::Center,
            });
            effects.push(Effect::Highlight {
                target: link.target,
                keyword,
                after: state.highlight_delay(),
            });
            effects
        }
        _ => vec![Effect::ScrollIntoView {
            target: link.target,
            align: ScrollAlign::Start,
        }],
    }
}

#[must_use]
/// Whether the back-to-top control shows at this scroll offset.
pub fn back_to_top_visible(offset: usize, threshold: usize) -> bool {
    offset > threshold
}

#[must_use]
/// The effect of the back-to-top control: the table of contents if there is one, else the page top.
pub fn back_to_top(nav: &NavModel) -> Effect {
    match &nav.toc_anchor {
        Some(anchor) => Effect::ScrollIntoView {
            target: anchor.clone(),
            align: ScrollAlign::Start,
        },
        None => Effect::ScrollToTop,
    }
}

#[cfg(test)]
#[path = "tests/interaction.rs"]
mod tests;
