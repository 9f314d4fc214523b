//! The renderer turns a scanned zine into anchored HTML and its navigation model.
//!
//! Every identifier is a function of source line indices only, so links stay valid for as
//! long as the text does:
//!
//! ```text
//! section-<header line>
//! para-<header line>-<paragraph position>
//! toc-<entry line>            (TOC entry link)
//! toc-<entry line>-kw-<pos>   (keyword sub-link)
//! ```
//!
//! [`render_page`] wraps the fragment in a standalone page whose script wires the navigation
//! model to scroll and highlight behaviour.

use crate::app_state::{AppState, Page};
use crate::config::Config;
use crate::error::Error;
use crate::highlight::{highlight_html, HIGHLIGHT_CLASS};
use crate::interaction::{LineSpan, LinkKind, NavLink, NavModel};
use crate::section::{Paragraph, ScannedDocument};
use crate::toc::TocLink;
use serde::Serialize;
use std::collections::BTreeMap;

/// Anchor of the enhanced table of contents.
pub const TOC_ANCHOR: &str = "toc";

#[must_use]
/// Anchor of the section whose header is on `line`.
pub fn section_anchor(line: usize) -> String {
    format!("section-{line}")
}

#[must_use]
/// Anchor of the paragraph at `position` in the section headed on `section_line`.
pub fn paragraph_anchor(section_line: usize, position: usize) -> String {
    format!("para-{section_line}-{position}")
}

#[must_use]
/// Identifier of the link for the TOC entry on `line`.
pub fn toc_entry_anchor(line: usize) -> String {
    format!("toc-{line}")
}

#[must_use]
/// Identifier of the keyword sub-link for paragraph `position` under the entry on `entry_line`.
pub fn keyword_link_anchor(entry_line: usize, position: usize) -> String {
    format!("toc-{entry_line}-kw-{position}")
}

#[must_use]
/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Rendered HTML fragment and the navigation model describing its links.
pub struct Rendered {
    /// Enhanced TOC followed by the anchored body.
    pub html: String,
    /// Links and targets of the fragment.
    pub nav: NavModel,
}

/// What starts on a given body line.
enum Block<'a> {
    Header,
    Paragraph {
        paragraph: &'a Paragraph,
        anchor: Option<String>,
    },
}

/// Renders the enhanced TOC and the anchored body.
///
/// The TOC block is emitted only when the document has a TOC marker.
#[must_use]
pub fn render(doc: &ScannedDocument, toc: &[TocLink], toc_heading: &str) -> Rendered {
    let mut nav = NavModel::default();
    let mut parts = Vec::new();

    if doc.has_toc() {
        parts.push(render_toc(toc, toc_heading, &mut nav));
        nav.toc_anchor = Some(TOC_ANCHOR.to_string());
    }

    let blocks = collect_blocks(doc, &mut nav);
    let mut index = 0;
    while index < doc.lines.len() {
        let line = &doc.lines[index];
        match blocks.get(&index) {
            Some(Block::Header) => {
                parts.push(format!(
                    "<span id=\"{}\" class=\"section-header\">{}</span>",
                    section_anchor(index),
                    escape_html(line)
                ));
                index += 1;
            }
            Some(Block::Paragraph { paragraph, anchor }) => {
                let text = escape_html(&paragraph.lines.join("\n"));
                parts.push(match anchor {
                    Some(anchor) => format!("<p id=\"{anchor}\">{text}</p>"),
                    None => format!("<p>{text}</p>"),
                });
                index += paragraph.lines.len();
            }
            None => {
                // Only blank lines fall outside every block
                parts.push(String::new());
                index += 1;
            }
        }
    }

    tracing::debug!(links = nav.links.len(), targets = nav.targets.len(), "Rendered zine");
    Rendered {
        html: parts.join("\n"),
        nav,
    }
}

fn collect_blocks<'a>(doc: &'a ScannedDocument, nav: &mut NavModel) -> BTreeMap<usize, Block<'a>> {
    let mut blocks = BTreeMap::new();

    for paragraph in &doc.preamble {
        blocks.insert(
            paragraph.line_start,
            Block::Paragraph {
                paragraph,
                anchor: None,
            },
        );
    }

    for section in &doc.sections {
        blocks.insert(section.line_index, Block::Header);
        nav.targets.insert(
            section_anchor(section.line_index),
            LineSpan {
                line_start: section.line_index,
                line_count: 1,
            },
        );
        for (position, paragraph) in section.paragraphs.iter().enumerate() {
            let anchor = paragraph_anchor(section.line_index, position);
            nav.targets.insert(
                anchor.clone(),
                LineSpan {
                    line_start: paragraph.line_start,
                    line_count: paragraph.lines.len(),
                },
            );
            blocks.insert(
                paragraph.line_start,
                Block::Paragraph {
                    paragraph,
                    anchor: Some(anchor),
                },
            );
        }
    }

    blocks
}

fn render_toc(toc: &[TocLink], heading: &str, nav: &mut NavModel) -> String {
    let mut html = vec![
        format!("<div class=\"enhanced-toc\" id=\"{TOC_ANCHOR}\">"),
        format!("<h3>{}</h3>", escape_html(heading)),
    ];

    for entry in toc {
        let text = escape_html(&entry.text);
        let Some(target) = &entry.target else {
            html.push(format!("<div class=\"toc-section\">{text}</div>"));
            continue;
        };

        let id = toc_entry_anchor(entry.line_index);
        let section = section_anchor(target.section_line);
        html.push("<div class=\"toc-section\">".to_string());
        html.push(format!(
            "<a href=\"#{section}\" class=\"toc-main-link\" id=\"{id}\">{text}</a>"
        ));
        nav.links.push(NavLink {
            id,
            target: section,
            kind: LinkKind::Section,
            keyword: None,
        });

        if !target.keywords.is_empty() {
            html.push("<div class=\"toc-keywords\">".to_string());
            for link in &target.keywords {
                let id = keyword_link_anchor(entry.line_index, link.paragraph_position);
                let para = paragraph_anchor(target.section_line, link.paragraph_position);
                let keyword = escape_html(&link.keyword);
                html.push(format!(
                    "<a href=\"#{para}\" class=\"toc-keyword\" id=\"{id}\" data-keyword=\"{keyword}\">{keyword}</a>"
                ));
                nav.links.push(NavLink {
                    id,
                    target: para,
                    kind: LinkKind::Keyword,
                    keyword: Some(link.keyword.clone()),
                });
            }
            html.push("</div>".to_string());
        }
        html.push("</div>".to_string());
    }

    html.push("</div>".to_string());
    html.join("\n")
}

#[derive(Serialize)]
/// Data the page script needs, embedded as JSON.
struct PagePayload<'a> {
    links: &'a [NavLink],
    toc_anchor: Option<&'a str>,
    /// Highlighted inner HTML per keyword link id.
    highlights: BTreeMap<&'a str, String>,
    highlight_delay_ms: u64,
    back_to_top_threshold: u32,
}

fn page_payload<'a>(state: &'a AppState, config: &Config) -> PagePayload<'a> {
    let nav = state.nav();
    let highlights = nav
        .links
        .iter()
        .filter_map(|link| {
            let keyword = link.keyword.as_deref()?;
            let text = state.target_text(&link.target)?;
            Some((link.id.as_str(), highlight_html(&text, keyword)))
        })
        .collect();

    PagePayload {
        links: &nav.links,
        toc_anchor: nav.toc_anchor.as_deref(),
        highlights,
        highlight_delay_ms: config.highlight_delay_ms,
        back_to_top_threshold: config.back_to_top_threshold,
    }
}

/// Renders a complete standalone page for the current load state.
///
/// A failed load yields a page whose content area holds the error message and whose loading
/// indicator is hidden.
///
/// # Errors
///
/// Returns an error if the navigation payload cannot be serialised.
pub fn render_page(page: &Page, config: &Config) -> Result<String, Error> {
    let loading_display = if page.loading_visible() { "block" } else { "none" };
    let (content, payload_json) = match (page.state(), page.error_message()) {
        (Some(state), _) => (
            state.rendered().html.clone(),
            serde_json::to_string(&page_payload(state, config))?,
        ),
        (None, Some(message)) => (escape_html(message), "null".to_string()),
        (None, None) => (String::new(), "null".to_string()),
    };
    let safe_json = payload_json.replace("</", "<\\/");

    Ok(fill_template(
        PAGE_TEMPLATE,
        &[
            ("__TITLE__", &escape_html(&config.page_title)),
            ("__TOC_HEADING__", &escape_html(&config.toc_heading)),
            ("__HIGHLIGHT_CLASS__", HIGHLIGHT_CLASS),
            ("__LOADING_DISPLAY__", loading_display),
            ("__NAV_PAYLOAD__", &safe_json),
            ("__CONTENT__", &content),
        ],
    ))
}

/// Substitutes placeholders found in `template` only; inserted values are never rescanned.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some((pos, key, value)) = values
        .iter()
        .filter_map(|(key, value)| rest.find(key).map(|pos| (pos, *key, *value)))
        .min_by_key(|(pos, _, _)| *pos)
    {
        out.push_str(&rest[..pos]);
        out.push_str(value);
        rest = &rest[pos + key.len()..];
    }
    out.push_str(rest);
    out
}

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>__TITLE__</title>
  <style>
    body { margin: 0 auto; max-width: 46rem; padding: 2rem 1rem; font-family: Georgia, serif; background: #f2efe8; color: #252016; }
    #text-content { white-space: pre-wrap; line-height: 1.5; }
    .enhanced-toc { white-space: normal; border: 1px solid #d7cebc; background: #fdfbf7; padding: 0.5rem 1rem 1rem; margin-bottom: 2rem; }
    .toc-section { margin: 0.4rem 0; }
    .toc-main-link { font-weight: bold; color: #226a52; }
    .toc-keywords { margin: 0.2rem 0 0 1.2rem; display: flex; flex-wrap: wrap; gap: 0.6rem; }
    .toc-keyword { font-size: 0.9em; color: #675f50; }
    .section-header { display: inline-block; font-weight: bold; margin-top: 1rem; }
    .__HIGHLIGHT_CLASS__ { background: #ffe27a; }
    #back-to-top { position: fixed; right: 1.5rem; bottom: 1.5rem; padding: 0.5rem 0.8rem; border: 1px solid #c4b79f; background: #fdfbf7; cursor: pointer; }
  </style>
</head>
<body>
  <div id="loading" style="display: __LOADING_DISPLAY__">Loading...</div>
  <div id="text-content">__CONTENT__</div>
  <button id="back-to-top" style="display: none">&uarr; __TOC_HEADING__</button>
  <script type="application/json" id="zine-nav">__NAV_PAYLOAD__</script>
  <script>
  (function () {
    const nav = JSON.parse(document.getElementById('zine-nav').textContent);
    const button = document.getElementById('back-to-top');
    if (!nav) { return; }
    let active = null;
    let pending = null;

    function clearHighlight() {
      if (pending !== null) { clearTimeout(pending); pending = null; }
      if (active) { active.el.innerHTML = active.html; active = null; }
    }

    nav.links.forEach(function (link) {
      const el = document.getElementById(link.id);
      if (!el) { return; }
      el.addEventListener('click', function (e) {
        e.preventDefault();
        const target = document.getElementById(link.target);
        if (!target) { return; }
        if (link.kind !== 'keyword') {
          target.scrollIntoView({ behavior: 'smooth', block: 'start' });
          return;
        }
        clearHighlight();
        target.scrollIntoView({ behavior: 'smooth', block: 'center' });
        pending = setTimeout(function () {
          pending = null;
          active = { el: target, html: target.innerHTML };
          target.innerHTML = nav.highlights[link.id];
        }, nav.highlight_delay_ms);
      });
    });

    window.addEventListener('scroll', function () {
      button.style.display = window.pageYOffset > nav.back_to_top_threshold ? 'block' : 'none';
    });
    button.addEventListener('click', function () {
      const toc = nav.toc_anchor ? document.getElementById(nav.toc_anchor) : null;
      if (toc) {
        toc.scrollIntoView({ behavior: 'smooth', block: 'start' });
      } else {
        window.scrollTo({ top: 0, behavior: 'smooth' });
      }
    });
  })();
  </script>
</body>
</html>
"#;

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
