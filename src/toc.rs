//! Resolution of hand-written TOC lines to the sections they name.
//!
//! Zine authors write their table of contents freely, so matching is best-effort. Chapter tags
//! are the most reliable signal and are tried across every section first; only then do we fall
//! back to comparing text. An entry nothing matches stays in the TOC as plain text.

use crate::section::{ScannedDocument, Section, TocEntry};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A TOC line together with what it links to.
pub struct TocLink {
    /// Entry text as written.
    pub text: String,
    /// Source line of the entry.
    pub line_index: usize,
    /// Chapter identifier of the entry, if tagged.
    pub chapter: Option<String>,
    /// Resolved section, absent when nothing matched.
    pub target: Option<TocTarget>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Section a TOC entry resolved to, with its paragraph keywords.
pub struct TocTarget {
    /// Position of the section in the scanned document.
    pub section_index: usize,
    /// Header line of the section, which its anchor derives from.
    pub section_line: usize,
    /// Keyword sub-links in paragraph order.
    pub keywords: Vec<KeywordLink>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Jump target for one paragraph keyword.
pub struct KeywordLink {
    /// Keyword shown as the link label and highlighted on click.
    pub keyword: String,
    /// Position of the paragraph within its section, counting every paragraph.
    pub paragraph_position: usize,
}

/// Which rule matched an entry to a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchRule {
    /// Entry and section carry the same chapter tag.
    Chapter,
    /// Entry text equals, contains, or is contained in the section title.
    Title,
}

/// Resolves every TOC entry of `doc`, preserving entry order.
#[must_use]
pub fn resolve(doc: &ScannedDocument) -> Vec<TocLink> {
    let links: Vec<TocLink> = doc
        .toc_entries
        .iter()
        .map(|entry| resolve_entry(entry, &doc.sections))
        .collect();

    let resolved = links.iter().filter(|l| l.target.is_some()).count();
    tracing::debug!(
        entries = links.len(),
        resolved,
        "Resolved table of contents"
    );
    links
}

fn resolve_entry(entry: &TocEntry, sections: &[Section]) -> TocLink {
    let target = find_section(entry, sections).map(|(section_index, rule)| {
        let section = &sections[section_index];
        tracing::trace!(entry = %entry.text, section = %section.title, ?rule, "TOC match");
        TocTarget {
            section_index,
            section_line: section.line_index,
            keywords: keyword_links(section),
        }
    });

    TocLink {
        text: entry.text.clone(),
        line_index: entry.line_index,
        chapter: entry.chapter.clone(),
        target,
    }
}

/// Finds the section an entry refers to; the first section satisfying the strongest rule wins.
#[must_use]
pub fn find_section(entry: &TocEntry, sections: &[Section]) -> Option<(usize, MatchRule)> {
    if let Some(chapter) = &entry.chapter {
        if let Some(i) = sections
            .iter()
            .position(|s| s.chapter.as_ref() == Some(chapter))
        {
            return Some((i, MatchRule::Chapter));
        }
    }

    let wanted = entry.text.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    sections
        .iter()
        .position(|s| {
            // Differently tagged chapters never match on text ("CH1" is a substring of "CH10")
            if let (Some(a), Some(b)) = (&entry.chapter, &s.chapter) {
                if a != b {
                    return false;
                }
            }
            let title = s.title.trim().to_lowercase();
            !title.is_empty() && (title.contains(&wanted) || wanted.contains(&title))
        })
        .map(|i| (i, MatchRule::Title))
}

fn keyword_links(section: &Section) -> Vec<KeywordLink> {
    section
        .paragraphs
        .iter()
        .enumerate()
        .filter_map(|(position, p)| {
            p.keyword.as_ref().map(|keyword| KeywordLink {
                keyword: keyword.clone(),
                paragraph_position: position,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
