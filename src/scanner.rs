//! Structural scanner turning zine text into sections, paragraphs and TOC entries.
//!
//! One pass over the lines does all the work. Header lines open sections, blank lines end
//! paragraphs, and the first table-of-contents marker opens a block of entries that runs until
//! a blank line, the next header, or the end of the document.

use crate::formats::Format;
use crate::keywords::KeywordExtractor;
use crate::section::{Paragraph, ScannedDocument, Section, TocEntry};

#[derive(Clone, Copy, PartialEq, Eq)]
enum TocState {
    Searching,
    Collecting,
    Done,
}

/// Accumulates consecutive non-blank lines until something ends the paragraph.
struct PendingParagraph {
    line_start: usize,
    lines: Vec<String>,
}

impl PendingParagraph {
    fn new() -> Self {
        Self {
            line_start: 0,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, index: usize, line: &str) {
        if self.lines.is_empty() {
            self.line_start = index;
        }
        self.lines.push(line.to_string());
    }

    fn take(&mut self) -> Option<(usize, Vec<String>)> {
        if self.lines.is_empty() {
            None
        } else {
            Some((self.line_start, std::mem::take(&mut self.lines)))
        }
    }
}

/// Scans `text` into its structural parts.
///
/// Keywords are assigned to section paragraphs as they are closed; preamble paragraphs
/// (before the first header) never get one.
pub fn scan<F: Format>(text: &str, format: &F, keywords: &KeywordExtractor) -> ScannedDocument {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();

    let mut doc = ScannedDocument::default();
    let mut pending = PendingParagraph::new();
    let mut toc = TocState::Searching;

    for (index, line) in lines.iter().enumerate() {
        let header = format.header_title(line);
        let blank = line.trim().is_empty();

        match toc {
            TocState::Searching if format.is_toc_marker(line) => {
                doc.toc_marker_line = Some(index);
                toc = TocState::Collecting;
            }
            TocState::Collecting if blank || header.is_some() => toc = TocState::Done,
            TocState::Collecting => doc.toc_entries.push(TocEntry {
                text: line.trim_end().to_string(),
                line_index: index,
                chapter: format.chapter_tag(line),
            }),
            _ => {}
        }

        if let Some(title) = header {
            flush(&mut doc, &mut pending, keywords);
            doc.sections.push(Section {
                title: title.to_string(),
                line_index: index,
                chapter: format.chapter_tag(title),
                paragraphs: Vec::new(),
            });
        } else if blank {
            flush(&mut doc, &mut pending, keywords);
        } else {
            pending.push(index, line);
        }
    }
    flush(&mut doc, &mut pending, keywords);
    doc.lines = lines;

    tracing::debug!(
        lines = doc.lines.len(),
        sections = doc.sections.len(),
        toc_entries = doc.toc_entries.len(),
        "Scanned document"
    );
    doc
}

fn flush(doc: &mut ScannedDocument, pending: &mut PendingParagraph, keywords: &KeywordExtractor) {
    let Some((line_start, lines)) = pending.take() else {
        return;
    };
    if let Some(section) = doc.sections.last_mut() {
        let mut paragraph = Paragraph {
            keyword: None,
            line_start,
            lines,
        };
        paragraph.keyword = keywords.extract(&paragraph.text());
        section.paragraphs.push(paragraph);
    } else {
        doc.preamble.push(Paragraph {
            keyword: None,
            line_start,
            lines,
        });
    }
}

#[cfg(test)]
#[path = "tests/scanner.rs"]
mod tests;
