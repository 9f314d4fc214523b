//! Document model for a scanned zine.
//!
//! A zine is a flat sequence of lines. Wrapped header lines open sections, runs of non-blank
//! lines inside a section form paragraphs, and one block of lines after the table-of-contents
//! marker forms the hand-written TOC. Everything here is built in a single pass by the scanner
//! and never mutated afterwards.

#[derive(Clone, Debug, PartialEq, Eq)]
/// Document division introduced by a wrapped header line.
pub struct Section {
    /// Header text with the markers and surrounding whitespace removed.
    pub title: String,
    /// Zero-based index of the header line in the source document.
    pub line_index: usize,
    /// Chapter identifier found in the title, if any.
    pub chapter: Option<String>,
    /// Paragraphs in document order.
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Contiguous non-blank lines inside a section, joined into one text block.
pub struct Paragraph {
    /// Representative keyword, absent when the text is too short or has no candidate.
    pub keyword: Option<String>,
    /// Zero-based index of the paragraph's first line in the source document.
    pub line_start: usize,
    /// Source lines in order.
    pub lines: Vec<String>,
}

impl Paragraph {
    #[must_use]
    /// Paragraph text with its lines joined by single spaces, as used for keyword extraction.
    pub fn text(&self) -> String {
        self.lines.join(" ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One line of the hand-written table of contents.
pub struct TocEntry {
    /// Line content exactly as written, minus trailing whitespace.
    pub text: String,
    /// Zero-based index of the line in the source document.
    pub line_index: usize,
    /// Chapter identifier found in the line, if any.
    pub chapter: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Result of the structural scan: the immutable source plus everything derived from it.
pub struct ScannedDocument {
    /// Source lines, blank lines included.
    pub lines: Vec<String>,
    /// Paragraphs before the first header; they belong to no section and carry no keyword.
    pub preamble: Vec<Paragraph>,
    /// Sections ordered by strictly increasing `line_index`.
    pub sections: Vec<Section>,
    /// TOC entries in source order.
    pub toc_entries: Vec<TocEntry>,
    /// Line index of the TOC marker, when the document has one.
    pub toc_marker_line: Option<usize>,
}

impl ScannedDocument {
    #[must_use]
    /// Whether the source contained a table-of-contents marker.
    pub fn has_toc(&self) -> bool {
        self.toc_marker_line.is_some()
    }

    #[must_use]
    /// Looks up the section whose header sits on `line_index`.
    pub fn section_at_line(&self, line_index: usize) -> Option<&Section> {
        self.sections
            .binary_search_by_key(&line_index, |s| s.line_index)
            .ok()
            .map(|i| &self.sections[i])
    }
}
