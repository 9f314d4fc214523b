use super::{find_section, resolve, MatchRule};
use crate::section::{Section, TocEntry};
use crate::testing::{scan, SAMPLE_ZINE};
use rstest::rstest;

fn section(title: &str, line_index: usize, chapter: Option<&str>) -> Section {
    Section {
        title: title.to_string(),
        line_index,
        chapter: chapter.map(str::to_string),
        paragraphs: Vec::new(),
    }
}

fn entry(text: &str, chapter: Option<&str>) -> TocEntry {
    TocEntry {
        text: text.to_string(),
        line_index: 0,
        chapter: chapter.map(str::to_string),
    }
}

#[test]
fn test_sample_resolution() {
    let doc = scan(SAMPLE_ZINE);
    let toc = resolve(&doc);

    assert_eq!(toc.len(), 3, "One link per entry, in source order");
    let targets: Vec<_> = toc
        .iter()
        .map(|l| l.target.as_ref().map(|t| t.section_line))
        .collect();
    assert_eq!(targets, [Some(7), Some(14), Some(18)]);

    let keywords: Vec<_> = toc[0]
        .target
        .as_ref()
        .unwrap()
        .keywords
        .iter()
        .map(|k| (k.keyword.as_str(), k.paragraph_position))
        .collect();
    assert_eq!(keywords, [("Quiet", 0), ("Long", 1)]);
    assert!(
        toc[2].target.as_ref().unwrap().keywords.is_empty(),
        "Paragraphs without keywords get no sub-link"
    );
}

#[test]
fn test_chapter_tag_links_despite_different_text() {
    let sections = [
        section("Prologue", 1, None),
        section("CH3 - Where the rivers bend", 5, Some("3")),
    ];
    let found = find_section(&entry("CH3 Something else entirely", Some("3")), &sections);
    assert_eq!(found, Some((1, MatchRule::Chapter)));
}

#[test]
fn test_chapter_tag_beats_earlier_title_match() {
    let sections = [
        section("Harbour", 1, None),
        section("CH2 Fog", 5, Some("2")),
    ];
    let found = find_section(&entry("CH2 Harbour", Some("2")), &sections);
    assert_eq!(found, Some((1, MatchRule::Chapter)));
}

#[rstest]
#[case::exact("Epilogue", "Epilogue")]
#[case::entry_within_title("Warehouse", "CH2 - The Warehouse")]
#[case::title_within_entry("  Epilogue ........ 42", "Epilogue")]
#[case::case_insensitive("THE WAREHOUSE", "The Warehouse")]
fn test_title_match(#[case] entry_text: &str, #[case] title: &str) {
    let sections = [section(title, 3, None)];
    assert_eq!(
        find_section(&entry(entry_text, None), &sections),
        Some((0, MatchRule::Title))
    );
}

#[test]
fn test_different_chapters_never_match_on_text() {
    let sections = [section("CH10 Later", 3, Some("10"))];
    assert_eq!(find_section(&entry("CH1", Some("1")), &sections), None);
}

#[test]
fn test_unmatched_entry_is_plain_text() {
    let doc = scan("Table of Contents\nCH7 Missing\nNowhere to be found\n\n__CH1 Only__\nbody");
    let toc = resolve(&doc);

    assert_eq!(toc.len(), 2);
    assert!(toc.iter().all(|l| l.target.is_none()));
}

#[test]
fn test_blank_entry_text_never_matches() {
    let sections = [section("Anything", 0, None)];
    assert_eq!(find_section(&entry("   ", None), &sections), None);
}
