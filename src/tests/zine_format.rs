use super::ZineFormat;
use crate::config::Config;
use crate::error::Error;
use crate::formats::Format;
use rstest::rstest;

fn format() -> ZineFormat {
    ZineFormat::new(&Config::default()).unwrap()
}

#[rstest]
#[case("__Chapter One__", Some("Chapter One"))]
#[case("  __ Spaced Out __  ", Some("Spaced Out"))]
#[case("__CH3: Drift__", Some("CH3: Drift"))]
#[case("__unterminated", None)]
#[case("text __inline__ text", None)]
#[case("____", None)]
#[case("________", None)]
#[case("", None)]
fn test_header_title(#[case] line: &str, #[case] expected: Option<&str>) {
    assert_eq!(format().header_title(line), expected);
}

#[rstest]
#[case("CH3 The Deep", Some("3"))]
#[case("Part two (CH12)", Some("12"))]
#[case("chapter 3", None)]
#[case("CHAPTER", None)]
fn test_chapter_tag(#[case] text: &str, #[case] expected: Option<&str>) {
    assert_eq!(format().chapter_tag(text).as_deref(), expected);
}

#[test]
fn test_toc_marker_is_a_substring_match() {
    assert!(format().is_toc_marker("~~ Table of Contents ~~"));
    assert!(!format().is_toc_marker("table of contents"));
}

#[test]
fn test_pattern_without_group_uses_whole_match() {
    let config = Config {
        chapter_tag_pattern: r"Part [IVX]+".to_string(),
        ..Config::default()
    };
    let format = ZineFormat::new(&config).unwrap();
    assert_eq!(format.chapter_tag("Part IV: Rust").as_deref(), Some("Part IV"));
}

#[test]
fn test_custom_header_marker() {
    let config = Config {
        header_marker: "==".to_string(),
        ..Config::default()
    };
    let format = ZineFormat::new(&config).unwrap();
    assert_eq!(format.header_title("==Title=="), Some("Title"));
    assert_eq!(format.header_title("__Title__"), None);
}

#[test]
fn test_invalid_pattern_is_an_error() {
    let config = Config {
        chapter_tag_pattern: "CH(".to_string(),
        ..Config::default()
    };
    assert!(matches!(ZineFormat::new(&config), Err(Error::Pattern(_))));
}
