use super::{ActiveHighlight, Navigator, Page, REJECTED_MESSAGE};
use crate::config::Config;
use crate::error::{Error, FetchError};
use crate::input::Source;
use crate::testing::SAMPLE_ZINE;
use std::io;

/// In-memory stand-in for the fetch, answering with a fixed outcome.
enum StubSource {
    Text(&'static str),
    Unreachable,
    BadStatus,
}

impl Source for StubSource {
    fn location(&self) -> &str {
        "tsm.txt"
    }

    fn fetch(&self) -> Result<String, FetchError> {
        match self {
            Self::Text(text) => Ok((*text).to_string()),
            Self::Unreachable => Err(FetchError::Unavailable {
                path: "tsm.txt".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "gone"),
            }),
            Self::BadStatus => Err(FetchError::Rejected {
                path: "tsm.txt".to_string(),
                reason: "404".to_string(),
            }),
        }
    }
}

fn navigator() -> Navigator {
    Navigator::new(&Config::default()).unwrap()
}

#[test]
fn test_successful_load_builds_state() {
    let page = Page::load(&StubSource::Text(SAMPLE_ZINE), &navigator());

    assert!(!page.loading_visible());
    assert_eq!(page.error_message(), None);
    let state = page.state().expect("Page should be ready");
    assert_eq!(state.document().sections.len(), 3);
    assert_eq!(state.toc().len(), 3);
    assert_eq!(state.highlight(), None, "A fresh page has no highlight");
}

#[test]
fn test_unreachable_source_shows_error() {
    let page = Page::load(&StubSource::Unreachable, &navigator());

    assert!(!page.loading_visible(), "Loading indicator must be hidden");
    assert_eq!(
        page.error_message(),
        Some("Error loading content. Please make sure tsm.txt is in the same directory.")
    );
    assert!(page.state().is_none(), "No partial content on failure");
}

#[test]
fn test_rejected_response_shows_error() {
    let page = Page::load(&StubSource::BadStatus, &navigator());

    assert!(!page.loading_visible());
    assert_eq!(page.error_message(), Some(REJECTED_MESSAGE));
}

#[test]
fn test_loading_page_shows_indicator() {
    assert!(Page::Loading.loading_visible());
    assert_eq!(Page::Loading.error_message(), None);
}

#[test]
fn test_highlight_lifecycle() {
    let mut state = navigator().build(SAMPLE_ZINE);
    let first = ActiveHighlight {
        target: "para-7-0".to_string(),
        keyword: "Quiet".to_string(),
    };
    let second = ActiveHighlight {
        target: "para-14-0".to_string(),
        keyword: "Rows".to_string(),
    };

    assert_eq!(state.set_highlight(first.clone()), None);
    assert_eq!(state.set_highlight(second.clone()), Some(first));
    assert_eq!(state.highlight(), Some(&second), "Only the latest highlight is kept");
}

#[test]
fn test_target_text_joins_paragraph_lines() {
    let state = navigator().build(SAMPLE_ZINE);

    assert_eq!(
        state.target_text("para-7-0").as_deref(),
        Some("The Quiet Machines hummed softly in the dark warehouse.\nThey waited.")
    );
    assert_eq!(state.target_text("para-99-0"), None);
}

#[test]
fn test_invalid_pattern_fails_navigator() {
    let config = Config {
        chapter_tag_pattern: "[".to_string(),
        ..Config::default()
    };
    assert!(matches!(Navigator::new(&config), Err(Error::Pattern(_))));
}
