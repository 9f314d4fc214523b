use super::{back_to_top, back_to_top_visible, dispatch, Effect, NavModel, ScrollAlign};
use crate::app_state::ActiveHighlight;
use crate::testing::{build, SAMPLE_ZINE};
use std::time::Duration;

#[test]
fn test_section_link_scrolls_to_start() {
    let mut state = build(SAMPLE_ZINE);
    let effects = dispatch(&mut state, "toc-4");

    assert_eq!(
        effects,
        [Effect::ScrollIntoView {
            target: "section-14".to_string(),
            align: ScrollAlign::Start,
        }]
    );
    assert_eq!(state.highlight(), None, "Section links leave highlights alone");
}

#[test]
fn test_keyword_link_scrolls_centered_then_highlights() {
    let mut state = build(SAMPLE_ZINE);
    let effects = dispatch(&mut state, "toc-3-kw-0");

    assert_eq!(
        effects,
        [
            Effect::ScrollIntoView {
                target: "para-7-0".to_string(),
                align: ScrollAlign::Center,
            },
            Effect::Highlight {
                target: "para-7-0".to_string(),
                keyword: "Quiet".to_string(),
                after: Duration::from_millis(500),
            },
        ]
    );
    assert_eq!(
        state.highlight(),
        Some(&ActiveHighlight {
            target: "para-7-0".to_string(),
            keyword: "Quiet".to_string(),
        })
    );
}

#[test]
fn test_second_keyword_click_clears_the_first() {
    let mut state = build(SAMPLE_ZINE);
    dispatch(&mut state, "toc-3-kw-0");
    let effects = dispatch(&mut state, "toc-4-kw-0");

    assert_eq!(
        effects[0],
        Effect::ClearHighlight {
            target: "para-7-0".to_string()
        }
    );
    assert_eq!(effects.len(), 3);
    assert_eq!(
        state.highlight().map(|h| h.target.as_str()),
        Some("para-14-0"),
        "Only one highlight is active"
    );
}

#[test]
fn test_unknown_link_does_nothing() {
    let mut state = build(SAMPLE_ZINE);
    assert!(dispatch(&mut state, "toc-99").is_empty());
    assert_eq!(state.highlight(), None);
}

#[test]
fn test_back_to_top_prefers_toc() {
    let state = build(SAMPLE_ZINE);
    assert_eq!(
        back_to_top(state.nav()),
        Effect::ScrollIntoView {
            target: "toc".to_string(),
            align: ScrollAlign::Start,
        }
    );
    assert_eq!(back_to_top(&NavModel::default()), Effect::ScrollToTop);
}

#[test]
fn test_back_to_top_visibility_threshold() {
    assert!(!back_to_top_visible(0, 300));
    assert!(!back_to_top_visible(300, 300));
    assert!(back_to_top_visible(301, 300));
}
