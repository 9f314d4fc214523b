use super::{find_matches, highlight_html};

#[test]
fn test_whole_word_case_insensitive_matches() {
    let text = "Quiet rooms, quiet halls. QUIET! Quietly not.";
    let matches: Vec<_> = find_matches(text, "Quiet")
        .into_iter()
        .map(|r| &text[r])
        .collect();
    assert_eq!(matches, ["Quiet", "quiet", "QUIET"], "Quietly is not a whole word match");
}

#[test]
fn test_highlight_preserves_case_and_escapes() {
    let html = highlight_html("Rust & rust <b>", "rust");
    assert_eq!(
        html,
        "<span class=\"keyword-highlight\">Rust</span> &amp; \
         <span class=\"keyword-highlight\">rust</span> &lt;b&gt;"
    );
}

#[test]
fn test_keyword_is_not_a_pattern() {
    assert_eq!(find_matches("axb a.b", "a.b"), [4..7]);
    assert_eq!(find_matches("price (x) here", "x").len(), 1);
}

#[test]
fn test_entities_are_never_matched() {
    // "amp" only appears after escaping, so it must not be highlighted
    let html = highlight_html("salt & pepper", "amp");
    assert_eq!(html, "salt &amp; pepper");
}

#[test]
fn test_no_keyword_leaves_text_escaped() {
    assert_eq!(highlight_html("<plain>", ""), "&lt;plain&gt;");
}
