use super::{Config, STOP_WORDS};
use crate::error::Error;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_empty_toml_gives_defaults() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
}

#[test]
fn test_partial_toml_overrides_named_keys() {
    let config = Config::from_toml(
        r#"
toc_marker = "Contents"
highlight_delay_ms = 250
stop_words = ["machines"]
"#,
    )
    .unwrap();

    assert_eq!(config.toc_marker, "Contents");
    assert_eq!(config.highlight_delay_ms, 250);
    assert_eq!(config.stop_words, ["machines"]);
    assert_eq!(config.header_marker, "__", "Unnamed keys keep defaults");
    assert_eq!(config.min_paragraph_length, 20);
}

#[test]
fn test_default_stop_words() {
    let config = Config::default();
    assert_eq!(config.stop_words.len(), STOP_WORDS.len());
    assert!(config.stop_words.iter().any(|w| w == "the"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("zinemap.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zinemap.toml");
    fs::write(&path, "highlight_delay_ms = \"soon\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::Config { .. }), "{err}");
}
