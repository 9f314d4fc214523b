//! Shared fixtures for unit tests.

use crate::app_state::{AppState, Navigator};
use crate::config::Config;
use crate::formats::zine::ZineFormat;
use crate::keywords::KeywordExtractor;
use crate::scanner;
use crate::section::ScannedDocument;

/// A small zine exercising every construct: preamble, TOC block, tagged and untagged headers,
/// keyword and keyword-less paragraphs.
pub const SAMPLE_ZINE: &str = "THE SILENT MACHINES

Table of Contents
CH1 Arrival
CH2 The Warehouse
Epilogue

__CH1: Arrival__

The Quiet Machines hummed softly in the dark warehouse.
They waited.

it was a long journey through uncertain territory

__CH2 - The Warehouse__

Rows of crates stretched to the ceiling, each stamped with Meridian.

__Epilogue__

short one
";

pub fn scan(text: &str) -> ScannedDocument {
    let config = Config::default();
    let format = ZineFormat::new(&config).unwrap();
    scanner::scan(text, &format, &KeywordExtractor::new(&config))
}

pub fn build(text: &str) -> AppState {
    Navigator::new(&Config::default()).unwrap().build(text)
}
