// Shared test helpers for html2plaintext.

use std::fs;
use std::path::Path;

use html2plaintext::Options;
use serde::Deserialize;

/// Optional per-fixture settings from `index.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FixtureConfig {
    line_length: Option<isize>,
}

/// A loaded fixture.
pub struct Fixture {
    pub html: String,
    pub expected_text: String,
    pub options: Options,
}

/// Load a test fixture's input HTML, expected text, and options.
///
/// Fixture directories contain `index.html`, `index.txt`, and optionally `index.json`.
pub fn load_fixture(name: &str) -> Fixture {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-fixtures").join(name);
    let html = fs::read_to_string(base.join("index.html"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.html", name));
    let text = fs::read_to_string(base.join("index.txt"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.txt", name));

    let mut options = Options::default();
    if let Ok(json) = fs::read_to_string(base.join("index.json")) {
        let config: FixtureConfig = serde_json::from_str(&json)
            .unwrap_or_else(|e| panic!("Invalid fixture config {}/index.json: {e}", name));
        if let Some(line_length) = config.line_length {
            options.line_length = line_length;
        }
    }

    // Editors like to end files with a newline; the converter never does.
    let expected_text = text.strip_suffix('\n').unwrap_or(&text).to_string();

    Fixture { html, expected_text, options }
}
