// Fixture tests — whole-document input/output pairs.
//
// Each fixture directory contains:
//   index.html — HTML input
//   index.txt  — expected plaintext output
//   index.json — optional settings (`line_length`)
//
// These tests run the full pipeline: HTML string → fragments → plaintext.

mod common;

use pretty_assertions::assert_eq;

fn fixture_test(name: &str) {
    let f = common::load_fixture(name);
    let result = html2plaintext::convert_with(&f.html, &f.options).unwrap();
    assert_eq!(result, f.expected_text, "fixture: {}", name);
}

#[test]
fn fixture_newsletter() { fixture_test("newsletter"); }

#[test]
fn fixture_preheader() { fixture_test("preheader"); }

#[test]
fn fixture_table_layout() { fixture_test("table-layout"); }

#[test]
fn fixture_stylesheet_text() { fixture_test("stylesheet-text"); }

#[test]
fn fixture_nested_comments() { fixture_test("nested-comments"); }

#[test]
fn fixture_narrow_wrap() { fixture_test("narrow-wrap"); }

#[test]
fn fixture_read_matches_str() {
    let f = common::load_fixture("newsletter");
    let mut bytes = f.html.as_bytes();
    let result = html2plaintext::convert_read(&mut bytes, &f.options).unwrap();
    assert_eq!(result, f.expected_text);
}
