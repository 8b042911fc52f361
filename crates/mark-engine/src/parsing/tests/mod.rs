//! Integration tests for the parsing module.
//!
//! Fixtures (.md input and .html expected output) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;

use crate::parsing::{
    inline::{match_marks, tokenize},
    paragraphs::{ParagraphBreak, split_paragraphs},
    snapshot, translate_to_html,
};

// Fixture-based tests

#[test]
fn fixture_paragraphs_and_marks() {
    assert_fixture("paragraphs_and_marks");
}

#[test]
fn fixture_identifiers() {
    assert_fixture("identifiers");
}

#[test]
fn fixture_code_raw_zones() {
    assert_fixture("code_raw_zones");
}

#[test]
fn fixture_dos_line_endings() {
    assert_fixture("dos_line_endings");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    for paragraph in split_paragraphs(&md, ParagraphBreak::BlankLine) {
        let tokenized = tokenize(paragraph);
        let pairs = match_marks(&tokenized.tokens);
        snapshot::invariants(paragraph, &tokenized, &pairs);
    }

    assert_eq!(translate_to_html(&md), expected.trim_end());
}

// Outline snapshots

#[test]
fn outline_of_deep_nesting() {
    let text = "_a __b _c __d__ c_ b__ a_";
    let tokenized = tokenize(text);
    let pairs = match_marks(&tokenized.tokens);
    snapshot::invariants(text, &tokenized, &pairs);

    insta::assert_snapshot!(snapshot::normalize(text, &pairs), @r#"
    em 0..25 "a __b _c __d__ c_ b__ a"
      strong 3..22 "b _c __d__ c_ b"
        em 7..18 "c __d__ c"
    "#);
}

#[test]
fn outline_of_code_inside_emphasis() {
    let text = "_see `a_b` here_";
    let tokenized = tokenize(text);
    let pairs = match_marks(&tokenized.tokens);
    snapshot::invariants(text, &tokenized, &pairs);

    insta::assert_snapshot!(snapshot::normalize(text, &pairs), @r#"
    em 0..16 "see `a_b` here"
      code 5..10 "a_b"
    "#);
}
