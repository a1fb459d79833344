//! Fixture tests for the full analysis pass.
//!
//! Fixtures (.yaml) and snapshots (.snap) are co-located in `fixtures/`.


use crate::{Analysis, TextBuffer, TokenKind, analyze, dump::dump};

#[test]
fn fixture_service() {
    assert_fixture("service");
}

#[test]
fn fixture_sequences() {
    assert_fixture("sequences");
}

#[test]
fn fixture_malformed() {
    assert_fixture("malformed");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let yaml = std::fs::read_to_string(format!("{fixtures_dir}/{name}.yaml")).unwrap();
    let text = TextBuffer::from(yaml.as_str());

    let analysis = analyze(&text);
    invariants::check(&text, &analysis);

    let snap = dump(&text, &analysis);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap);
    });
}

fn kinds(analysis: &Analysis) -> Vec<TokenKind> {
    analysis.tokens.iter().map(|t| t.kind).collect()
}

// Invariant tests

#[test]
fn empty_document() {
    let text = TextBuffer::from("");
    let analysis = analyze(&text);
    invariants::check(&text, &analysis);
    assert_eq!(analysis, Analysis::default());
}

#[test]
fn whitespace_only_document() {
    let text = TextBuffer::from(" \t\r\n\n   ");
    let analysis = analyze(&text);
    invariants::check(&text, &analysis);
    assert!(analysis.tokens.is_empty());
}

#[test]
fn entirely_invalid_document() {
    let text = TextBuffer::from("{}@$%^");
    let analysis = analyze(&text);
    invariants::check(&text, &analysis);
    assert_eq!(kinds(&analysis), vec![TokenKind::INVALID]);
}

#[test]
fn crlf_document() {
    let text = TextBuffer::from("a:\r\n  b: 1\r\nc: 2\r\n");
    let analysis = analyze(&text);
    invariants::check(&text, &analysis);
    assert_eq!(analysis.blocks.len(), 1);
    assert_eq!(analysis.blocks[0].end_token, 4);
}

#[test]
fn analysis_is_idempotent() {
    let yaml = "a:\n  - b: &x 1\n  - *x\n# end\n";
    let first = analyze(&TextBuffer::from(yaml));
    let second = analyze(&TextBuffer::from(yaml));
    assert_eq!(first, second);
}
