use kgram_core::tokenizer::{Tokenizer, TokenizerOptions};
use kgram_core::Error;
use std::fs;

#[test]
fn it_keeps_pattern_matches_whole() {
    let tok = Tokenizer::default().with_patterns([r"[\w.]+@[\w.]+", r"https?://\S+"]).unwrap();
    let words: Vec<String> = tok.tokenize("Mail Bob@KTH.se or see http://kth.se/ir now").into_iter().map(|(w, _)| w).collect();
    assert_eq!(words, vec!["mail", "bob@kth.se", "or", "see", "http://kth.se/ir", "now"]);
}

#[test]
fn it_reads_patterns_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patterns.txt");
    fs::write(&path, "// phone numbers\n\n\\d+-\\d+\n").unwrap();
    let tok = Tokenizer::default().with_patterns_file(&path).unwrap();
    let words: Vec<String> = tok.tokenize("call 555-1234 today").into_iter().map(|(w, _)| w).collect();
    assert_eq!(words, vec!["call", "555-1234", "today"]);
}

#[test]
fn it_rejects_bad_patterns() {
    assert!(Tokenizer::default().with_patterns(["(unclosed"]).is_err());
}

#[test]
fn it_preserves_case_when_asked() {
    let tok = Tokenizer::new(TokenizerOptions { case_folding: false, ..TokenizerOptions::default() });
    let words: Vec<String> = tok.tokenize("Rust Ångström").into_iter().map(|(w, _)| w).collect();
    assert_eq!(words, vec!["Rust", "Angstrom"]);
}

#[test]
fn it_reports_missing_patterns_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    match Tokenizer::default().with_patterns_file(&missing) {
        Err(Error::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected io error, got {other:?}"),
    }
}
