use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::path::Path;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_']*|\p{N}+").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
}

#[derive(Debug, Clone, Copy)]
pub struct TokenizerOptions {
    pub case_folding: bool,
    pub remove_diacritics: bool,
    pub stem: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self { Self { case_folding: true, remove_diacritics: true, stem: false } }
}

/// Splits text into terms. Whitespace-separated chunks fully matching one of
/// the special patterns (e-mail addresses, URLs, ...) are kept whole.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    options: TokenizerOptions,
    patterns: Vec<Regex>,
}

impl Tokenizer {
    pub fn new(options: TokenizerOptions) -> Self { Self { options, patterns: Vec::new() } }

    /// Add special-token patterns, each anchored to the whole chunk.
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for p in patterns {
            self.patterns.push(Regex::new(&format!("^(?:{})$", p.as_ref()))?);
        }
        Ok(self)
    }

    /// One regex per line; blank lines and `//` comments are skipped.
    pub fn with_patterns_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let lines = text.lines().map(str::trim).filter(|l| !l.is_empty() && !l.starts_with("//"));
        self.with_patterns(lines)
    }

    /// Tokenize into (term, position).
    pub fn tokenize(&self, text: &str) -> Vec<(String, usize)> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            if self.patterns.iter().any(|re| re.is_match(chunk)) {
                let pos = tokens.len();
                tokens.push((self.fold(chunk), pos));
                continue;
            }
            let normalized = self.normalize(chunk);
            for mat in WORD.find_iter(&normalized) {
                let term = if self.options.stem { STEMMER.stem(mat.as_str()).to_string() } else { mat.as_str().to_string() };
                let pos = tokens.len();
                tokens.push((term, pos));
            }
        }
        tokens
    }

    fn fold(&self, s: &str) -> String {
        if self.options.case_folding { s.to_lowercase() } else { s.to_string() }
    }

    fn normalize(&self, s: &str) -> String {
        let s = if self.options.remove_diacritics {
            s.nfkd().filter(|c| !is_combining_mark(*c)).collect::<String>()
        } else {
            s.nfkc().collect::<String>()
        };
        self.fold(&s)
    }
}

/// Tokenize with default options and no special patterns.
pub fn tokenize(text: &str) -> Vec<(String, usize)> { Tokenizer::default().tokenize(text) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Café, cafés and CAFE!");
        let words: Vec<&str> = t.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["cafe", "cafes", "and", "cafe"]);
    }

    #[test]
    fn stemming_is_optional() {
        let tok = Tokenizer::new(TokenizerOptions { stem: true, ..TokenizerOptions::default() });
        assert!(tok.tokenize("running").iter().any(|(w, _)| w == "run"));
    }
}
