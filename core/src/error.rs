use std::path::PathBuf;

/// Errors raised for genuine misconfiguration. Lookup misses are `Option`s.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("the k-gram index can't be constructed for K = {0}, K must be at least 1")]
    InvalidK(i64),
    #[error("cannot search k-gram index: {found}-gram provided instead of {expected}-gram")]
    KGramLength { expected: usize, found: usize },
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
