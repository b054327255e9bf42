use crate::DocId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Collection statistics the query expander draws on. Implemented by whatever
/// engine owns the full inverted index.
pub trait CollectionStats {
    /// Term -> frequency within `doc`.
    fn term_freqs(&self, doc: DocId) -> Option<&HashMap<String, u32>>;
    /// Total number of terms in `doc`.
    fn doc_length(&self, doc: DocId) -> Option<u32>;
    /// Number of documents containing `term`.
    fn doc_freq(&self, term: &str) -> u32;
    fn num_docs(&self) -> u32;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocStats {
    pub name: String,
    pub length: u32,
    pub term_freqs: HashMap<String, u32>,
}

/// Per-document statistics kept in memory. Holds no postings.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub docs: HashMap<DocId, DocStats>,
    pub df: HashMap<String, u32>,
    next_doc_id: DocId,
}

impl MemoryStats {
    pub fn new() -> Self { Self::default() }

    /// Record a document's tokens and return its id.
    pub fn add_document<I, S>(&mut self, name: impl Into<String>, tokens: I) -> DocId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let doc_id = self.next_doc_id;
        self.next_doc_id += 1;

        let mut term_freqs: HashMap<String, u32> = HashMap::new();
        let mut length = 0u32;
        for tok in tokens {
            *term_freqs.entry(tok.into()).or_insert(0) += 1;
            length += 1;
        }
        for term in term_freqs.keys() {
            *self.df.entry(term.clone()).or_insert(0) += 1;
        }
        self.docs.insert(doc_id, DocStats { name: name.into(), length, term_freqs });
        doc_id
    }

    pub fn doc_name(&self, doc: DocId) -> Option<&str> { self.docs.get(&doc).map(|d| d.name.as_str()) }
}

impl CollectionStats for MemoryStats {
    fn term_freqs(&self, doc: DocId) -> Option<&HashMap<String, u32>> { self.docs.get(&doc).map(|d| &d.term_freqs) }

    fn doc_length(&self, doc: DocId) -> Option<u32> { self.docs.get(&doc).map(|d| d.length) }

    fn doc_freq(&self, term: &str) -> u32 { self.df.get(term).copied().unwrap_or(0) }

    fn num_docs(&self) -> u32 { self.docs.len() as u32 }
}
