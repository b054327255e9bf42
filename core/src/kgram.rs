use crate::dictionary::TermDictionary;
use crate::error::{Error, Result};
use crate::intersect::intersect;
use crate::TermId;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Reference to a term inside a k-gram's posting list. Equality is by term id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KGramPosting {
    pub term_id: TermId,
}

impl KGramPosting {
    pub fn new(term_id: TermId) -> Self { Self { term_id } }
}

/// Index from boundary-padded k-grams to the terms containing them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KGramIndex {
    k: usize,
    dictionary: TermDictionary,
    postings: HashMap<String, Vec<KGramPosting>>, // ascending by term_id
}

/// Index behind a read/write lock, for sharing once the build phase is over.
pub type SharedKGramIndex = Arc<RwLock<KGramIndex>>;

impl KGramIndex {
    pub fn new(k: i64) -> Result<Self> {
        if k <= 0 {
            return Err(Error::InvalidK(k));
        }
        Ok(Self { k: k as usize, dictionary: TermDictionary::new(), postings: HashMap::new() })
    }

    pub fn k(&self) -> usize { self.k }

    /// Number of indexed terms.
    pub fn len(&self) -> usize { self.dictionary.len() }

    pub fn is_empty(&self) -> bool { self.dictionary.is_empty() }

    /// Number of distinct k-grams with at least one posting.
    pub fn kgram_count(&self) -> usize { self.postings.len() }

    pub fn dictionary(&self) -> &TermDictionary { &self.dictionary }

    /// The `len + 3 - K` windows of `^term$`. Empty when the padded term is
    /// shorter than K.
    pub fn kgrams(&self, term: &str) -> Vec<String> {
        let padded: Vec<char> = std::iter::once('^').chain(term.chars()).chain(std::iter::once('$')).collect();
        padded.windows(self.k).map(|w| w.iter().collect()).collect()
    }

    /// Index every k-gram of `term`. Re-inserting a known term is a no-op.
    pub fn insert(&mut self, term: &str) {
        let (id, fresh) = self.dictionary.insert(term);
        if !fresh {
            return;
        }
        let entry = KGramPosting::new(id);
        for kgram in self.kgrams(term) {
            let list = self.postings.entry(kgram).or_default();
            // ids arrive in increasing order, so a repeat can only be the tail
            if list.last() != Some(&entry) {
                list.push(entry);
            }
        }
        tracing::debug!(term, term_id = id, "indexed term");
    }

    pub fn postings(&self, kgram: &str) -> Option<&[KGramPosting]> { self.postings.get(kgram).map(Vec::as_slice) }

    pub fn id_of(&self, term: &str) -> Option<TermId> { self.dictionary.id_of(term) }

    pub fn term_of(&self, id: TermId) -> Option<&str> { self.dictionary.term_of(id) }

    /// AND together the postings of caller-supplied k-grams, each of which must
    /// be exactly K characters. `None` when no k-gram had postings.
    pub fn lookup<S: AsRef<str>>(&self, kgrams: &[S]) -> Result<Option<Vec<KGramPosting>>> {
        for kgram in kgrams {
            let found = kgram.as_ref().chars().count();
            if found != self.k {
                return Err(Error::KGramLength { expected: self.k, found });
            }
        }
        Ok(self.intersect_all(kgrams))
    }

    /// Left-to-right AND over `kgrams`. Until a first list exists, a k-gram
    /// without postings leaves it absent; afterwards it is no constraint.
    pub(crate) fn intersect_all<S: AsRef<str>>(&self, kgrams: &[S]) -> Option<Vec<KGramPosting>> {
        let mut acc: Option<Vec<KGramPosting>> = None;
        for kgram in kgrams {
            let next = self.postings(kgram.as_ref());
            acc = match acc {
                None => next.map(<[KGramPosting]>::to_vec),
                Some(prev) => Some(intersect(&prev, next)),
            };
        }
        acc
    }

    pub fn into_shared(self) -> SharedKGramIndex { Arc::new(RwLock::new(self)) }
}
