use crate::TermId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bidirectional term <-> id mapping. Ids are dense, start at 0 and are never
/// reassigned, so the reverse direction is a plain `Vec`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TermDictionary {
    ids: HashMap<String, TermId>,
    terms: Vec<String>,
}

impl TermDictionary {
    pub fn new() -> Self { Self::default() }

    /// Returns the id of `term` and whether it was newly assigned.
    pub fn insert(&mut self, term: &str) -> (TermId, bool) {
        if let Some(&id) = self.ids.get(term) {
            return (id, false);
        }
        let id = self.terms.len() as TermId;
        self.ids.insert(term.to_string(), id);
        self.terms.push(term.to_string());
        (id, true)
    }

    pub fn id_of(&self, term: &str) -> Option<TermId> { self.ids.get(term).copied() }

    pub fn term_of(&self, id: TermId) -> Option<&str> { self.terms.get(id as usize).map(String::as_str) }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }
}
