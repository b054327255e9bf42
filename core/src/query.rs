use crate::feedback::{FeedbackConfig, QueryExpander, RankedDoc};
use crate::stats::CollectionStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryTerm {
    pub term: String,
    pub weight: f64,
}

impl QueryTerm {
    pub fn new(term: impl Into<String>, weight: f64) -> Self { Self { term: term.into(), weight } }
}

/// Ordered list of weighted terms. Terms need not be unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    terms: Vec<QueryTerm>,
}

impl Query {
    pub fn new() -> Self { Self::default() }

    /// Split on whitespace; every token gets weight 1.0.
    pub fn parse(text: &str) -> Self {
        Self { terms: text.split_whitespace().map(|t| QueryTerm::new(t, 1.0)).collect() }
    }

    pub fn add_term(&mut self, term: impl Into<String>) { self.terms.push(QueryTerm::new(term, 1.0)); }

    pub fn push(&mut self, term: QueryTerm) { self.terms.push(term); }

    /// Append the terms of `other` at weight 1.0, e.g. to union the expansions
    /// of several wildcard patterns.
    pub fn extend_from(&mut self, other: &Query) {
        for t in &other.terms {
            self.add_term(t.term.clone());
        }
    }

    pub fn terms(&self) -> impl Iterator<Item = &QueryTerm> { self.terms.iter() }

    pub(crate) fn terms_mut(&mut self) -> &mut Vec<QueryTerm> { &mut self.terms }

    /// First occurrence of `term`, ignoring weight.
    pub fn get(&self, term: &str) -> Option<&QueryTerm> { self.terms.iter().find(|t| t.term == term) }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Manhattan length: the sum of the weights.
    pub fn length(&self) -> f64 { self.terms.iter().map(|t| t.weight).sum() }

    /// Expand in place from the documents flagged relevant in `results`.
    pub fn relevance_feedback<S: CollectionStats + ?Sized>(&mut self, results: &[RankedDoc], relevant: &[bool], stats: &S, config: FeedbackConfig) {
        QueryExpander::new(config).expand(self, results, relevant, stats);
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self { Self::parse(text) }
}
