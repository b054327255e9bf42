//! Rocchio-style relevance feedback.
//!
//! Each relevant document among the top `top_n` results contributes
//! `beta / num_relevant * tf / doc_length` to every term it contains. Expansion
//! terms missing from the query are appended with their accumulated weight; a
//! term already in the query has its weight replaced by `accumulated + alpha`.

use crate::query::{Query, QueryTerm};
use crate::stats::CollectionStats;
use crate::DocId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of a previously ranked result list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedDoc {
    pub doc_id: DocId,
    pub score: f64,
}

impl RankedDoc {
    pub fn new(doc_id: DocId, score: f64) -> Self { Self { doc_id, score } }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Retention weight for original query terms.
    pub alpha: f64,
    /// Weight of terms drawn from relevant documents.
    pub beta: f64,
    /// Only this many top-ranked results are consulted.
    pub top_n: usize,
    /// Scale contributions by `log10(N / df)`.
    pub use_idf: bool,
}

impl Default for FeedbackConfig {
    fn default() -> Self { Self::with_alpha(0.2) }
}

impl FeedbackConfig {
    /// `beta` is set to `1 - alpha`.
    pub fn with_alpha(alpha: f64) -> Self { Self { alpha, beta: 1.0 - alpha, top_n: 10, use_idf: false } }
}

#[derive(Debug, Clone, Default)]
pub struct QueryExpander {
    config: FeedbackConfig,
}

impl QueryExpander {
    pub fn new(config: FeedbackConfig) -> Self { Self { config } }

    pub fn config(&self) -> &FeedbackConfig { &self.config }

    /// Expand `query` in place. Leaves it untouched when nothing in the
    /// consulted window is flagged relevant.
    pub fn expand<S: CollectionStats + ?Sized>(&self, query: &mut Query, results: &[RankedDoc], relevant: &[bool], stats: &S) {
        let window = self.config.top_n.min(results.len()).min(relevant.len());
        let num_relevant = relevant[..window].iter().filter(|&&r| r).count();
        if num_relevant == 0 {
            tracing::warn!(window, "no relevant documents flagged, query left unchanged");
            return;
        }

        let weights = self.expansion_weights(&results[..window], &relevant[..window], num_relevant, stats);
        let mut appended = 0usize;
        for (term, weight) in weights {
            match query.terms_mut().iter_mut().find(|t| t.term == term) {
                Some(existing) => existing.weight = weight + self.config.alpha,
                None => {
                    query.push(QueryTerm::new(term, weight));
                    appended += 1;
                }
            }
        }
        tracing::debug!(num_relevant, appended, terms = query.len(), "expanded query");
    }

    /// Accumulated per-term weights, keyed in term order.
    pub fn expansion_weights<S: CollectionStats + ?Sized>(&self, results: &[RankedDoc], relevant: &[bool], num_relevant: usize, stats: &S) -> BTreeMap<String, f64> {
        let mut weights: BTreeMap<String, f64> = BTreeMap::new();
        let share = self.config.beta * (1.0 / num_relevant as f64);
        let total_docs = stats.num_docs() as f64;

        for (doc, _) in results.iter().zip(relevant).filter(|(_, r)| **r) {
            let (Some(tfs), Some(doc_len)) = (stats.term_freqs(doc.doc_id), stats.doc_length(doc.doc_id)) else {
                tracing::warn!(doc_id = doc.doc_id, "relevant document has no statistics");
                continue;
            };
            if doc_len == 0 {
                continue;
            }
            for (term, &tf) in tfs {
                let df = stats.doc_freq(term) as f64;
                let idf = if df > 0.0 && total_docs > 0.0 { (total_docs / df).log10() } else { 0.0 };
                let mut contribution = share * (tf as f64 / doc_len as f64);
                if self.config.use_idf {
                    contribution *= idf;
                }
                tracing::trace!(doc_id = doc.doc_id, term = term.as_str(), idf, contribution, "feedback contribution");
                *weights.entry(term.clone()).or_insert(0.0) += contribution;
            }
        }
        weights
    }
}
