//! Wildcard term resolution over the k-gram index.
//!
//! Candidates come from ANDing every k-gram of the padded pattern; k-grams that
//! include `*` are windowed like any other character and, having no postings,
//! constrain nothing. Candidates are then filtered by an anchored regex in
//! which each `*` becomes `.*`.

use crate::error::Result;
use crate::kgram::KGramIndex;
use crate::query::Query;
use regex::Regex;

const WILDCARD: char = '*';

/// Anchored regex for a wildcard pattern. Everything except `*` is literal.
/// Fails only when the compiled program exceeds the regex size limit.
pub fn wildcard_regex(pattern: &str) -> Result<Regex> {
    let body = pattern.split(WILDCARD).map(regex::escape).collect::<Vec<_>>().join(".*");
    Ok(Regex::new(&format!("^(?s:{body})$"))?)
}

impl KGramIndex {
    /// Resolve `pattern` into a query over every indexed term it matches, each
    /// at weight 1.0, in ascending term-id order. A pattern without `*` is
    /// returned as a single literal term whatever the index holds.
    pub fn resolve_wildcard(&self, pattern: &str) -> Query {
        let mut query = Query::new();
        if !pattern.contains(WILDCARD) {
            query.add_term(pattern);
            return query;
        }

        let kgrams = self.kgrams(pattern);
        let Some(candidates) = self.intersect_all(&kgrams) else {
            tracing::debug!(pattern, kgrams = kgrams.len(), "no candidate terms");
            return query;
        };

        let re = match wildcard_regex(pattern) {
            Ok(re) => re,
            Err(err) => {
                tracing::warn!(pattern_len = pattern.len(), error = %err, "wildcard pattern not compilable, no matches");
                return query;
            }
        };
        for posting in &candidates {
            if let Some(term) = self.term_of(posting.term_id) {
                if re.is_match(term) {
                    query.add_term(term);
                }
            }
        }
        tracing::debug!(pattern, kgrams = kgrams.len(), candidates = candidates.len(), matches = query.len(), "resolved wildcard");
        query
    }
}
