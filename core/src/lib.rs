//! In-memory k-gram index for wildcard term resolution, plus a weighted query
//! type with Rocchio-style relevance feedback.
//!
//! Build-then-query: insertion mutates the dictionary and posting lists with no
//! internal locking. Wrap the index in [`SharedKGramIndex`] if readers and the
//! builder must share it.

pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod intersect;
pub mod kgram;
pub mod query;
pub mod stats;
pub mod tokenizer;
pub mod wildcard;

pub use dictionary::TermDictionary;
pub use error::{Error, Result};
pub use feedback::{FeedbackConfig, QueryExpander, RankedDoc};
pub use intersect::intersect;
pub use kgram::{KGramIndex, KGramPosting, SharedKGramIndex};
pub use query::{Query, QueryTerm};
pub use stats::{CollectionStats, MemoryStats};

pub type TermId = u32;
pub type DocId = u32;
