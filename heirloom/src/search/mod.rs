//! Query-driven memory search
//!
//! A relevance policy over memories, separate from photo matching but
//! reading text through the same [`FeatureExtractor`](crate::extraction::FeatureExtractor).
//! Each memory's text plus the names of its people is scored against the
//! query:
//!
//! - +50 when the core of the query appears verbatim
//! - +40 for every person name asked about ("who was X", "about X")
//! - up to +30 for the share of non-stopword query words found
//!
//! Scores are clamped to 100, filtered by a minimum relevance and the best
//! hits returned first.

mod engine;
mod query;

pub use engine::{RelevanceSearchEngine, SearchHit};
pub use query::ParsedQuery;

/// Points for a verbatim match of the query core
pub const PHRASE_POINTS: f64 = 50.0;

/// Points for each query name found
pub const NAME_POINTS: f64 = 40.0;

/// Points shared out across the query's content words
pub const WORD_SHARE_POINTS: f64 = 30.0;

/// Upper bound of every relevance score
pub const MAX_RELEVANCE: f64 = 100.0;
