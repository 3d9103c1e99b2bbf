//! Photo suggestions for memories
//!
//! [`SuggestionPipeline`] runs the [`MatchScorer`](crate::matching::MatchScorer)
//! over every photo not yet linked to a memory, keeps the ones at or above a
//! threshold, and ranks them. Accepting a suggestion appends a link through
//! the [`LinkStore`](crate::storage::LinkStore); suggestions themselves are
//! never stored.

mod pipeline;
mod types;

pub use pipeline::{DEFAULT_YEAR_TOLERANCE, MAX_AUTO_LINKS, SuggestionPipeline};
pub use types::{LinkOutcome, Suggestion, SuggestionOutcome};
