//! Feature extraction from narrative memory text.
//!
//! The photo scorer and the memory search engine read text through the
//! [`FeatureExtractor`] trait. The default implementation,
//! [`RegexFeatureExtractor`], is driven by the pattern tables in
//! [`patterns`]; another strategy (a tokenizer, a tagger) can be swapped in
//! without touching the scorers.

pub mod patterns;
mod regex_extractor;
pub mod stopwords;
mod traits;

pub use regex_extractor::RegexFeatureExtractor;
pub use traits::{FeatureExtractor, TextFeatures};

/// Number of keywords the extractor keeps by default
pub const DEFAULT_KEYWORD_LIMIT: usize = 30;

/// Number of keywords compared against photo metadata
pub const SCORING_KEYWORD_LIMIT: usize = 15;

/// Exclusive character bounds for a kept visual description
pub const VISUAL_DESCRIPTION_MIN_CHARS: usize = 10;
pub const VISUAL_DESCRIPTION_MAX_CHARS: usize = 200;
