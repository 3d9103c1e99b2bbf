//! Traits for feature extraction.

use serde::{Deserialize, Serialize};

use super::DEFAULT_KEYWORD_LIMIT;

/// The three feature sets derived from a memory's text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TextFeatures {
    /// Capitalized name-like tokens, deduplicated in first-occurrence order
    pub names: Vec<String>,

    /// Lowercase keywords ranked by descending frequency
    pub keywords: Vec<String>,

    /// Lowercase phrases that look like descriptions of a photograph
    pub visual_descriptions: Vec<String>,
}

impl TextFeatures {
    /// True when no feature fired
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.keywords.is_empty() && self.visual_descriptions.is_empty()
    }
}

/// Extracts names, keywords and visual descriptions from free-form text.
///
/// Extraction never fails: a pattern that does not match contributes nothing,
/// and empty text yields empty outputs.
pub trait FeatureExtractor: Send + Sync + std::fmt::Debug {
    /// Capitalized single or multi-word tokens that are probably names.
    ///
    /// # Returns
    /// Deduplicated names in order of first occurrence
    fn extract_names(&self, text: &str) -> Vec<String>;

    /// Lowercase keywords ranked by frequency, ties broken by first occurrence.
    ///
    /// # Arguments
    /// * `text` - The text to analyze
    /// * `limit` - Maximum number of keywords returned
    fn extract_keywords(&self, text: &str, limit: usize) -> Vec<String>;

    /// Phrases introduced by narrative cues such as "shows" or "In this photo".
    fn extract_visual_descriptions(&self, text: &str) -> Vec<String>;

    /// Person names asked about in a search query ("who was X", "about X").
    ///
    /// # Returns
    /// Lowercase names of at most four words each
    fn extract_query_names(&self, query: &str) -> Vec<String>;

    /// Get the name of this extractor for identification purposes.
    fn name(&self) -> &str;

    /// Run all three text extractions at once.
    fn extract_features(&self, text: &str) -> TextFeatures {
        TextFeatures {
            names: self.extract_names(text),
            keywords: self.extract_keywords(text, DEFAULT_KEYWORD_LIMIT),
            visual_descriptions: self.extract_visual_descriptions(text),
        }
    }
}
