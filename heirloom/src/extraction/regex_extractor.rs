//! Pattern-based feature extractor using regular expressions.

use std::collections::{HashMap, HashSet};

use super::patterns::{NAME_REGEX, QUERY_NAME_PATTERNS, VISUAL_PATTERNS, WORD_REGEX};
use super::stopwords::{KEYWORD_STOPWORDS, NAME_STOPWORDS};
use super::{FeatureExtractor, VISUAL_DESCRIPTION_MAX_CHARS, VISUAL_DESCRIPTION_MIN_CHARS};

/// Minimum character length of an extracted name
const MIN_NAME_CHARS: usize = 3;

/// Keywords must be longer than this many characters
const KEYWORD_MIN_EXCLUSIVE_CHARS: usize = 3;

/// Longest accepted name in a search query, in words
const MAX_QUERY_NAME_WORDS: usize = 4;

/// Regex-driven extractor. Stateless; the pattern tables are compiled once
/// per process and shared by every instance.
#[derive(Debug, Clone)]
pub struct RegexFeatureExtractor {
    name: String,
}

impl RegexFeatureExtractor {
    /// Create a new regex extractor
    pub fn new() -> Self {
        Self {
            name: "regex".to_string(),
        }
    }
}

impl Default for RegexFeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor for RegexFeatureExtractor {
    fn extract_names(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();

        NAME_REGEX
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|candidate| !NAME_STOPWORDS.contains(candidate))
            .filter(|candidate| candidate.chars().count() >= MIN_NAME_CHARS)
            .filter(|candidate| seen.insert(*candidate))
            .map(str::to_string)
            .collect()
    }

    fn extract_keywords(&self, text: &str, limit: usize) -> Vec<String> {
        let lowered = text.to_lowercase();

        // word -> (frequency, first occurrence)
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for (position, word) in WORD_REGEX
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|word| word.chars().count() > KEYWORD_MIN_EXCLUSIVE_CHARS)
            .filter(|word| !KEYWORD_STOPWORDS.contains(word))
            .enumerate()
        {
            counts
                .entry(word)
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, position));
        }

        let mut ranked: Vec<(&str, usize, usize)> = counts
            .into_iter()
            .map(|(word, (count, first))| (word, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        ranked
            .into_iter()
            .take(limit)
            .map(|(word, _, _)| word.to_string())
            .collect()
    }

    fn extract_visual_descriptions(&self, text: &str) -> Vec<String> {
        let mut descriptions = Vec::new();

        for pattern in VISUAL_PATTERNS.iter() {
            for span in pattern.captures(text) {
                let span = span.trim();
                let length = span.chars().count();
                if length > VISUAL_DESCRIPTION_MIN_CHARS && length < VISUAL_DESCRIPTION_MAX_CHARS {
                    tracing::trace!(pattern = pattern.name, span, "visual description");
                    descriptions.push(span.to_lowercase());
                }
            }
        }

        descriptions
    }

    fn extract_query_names(&self, query: &str) -> Vec<String> {
        let lowered = query.trim().to_lowercase();
        let mut names: Vec<String> = Vec::new();

        for pattern in QUERY_NAME_PATTERNS.iter() {
            if let Some(span) = pattern.captures(&lowered).into_iter().next() {
                let name = span.trim();
                let words = name.split_whitespace().count();
                if words > 0 && words <= MAX_QUERY_NAME_WORDS && !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }

        names
    }

    fn name(&self) -> &str {
        &self.name
    }
}
