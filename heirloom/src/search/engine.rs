use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{MAX_RELEVANCE, NAME_POINTS, PHRASE_POINTS, ParsedQuery, WORD_SHARE_POINTS};
use crate::Result;
use crate::config::SearchConfig;
use crate::config::validation::validate_search_threshold;
use crate::extraction::{FeatureExtractor, RegexFeatureExtractor};
use crate::models::{Memory, MemoryId};
use crate::storage::MemoryStore;

/// A memory matching a search query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    pub memory_id: MemoryId,
    pub text: String,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub year: Option<i32>,

    /// Relevance in `0..=100`, rounded to two decimals
    pub relevance_score: f64,

    /// People attached to the memory
    pub people: Vec<String>,
}

/// Ranks memories against free-text queries.
#[derive(Debug, Clone)]
pub struct RelevanceSearchEngine {
    extractor: Arc<dyn FeatureExtractor>,
    config: SearchConfig,
}

impl Default for RelevanceSearchEngine {
    fn default() -> Self {
        Self::new(Arc::new(RegexFeatureExtractor::new()), SearchConfig::default())
    }
}

impl RelevanceSearchEngine {
    pub fn new(extractor: Arc<dyn FeatureExtractor>, config: SearchConfig) -> Self {
        Self { extractor, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Break a query into core phrase, content words and names
    pub fn parse_query(&self, query: &str) -> Option<ParsedQuery> {
        ParsedQuery::parse(query, self.extractor.as_ref())
    }

    /// Relevance of `text` to a parsed query, in `0..=100`
    pub fn calculate_relevance(&self, text: &str, query: &ParsedQuery) -> f64 {
        let text_lower = text.to_lowercase();
        let mut score = 0.0;

        if !query.core.is_empty() && text_lower.contains(&query.core) {
            score += PHRASE_POINTS;
        }

        for name in &query.names {
            if text_lower.contains(name.as_str()) {
                score += NAME_POINTS;
            }
        }

        if !query.words.is_empty() {
            let matched = query
                .words
                .iter()
                .filter(|word| text_lower.contains(word.as_str()))
                .count();
            score += matched as f64 / query.words.len() as f64 * WORD_SHARE_POINTS;
        }

        score.min(MAX_RELEVANCE)
    }

    /// Rank already loaded memories, each paired with its people.
    ///
    /// Hits below `threshold` are dropped; the rest are sorted by relevance,
    /// highest first with ties in input order, and cut to the configured limit.
    pub fn rank(
        &self,
        query: &str,
        memories: Vec<(Memory, Vec<String>)>,
        threshold: f64,
    ) -> Vec<SearchHit> {
        let Some(parsed) = self.parse_query(query) else {
            return Vec::new();
        };

        let mut hits: Vec<SearchHit> = memories
            .into_iter()
            .filter_map(|(memory, people)| {
                let search_text = if people.is_empty() {
                    memory.text.clone()
                } else {
                    format!("{} {}", memory.text, people.join(", "))
                };

                let relevance = self.calculate_relevance(&search_text, &parsed);
                if relevance < threshold {
                    return None;
                }

                Some(SearchHit {
                    memory_id: memory.id,
                    text: memory.text,
                    category: memory.category,
                    date: memory.memory_date,
                    year: memory.year,
                    relevance_score: round_two_places(relevance),
                    people,
                })
            })
            .collect();

        hits.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        hits.truncate(self.config.limit);
        hits
    }

    /// Search every memory in `store`.
    ///
    /// A blank query returns no hits. `threshold` defaults to the configured
    /// minimum relevance; a negative or non-finite one is a configuration
    /// error.
    pub async fn search_memories<S>(
        &self,
        store: &S,
        query: &str,
        threshold: Option<f64>,
    ) -> Result<Vec<SearchHit>>
    where
        S: MemoryStore + ?Sized,
    {
        if let Some(threshold) = threshold {
            validate_search_threshold(threshold)?;
        }
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let threshold = threshold.unwrap_or(self.config.threshold);

        let memories = store.list_memories().await?;
        let mut with_people = Vec::with_capacity(memories.len());
        for memory in memories {
            let people = store.people_for_memory(memory.id).await?;
            with_people.push((memory, people));
        }

        let hits = self.rank(query, with_people, threshold);
        debug!(query, threshold, hits = hits.len(), "Memory search complete");
        Ok(hits)
    }
}

fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
