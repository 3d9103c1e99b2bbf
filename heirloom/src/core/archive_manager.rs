//! Archive Manager interface for Heirloom
//!
//! This module provides the primary interface for working with a family
//! archive. It wires the suggestion pipeline and the search engine around a
//! single store and a single feature extractor.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::Result;
use crate::config::HeirloomConfig;
use crate::extraction::{FeatureExtractor, RegexFeatureExtractor, TextFeatures};
use crate::logging::LoggingGuard;
use crate::matching::{MatchResult, MatchScorer};
use crate::models::{LinkedPhoto, MediaId, MemoryId, PhotoMetadata};
use crate::search::{RelevanceSearchEngine, SearchHit};
use crate::storage::FamilyStore;
use crate::suggestion::{LinkOutcome, Suggestion, SuggestionOutcome, SuggestionPipeline};

/// The primary interface for interacting with a family archive.
///
/// Cheap operations (scoring, feature extraction) never touch the store;
/// everything else goes through the configured [`FamilyStore`].
#[derive(Debug)]
pub struct ArchiveManager {
    store: Arc<dyn FamilyStore>,
    pipeline: SuggestionPipeline,
    search: RelevanceSearchEngine,
    config: HeirloomConfig,
    _log_guard: Option<LoggingGuard>,
}

impl ArchiveManager {
    /// Create a manager over `store` using the regex feature extractor
    pub fn new(store: Arc<dyn FamilyStore>, config: HeirloomConfig) -> Self {
        Self::with_extractor(store, Arc::new(RegexFeatureExtractor::new()), config)
    }

    /// Create a manager with a custom feature extractor, shared by the
    /// photo scorer and the search engine
    pub fn with_extractor(
        store: Arc<dyn FamilyStore>,
        extractor: Arc<dyn FeatureExtractor>,
        config: HeirloomConfig,
    ) -> Self {
        let scorer = MatchScorer::new(Arc::clone(&extractor));
        let pipeline =
            SuggestionPipeline::new(Arc::clone(&store), scorer, config.matching.clone());
        let search = RelevanceSearchEngine::new(extractor, config.search.clone());

        Self {
            store,
            pipeline,
            search,
            config,
            _log_guard: None,
        }
    }

    /// Keep a logging guard alive for as long as the manager lives
    pub fn with_log_guard(mut self, guard: LoggingGuard) -> Self {
        self._log_guard = Some(guard);
        self
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn FamilyStore> {
        &self.store
    }

    pub fn config(&self) -> &HeirloomConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &SuggestionPipeline {
        &self.pipeline
    }

    pub fn search_engine(&self) -> &RelevanceSearchEngine {
        &self.search
    }

    /// Score one photo against memory text and year
    pub fn score_photo_match(
        &self,
        memory_text: &str,
        memory_year: Option<i32>,
        photo: &PhotoMetadata,
    ) -> MatchResult {
        self.pipeline
            .score_photo_match(memory_text, memory_year, photo)
    }

    /// Ranked photo suggestions, distinguishing an unknown memory
    pub async fn suggest_for_memory(
        &self,
        memory_id: MemoryId,
        threshold: Option<u8>,
    ) -> Result<SuggestionOutcome> {
        self.pipeline.suggest_for_memory(memory_id, threshold).await
    }

    /// Ranked photo suggestions; empty for an unknown memory
    pub async fn suggest_photos_for_memory(
        &self,
        memory_id: MemoryId,
        threshold: Option<u8>,
    ) -> Result<Vec<Suggestion>> {
        self.pipeline
            .suggest_photos_for_memory(memory_id, threshold)
            .await
    }

    /// Suggestions for every memory that has at least one
    pub async fn suggest_all_memories(
        &self,
        threshold: Option<u8>,
    ) -> Result<BTreeMap<MemoryId, Vec<Suggestion>>> {
        self.pipeline.suggest_for_all_memories(threshold).await
    }

    /// Link a suggested photo to a memory (idempotent)
    pub async fn apply_suggestion(
        &self,
        memory_id: MemoryId,
        photo_id: MediaId,
    ) -> Result<LinkOutcome> {
        self.pipeline.apply_suggestion(memory_id, photo_id).await
    }

    /// Linked photos in display order
    pub async fn get_linked_photos(&self, memory_id: MemoryId) -> Result<Vec<LinkedPhoto>> {
        self.pipeline.linked_photos(memory_id).await
    }

    pub async fn unlink_photo(&self, memory_id: MemoryId, photo_id: MediaId) -> Result<bool> {
        self.pipeline.unlink_photo(memory_id, photo_id).await
    }

    pub async fn set_linked_photos(
        &self,
        memory_id: MemoryId,
        photo_ids: Vec<MediaId>,
    ) -> Result<()> {
        self.pipeline.set_linked_photos(memory_id, photo_ids).await
    }

    pub async fn auto_link_by_year(&self, tolerance: u32) -> Result<BTreeMap<MemoryId, Vec<MediaId>>> {
        self.pipeline.auto_link_by_year(tolerance).await
    }

    /// Search memories by relevance to `query`
    pub async fn search_memories(
        &self,
        query: &str,
        threshold: Option<f64>,
    ) -> Result<Vec<SearchHit>> {
        self.search
            .search_memories(self.store.as_ref(), query, threshold)
            .await
    }

    /// Features extracted from a stored memory, `None` if it does not exist
    pub async fn describe_memory_features(&self, memory_id: MemoryId) -> Result<Option<TextFeatures>> {
        self.pipeline.describe_memory_features(memory_id).await
    }

    /// Features extracted from arbitrary text
    pub fn extract_features(&self, text: &str) -> TextFeatures {
        self.pipeline.scorer().extractor().extract_features(text)
    }
}
