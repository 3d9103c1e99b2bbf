//! Suggestion pipeline: candidate selection, thresholding, ranking and links.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::types::{LinkOutcome, Suggestion, SuggestionOutcome};
use crate::config::MatchingConfig;
use crate::extraction::TextFeatures;
use crate::matching::{MatchResult, MatchScorer};
use crate::models::{LinkedPhoto, MediaId, MediaRecord, Memory, MemoryId, PhotoMetadata};
use crate::storage::FamilyStore;
use crate::{HeirloomError, Result};

/// Default year tolerance for [`SuggestionPipeline::auto_link_by_year`]
pub const DEFAULT_YEAR_TOLERANCE: u32 = 2;

/// Photos linked per memory by [`SuggestionPipeline::auto_link_by_year`]
pub const MAX_AUTO_LINKS: usize = 2;

/// Drives the scorer across candidate photos and manages memory-photo links.
#[derive(Debug, Clone)]
pub struct SuggestionPipeline {
    store: Arc<dyn FamilyStore>,
    scorer: MatchScorer,
    config: MatchingConfig,
}

impl SuggestionPipeline {
    /// Create a pipeline over `store`
    pub fn new(store: Arc<dyn FamilyStore>, scorer: MatchScorer, config: MatchingConfig) -> Self {
        Self {
            store,
            scorer,
            config,
        }
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Score one photo against one memory without touching the store
    pub fn score_photo_match(
        &self,
        memory_text: &str,
        memory_year: Option<i32>,
        photo: &PhotoMetadata,
    ) -> MatchResult {
        self.scorer
            .score_photo_match(memory_text, memory_year, photo)
    }

    /// Rank the unlinked photos of a memory.
    ///
    /// Candidates are the store's unlinked photos in id order. Photos scoring
    /// at least `threshold` (the configured default when `None`) are kept and
    /// sorted best first; equal scores keep candidate order.
    pub async fn suggest_for_memory(
        &self,
        memory_id: MemoryId,
        threshold: Option<u8>,
    ) -> Result<SuggestionOutcome> {
        let threshold = threshold.unwrap_or(self.config.threshold);

        let Some(memory) = self.store.get_memory(memory_id).await? else {
            warn!(memory_id, "Memory not found, no suggestions");
            return Ok(SuggestionOutcome::MemoryNotFound);
        };

        let candidates = self
            .store
            .unlinked_media_for_memory(memory_id, &self.config.photo_file_type)
            .await?;
        let candidate_count = candidates.len();

        let suggestions = self.rank_candidates(&memory, &candidates, threshold);

        info!(
            memory_id,
            candidates = candidate_count,
            suggestions = suggestions.len(),
            threshold,
            "Suggestion batch complete"
        );

        Ok(SuggestionOutcome::Ranked(suggestions))
    }

    /// Like [`suggest_for_memory`](Self::suggest_for_memory), with an unknown
    /// memory reported as an empty list
    pub async fn suggest_photos_for_memory(
        &self,
        memory_id: MemoryId,
        threshold: Option<u8>,
    ) -> Result<Vec<Suggestion>> {
        Ok(self
            .suggest_for_memory(memory_id, threshold)
            .await?
            .into_suggestions())
    }

    /// Suggestions for every memory, keyed by memory id. Memories without a
    /// qualifying suggestion are left out.
    pub async fn suggest_for_all_memories(
        &self,
        threshold: Option<u8>,
    ) -> Result<BTreeMap<MemoryId, Vec<Suggestion>>> {
        let memories = self.store.list_memories().await?;
        let mut all = BTreeMap::new();

        for memory in &memories {
            let suggestions = self.suggest_photos_for_memory(memory.id, threshold).await?;
            if suggestions.is_empty() {
                debug!(memory_id = memory.id, "No suggestions");
            } else {
                all.insert(memory.id, suggestions);
            }
        }

        info!(
            memories = memories.len(),
            with_suggestions = all.len(),
            "Scored all memories"
        );
        Ok(all)
    }

    fn rank_candidates(
        &self,
        memory: &Memory,
        candidates: &[MediaRecord],
        threshold: u8,
    ) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = candidates
            .iter()
            .filter_map(|photo| {
                let result =
                    self.scorer
                        .score_photo_match(&memory.text, memory.year, &photo.metadata());
                debug!(
                    memory_id = memory.id,
                    photo_id = photo.id,
                    score = result.score,
                    "Scored candidate"
                );
                (result.score >= threshold)
                    .then(|| Suggestion::from_match(memory.id, photo, result))
            })
            .collect();

        // stable: ties keep candidate order
        suggestions.sort_by(|a, b| b.score.cmp(&a.score));
        suggestions
    }

    /// Accept a suggestion by linking the photo at the end of the memory's
    /// display order. Linking an already linked photo changes nothing.
    pub async fn apply_suggestion(
        &self,
        memory_id: MemoryId,
        photo_id: MediaId,
    ) -> Result<LinkOutcome> {
        if self.store.get_memory(memory_id).await?.is_none() {
            warn!(memory_id, "Cannot link photo to unknown memory");
            return Ok(LinkOutcome::MemoryNotFound);
        }
        if self.store.get_media(photo_id).await?.is_none() {
            warn!(photo_id, "Cannot link unknown photo");
            return Ok(LinkOutcome::MediaNotFound);
        }

        match self.store.append_link(memory_id, photo_id).await {
            Ok(Some(display_order)) => {
                info!(memory_id, photo_id, display_order, "Linked photo to memory");
                Ok(LinkOutcome::Linked { display_order })
            }
            Ok(None) => {
                debug!(memory_id, photo_id, "Photo already linked");
                Ok(LinkOutcome::AlreadyLinked)
            }
            Err(e) => {
                error!(memory_id, photo_id, error = %e, "Failed to link photo");
                Err(e.into())
            }
        }
    }

    /// Photos linked to a memory, by display order ascending
    pub async fn linked_photos(&self, memory_id: MemoryId) -> Result<Vec<LinkedPhoto>> {
        Ok(self.store.linked_media(memory_id).await?)
    }

    /// Remove one link. Returns whether a link existed.
    pub async fn unlink_photo(&self, memory_id: MemoryId, photo_id: MediaId) -> Result<bool> {
        let removed = self.store.remove_link(memory_id, photo_id).await?;
        if removed {
            info!(memory_id, photo_id, "Unlinked photo");
        }
        Ok(removed)
    }

    /// Replace all links of a memory with `photo_ids`, in the given order.
    ///
    /// # Errors
    /// `MemoryNotFound` or `MediaNotFound` when an id does not resolve; the
    /// existing links are left untouched in that case.
    pub async fn set_linked_photos(
        &self,
        memory_id: MemoryId,
        photo_ids: Vec<MediaId>,
    ) -> Result<()> {
        if self.store.get_memory(memory_id).await?.is_none() {
            return Err(HeirloomError::MemoryNotFound { id: memory_id });
        }
        for &photo_id in &photo_ids {
            if self.store.get_media(photo_id).await?.is_none() {
                return Err(HeirloomError::MediaNotFound { id: photo_id });
            }
        }

        let count = photo_ids.len();
        self.store
            .replace_links(memory_id, photo_ids)
            .await
            .inspect_err(|e| error!(memory_id, error = %e, "Failed to replace links"))?;
        info!(memory_id, photos = count, "Replaced linked photos");
        Ok(())
    }

    /// Link photos to memories by year alone.
    ///
    /// For every memory with a year, up to [`MAX_AUTO_LINKS`] photos whose year
    /// is within `tolerance` are chosen, nearest year first and then lowest id.
    /// When any are found they replace that memory's existing links.
    ///
    /// # Returns
    /// The photos linked per memory, omitting memories that got none
    pub async fn auto_link_by_year(
        &self,
        tolerance: u32,
    ) -> Result<BTreeMap<MemoryId, Vec<MediaId>>> {
        let memories = self.store.list_memories().await?;
        let photos: Vec<MediaRecord> = self
            .store
            .list_media()
            .await?
            .into_iter()
            .filter(|m| m.file_type == self.config.photo_file_type)
            .collect();

        let mut linked = BTreeMap::new();
        for memory in &memories {
            let Some(memory_year) = memory.year else {
                continue;
            };

            let chosen = nearest_by_year(&photos, memory_year, tolerance);
            if chosen.is_empty() {
                continue;
            }

            debug!(memory_id = memory.id, photos = ?chosen, "Auto-linking by year");
            self.store.replace_links(memory.id, chosen.clone()).await?;
            linked.insert(memory.id, chosen);
        }

        info!(memories = linked.len(), tolerance, "Auto-linked by year");
        Ok(linked)
    }

    /// Names, keywords and visual descriptions extracted from a memory
    pub async fn describe_memory_features(&self, memory_id: MemoryId) -> Result<Option<TextFeatures>> {
        let memory = self.store.get_memory(memory_id).await?;
        Ok(memory.map(|m| self.scorer.extractor().extract_features(&m.text)))
    }
}

fn nearest_by_year(photos: &[MediaRecord], year: i32, tolerance: u32) -> Vec<MediaId> {
    let mut in_range: Vec<(u64, MediaId)> = photos
        .iter()
        .filter_map(|photo| {
            let distance = (i64::from(photo.year?) - i64::from(year)).unsigned_abs();
            (distance <= u64::from(tolerance)).then_some((distance, photo.id))
        })
        .collect();
    in_range.sort_unstable();

    in_range
        .into_iter()
        .take(MAX_AUTO_LINKS)
        .map(|(_, id)| id)
        .collect()
}
