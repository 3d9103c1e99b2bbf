use serde::{Deserialize, Serialize};

use crate::matching::MatchResult;
use crate::models::{MediaId, MediaRecord, MemoryId};

/// A ranked photo suggestion for one memory. Ephemeral; only an accepted
/// suggestion leaves a trace, as a link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    /// Memory the photo was scored against
    pub memory_id: MemoryId,

    pub photo_id: MediaId,
    pub filename: String,
    pub original_filename: Option<String>,

    /// Photo title, or the original filename when the title is blank
    pub title: String,

    pub description: Option<String>,

    /// Match score in `0..=100`
    pub score: u8,

    /// Reasons in signal order
    pub reasons: Vec<String>,

    /// Reasons joined with `" | "`, or "Potential match" when none fired
    pub reason: String,
}

impl Suggestion {
    pub(crate) fn from_match(memory_id: MemoryId, photo: &MediaRecord, result: MatchResult) -> Self {
        let reason = result.summary();
        let title = photo
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or(photo.original_filename.as_deref())
            .unwrap_or_default()
            .to_string();

        Self {
            memory_id,
            photo_id: photo.id,
            filename: photo.filename.clone(),
            original_filename: photo.original_filename.clone(),
            title,
            description: photo.description.clone(),
            score: result.score,
            reasons: result.reasons,
            reason,
        }
    }
}

/// Result of asking for suggestions for one memory
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    /// Suggestions at or above the threshold, best first. May be empty.
    Ranked(Vec<Suggestion>),

    /// The memory id did not resolve
    MemoryNotFound,
}

impl SuggestionOutcome {
    /// The suggestions, empty for an unknown memory
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        match self {
            SuggestionOutcome::Ranked(suggestions) => suggestions,
            SuggestionOutcome::MemoryNotFound => Vec::new(),
        }
    }

    pub fn is_memory_not_found(&self) -> bool {
        matches!(self, SuggestionOutcome::MemoryNotFound)
    }
}

/// Result of accepting a suggestion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LinkOutcome {
    /// A new link was appended at `display_order`
    Linked { display_order: i64 },

    /// The photo was already linked; nothing changed
    AlreadyLinked,

    MemoryNotFound,
    MediaNotFound,
}

impl LinkOutcome {
    /// True when the photo is linked after the call, new or not
    pub fn is_linked(&self) -> bool {
        matches!(
            self,
            LinkOutcome::Linked { .. } | LinkOutcome::AlreadyLinked
        )
    }
}
