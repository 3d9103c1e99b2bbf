//! Trait definitions for the persistence collaborator
//!
//! The matching core never touches storage directly. The suggestion pipeline
//! and the search engine read memories, media and links through these traits,
//! so any backend (an in-process table, a JSON archive, a relational database)
//! can sit behind them.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::models::{LinkedPhoto, MediaId, MediaRecord, Memory, MemoryId};
use crate::storage::errors::StorageResult;

/// Read access to memories and the people attached to them
#[async_trait]
pub trait MemoryStore: Send + Sync + Debug {
    /// Get a memory by its ID
    async fn get_memory(&self, id: MemoryId) -> StorageResult<Option<Memory>>;

    /// All memories, ordered by ID
    async fn list_memories(&self) -> StorageResult<Vec<Memory>>;

    /// Names of the people attached to a memory, in insertion order
    async fn people_for_memory(&self, id: MemoryId) -> StorageResult<Vec<String>>;
}

/// Read access to uploaded media
#[async_trait]
pub trait MediaStore: Send + Sync + Debug {
    /// Get a media record by its ID
    async fn get_media(&self, id: MediaId) -> StorageResult<Option<MediaRecord>>;

    /// All media records, ordered by ID
    async fn list_media(&self) -> StorageResult<Vec<MediaRecord>>;

    /// Media of `file_type` not currently linked to `memory_id`, ordered by ID.
    ///
    /// This is the candidate exclusion query: a photo already linked to the
    /// memory must never appear in the result.
    async fn unlinked_media_for_memory(
        &self,
        memory_id: MemoryId,
        file_type: &str,
    ) -> StorageResult<Vec<MediaRecord>>;
}

/// Memory-media links with a display order
#[async_trait]
pub trait LinkStore: Send + Sync + Debug {
    /// Append a link at the end of the memory's display order.
    ///
    /// Reads the current maximum order and inserts at `max + 1`, or `0` when the
    /// memory has no links. The read and the insert happen atomically.
    ///
    /// # Returns
    /// The assigned display order, or `None` if the link already existed
    async fn append_link(&self, memory_id: MemoryId, media_id: MediaId)
    -> StorageResult<Option<i64>>;

    /// Linked media of a memory ordered by display order, ties by insertion
    async fn linked_media(&self, memory_id: MemoryId) -> StorageResult<Vec<LinkedPhoto>>;

    /// Remove one link; returns whether a link was removed
    async fn remove_link(&self, memory_id: MemoryId, media_id: MediaId) -> StorageResult<bool>;

    /// Replace every link of a memory with `media_ids`, ordered as given
    async fn replace_links(&self, memory_id: MemoryId, media_ids: Vec<MediaId>)
    -> StorageResult<()>;
}

/// Everything the suggestion pipeline needs from a backend
pub trait FamilyStore: MemoryStore + MediaStore + LinkStore {}

impl<T: MemoryStore + MediaStore + LinkStore + ?Sized> FamilyStore for T {}
