//! In-process store for tests, demos and embedding.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::errors::StorageResult;
use super::snapshot::ArchiveSnapshot;
use super::traits::{LinkStore, MediaStore, MemoryStore};
use crate::models::{LinkedPhoto, MediaId, MediaRecord, Memory, MemoryId};

/// A store holding every table in memory.
///
/// All tables sit behind one `RwLock`, so `append_link` performs its
/// read-max/insert inside a single write critical section.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<ArchiveSnapshot>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `snapshot`
    pub fn from_snapshot(snapshot: ArchiveSnapshot) -> Self {
        Self {
            tables: RwLock::new(snapshot),
        }
    }

    /// Insert or replace a memory
    pub async fn insert_memory(&self, memory: Memory) {
        self.tables.write().await.upsert_memory(memory);
    }

    /// Insert or replace a media record
    pub async fn insert_media(&self, media: MediaRecord) {
        self.tables.write().await.upsert_media(media);
    }

    /// Attach a person to a memory
    pub async fn add_person(&self, memory_id: MemoryId, person_name: impl Into<String>) {
        self.tables.write().await.add_person(memory_id, person_name);
    }

    /// Copy of the current tables
    pub async fn snapshot(&self) -> ArchiveSnapshot {
        self.tables.read().await.clone()
    }
}

#[async_trait]
impl MemoryStore for InMemoryStore {
    async fn get_memory(&self, id: MemoryId) -> StorageResult<Option<Memory>> {
        Ok(self.tables.read().await.memory(id))
    }

    async fn list_memories(&self) -> StorageResult<Vec<Memory>> {
        Ok(self.tables.read().await.memories_by_id())
    }

    async fn people_for_memory(&self, id: MemoryId) -> StorageResult<Vec<String>> {
        Ok(self.tables.read().await.people_for(id))
    }
}

#[async_trait]
impl MediaStore for InMemoryStore {
    async fn get_media(&self, id: MediaId) -> StorageResult<Option<MediaRecord>> {
        Ok(self.tables.read().await.media_item(id))
    }

    async fn list_media(&self) -> StorageResult<Vec<MediaRecord>> {
        Ok(self.tables.read().await.media_by_id())
    }

    async fn unlinked_media_for_memory(
        &self,
        memory_id: MemoryId,
        file_type: &str,
    ) -> StorageResult<Vec<MediaRecord>> {
        Ok(self.tables.read().await.unlinked_media(memory_id, file_type))
    }
}

#[async_trait]
impl LinkStore for InMemoryStore {
    async fn append_link(
        &self,
        memory_id: MemoryId,
        media_id: MediaId,
    ) -> StorageResult<Option<i64>> {
        Ok(self.tables.write().await.append_link(memory_id, media_id))
    }

    async fn linked_media(&self, memory_id: MemoryId) -> StorageResult<Vec<LinkedPhoto>> {
        Ok(self.tables.read().await.linked(memory_id))
    }

    async fn remove_link(&self, memory_id: MemoryId, media_id: MediaId) -> StorageResult<bool> {
        Ok(self.tables.write().await.remove_link(memory_id, media_id))
    }

    async fn replace_links(
        &self,
        memory_id: MemoryId,
        media_ids: Vec<MediaId>,
    ) -> StorageResult<()> {
        self.tables.write().await.replace_links(memory_id, &media_ids);
        Ok(())
    }
}
