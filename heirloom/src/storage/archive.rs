//! JSON archive store.
//!
//! The whole archive lives in one JSON document (see [`ArchiveSnapshot`]).
//! It is read once on open and rewritten after every mutation: the new
//! content goes to a sibling temporary file which is then renamed over the
//! archive, so a crash never leaves a half-written file behind. If the write
//! fails the in-memory tables are restored to their previous state and the
//! error is returned, leaving no partial link state.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, error};

use super::errors::{StorageError, StorageResult};
use super::snapshot::ArchiveSnapshot;
use super::traits::{LinkStore, MediaStore, MemoryStore};
use crate::models::{LinkedPhoto, MediaId, MediaRecord, Memory, MemoryId};

const TEMP_SUFFIX: &str = "tmp";

/// A family archive persisted as a JSON file
#[derive(Debug)]
pub struct ArchiveStore {
    path: PathBuf,
    tables: RwLock<ArchiveSnapshot>,
}

impl ArchiveStore {
    /// Open an archive file. A missing file opens as an empty archive and is
    /// created on the first write.
    pub async fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();

        let snapshot = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<ArchiveSnapshot>(&bytes).map_err(|e| {
                StorageError::Serialization(format!(
                    "Failed to parse archive {}: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Archive file not found, starting empty");
                ArchiveSnapshot::default()
            }
            Err(e) => {
                return Err(StorageError::Connection(format!(
                    "Failed to read archive {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        debug!(
            path = %path.display(),
            memories = snapshot.memories.len(),
            media = snapshot.media.len(),
            links = snapshot.links.len(),
            "Opened archive"
        );

        Ok(Self {
            path,
            tables: RwLock::new(snapshot),
        })
    }

    /// Path of the archive file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the current tables
    pub async fn snapshot(&self) -> ArchiveSnapshot {
        self.tables.read().await.clone()
    }

    /// Insert or replace a memory and persist
    pub async fn insert_memory(&self, memory: Memory) -> StorageResult<()> {
        self.mutate(|tables| tables.upsert_memory(memory)).await
    }

    /// Insert or replace a media record and persist
    pub async fn insert_media(&self, media: MediaRecord) -> StorageResult<()> {
        self.mutate(|tables| tables.upsert_media(media)).await
    }

    /// Attach a person to a memory and persist
    pub async fn add_person(
        &self,
        memory_id: MemoryId,
        person_name: impl Into<String>,
    ) -> StorageResult<()> {
        let person_name = person_name.into();
        self.mutate(|tables| tables.add_person(memory_id, person_name))
            .await
    }

    /// Apply `change` under the write lock, then persist. Restores the
    /// previous tables if persisting fails.
    async fn mutate<T>(&self, change: impl FnOnce(&mut ArchiveSnapshot) -> T) -> StorageResult<T> {
        let mut tables = self.tables.write().await;
        let previous = tables.clone();

        let output = change(&mut *tables);

        if let Err(e) = self.persist(&*tables).await {
            error!(path = %self.path.display(), error = %e, "Archive write failed, rolling back");
            *tables = previous;
            return Err(StorageError::Transaction(format!(
                "Failed to write archive {}: {}",
                self.path.display(),
                e
            )));
        }

        Ok(output)
    }

    async fn persist(&self, snapshot: &ArchiveSnapshot) -> StorageResult<()> {
        let json = serde_json::to_vec_pretty(snapshot)?;

        let mut temp = self.path.clone().into_os_string();
        temp.push(".");
        temp.push(TEMP_SUFFIX);
        let temp = PathBuf::from(temp);

        tokio::fs::write(&temp, &json).await?;
        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e.into());
        }

        debug!(path = %self.path.display(), bytes = json.len(), "Archive written");
        Ok(())
    }
}

#[async_trait]
impl MemoryStore for ArchiveStore {
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
impl MediaStore for ArchiveStore {
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
impl LinkStore for ArchiveStore {
    async fn append_link(
        &self,
        memory_id: MemoryId,
        media_id: MediaId,
    ) -> StorageResult<Option<i64>> {
        {
            // duplicate links are a no-op and need no write
            let tables = self.tables.read().await;
            if tables
                .links
                .iter()
                .any(|l| l.memory_id == memory_id && l.media_id == media_id)
            {
                return Ok(None);
            }
        }
        self.mutate(|tables| tables.append_link(memory_id, media_id))
            .await
    }

    async fn linked_media(&self, memory_id: MemoryId) -> StorageResult<Vec<LinkedPhoto>> {
        Ok(self.tables.read().await.linked(memory_id))
    }

    async fn remove_link(&self, memory_id: MemoryId, media_id: MediaId) -> StorageResult<bool> {
        self.mutate(|tables| tables.remove_link(memory_id, media_id))
            .await
    }

    async fn replace_links(
        &self,
        memory_id: MemoryId,
        media_ids: Vec<MediaId>,
    ) -> StorageResult<()> {
        self.mutate(|tables| tables.replace_links(memory_id, &media_ids))
            .await
    }
}
