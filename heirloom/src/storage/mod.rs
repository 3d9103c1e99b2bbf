//! Persistence collaborator
//!
//! The matching core reads memories and media and records links through the
//! traits in [`traits`]. Two backends are provided:
//!
//! - **InMemoryStore**: every table in process memory, for tests and
//!   embedding
//! - **ArchiveStore**: a JSON archive file, rewritten atomically on every
//!   mutation

pub mod archive;
pub mod errors;
pub mod memory_store;
pub mod snapshot;
pub mod traits;

use std::sync::Arc;

pub use archive::ArchiveStore;
pub use errors::{StorageError, StorageResult};
pub use memory_store::InMemoryStore;
pub use snapshot::ArchiveSnapshot;
pub use traits::{FamilyStore, LinkStore, MediaStore, MemoryStore};

use crate::config::{StorageBackend, StorageConfig};

/// Create the store described by `config`
pub async fn create_store(config: &StorageConfig) -> StorageResult<Arc<dyn FamilyStore>> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::debug!("Using in-memory store");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StorageBackend::Archive => {
            let path = config.archive_path.as_ref().ok_or_else(|| {
                StorageError::Validation("archive backend requires archive_path".to_string())
            })?;
            tracing::debug!(path = %path.display(), "Using archive store");
            Ok(Arc::new(ArchiveStore::open(path).await?))
        }
    }
}
