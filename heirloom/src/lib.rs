//! # Heirloom
//!
//! Text-based photo matching and relevance search for self-hosted family
//! memory archives. Memories are free-form narrative text; photos carry a
//! title, a description and a year. Heirloom links the two with a
//! deterministic, explainable heuristic scorer instead of computer vision.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use heirloom::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ConfigBuilder::new()
//!         .with_archive_file("family.json")
//!         .build()?;
//!     let manager = heirloom::init(config).await?;
//!
//!     // Rank unlinked photos for memory 7 and accept the best one
//!     let suggestions = manager.suggest_photos_for_memory(7, None).await?;
//!     if let Some(best) = suggestions.first() {
//!         manager.apply_suggestion(7, best.photo_id).await?;
//!     }
//!
//!     // Query-driven memory search
//!     let hits = manager.search_memories("Who was Peter Elgar?", None).await?;
//!     println!("{} matching memories", hits.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **extraction**: names, keywords and visual-description phrases pulled out
//!   of memory text through regex pattern tables.
//! - **matching**: the photo-to-memory scorer, six bounded signals combined
//!   into a 0-100 score with human-readable reasons.
//! - **suggestion**: runs the scorer across candidate photos and manages
//!   memory-photo links through the storage traits.
//! - **search**: a separate relevance policy ranking memories against a query.
//! - **storage**: persistence traits plus in-memory and JSON archive stores.

pub mod config;
pub mod core;
pub mod extraction;
pub mod logging;
pub mod matching;
pub mod models;
pub mod search;
pub mod storage;
pub mod suggestion;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::core::ArchiveManager;
    pub use crate::{init, init_with_defaults};

    pub use crate::config::{
        ConfigBuilder, ConfigLoader, HeirloomConfig, LogFormat, LogLevel, MatchingConfig,
        SearchConfig, StorageBackend, StorageConfig,
    };

    pub use crate::extraction::{FeatureExtractor, RegexFeatureExtractor, TextFeatures};
    pub use crate::matching::{MatchResult, MatchScorer, SignalBreakdown};
    pub use crate::models::{
        LinkedPhoto, MediaId, MediaRecord, Memory, MemoryBuilder, MemoryId, MemoryMediaLink,
        PhotoMetadata,
    };
    pub use crate::search::{RelevanceSearchEngine, SearchHit};
    pub use crate::storage::{
        ArchiveStore, FamilyStore, InMemoryStore, LinkStore, MediaStore, MemoryStore,
        StorageError,
    };
    pub use crate::suggestion::{LinkOutcome, Suggestion, SuggestionOutcome, SuggestionPipeline};

    pub use crate::{HeirloomError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Heirloom operations
#[derive(Debug, thiserror::Error)]
pub enum HeirloomError {
    /// Error raised by the persistence collaborator
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// A memory id did not resolve
    #[error("Memory {id} not found. Check the id with `heirloom suggest-all` or your archive file")]
    MemoryNotFound { id: models::MemoryId },

    /// A media id did not resolve
    #[error("Photo {id} not found. Check that the photo exists in the archive")]
    MediaNotFound { id: models::MediaId },

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for HeirloomError {
    fn from(err: crate::config::ConfigError) -> Self {
        HeirloomError::Configuration(err.to_string())
    }
}

/// Result type for Heirloom operations
pub type Result<T> = std::result::Result<T, HeirloomError>;

/// Initialize Heirloom with configuration loaded from the default files and
/// `HEIRLOOM_*` environment variables.
pub async fn init_with_defaults() -> Result<crate::core::ArchiveManager> {
    let config = config::ConfigLoader::new()
        .load_default_files()
        .load_env()
        .extract()?;
    init(config).await
}

/// Initialize Heirloom with the provided configuration
///
/// Installs the global tracing subscriber (a subscriber that is already set is
/// left in place), opens the configured store and wires the suggestion
/// pipeline and search engine around one shared feature extractor.
///
/// # Examples
///
/// ```rust,no_run
/// use heirloom::prelude::*;
///
/// async fn example() -> Result<()> {
///     let config = ConfigBuilder::new().with_memory_storage().build()?;
///     let manager = heirloom::init(config).await?;
///     let linked = manager.get_linked_photos(1).await?;
///     assert!(linked.is_empty());
///     Ok(())
/// }
/// ```
pub async fn init(config: config::HeirloomConfig) -> Result<crate::core::ArchiveManager> {
    // Logging problems never prevent the archive from opening
    let log_guard = logging::init(&config.logging).unwrap_or_default();

    let store = storage::create_store(&config.storage).await?;

    Ok(crate::core::ArchiveManager::new(store, config).with_log_guard(log_guard))
}
