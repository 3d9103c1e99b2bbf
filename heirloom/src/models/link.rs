//! Memory-photo associations.

use serde::{Deserialize, Serialize};

use super::{MediaId, MemoryId};

/// A stored link between a memory and a media item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoryMediaLink {
    /// Linked memory
    pub memory_id: MemoryId,

    /// Linked media item
    pub media_id: MediaId,

    /// Position of the media item within the memory, ascending
    pub display_order: i64,
}

/// A linked photo as returned to callers, ordered by `order`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkedPhoto {
    pub photo_id: MediaId,
    pub filename: String,
    pub title: Option<String>,
    pub order: i64,
}

/// A person associated with a memory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoryPerson {
    pub memory_id: MemoryId,
    pub person_name: String,
}
