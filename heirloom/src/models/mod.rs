//! Record types read by the scorer and owned by the persistence layer.

mod link;
mod media;
mod memory;
pub mod year;

pub use link::{LinkedPhoto, MemoryMediaLink, MemoryPerson};
pub use media::{MediaId, MediaRecord, PhotoMetadata, IMAGE_FILE_TYPE};
pub use memory::{Memory, MemoryBuilder, MemoryId};
pub use year::parse_year;
