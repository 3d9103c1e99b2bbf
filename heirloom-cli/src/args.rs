//! Command argument structures
//!
//! This module contains all CLI argument structs organized by command category.

use clap::Args;
use heirloom::models::{MediaId, MemoryId};

// Suggestion command arguments
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Memory ID
    pub memory_id: MemoryId,

    /// Minimum score (0-100) a photo needs to be suggested
    #[arg(long, short)]
    pub threshold: Option<u8>,
}

#[derive(Args, Debug)]
pub struct SuggestAllArgs {
    /// Minimum score (0-100) a photo needs to be suggested
    #[arg(long, short)]
    pub threshold: Option<u8>,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Memory ID
    pub memory_id: MemoryId,

    /// Photo ID
    pub photo_id: MediaId,
}

// Link command arguments
#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Memory ID
    pub memory_id: MemoryId,

    /// Photo ID
    pub photo_id: MediaId,
}

#[derive(Args, Debug)]
pub struct LinkedArgs {
    /// Memory ID
    pub memory_id: MemoryId,
}

#[derive(Args, Debug)]
pub struct SetLinksArgs {
    /// Memory ID
    pub memory_id: MemoryId,

    /// Photo IDs in display order (comma-separated, e.g. 3,1,5); empty clears all links
    #[arg(value_delimiter = ',')]
    pub photo_ids: Vec<MediaId>,
}

#[derive(Args, Debug)]
pub struct AutoLinkArgs {
    /// Maximum distance in years between memory and photo
    #[arg(long, short, default_value_t = heirloom::suggestion::DEFAULT_YEAR_TOLERANCE)]
    pub tolerance: u32,
}

// Search and inspection arguments
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Minimum relevance (0-100) a memory needs to be returned
    #[arg(long, short)]
    pub threshold: Option<f64>,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Text to analyse
    #[arg(required_unless_present = "memory", conflicts_with = "memory")]
    pub text: Option<String>,

    /// Analyse a stored memory instead of free text
    #[arg(long, short)]
    pub memory: Option<MemoryId>,
}
