//! Command enum definitions
//!
//! This module contains the top-level parser and the command enum that define
//! the command structure.

use std::path::PathBuf;

use crate::args::*;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "heirloom",
    version,
    about = "Match family photos to written memories and search the archive",
    long_about = None
)]
pub struct Cli {
    /// Archive file to open (overrides the configured storage)
    #[arg(long, short, global = true)]
    pub archive: Option<PathBuf>,

    /// Extra configuration file merged over the defaults
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json) - use json for tool integration
    #[arg(long, short, default_value = "table", global = true)]
    pub output: String,

    /// Use machine-readable output (alias for --output json)
    #[arg(long, global = true)]
    pub machine: bool,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (suppress all logging output)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display version information
    Version,

    /// List every memory in the archive
    Memories,

    /// List every photo and media item in the archive
    #[command(alias = "media")]
    Photos,

    /// Suggest photos for one memory, best match first
    #[command(
        long_about = r#"
Score every photo not yet linked to the memory and list the ones that reach
the threshold. Scores combine year proximity, visual descriptions, phrases,
names and shared keywords, capped at 100.

Examples:
  heirloom suggest 12
  heirloom suggest 12 --threshold 60
"#
    )]
    Suggest(SuggestArgs),

    /// Suggest photos for every memory in the archive
    SuggestAll(SuggestAllArgs),

    /// Explain how one photo scores against one memory
    Score(ScoreArgs),

    /// Link a photo to a memory at the end of its display order
    #[command(alias = "link")]
    Apply(LinkArgs),

    /// Remove one photo from a memory
    Unlink(LinkArgs),

    /// Show photos linked to a memory in display order
    Linked(LinkedArgs),

    /// Replace the photos linked to a memory
    SetLinks(SetLinksArgs),

    /// Link photos to memories by year proximity
    AutoLink(AutoLinkArgs),

    /// Search memories by relevance
    #[command(
        alias = "find",
        long_about = r#"
Rank memories against a free-text query. Whole-phrase matches, names and
shared words all count; questions like "who was Aunt May?" work as well.

Examples:
  heirloom search "summer at the cottage"
  heirloom search "who was Lily?" --threshold 30
"#
    )]
    Search(SearchArgs),

    /// Show the names, keywords and visual descriptions found in text
    Extract(ExtractArgs),
}
