//! Command handlers
//!
//! Each handler runs one command against the archive and prints the result as
//! a table or JSON depending on the output format.

pub mod inventory;
pub mod links;
pub mod search;
pub mod suggestion;

pub use inventory::{handle_extract, handle_memories, handle_photos};
pub use links::{handle_apply, handle_auto_link, handle_linked, handle_set_links, handle_unlink};
pub use search::handle_search;
pub use suggestion::{handle_score, handle_suggest, handle_suggest_all};
