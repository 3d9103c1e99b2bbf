//! Core archive functionality

pub mod archive_manager;

pub use archive_manager::ArchiveManager;
