//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use std::path::Path;

/// Builder for creating HeirloomConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: HeirloomConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: HeirloomConfig::default(),
        }
    }

    /// Persist to a JSON archive file
    pub fn with_archive_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.storage.backend = StorageBackend::Archive;
        self.config.storage.archive_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep everything in memory (good for testing)
    pub fn with_memory_storage(mut self) -> Self {
        self.config.storage.backend = StorageBackend::Memory;
        self.config.storage.archive_path = None;
        self
    }

    /// Set the minimum score for photo suggestions.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.config.matching.threshold = threshold;
        self
    }

    /// Set the media file type treated as a photo.
    pub fn with_photo_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.config.matching.photo_file_type = file_type.into();
        self
    }

    /// Set the minimum relevance for search hits.
    pub fn with_search_threshold(mut self, threshold: f64) -> Self {
        self.config.search.threshold = threshold;
        self
    }

    /// Set the maximum number of search hits.
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.config.search.limit = limit;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Log to a file in addition to (or instead of) stdout.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable stdout logging.
    pub fn with_stdout_logging(mut self, enabled: bool) -> Self {
        self.config.logging.stdout = enabled;
        self
    }

    /// Create a configuration for testing: in-memory storage, warnings only.
    pub fn testing() -> Self {
        Self::new()
            .with_memory_storage()
            .with_log_level(LogLevel::Warn)
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<HeirloomConfig> {
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
