//! Configuration validation utilities.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &HeirloomConfig) -> Result<(), ConfigError> {
    validate_storage_config(&config.storage)?;
    validate_matching_config(&config.matching)?;
    validate_search_config(&config.search)?;

    Ok(())
}

fn validate_storage_config(config: &StorageConfig) -> Result<(), ConfigError> {
    if config.backend == StorageBackend::Archive {
        match &config.archive_path {
            None => {
                return Err(ConfigError::ValidationError(
                    "Archive backend requires an archive path".to_string(),
                ));
            }
            Some(path) if path.as_os_str().is_empty() => {
                return Err(ConfigError::ValidationError(
                    "Archive path cannot be empty".to_string(),
                ));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// A minimum search relevance must be a finite, non-negative number.
pub fn validate_search_threshold(threshold: f64) -> Result<(), ConfigError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "Search threshold must be a non-negative number, got {}",
            threshold
        )));
    }

    Ok(())
}

fn validate_matching_config(config: &MatchingConfig) -> Result<(), ConfigError> {
    if config.threshold > crate::matching::MAX_SCORE {
        return Err(ConfigError::ValidationError(format!(
            "Matching threshold must be between 0 and 100, got {}",
            config.threshold
        )));
    }

    if config.photo_file_type.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Photo file type cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    validate_search_threshold(config.threshold)?;

    if config.limit == 0 {
        return Err(ConfigError::ValidationError(
            "Search limit must be at least 1".to_string(),
        ));
    }

    Ok(())
}
