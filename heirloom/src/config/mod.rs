//! Configuration system for Heirloom.
//!
//! Configuration is layered: built-in defaults, then an optional file
//! (TOML, YAML or JSON), then `HEIRLOOM_` environment variables. Nested keys
//! use `__` in environment variables, e.g. `HEIRLOOM_MATCHING__THRESHOLD=55`.

mod builder;
mod loader;
mod models;
#[cfg(test)]
mod tests;
pub mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "heirloom.toml",
    "heirloom.yaml",
    "heirloom.yml",
    "heirloom.json",
    ".heirloom/config.toml",
    ".heirloom/config.yaml",
    ".heirloom/config.yml",
    ".heirloom/config.json",
];

/// Environment variable prefix for Heirloom configuration
pub const ENV_PREFIX: &str = "HEIRLOOM_";

/// Separator between nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during environment loading
    #[error("Failed to load environment variables: {0}")]
    EnvLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),

    /// General error
    #[error("{0}")]
    Other(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
