//! Error types for storage operations

use std::error::Error;
use std::fmt;

/// Error type for storage operations
#[derive(Debug)]
pub enum StorageError {
    /// The backing store could not be opened or reached
    Connection(String),

    /// Reading or writing the backing file failed
    Io(String),

    /// Serialization/deserialization error
    Serialization(String),

    /// Data not found
    NotFound(String),

    /// A mutation could not be committed and was rolled back
    Transaction(String),

    /// Validation error
    Validation(String),

    /// Other error
    Other(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Connection(msg) => write!(f, "Connection error: {}", msg),
            StorageError::Io(msg) => write!(f, "I/O error: {}", msg),
            StorageError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::NotFound(msg) => write!(f, "Not found: {}", msg),
            StorageError::Transaction(msg) => write!(f, "Transaction error: {}", msg),
            StorageError::Validation(msg) => write!(f, "Validation error: {}", msg),
            StorageError::Other(msg) => write!(f, "Other error: {}", msg),
        }
    }
}

impl Error for StorageError {}

/// Convert a JSON error to a storage error
impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Convert a standard IO error to a storage error
impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

// This allows StorageError to be converted to the top-level HeirloomError
impl From<StorageError> for crate::HeirloomError {
    fn from(err: StorageError) -> Self {
        crate::HeirloomError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            StorageError::Transaction("rename failed".into()).to_string(),
            "Transaction error: rename failed"
        );
        assert_eq!(
            StorageError::NotFound("memory 4".into()).to_string(),
            "Not found: memory 4"
        );
    }

    #[test]
    fn test_converts_into_heirloom_error() {
        let err: crate::HeirloomError = StorageError::Io("disk full".into()).into();
        assert!(matches!(err, crate::HeirloomError::Storage(ref msg) if msg == "I/O error: disk full"));
    }
}
