/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key-value backend refused the operation
    #[error("Backend error: {0}")]
    Backend(#[from] fanpage_core::FanpageError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for fanpage_core::FanpageError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Backend(inner) => inner,
            other => fanpage_core::FanpageError::storage(other.to_string()),
        }
    }
}
