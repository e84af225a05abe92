/// Core error types for the fan page
use thiserror::Error;

/// Result type alias using `FanpageError`
pub type Result<T> = std::result::Result<T, FanpageError>;

/// Core error type for the fan page
///
/// Nothing in the page is fatal: callers log these and degrade to a limited
/// view instead of halting.
#[derive(Error, Debug)]
pub enum FanpageError {
    /// Persistent store could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Audio channel rejected an operation
    #[error("Audio error: {0}")]
    Audio(String),

    /// Playback start denied by the platform (e.g. autoplay policy)
    #[error("Playback blocked: {0}")]
    PlaybackBlocked(String),

    /// External resource could not be opened
    #[error("Open failed: {0}")]
    Opener(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl FanpageError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an audio error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Create a playback-blocked error
    pub fn playback_blocked(msg: impl Into<String>) -> Self {
        Self::PlaybackBlocked(msg.into())
    }

    /// Create an opener error
    pub fn opener(msg: impl Into<String>) -> Self {
        Self::Opener(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
