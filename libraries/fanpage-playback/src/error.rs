//! Error types for playback management

use fanpage_core::types::TrackId;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Track id is not part of the catalog
    #[error("Unknown track: {0}")]
    UnknownTrack(TrackId),

    /// Element address outside the rendered collection
    #[error("No element at {0}")]
    UnknownElement(fanpage_core::types::ElementRef),

    /// Capability failure
    #[error(transparent)]
    Platform(#[from] fanpage_core::FanpageError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
