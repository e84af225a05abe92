//! Core types for playback management

use std::time::Duration;

/// Tunables of the primary and preview channels
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Preview channel volume, 0.0-1.0 (default: 0.22)
    pub preview_volume: f32,

    /// Where previews start, skipping intros (default: 5s)
    pub preview_offset: Duration,

    /// How long a preview runs before it stops itself (default: 6s)
    pub preview_duration: Duration,

    /// How long an external activation keeps its element marked (default: 2s)
    pub external_flag_duration: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            preview_volume: 0.22,
            preview_offset: Duration::from_secs(5),
            preview_duration: Duration::from_secs(6),
            external_flag_duration: Duration::from_secs(2),
        }
    }
}
