//! Playback Events
//!
//! Emitted by the playback controller for the application shell: the now
//! playing display, status messages, and logs all key off these.

use fanpage_core::types::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A local track was loaded into the primary sink
    TrackChanged {
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// "Now playing" text changed
    NowPlaying {
        /// `"{title} — {artist}"`
        text: String,
    },

    /// The platform refused to start playback
    PlaybackBlocked {
        track_id: TrackId,
        message: String,
    },

    /// An external track was handed to the opener
    ExternalOpened {
        track_id: TrackId,
        uri: String,
    },

    /// The opener failed for an external track
    ExternalFailed {
        track_id: TrackId,
        message: String,
    },

    /// The last track of the catalog ended; playback stops
    QueueFinished {
        /// ID of the finished track
        track_id: TrackId,
    },
}
