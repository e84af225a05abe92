use super::TrackId;
use serde::{Deserialize, Serialize};

/// A playable entry of the media shelf
///
/// `src` is either a local audio path or an external link; the playback
/// controller decides which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub src: String,
    pub artist: String,
}

impl Track {
    /// Create a new track
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        src: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId::new(id),
            title: title.into(),
            src: src.into(),
            artist: artist.into(),
        }
    }

    /// Text shown in the "now playing" display
    pub fn now_playing_label(&self) -> String {
        format!("{} — {}", self.title, self.artist)
    }
}

/// Presentation projection of a track for the vinyl shelf
///
/// `preview` starts out equal to `src` but can point at a shorter clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VinylView {
    pub track: Track,
    pub preview: Option<String>,
}

impl VinylView {
    /// Project a track, previewing its own source
    pub fn from_track(track: &Track) -> Self {
        let preview = Some(track.src.clone()).filter(|s| !s.is_empty());
        Self {
            track: track.clone(),
            preview,
        }
    }

    /// Replace the preview source
    #[must_use]
    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }

    pub fn id(&self) -> &TrackId {
        &self.track.id
    }
}
