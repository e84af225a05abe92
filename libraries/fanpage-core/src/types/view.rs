use serde::{Deserialize, Serialize};
use std::fmt;

/// The two renderings of the track catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Rows of the playlist
    Playlist,
    /// Tiles of the vinyl shelf
    Vinyl,
}

/// Address of one rendered element: its collection and catalog position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub collection: Collection,
    pub index: usize,
}

impl ElementRef {
    pub fn playlist(index: usize) -> Self {
        Self {
            collection: Collection::Playlist,
            index,
        }
    }

    pub fn vinyl(index: usize) -> Self {
        Self {
            collection: Collection::Vinyl,
            index,
        }
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.collection {
            Collection::Playlist => write!(f, "playlist[{}]", self.index),
            Collection::Vinyl => write!(f, "vinyl[{}]", self.index),
        }
    }
}

/// Visual state toggled on an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Spinning / highlighted as the playing track
    Playing,
    /// Hover preview running
    Previewing,
}

impl Mark {
    /// CSS class a rendering surface toggles for this mark
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Previewing => "previewing",
        }
    }
}
