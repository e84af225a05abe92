//! Track catalog
//!
//! Fixed, ordered set of tracks defined once at startup. The order drives
//! "next track on end" and the element indices of both renderings.

use fanpage_core::types::{Track, TrackId, VinylView};

/// Ordered, immutable track list
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Create a catalog from tracks in play order
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// All tracks in play order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Vinyl projections, previewing each track's own source
    pub fn vinyl_views(&self) -> Vec<VinylView> {
        self.tracks.iter().map(VinylView::from_track).collect()
    }

    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Position of `id` in play order
    pub fn position(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    /// Track following `id`; `None` after the last track
    pub fn next_after(&self, id: &TrackId) -> Option<&Track> {
        self.position(id).and_then(|i| self.tracks.get(i + 1))
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl Default for Catalog {
    /// The shelf the page ships with
    fn default() -> Self {
        Self::new(vec![
            Track::new(
                "t1",
                "VIP",
                "https://open.spotify.com/track/6yUKgDm2hKR04i683jyI9E?si=385afd4d70bf4ba7",
                "Melancholy",
            ),
            Track::new(
                "t2",
                "Eris",
                "https://open.spotify.com/track/1hkeOMjQBepbab9gFcJMbK?si=b1da8ddb89bf42fa",
                "Melancholy",
            ),
            Track::new("t3", "Amy", "media/soft-morning.mp3", "Melancholy"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_after_follows_order_without_wrapping() {
        let catalog = Catalog::default();
        assert_eq!(catalog.next_after(&TrackId::new("t1")).unwrap().id.as_str(), "t2");
        assert_eq!(catalog.next_after(&TrackId::new("t2")).unwrap().id.as_str(), "t3");
        assert!(catalog.next_after(&TrackId::new("t3")).is_none());
        assert!(catalog.next_after(&TrackId::new("missing")).is_none());
    }

    #[test]
    fn vinyl_views_mirror_tracks() {
        let catalog = Catalog::default();
        let vinyls = catalog.vinyl_views();

        assert_eq!(vinyls.len(), catalog.len());
        for (vinyl, track) in vinyls.iter().zip(catalog.tracks()) {
            assert_eq!(&vinyl.track, track);
            assert_eq!(vinyl.preview.as_deref(), Some(track.src.as_str()));
        }
    }
}
