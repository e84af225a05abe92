//! View synchronization
//!
//! The playlist and the vinyl shelf render the same catalog independently.
//! Their visual marks live here, keyed by catalog position, and are
//! recomputed from the current track id rather than diffed.

use crate::catalog::Catalog;
use crate::error::{PlaybackError, Result};
use fanpage_core::types::{Collection, ElementRef, Mark, TrackId};

/// Visual state of one rendered element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileState {
    pub track_id: TrackId,
    pub playing: bool,
    pub previewing: bool,
}

impl TileState {
    fn new(track_id: TrackId) -> Self {
        Self {
            track_id,
            playing: false,
            previewing: false,
        }
    }

    fn flag_mut(&mut self, mark: Mark) -> &mut bool {
        match mark {
            Mark::Playing => &mut self.playing,
            Mark::Previewing => &mut self.previewing,
        }
    }

    fn flag(&self, mark: Mark) -> bool {
        match mark {
            Mark::Playing => self.playing,
            Mark::Previewing => self.previewing,
        }
    }
}

/// Marks of playlist rows and vinyl tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSynchronizer {
    playlist: Vec<TileState>,
    vinyl: Vec<TileState>,
}

impl ViewSynchronizer {
    /// One row and one tile per catalog track, nothing marked
    pub fn new(catalog: &Catalog) -> Self {
        let states = || -> Vec<TileState> {
            catalog
                .tracks()
                .iter()
                .map(|t| TileState::new(t.id.clone()))
                .collect()
        };

        Self {
            playlist: states(),
            vinyl: states(),
        }
    }

    /// Primary sink started: mark exactly the elements bound to `current`
    pub fn reconcile(&mut self, current: Option<&TrackId>) {
        for state in self.playlist.iter_mut().chain(self.vinyl.iter_mut()) {
            state.playing = current == Some(&state.track_id);
        }
    }

    /// Primary sink paused: nothing spins, whatever is selected
    pub fn on_pause(&mut self) {
        for state in self.playlist.iter_mut().chain(self.vinyl.iter_mut()) {
            state.playing = false;
        }
    }

    /// Toggle one mark on one element
    pub fn set_mark(&mut self, element: ElementRef, mark: Mark, on: bool) -> Result<()> {
        let state = self
            .collection_mut(element.collection)
            .get_mut(element.index)
            .ok_or(PlaybackError::UnknownElement(element))?;
        *state.flag_mut(mark) = on;
        Ok(())
    }

    pub fn is_marked(&self, element: ElementRef, mark: Mark) -> bool {
        self.state(element).is_some_and(|s| s.flag(mark))
    }

    /// Track bound to `element`
    pub fn track_at(&self, element: ElementRef) -> Option<&TrackId> {
        self.state(element).map(|s| &s.track_id)
    }

    pub fn state(&self, element: ElementRef) -> Option<&TileState> {
        self.collection(element.collection).get(element.index)
    }

    /// States of one collection, in catalog order
    pub fn collection(&self, collection: Collection) -> &[TileState] {
        match collection {
            Collection::Playlist => &self.playlist,
            Collection::Vinyl => &self.vinyl,
        }
    }

    /// Every element currently carrying `mark`
    pub fn marked(&self, mark: Mark) -> Vec<ElementRef> {
        let rows = self
            .playlist
            .iter()
            .enumerate()
            .filter(|(_, s)| s.flag(mark))
            .map(|(i, _)| ElementRef::playlist(i));
        let tiles = self
            .vinyl
            .iter()
            .enumerate()
            .filter(|(_, s)| s.flag(mark))
            .map(|(i, _)| ElementRef::vinyl(i));
        rows.chain(tiles).collect()
    }

    fn collection_mut(&mut self, collection: Collection) -> &mut Vec<TileState> {
        match collection {
            Collection::Playlist => &mut self.playlist,
            Collection::Vinyl => &mut self.vinyl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconcile_marks_both_collections() {
        let catalog = Catalog::default();
        let mut view = ViewSynchronizer::new(&catalog);

        view.reconcile(Some(&TrackId::new("t2")));
        assert_eq!(
            view.marked(Mark::Playing),
            vec![ElementRef::playlist(1), ElementRef::vinyl(1)]
        );

        view.reconcile(None);
        assert!(view.marked(Mark::Playing).is_empty());
    }

    #[test]
    fn pause_clears_playing_but_not_previewing() {
        let catalog = Catalog::default();
        let mut view = ViewSynchronizer::new(&catalog);
        view.reconcile(Some(&TrackId::new("t3")));
        view.set_mark(ElementRef::vinyl(0), Mark::Previewing, true).unwrap();

        view.on_pause();
        assert!(view.marked(Mark::Playing).is_empty());
        assert!(view.is_marked(ElementRef::vinyl(0), Mark::Previewing));
    }

    #[test]
    fn out_of_range_element_is_rejected() {
        let mut view = ViewSynchronizer::new(&Catalog::default());
        let result = view.set_mark(ElementRef::vinyl(9), Mark::Playing, true);
        assert!(matches!(result, Err(PlaybackError::UnknownElement(_))));
        assert!(!view.is_marked(ElementRef::vinyl(9), Mark::Playing));
    }
}
