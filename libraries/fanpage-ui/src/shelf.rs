//! Media shelf rendering
//!
//! The playlist and the vinyl shelf are two renderings of one catalog. Both
//! read their marks from the `ViewSynchronizer`; element indices follow
//! catalog order so bindings line up with the synchronizer's `ElementRef`s.

use crate::html::escape_html;
use fanpage_core::types::{ElementRef, Mark, TrackId, VinylView};
use fanpage_playback::{Catalog, ViewSynchronizer};
use serde::Serialize;
use std::fmt::Write;

/// Pointer interaction bound to a shelf element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ShelfAction {
    /// Click on a playlist row or vinyl tile
    Activate {
        track_id: TrackId,
        element: ElementRef,
    },
    /// Pointer entered a vinyl tile
    PreviewStart { element: ElementRef },
    /// Pointer left a vinyl tile
    PreviewStop { element: ElementRef },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistRow {
    pub element: ElementRef,
    pub track_id: TrackId,
    pub title: String,
    pub artist: String,
    pub src: String,
    pub playing: bool,
}

impl PlaylistRow {
    pub fn on_click(&self) -> ShelfAction {
        ShelfAction::Activate {
            track_id: self.track_id.clone(),
            element: self.element,
        }
    }

    fn class_list(&self) -> String {
        let mut classes = String::from("playlist-item");
        if self.playing {
            classes.push(' ');
            classes.push_str(Mark::Playing.class_name());
        }
        classes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VinylTile {
    pub element: ElementRef,
    pub track_id: TrackId,
    pub title: String,
    pub artist: String,
    pub src: String,
    pub preview: Option<String>,
    pub playing: bool,
    pub previewing: bool,
}

impl VinylTile {
    pub fn on_click(&self) -> ShelfAction {
        ShelfAction::Activate {
            track_id: self.track_id.clone(),
            element: self.element,
        }
    }

    pub fn on_enter(&self) -> ShelfAction {
        ShelfAction::PreviewStart {
            element: self.element,
        }
    }

    pub fn on_leave(&self) -> ShelfAction {
        ShelfAction::PreviewStop {
            element: self.element,
        }
    }

    fn class_list(&self) -> String {
        let mut classes = String::from("vinyl");
        for (on, mark) in [
            (self.playing, Mark::Playing),
            (self.previewing, Mark::Previewing),
        ] {
            if on {
                classes.push(' ');
                classes.push_str(mark.class_name());
            }
        }
        classes
    }
}

/// Both renderings of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelfView {
    pub playlist: Vec<PlaylistRow>,
    pub vinyl: Vec<VinylTile>,
}

impl ShelfView {
    /// Every pointer binding: row clicks, then tile click/enter/leave
    pub fn bindings(&self) -> Vec<ShelfAction> {
        let rows = self.playlist.iter().map(PlaylistRow::on_click);
        let tiles = self
            .vinyl
            .iter()
            .flat_map(|t| [t.on_click(), t.on_enter(), t.on_leave()]);
        rows.chain(tiles).collect()
    }

    /// Inner HTML of the playlist container
    pub fn playlist_html(&self) -> String {
        let mut html = String::new();
        for row in &self.playlist {
            let _ = write!(
                html,
                "<li class=\"{}\" data-id=\"{}\" data-src=\"{}\"><div><strong>{}</strong> — \
                 <span class=\"muted\">{}</span></div><div class=\"controls-small\">Play</div></li>",
                row.class_list(),
                escape_html(row.track_id.as_str()),
                escape_html(&row.src),
                escape_html(&row.title),
                escape_html(&row.artist),
            );
        }
        html
    }

    /// Inner HTML of the vinyl shelf container
    ///
    /// Each tile carries an SVG with the title and artist wrapped around the
    /// record plus a readable center label.
    pub fn vinyl_html(&self) -> String {
        let mut html = String::new();
        for tile in &self.vinyl {
            let id = escape_html(tile.track_id.as_str());
            let path_id = format!("vinyl-path-{id}");
            let around = escape_html(&format!("{} • {} • ", tile.title, tile.artist));
            let _ = write!(
                html,
                "<div class=\"{}\" data-id=\"{id}\" data-src=\"{}\">\
                 <svg class=\"vinyl-svg\" viewBox=\"0 0 120 120\" xmlns=\"http://www.w3.org/2000/svg\" aria-hidden=\"true\">\
                 <defs><path id=\"{path_id}\" d=\"M60,60 m -36,0 a 36,36 0 1,1 72,0 a 36,36 0 1,1 -72,0\"></path></defs>\
                 <g transform=\"rotate(-12 60 60)\"><text class=\"around-text\" dy=\"-6\">\
                 <textPath href=\"#{path_id}\" startOffset=\"50%\" text-anchor=\"middle\">{around}</textPath>\
                 </text></g></svg>\
                 <div class=\"label center\">{}<small>{}</small></div></div>",
                tile.class_list(),
                escape_html(&tile.src),
                escape_html(&tile.title),
                escape_html(&tile.artist),
            );
        }
        html
    }
}

/// Render the playlist and vinyl shelf with their current marks
pub fn render_shelf(catalog: &Catalog, view: &ViewSynchronizer) -> ShelfView {
    let playlist = catalog
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let element = ElementRef::playlist(i);
            PlaylistRow {
                element,
                track_id: track.id.clone(),
                title: track.title.clone(),
                artist: track.artist.clone(),
                src: track.src.clone(),
                playing: view.is_marked(element, Mark::Playing),
            }
        })
        .collect();

    let vinyl = catalog
        .vinyl_views()
        .into_iter()
        .enumerate()
        .map(|(i, vinyl)| vinyl_tile(ElementRef::vinyl(i), vinyl, view))
        .collect();

    ShelfView { playlist, vinyl }
}

fn vinyl_tile(element: ElementRef, vinyl: VinylView, view: &ViewSynchronizer) -> VinylTile {
    VinylTile {
        element,
        track_id: vinyl.track.id,
        title: vinyl.track.title,
        artist: vinyl.track.artist,
        src: vinyl.track.src,
        preview: vinyl.preview,
        playing: view.is_marked(element, Mark::Playing),
        previewing: view.is_marked(element, Mark::Previewing),
    }
}
