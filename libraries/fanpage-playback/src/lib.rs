//! Fan Page - Playback Management
//!
//! Platform-agnostic control of the media shelf.
//!
//! This crate provides:
//! - Track catalog (fixed order, vinyl projections)
//! - Source classification (local audio file vs. external link)
//! - Primary playback with "next track on end" sequencing, no wraparound
//! - Hover preview on a separate, quieter channel with auto-stop
//! - View synchronization of playlist rows and vinyl tiles
//!
//! # Architecture
//!
//! `fanpage-playback` never touches a browser. Audio channels, the external
//! opener and timers are capability traits from `fanpage-core`; the "playing"
//! and "previewing" marks live in a `ViewSynchronizer` that a rendering
//! surface mirrors.
//!
//! # Example
//!
//! ```rust
//! use fanpage_core::testing::{RecordingOpener, RecordingSink};
//! use fanpage_core::types::{ElementRef, TrackId};
//! use fanpage_core::TimerQueue;
//! use fanpage_playback::{Catalog, PlaybackConfig, PlaybackController, TrackKind, ViewSynchronizer};
//!
//! let catalog = Catalog::default();
//! let mut view = ViewSynchronizer::new(&catalog);
//! let mut timers = TimerQueue::new();
//! let mut playback = PlaybackController::new(
//!     catalog,
//!     Box::new(RecordingSink::new()),
//!     Box::new(RecordingOpener::new()),
//!     PlaybackConfig::default(),
//! );
//!
//! let kind = playback
//!     .activate(&TrackId::new("t3"), ElementRef::playlist(2), &mut view, &mut timers)
//!     .unwrap();
//! assert_eq!(kind, TrackKind::LocalAudio);
//! assert_eq!(playback.now_playing(), Some("Amy — Melancholy"));
//! ```

mod catalog;
mod controller;
mod error;
pub mod events;
mod preview;
mod source;
mod sync;
pub mod types;

// Public exports
pub use catalog::Catalog;
pub use controller::{PlaybackController, EXTERNAL_FEATURES, EXTERNAL_TARGET};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use preview::PreviewController;
pub use source::{classify, TrackKind};
pub use sync::{TileState, ViewSynchronizer};
pub use types::PlaybackConfig;
