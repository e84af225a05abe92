//! Playback controller - primary sink orchestration
//!
//! Owns the current track id. Local audio goes to the primary sink, which is
//! exclusive; external links go to the opener and only get a short-lived
//! visual mark.

use crate::{
    catalog::Catalog,
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    source::{classify, TrackKind},
    sync::ViewSynchronizer,
    types::PlaybackConfig,
};
use fanpage_core::types::{ElementRef, Mark, TimerId, TimerTask, Track, TrackId};
use fanpage_core::{AudioSink, ExternalOpener, Scheduler};
use std::collections::HashMap;

/// Target hint for external tracks
pub const EXTERNAL_TARGET: &str = "_blank";

/// Window features for external tracks; the opened view gets no handle back
/// to the page
pub const EXTERNAL_FEATURES: &str = "noopener";

/// Primary playback state machine
pub struct PlaybackController {
    catalog: Catalog,
    sink: Box<dyn AudioSink>,
    opener: Box<dyn ExternalOpener>,
    config: PlaybackConfig,

    /// Single source of truth for which track is playing
    current_track_id: Option<TrackId>,

    now_playing: Option<String>,

    /// Pending transient-mark timers, one per element
    transient: HashMap<ElementRef, TimerId>,

    events: Vec<PlaybackEvent>,
}

impl PlaybackController {
    pub fn new(
        catalog: Catalog,
        sink: Box<dyn AudioSink>,
        opener: Box<dyn ExternalOpener>,
        config: PlaybackConfig,
    ) -> Self {
        Self {
            catalog,
            sink,
            opener,
            config,
            current_track_id: None,
            now_playing: None,
            transient: HashMap::new(),
            events: Vec::new(),
        }
    }

    // ===== Activation =====

    /// Playlist row or vinyl tile clicked
    ///
    /// Local audio replaces whatever the primary sink had loaded. External
    /// links are opened in a new view, `current_track_id` stays as it was,
    /// and `origin` is marked playing until the transient timer fires.
    pub fn activate(
        &mut self,
        track_id: &TrackId,
        origin: ElementRef,
        view: &mut ViewSynchronizer,
        scheduler: &mut dyn Scheduler,
    ) -> Result<TrackKind> {
        let track = self
            .catalog
            .get(track_id)
            .cloned()
            .ok_or_else(|| PlaybackError::UnknownTrack(track_id.clone()))?;

        let kind = classify(&track.src);
        tracing::debug!("Activating {} from {} as {:?}", track.id, origin, kind);

        match kind {
            TrackKind::LocalAudio => self.play(&track, view),
            TrackKind::External => self.open_external(&track, origin, view, scheduler)?,
        }

        Ok(kind)
    }

    /// Load `track` into the primary sink and start it
    ///
    /// A track without a source is ignored. A refused start is logged and
    /// reported as an event; the track still becomes current so the marks
    /// follow once the user starts it from the native controls.
    pub fn play(&mut self, track: &Track, view: &mut ViewSynchronizer) {
        if track.src.trim().is_empty() {
            tracing::debug!("Track {} has no source, not playing", track.id);
            return;
        }

        self.sink.load(&track.src);
        if let Err(e) = self.sink.play() {
            tracing::warn!("Playback blocked for {}: {}", track.id, e);
            self.events.push(PlaybackEvent::PlaybackBlocked {
                track_id: track.id.clone(),
                message: e.to_string(),
            });
        }

        let previous_track_id = self.current_track_id.replace(track.id.clone());
        view.reconcile(self.current_track_id.as_ref());

        let text = track.now_playing_label();
        self.now_playing = Some(text.clone());

        self.events.push(PlaybackEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id,
        });
        self.events.push(PlaybackEvent::NowPlaying { text });
    }

    fn open_external(
        &mut self,
        track: &Track,
        origin: ElementRef,
        view: &mut ViewSynchronizer,
        scheduler: &mut dyn Scheduler,
    ) -> Result<()> {
        match self
            .opener
            .open(&track.src, EXTERNAL_TARGET, EXTERNAL_FEATURES)
        {
            Ok(()) => self.events.push(PlaybackEvent::ExternalOpened {
                track_id: track.id.clone(),
                uri: track.src.clone(),
            }),
            Err(e) => {
                tracing::warn!("Could not open {} for {}: {}", track.src, track.id, e);
                self.events.push(PlaybackEvent::ExternalFailed {
                    track_id: track.id.clone(),
                    message: e.to_string(),
                });
            }
        }

        view.set_mark(origin, Mark::Playing, true)?;

        // Clicking the same element again restarts its window
        if let Some(previous) = self.transient.remove(&origin) {
            scheduler.cancel(previous);
        }
        let timer = scheduler.schedule_once(
            self.config.external_flag_duration,
            TimerTask::ReleaseTransient {
                element: origin,
                track_id: track.id.clone(),
            },
        );
        self.transient.insert(origin, timer);
        Ok(())
    }

    /// Transient timer fired
    ///
    /// Clears the mark unless `track_id` became the current track in the
    /// meantime. Returns `false` for a timer that was replaced.
    pub fn release_transient(
        &mut self,
        timer: TimerId,
        element: ElementRef,
        track_id: &TrackId,
        view: &mut ViewSynchronizer,
    ) -> bool {
        if self.transient.get(&element) != Some(&timer) {
            tracing::debug!("Ignoring stale {} for {}", timer, element);
            return false;
        }
        self.transient.remove(&element);

        if self.current_track_id.as_ref() != Some(track_id) {
            if let Err(e) = view.set_mark(element, Mark::Playing, false) {
                tracing::warn!("Could not clear transient mark: {}", e);
            }
        }
        true
    }

    // ===== Sink lifecycle =====

    /// Primary sink reached the end of the current track
    ///
    /// Plays the next track in catalog order and returns its id. After the
    /// last track playback stops; there is no wraparound.
    pub fn on_ended(&mut self, view: &mut ViewSynchronizer) -> Option<TrackId> {
        let current = self.current_track_id.clone()?;

        match self.catalog.next_after(&current).cloned() {
            Some(next) => {
                self.play(&next, view);
                Some(next.id)
            }
            None => {
                tracing::debug!("Reached end of catalog after {}", current);
                self.events
                    .push(PlaybackEvent::QueueFinished { track_id: current });
                None
            }
        }
    }

    // ===== State Queries =====

    pub fn current_track_id(&self) -> Option<&TrackId> {
        self.current_track_id.as_ref()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track_id
            .as_ref()
            .and_then(|id| self.catalog.get(id))
    }

    /// `"{title} — {artist}"` of the last track played
    pub fn now_playing(&self) -> Option<&str> {
        self.now_playing.as_deref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Whether `element` has a transient timer armed
    pub fn has_transient(&self, element: ElementRef) -> bool {
        self.transient.contains_key(&element)
    }

    // ===== Events =====

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}
