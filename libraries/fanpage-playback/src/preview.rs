//! Hover preview channel
//!
//! A second audio channel, independent of the primary sink: both may be
//! loaded and audible at once. Previews are best-effort, so channel failures
//! are swallowed.

use crate::error::Result;
use crate::sync::ViewSynchronizer;
use crate::types::PlaybackConfig;
use fanpage_core::types::{ElementRef, Mark, TimerId, TimerTask, VinylView};
use fanpage_core::{AudioSink, Scheduler};
use std::time::Duration;

/// Preview channel with a single auto-stop timer
pub struct PreviewController {
    channel: Box<dyn AudioSink>,
    config: PlaybackConfig,

    /// At most one auto-stop outstanding
    auto_stop: Option<TimerId>,
}

impl PreviewController {
    pub fn new(channel: Box<dyn AudioSink>, config: PlaybackConfig) -> Self {
        Self {
            channel,
            config,
            auto_stop: None,
        }
    }

    /// Pointer entered a vinyl tile
    pub fn start_preview(
        &mut self,
        vinyl: &VinylView,
        element: ElementRef,
        view: &mut ViewSynchronizer,
        scheduler: &mut dyn Scheduler,
    ) -> Result<()> {
        let Some(preview) = vinyl.preview.as_deref().filter(|p| !p.is_empty()) else {
            return Ok(());
        };

        view.set_mark(element, Mark::Previewing, true)?;

        self.channel.load(preview);
        self.channel.set_volume(self.config.preview_volume);
        let _ = self.channel.seek(self.config.preview_offset);
        if let Err(e) = self.channel.play() {
            tracing::debug!("Preview of {} did not start: {}", vinyl.id(), e);
        }

        if let Some(previous) = self.auto_stop.take() {
            scheduler.cancel(previous);
        }
        self.auto_stop =
            Some(scheduler.schedule_once(self.config.preview_duration, TimerTask::PreviewAutoStop));
        Ok(())
    }

    /// Pointer left a vinyl tile
    pub fn stop_preview(
        &mut self,
        element: ElementRef,
        view: &mut ViewSynchronizer,
        scheduler: &mut dyn Scheduler,
    ) -> Result<()> {
        view.set_mark(element, Mark::Previewing, false)?;

        if let Some(timer) = self.auto_stop.take() {
            scheduler.cancel(timer);
        }
        self.silence();
        Ok(())
    }

    /// Auto-stop timer fired
    ///
    /// Returns `false` for a timer that was cancelled or replaced. The
    /// previewing mark stays until the pointer leaves the tile.
    pub fn on_auto_stop(&mut self, timer: TimerId) -> bool {
        if self.auto_stop != Some(timer) {
            return false;
        }
        self.auto_stop = None;
        self.silence();
        true
    }

    /// Whether an auto-stop is armed
    pub fn is_armed(&self) -> bool {
        self.auto_stop.is_some()
    }

    /// Pause and rewind; the channel may already be stopped or unloaded
    fn silence(&mut self) {
        let _ = self.channel.pause();
        let _ = self.channel.seek(Duration::ZERO);
    }
}
