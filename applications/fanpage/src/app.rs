//! The fan page application object
//!
//! Single instance owning every piece of page state: the post store and
//! editor, both playback channels, the view marks, and the last rendered post
//! list. All work happens inside `handle`, one event at a time.

use crate::error::Result;
use crate::event::AppEvent;
use fanpage_core::types::{Collection, ElementRef, TimerId, TimerTask, TrackId};
use fanpage_core::{AudioSink, Clock, ExternalOpener, KeyValueStore, Prompt, Scheduler};
use fanpage_playback::{
    Catalog, PlaybackConfig, PlaybackController, PlaybackError, PlaybackEvent, PreviewController,
    ViewSynchronizer,
};
use fanpage_storage::{PostStore, POSTS_KEY};
use fanpage_ui::{render_posts, render_shelf, Editor, PostListView, ShelfView};

/// Platform capabilities the page runs against
pub struct Platform {
    pub kv: Box<dyn KeyValueStore>,
    pub clock: Box<dyn Clock>,
    pub sink: Box<dyn AudioSink>,
    pub preview_sink: Box<dyn AudioSink>,
    pub opener: Box<dyn ExternalOpener>,
    pub prompt: Box<dyn Prompt>,
    pub scheduler: Box<dyn Scheduler>,
}

/// Page-level settings
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub catalog: Catalog,
    pub playback: PlaybackConfig,
    pub storage_key: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            playback: PlaybackConfig::default(),
            storage_key: POSTS_KEY.to_string(),
        }
    }
}

pub struct FanPage {
    store: PostStore,
    editor: Editor,
    playback: PlaybackController,
    preview: PreviewController,
    view: ViewSynchronizer,
    prompt: Box<dyn Prompt>,
    scheduler: Box<dyn Scheduler>,

    query: String,
    posts: PostListView,
    post_renders: usize,
}

impl FanPage {
    /// Load the posts and render the initial page
    pub fn new(platform: Platform, options: PageOptions) -> Self {
        let store = PostStore::new(platform.kv, platform.clock).with_key(options.storage_key);
        let view = ViewSynchronizer::new(&options.catalog);
        let playback = PlaybackController::new(
            options.catalog,
            platform.sink,
            platform.opener,
            options.playback.clone(),
        );
        let preview = PreviewController::new(platform.preview_sink, options.playback);

        let initial = store.load();
        tracing::info!(
            "Fan page ready: {} posts, {} tracks",
            initial.len(),
            playback.catalog().len()
        );

        Self {
            store,
            editor: Editor::new(),
            playback,
            preview,
            view,
            prompt: platform.prompt,
            scheduler: platform.scheduler,
            query: String::new(),
            posts: render_posts(&initial),
            post_renders: 1,
        }
    }

    /// Dispatch one event
    pub fn handle(&mut self, event: AppEvent) -> Result<()> {
        tracing::trace!("Handling {:?}", event);

        match event {
            AppEvent::SearchChanged { query } => {
                let matches = self.store.search(&query);
                self.query = query;
                self.render(&matches);
            }
            // A vanished target leaves the editor as it was
            AppEvent::EditPost { id } => {
                self.editor.start_edit(&self.store, &id);
            }
            AppEvent::DeletePost { id } => {
                if let Some(posts) = self.store.delete(&id, self.prompt.as_mut()) {
                    self.render(&posts);
                }
            }
            AppEvent::EditorInput { field, value } => self.editor.set_field(field, value),
            AppEvent::SubmitEditor => {
                let outcome = self.editor.submit(&mut self.store, self.prompt.as_mut());
                if let Some(posts) = outcome.posts() {
                    self.render(posts);
                }
            }
            AppEvent::CancelEditor => self.editor.cancel(),

            AppEvent::ActivateTrack { element } => {
                let track_id = self.track_at(element)?;
                self.playback
                    .activate(&track_id, element, &mut self.view, self.scheduler.as_mut())?;
            }
            AppEvent::PreviewStart { element } => {
                let vinyl = self
                    .playback
                    .catalog()
                    .vinyl_views()
                    .into_iter()
                    .nth(element.index)
                    .filter(|_| element.collection == Collection::Vinyl)
                    .ok_or(PlaybackError::UnknownElement(element))?;
                self.preview.start_preview(
                    &vinyl,
                    element,
                    &mut self.view,
                    self.scheduler.as_mut(),
                )?;
            }
            AppEvent::PreviewStop { element } => {
                self.preview
                    .stop_preview(element, &mut self.view, self.scheduler.as_mut())?;
            }

            AppEvent::AudioPlay => self.view.reconcile(self.playback.current_track_id()),
            AppEvent::AudioPause => self.view.on_pause(),
            AppEvent::AudioEnded => {
                self.playback.on_ended(&mut self.view);
            }

            AppEvent::TimerFired { id, task } => self.on_timer(id, task),
        }

        Ok(())
    }

    fn on_timer(&mut self, id: TimerId, task: TimerTask) {
        let live = match task {
            TimerTask::PreviewAutoStop => self.preview.on_auto_stop(id),
            TimerTask::ReleaseTransient { element, track_id } => {
                self.playback
                    .release_transient(id, element, &track_id, &mut self.view)
            }
        };
        if !live {
            tracing::debug!("Timer {} was superseded", id);
        }
    }

    fn track_at(&self, element: ElementRef) -> Result<TrackId> {
        self.view
            .track_at(element)
            .cloned()
            .ok_or_else(|| PlaybackError::UnknownElement(element).into())
    }

    fn render(&mut self, posts: &[fanpage_core::types::Post]) {
        self.posts = render_posts(posts);
        self.post_renders += 1;
    }

    // ===== Views =====

    /// Last rendered post list
    pub fn posts_view(&self) -> &PostListView {
        &self.posts
    }

    /// How many times the post list was rendered, startup included
    pub fn post_renders(&self) -> usize {
        self.post_renders
    }

    pub fn shelf_view(&self) -> ShelfView {
        render_shelf(self.playback.catalog(), &self.view)
    }

    pub fn marks(&self) -> &ViewSynchronizer {
        &self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        self.playback.catalog()
    }

    pub fn current_track_id(&self) -> Option<&TrackId> {
        self.playback.current_track_id()
    }

    pub fn now_playing(&self) -> Option<&str> {
        self.playback.now_playing()
    }

    /// Playback events since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.playback.drain_events()
    }
}
