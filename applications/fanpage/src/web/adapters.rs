//! `window`-backed implementations of the capability traits

use fanpage_core::types::{TimerId, TimerTask};
use fanpage_core::{AudioSink, ExternalOpener, FanpageError, KeyValueStore, Prompt, Scheduler};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAudioElement, Storage, Window};

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `localStorage`
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    pub fn from_window(window: &Window) -> Result<Self, JsValue> {
        let storage = window
            .local_storage()?
            .ok_or_else(|| JsValue::from_str("localStorage is unavailable"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> fanpage_core::Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| FanpageError::storage(describe(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> fanpage_core::Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| FanpageError::storage(describe(&e)))
    }
}

/// `<audio>` element
///
/// The browser settles `play()` asynchronously, so an autoplay denial is
/// logged from the rejected promise rather than returned. One rejection
/// handler lives as long as the sink and is shared by every `play()`.
pub struct AudioElementSink {
    audio: HtmlAudioElement,
    on_reject: Closure<dyn FnMut(JsValue)>,
}

impl AudioElementSink {
    pub fn new(audio: HtmlAudioElement) -> Self {
        let on_reject = Closure::<dyn FnMut(JsValue)>::new(|e: JsValue| {
            tracing::warn!("Playback blocked: {}", describe(&e));
        });
        Self { audio, on_reject }
    }
}

impl AudioSink for AudioElementSink {
    fn load(&mut self, src: &str) {
        self.audio.set_src(src);
        self.audio.load();
    }

    fn play(&mut self) -> fanpage_core::Result<()> {
        let promise = self
            .audio
            .play()
            .map_err(|e| FanpageError::playback_blocked(describe(&e)))?;

        let _ = promise.catch(&self.on_reject);
        Ok(())
    }

    fn pause(&mut self) -> fanpage_core::Result<()> {
        self.audio
            .pause()
            .map_err(|e| FanpageError::audio(describe(&e)))
    }

    fn seek(&mut self, position: Duration) -> fanpage_core::Result<()> {
        self.audio.set_current_time(position.as_secs_f64());
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.audio.set_volume(f64::from(volume));
    }
}

/// `window.confirm` / `window.alert`
pub struct BrowserPrompt {
    window: Window,
}

impl BrowserPrompt {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Prompt for BrowserPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}

/// `window.open`, falling back to navigating the page itself
pub struct WindowOpener {
    window: Window,
}

impl WindowOpener {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ExternalOpener for WindowOpener {
    fn open(&mut self, uri: &str, target: &str, features: &str) -> fanpage_core::Result<()> {
        // With `noopener` a successful open still returns null
        match self
            .window
            .open_with_url_and_target_and_features(uri, target, features)
        {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::warn!("window.open failed, navigating instead: {}", describe(&e));
                self.window
                    .location()
                    .set_href(uri)
                    .map_err(|e| FanpageError::opener(describe(&e)))
            }
        }
    }
}

/// Callback receiving fired timers
pub type TimerDispatch = Rc<dyn Fn(TimerId, TimerTask)>;

/// `setTimeout` / `clearTimeout`
pub struct TimeoutScheduler {
    window: Window,
    dispatch: TimerDispatch,
    handles: Rc<RefCell<HashMap<TimerId, i32>>>,
    next_id: u64,
}

impl TimeoutScheduler {
    pub fn new(window: Window, dispatch: TimerDispatch) -> Self {
        Self {
            window,
            dispatch,
            handles: Rc::new(RefCell::new(HashMap::new())),
            next_id: 0,
        }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule_once(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);

        let dispatch = Rc::clone(&self.dispatch);
        let handles = Rc::clone(&self.handles);
        let callback = Closure::once_into_js(move || {
            handles.borrow_mut().remove(&id);
            dispatch(id, task);
        });

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            Ok(handle) => {
                self.handles.borrow_mut().insert(id, handle);
            }
            Err(e) => tracing::warn!("setTimeout failed for {}: {}", id, describe(&e)),
        }
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.handles.borrow_mut().remove(&id) {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}
