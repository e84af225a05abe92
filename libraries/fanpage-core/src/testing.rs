//! Recording doubles for the capability traits
//!
//! Each double is cheap to clone and every clone shares the same log, so a
//! test can hand one clone to the code under test (boxed) and keep another to
//! inspect afterwards. Everything is single-threaded, like the page.

use crate::error::{FanpageError, Result};
use crate::traits::{AudioSink, Clock, ExternalOpener, Prompt};
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

/// A call observed by `RecordingSink`
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Load(String),
    Play,
    Pause,
    Seek(Duration),
    Volume(f32),
}

#[derive(Debug, Default)]
struct SinkState {
    calls: Vec<SinkCall>,
    deny_play: bool,
    fail_pause: bool,
}

/// Audio sink that records every call
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    state: Rc<RefCell<SinkState>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `play()` fail like a browser autoplay denial
    pub fn deny_play(&self, deny: bool) {
        self.state.borrow_mut().deny_play = deny;
    }

    /// Make `pause()` and `seek()` fail
    pub fn fail_pause(&self, fail: bool) {
        self.state.borrow_mut().fail_pause = fail;
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Sources passed to `load`, in order
    pub fn loaded(&self) -> Vec<String> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Load(src) => Some(src.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn play_count(&self) -> usize {
        self.count(&SinkCall::Play)
    }

    pub fn pause_count(&self) -> usize {
        self.count(&SinkCall::Pause)
    }

    fn count(&self, call: &SinkCall) -> usize {
        self.state.borrow().calls.iter().filter(|c| *c == call).count()
    }
}

impl AudioSink for RecordingSink {
    fn load(&mut self, src: &str) {
        self.state
            .borrow_mut()
            .calls
            .push(SinkCall::Load(src.to_string()));
    }

    fn play(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(SinkCall::Play);
        if state.deny_play {
            return Err(FanpageError::playback_blocked("NotAllowedError"));
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(SinkCall::Pause);
        if state.fail_pause {
            return Err(FanpageError::audio("InvalidStateError"));
        }
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(SinkCall::Seek(position));
        if state.fail_pause {
            return Err(FanpageError::audio("InvalidStateError"));
        }
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.state.borrow_mut().calls.push(SinkCall::Volume(volume));
    }
}

#[derive(Debug, Default)]
struct PromptState {
    answers: VecDeque<bool>,
    default_answer: bool,
    confirms: Vec<String>,
    alerts: Vec<String>,
}

/// Prompt answering confirmations from a script
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    state: Rc<RefCell<PromptState>>,
}

impl ScriptedPrompt {
    /// Prompt that answers every confirmation with `answer`
    pub fn always(answer: bool) -> Self {
        let prompt = Self::default();
        prompt.state.borrow_mut().default_answer = answer;
        prompt
    }

    /// Queue answers used before falling back to the default
    pub fn push_answer(&self, answer: bool) {
        self.state.borrow_mut().answers.push_back(answer);
    }

    pub fn confirms(&self) -> Vec<String> {
        self.state.borrow().confirms.clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state.borrow().alerts.clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        let mut state = self.state.borrow_mut();
        state.confirms.push(message.to_string());
        let fallback = state.default_answer;
        state.answers.pop_front().unwrap_or(fallback)
    }

    fn alert(&mut self, message: &str) {
        self.state.borrow_mut().alerts.push(message.to_string());
    }
}

/// One `ExternalOpener::open` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenCall {
    pub uri: String,
    pub target: String,
    pub features: String,
}

#[derive(Debug, Default)]
struct OpenerState {
    calls: Vec<OpenCall>,
    fail: bool,
}

/// Opener that records requests instead of opening anything
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    state: Rc<RefCell<OpenerState>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `open` fail (popup blocked)
    pub fn fail(&self, fail: bool) {
        self.state.borrow_mut().fail = fail;
    }

    pub fn calls(&self) -> Vec<OpenCall> {
        self.state.borrow().calls.clone()
    }
}

impl ExternalOpener for RecordingOpener {
    fn open(&mut self, uri: &str, target: &str, features: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(OpenCall {
            uri: uri.to_string(),
            target: target.to_string(),
            features: features.to_string(),
        });
        if state.fail {
            return Err(FanpageError::opener("popup blocked"));
        }
        Ok(())
    }
}

/// Clock that starts at a fixed instant and ticks forward on every read
#[derive(Debug, Clone)]
pub struct SteppingClock {
    now: Rc<Cell<DateTime<Utc>>>,
    step: ChronoDuration,
}

impl SteppingClock {
    /// Clock frozen at `start`
    pub fn fixed(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
            step: ChronoDuration::zero(),
        }
    }

    /// Clock that advances by `step` after each read
    pub fn stepping(start: DateTime<Utc>, step: ChronoDuration) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
            step,
        }
    }

    /// 2025-10-18T12:00:00Z, frozen
    pub fn sample() -> Self {
        Self::fixed(
            Utc.with_ymd_and_hms(2025, 10, 18, 12, 0, 0)
                .single()
                .unwrap_or_else(Utc::now),
        )
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}
