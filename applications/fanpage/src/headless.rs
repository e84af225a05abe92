//! Headless platform adapters
//!
//! Stand-ins for the browser capabilities so the page can run from a
//! terminal: audio and external opens are logged, confirmations read stdin,
//! and timers run on a virtual clock the caller advances.

use crate::app::{FanPage, Platform};
use crate::config::AppConfig;
use crate::error::Result;
use crate::event::AppEvent;
use fanpage_core::types::{TimerId, TimerTask};
use fanpage_core::{AudioSink, ExternalOpener, Prompt, Scheduler, SystemClock, TimerQueue};
use fanpage_storage::JsonFileStore;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::time::Duration;

/// Audio channel that only logs what it would do
#[derive(Debug)]
pub struct LogSink {
    channel: &'static str,
}

impl LogSink {
    pub fn new(channel: &'static str) -> Self {
        Self { channel }
    }
}

impl AudioSink for LogSink {
    fn load(&mut self, src: &str) {
        tracing::info!(channel = self.channel, "Loading {}", src);
    }

    fn play(&mut self) -> fanpage_core::Result<()> {
        tracing::info!(channel = self.channel, "Playing");
        Ok(())
    }

    fn pause(&mut self) -> fanpage_core::Result<()> {
        tracing::debug!(channel = self.channel, "Paused");
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> fanpage_core::Result<()> {
        tracing::debug!(channel = self.channel, "Seek to {:?}", position);
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        tracing::debug!(channel = self.channel, "Volume {:.2}", volume);
    }
}

/// Opener that logs the request instead of launching anything
#[derive(Debug, Default)]
pub struct LogOpener;

impl ExternalOpener for LogOpener {
    fn open(&mut self, uri: &str, target: &str, features: &str) -> fanpage_core::Result<()> {
        tracing::info!("Open {} (target={}, features={})", uri, target, features);
        Ok(())
    }
}

/// Terminal prompt
///
/// Confirmations are answered with `y`/`yes` on stdin unless `assume_yes`
/// is set. Alerts go to stderr.
#[derive(Debug, Default)]
pub struct StdinPrompt {
    assume_yes: bool,
}

impl StdinPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for StdinPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{message} [y/N] ");
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        if let Err(e) = std::io::stdin().lock().read_line(&mut answer) {
            tracing::warn!("Could not read confirmation: {}", e);
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Shared handle to a virtual-time timer queue
///
/// One clone is handed to the page as its scheduler; the caller keeps
/// another to advance time and feed fired timers back as events.
#[derive(Debug, Clone, Default)]
pub struct VirtualTimers {
    queue: Rc<RefCell<TimerQueue>>,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_len(&self) -> usize {
        self.queue.borrow().pending_len()
    }

    /// Advance the clock and deliver due timers to `page`
    pub fn advance(&self, by: Duration, page: &mut FanPage) -> Result<usize> {
        let fired = self.queue.borrow_mut().advance(by);
        Self::deliver(fired, page)
    }

    /// Deliver every armed timer to `page`
    pub fn run_all(&self, page: &mut FanPage) -> Result<usize> {
        let fired = self.queue.borrow_mut().drain_all();
        Self::deliver(fired, page)
    }

    fn deliver(fired: Vec<(TimerId, TimerTask)>, page: &mut FanPage) -> Result<usize> {
        let count = fired.len();
        for (id, task) in fired {
            page.handle(AppEvent::TimerFired { id, task })?;
        }
        Ok(count)
    }
}

impl Scheduler for VirtualTimers {
    fn schedule_once(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        self.queue.borrow_mut().schedule_once(delay, task)
    }

    fn cancel(&mut self, id: TimerId) {
        self.queue.borrow_mut().cancel(id);
    }
}

/// Build a page over the configured JSON file
pub fn headless_page(config: &AppConfig, assume_yes: bool) -> Result<(FanPage, VirtualTimers)> {
    let kv = JsonFileStore::open(&config.storage.path)?;
    let timers = VirtualTimers::new();

    let platform = Platform {
        kv: Box::new(kv),
        clock: Box::new(SystemClock),
        sink: Box::new(LogSink::new("primary")),
        preview_sink: Box::new(LogSink::new("preview")),
        opener: Box::new(LogOpener),
        prompt: Box::new(StdinPrompt::new(assume_yes)),
        scheduler: Box::new(timers.clone()),
    };

    Ok((FanPage::new(platform, config.page_options()), timers))
}
