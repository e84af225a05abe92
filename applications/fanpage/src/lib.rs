//! Fan Page - Application
//!
//! Wires the post store, editor, playback and preview controllers, and view
//! marks into one event-driven application object (`FanPage`).
//!
//! Two shells drive it:
//! - the headless `fanpage` binary, over a JSON file and a virtual clock
//! - the browser, through the `wasm` feature's `web` module
//!
//! # Example
//!
//! ```rust
//! use fanpage::{AppEvent, FanPage, PageOptions, Platform, VirtualTimers};
//! use fanpage::headless::{LogOpener, LogSink, StdinPrompt};
//! use fanpage_core::types::ElementRef;
//! use fanpage_core::SystemClock;
//! use fanpage_storage::MemoryStore;
//!
//! let timers = VirtualTimers::new();
//! let mut page = FanPage::new(
//!     Platform {
//!         kv: Box::new(MemoryStore::new()),
//!         clock: Box::new(SystemClock),
//!         sink: Box::new(LogSink::new("primary")),
//!         preview_sink: Box::new(LogSink::new("preview")),
//!         opener: Box::new(LogOpener),
//!         prompt: Box::new(StdinPrompt::new(true)),
//!         scheduler: Box::new(timers.clone()),
//!     },
//!     PageOptions::default(),
//! );
//!
//! page.handle(AppEvent::ActivateTrack { element: ElementRef::playlist(2) }).unwrap();
//! assert_eq!(page.now_playing(), Some("Amy — Melancholy"));
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod headless;

#[cfg(feature = "wasm")]
pub mod web;

pub use app::{FanPage, PageOptions, Platform};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use event::AppEvent;
pub use headless::{headless_page, VirtualTimers};
