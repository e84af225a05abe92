//! Fan Page Core
//!
//! Platform-agnostic core types, capability traits, and error handling for the
//! fan page.
//!
//! The page itself runs against a handful of platform capabilities (a key-value
//! store, two audio channels, blocking prompts, an external opener, a timer
//! service and a clock). This crate names those capabilities as traits so the
//! post store and the playback controllers can be driven by a browser, by the
//! headless CLI, or by recording doubles in tests.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Post`, `Track`, `VinylView`, and the view addressing types
//! - **Capability Traits**: `KeyValueStore`, `AudioSink`, `Prompt`,
//!   `ExternalOpener`, `Scheduler`, `Clock`
//! - **Error Handling**: Unified `FanpageError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use fanpage_core::types::{Post, PostId, UpdatePost};
//! use chrono::NaiveDate;
//!
//! let mut post = Post {
//!     id: PostId::new("p1"),
//!     title: "Album review: Eris".to_string(),
//!     excerpt: "A deep dive.".to_string(),
//!     date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
//! };
//!
//! post.apply(UpdatePost {
//!     title: Some("Eris, revisited".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(post.excerpt, "A deep dive.");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod timer;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types
pub use error::{FanpageError, Result};
pub use timer::TimerQueue;
pub use traits::{AudioSink, Clock, ExternalOpener, KeyValueStore, Prompt, Scheduler, SystemClock};
pub use types::{
    Collection, CreatePost, ElementRef, Mark, Post, PostId, TimerId, TimerTask, Track, TrackId,
    UpdatePost, VinylView,
};
