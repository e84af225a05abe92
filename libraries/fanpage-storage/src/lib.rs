//! Fan Page - Post Storage
//!
//! Persists the post collection as one JSON array under a fixed key of a
//! `KeyValueStore`, newest post first.
//!
//! Two backends ship with the crate:
//! - `MemoryStore` - in-process map (tests, ephemeral sessions)
//! - `JsonFileStore` - one JSON object on disk (headless shell)
//!
//! The browser build plugs `localStorage` in through the same trait.
//!
//! # Example
//!
//! ```rust
//! use fanpage_core::types::CreatePost;
//! use fanpage_core::SystemClock;
//! use fanpage_storage::{MemoryStore, PostStore};
//!
//! let mut store = PostStore::new(Box::new(MemoryStore::new()), Box::new(SystemClock));
//!
//! // Nothing persisted yet: the seed posts come back
//! assert_eq!(store.load().len(), 3);
//!
//! let posts = store.create(CreatePost {
//!     title: Some("Tour dates announced".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(posts[0].title, "Tour dates announced");
//! ```

mod error;
pub mod kv;
mod posts;
pub mod seed;

pub use error::{Result, StorageError};
pub use kv::{JsonFileStore, MemoryStore};
pub use posts::{PostStore, DELETE_CONFIRMATION, POSTS_KEY};
