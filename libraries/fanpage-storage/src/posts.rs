//! Post store
//!
//! CRUD over the post collection. Every mutation reads the slot fresh,
//! applies the change, writes the whole sequence back and returns it so the
//! caller can re-render. Storage failures never reach the caller: reads fall
//! back to the seed posts and failed writes are logged.

use crate::error::Result;
use crate::seed::seed_posts;
use chrono::NaiveDate;
use fanpage_core::types::{CreatePost, Post, PostId, UpdatePost, UNTITLED};
use fanpage_core::{Clock, KeyValueStore, Prompt};
use serde::Deserialize;

/// Key of the durable slot holding the post collection
pub const POSTS_KEY: &str = "fanpage_posts_v1";

/// Question asked before a post is removed
pub const DELETE_CONFIRMATION: &str = "Delete this post?";

/// Post record as found in the slot, before defaults are applied
#[derive(Debug, Deserialize)]
struct StoredPost {
    #[serde(default)]
    id: Option<PostId>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    date: String,
}

/// Post persistence over a key-value store
pub struct PostStore {
    kv: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    key: String,
    last_issued_ms: i64,
}

impl PostStore {
    /// Create a store using the default slot key
    pub fn new(kv: Box<dyn KeyValueStore>, clock: Box<dyn Clock>) -> Self {
        Self {
            kv,
            clock,
            key: POSTS_KEY.to_string(),
            last_issued_ms: 0,
        }
    }

    /// Use a different slot key
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted posts
    ///
    /// Falls back to the seed posts when the slot is empty or unreadable.
    pub fn load(&self) -> Vec<Post> {
        let raw = match self.kv.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return seed_posts(),
            Err(e) => {
                tracing::error!("Failed to load posts: {}", e);
                return seed_posts();
            }
        };

        match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(records) => self.normalize(records),
            Err(e) => {
                tracing::error!("Failed to load posts: {}", e);
                seed_posts()
            }
        }
    }

    /// Overwrite the slot with `posts`
    pub fn save(&mut self, posts: &[Post]) -> Result<()> {
        let json = serde_json::to_string(posts)?;
        self.kv.set(&self.key, &json)?;
        tracing::debug!("Saved {} posts under {}", posts.len(), self.key);
        Ok(())
    }

    /// Fresh lookup of one post
    pub fn get(&self, id: &PostId) -> Option<Post> {
        self.load().into_iter().find(|p| &p.id == id)
    }

    /// Posts whose title or excerpt contains `query` (case-insensitive)
    pub fn search(&self, query: &str) -> Vec<Post> {
        let needle = query.trim().to_lowercase();
        self.load()
            .into_iter()
            .filter(|p| p.matches(&needle))
            .collect()
    }

    /// Prepend a new post and return the full sequence
    pub fn create(&mut self, data: CreatePost) -> Vec<Post> {
        let mut posts = self.load();
        let id = self.next_id(&posts);
        let post = data.into_post(id, self.clock.today());

        tracing::debug!("Creating post {} ({:?})", post.id, post.title);
        posts.insert(0, post);
        self.persist(&posts);
        posts
    }

    /// Merge `data` into the post with `id`
    ///
    /// Returns `None` when the post no longer exists; nothing is written then.
    pub fn update(&mut self, id: &PostId, data: UpdatePost) -> Option<Vec<Post>> {
        let mut posts = self.load();
        let Some(post) = posts.iter_mut().find(|p| &p.id == id) else {
            tracing::debug!("Update target {} is gone, ignoring", id);
            return None;
        };

        post.apply(data);
        if post.title.trim().is_empty() {
            post.title = UNTITLED.to_string();
        }

        self.persist(&posts);
        Some(posts)
    }

    /// Remove the post with `id` after the user confirms
    ///
    /// Returns `None` when the user declines.
    pub fn delete(&mut self, id: &PostId, prompt: &mut dyn Prompt) -> Option<Vec<Post>> {
        if !prompt.confirm(DELETE_CONFIRMATION) {
            tracing::debug!("Delete of {} declined", id);
            return None;
        }

        let mut posts = self.load();
        posts.retain(|p| &p.id != id);
        self.persist(&posts);
        Some(posts)
    }

    fn persist(&mut self, posts: &[Post]) {
        if let Err(e) = self.save(posts) {
            tracing::error!("Failed to save posts: {}", e);
        }
    }

    /// `p` + creation time in milliseconds, bumped past anything already
    /// issued or stored
    fn next_id(&mut self, existing: &[Post]) -> PostId {
        let mut millis = self
            .clock
            .now()
            .timestamp_millis()
            .max(self.last_issued_ms + 1);

        while existing.iter().any(|p| p.id.as_str() == format!("p{millis}")) {
            millis += 1;
        }

        self.last_issued_ms = millis;
        PostId::new(format!("p{millis}"))
    }

    fn normalize(&self, records: Vec<serde_json::Value>) -> Vec<Post> {
        let today = self.clock.today();

        records
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<StoredPost>(value) {
                Ok(stored) => into_post(stored, today),
                Err(e) => {
                    tracing::warn!("Skipping unreadable post record: {}", e);
                    None
                }
            })
            .collect()
    }
}

fn into_post(stored: StoredPost, today: NaiveDate) -> Option<Post> {
    let id = stored.id.filter(|id| !id.is_empty());
    let Some(id) = id else {
        tracing::warn!("Skipping post record without an id");
        return None;
    };

    let date = if stored.date.trim().is_empty() {
        today
    } else {
        NaiveDate::parse_from_str(stored.date.trim(), "%Y-%m-%d").unwrap_or_else(|e| {
            tracing::warn!("Post {} has unreadable date {:?}: {}", id, stored.date, e);
            today
        })
    };

    let title = if stored.title.trim().is_empty() {
        UNTITLED.to_string()
    } else {
        stored.title
    };

    Some(Post {
        id,
        title,
        excerpt: stored.excerpt,
        date,
    })
}
