//! Integration tests for the post store
//!
//! Exercise the store through both shipped backends and check the ordering,
//! partial-update and round-trip guarantees the page relies on.

use chrono::{Duration as ChronoDuration, NaiveDate, TimeZone, Utc};
use fanpage_core::testing::{ScriptedPrompt, SteppingClock};
use fanpage_core::types::{CreatePost, PostId, UpdatePost};
use fanpage_storage::seed::seed_posts;
use fanpage_storage::{JsonFileStore, MemoryStore, PostStore, POSTS_KEY};
use proptest::prelude::*;
use tempfile::TempDir;

// ===== Test Helpers =====

fn memory_store() -> (PostStore, MemoryStore) {
    let kv = MemoryStore::new();
    let store = PostStore::new(Box::new(kv.clone()), Box::new(SteppingClock::sample()));
    (store, kv)
}

fn titled(title: &str) -> CreatePost {
    CreatePost {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

// ===== Round trip =====

#[test]
fn created_post_is_first_after_reload() {
    let (mut store, kv) = memory_store();

    let before = store.load();
    store.save(&before).unwrap();
    store.create(CreatePost {
        title: Some("Tour dates".to_string()),
        excerpt: Some("Seven cities.".to_string()),
        date: NaiveDate::from_ymd_opt(2025, 11, 1),
    });

    let reloaded = PostStore::new(Box::new(kv), Box::new(SteppingClock::sample())).load();
    assert_eq!(reloaded.len(), before.len() + 1);
    assert_eq!(reloaded[0].title, "Tour dates");
    assert_eq!(reloaded[0].excerpt, "Seven cities.");
    assert_eq!(&reloaded[1..], &before[..]);
}

#[test]
fn file_backend_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fanpage.json");

    {
        let kv = JsonFileStore::open(&path).unwrap();
        let mut store = PostStore::new(Box::new(kv), Box::new(SteppingClock::sample()));
        store.create(titled("Persisted"));
    }

    let kv = JsonFileStore::open(&path).unwrap();
    let store = PostStore::new(Box::new(kv), Box::new(SteppingClock::sample()));
    let posts = store.load();
    assert_eq!(posts[0].title, "Persisted");
    assert_eq!(posts.len(), seed_posts().len() + 1);
}

#[test]
fn create_applies_defaults() {
    let (mut store, _) = memory_store();
    let posts = store.create(CreatePost::default());

    assert_eq!(posts[0].title, "Untitled");
    assert_eq!(posts[0].excerpt, "");
    assert_eq!(posts[0].date, NaiveDate::from_ymd_opt(2025, 10, 18).unwrap());
}

#[test]
fn custom_key_is_used() {
    let kv = MemoryStore::new();
    let mut store =
        PostStore::new(Box::new(kv.clone()), Box::new(SteppingClock::sample())).with_key("other");
    store.create(titled("Elsewhere"));

    assert!(kv.raw("other").is_some());
    assert!(kv.raw(POSTS_KEY).is_none());
}

// ===== Update / delete =====

#[test]
fn update_title_keeps_excerpt_and_date() {
    let (mut store, _) = memory_store();
    let original = store.get(&PostId::new("3")).unwrap();

    let posts = store
        .update(
            &PostId::new("3"),
            UpdatePost {
                title: Some("X".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let updated = posts.iter().find(|p| p.id.as_str() == "3").unwrap();
    assert_eq!(updated.title, "X");
    assert_eq!(updated.excerpt, original.excerpt);
    assert_eq!(updated.date, original.date);
}

#[test]
fn update_keeps_position() {
    let (mut store, _) = memory_store();
    let posts = store
        .update(
            &PostId::new("2"),
            UpdatePost {
                excerpt: Some("new".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn confirmed_delete_removes_post() {
    let (mut store, _) = memory_store();
    let mut prompt = ScriptedPrompt::always(true);

    let posts = store.delete(&PostId::new("2"), &mut prompt).unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.id.as_str() != "2"));
    assert_eq!(store.load(), posts);
}

#[test]
fn declined_delete_keeps_stored_list() {
    let (mut store, _) = memory_store();
    let posts = store.load();
    store.save(&posts).unwrap();

    let mut prompt = ScriptedPrompt::always(false);
    assert!(store.delete(&PostId::new("2"), &mut prompt).is_none());
    assert_eq!(store.load().len(), posts.len());
}

// ===== Search =====

#[test]
fn search_is_case_insensitive_over_title_and_excerpt() {
    let (store, _) = memory_store();

    let hits = store.search("  ERIS ");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id.as_str(), "3");

    let hits = store.search("thrash");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id.as_str(), "2");
}

#[test]
fn search_sees_new_posts() {
    let (mut store, _) = memory_store();
    store.create(titled("Vinyl pressing update"));

    assert_eq!(store.search("pressing").len(), 1);
    assert!(store.search("nothing matches this").is_empty());
    assert_eq!(store.search("").len(), 4);
}

// ===== Properties =====

proptest! {
    /// Property: the most recent create is always first, and ids never repeat
    #[test]
    fn newest_post_sorts_first(
        titles in prop::collection::vec("[A-Za-z ]{0,20}", 1..20),
        step_ms in 0i64..3
    ) {
        let kv = MemoryStore::new();
        let start = Utc.with_ymd_and_hms(2025, 10, 18, 12, 0, 0).unwrap();
        let clock = SteppingClock::stepping(start, ChronoDuration::milliseconds(step_ms));
        let mut store = PostStore::new(Box::new(kv), Box::new(clock));

        let mut ids = Vec::new();
        for title in &titles {
            let posts = store.create(titled(title));
            prop_assert!(!ids.contains(&posts[0].id));
            ids.push(posts[0].id.clone());
            prop_assert_eq!(&posts[0].id, ids.last().unwrap());
        }

        let loaded = store.load();
        prop_assert_eq!(loaded.len(), titles.len() + seed_posts().len());
        let newest_first: Vec<PostId> = ids.iter().rev().cloned().collect();
        let loaded_ids: Vec<PostId> = loaded.iter().take(titles.len()).map(|p| p.id.clone()).collect();
        prop_assert_eq!(loaded_ids, newest_first);
    }
}
