//! Editor and post list integration tests
//!
//! The editor drives a real `PostStore` over an in-memory backend; renders
//! are checked the way the page would show them after each action.

use chrono::NaiveDate;
use fanpage_core::testing::{ScriptedPrompt, SteppingClock};
use fanpage_core::types::PostId;
use fanpage_storage::{MemoryStore, PostStore};
use fanpage_ui::editor::{CREATE_LABEL, SAVE_LABEL};
use fanpage_ui::{render_posts, Editor, EditorField, PostAction, SubmitOutcome};
use proptest::prelude::*;

// ===== Test Helpers =====

fn store() -> (PostStore, MemoryStore) {
    let kv = MemoryStore::new();
    let store = PostStore::new(Box::new(kv.clone()), Box::new(SteppingClock::sample()));
    (store, kv)
}

fn fill(editor: &mut Editor, title: &str, date: &str, excerpt: &str) {
    editor.set_field(EditorField::Title, title);
    editor.set_field(EditorField::Date, date);
    editor.set_field(EditorField::Excerpt, excerpt);
}

// ===== Create =====

#[test]
fn create_prepends_and_resets_form() {
    let (mut store, _kv) = store();
    let mut prompt = ScriptedPrompt::always(true);
    let mut editor = Editor::new();
    fill(&mut editor, "  New single out  ", "", "  Listen now  ");

    let outcome = editor.submit(&mut store, &mut prompt);

    let SubmitOutcome::Created(posts) = outcome else {
        panic!("expected a created post, got {outcome:?}");
    };
    assert_eq!(posts.len(), 4);
    assert_eq!(posts[0].title, "New single out");
    assert_eq!(posts[0].excerpt, "Listen now");
    assert_eq!(posts[0].date, NaiveDate::from_ymd_opt(2025, 10, 18).unwrap());
    assert!(posts[0].id.as_str().starts_with('p'));

    assert_eq!(editor.form().title, "");
    assert_eq!(editor.submit_label(), CREATE_LABEL);
    assert!(prompt.alerts().is_empty());

    let view = render_posts(&posts);
    assert_eq!(view.cards()[0].title, "New single out");
}

#[test]
fn create_uses_given_date() {
    let (mut store, _kv) = store();
    let mut prompt = ScriptedPrompt::always(true);
    let mut editor = Editor::new();
    fill(&mut editor, "Throwback", "2019-03-02", "");

    let outcome = editor.submit(&mut store, &mut prompt);

    let posts = outcome.posts().unwrap();
    assert_eq!(posts[0].date, NaiveDate::from_ymd_opt(2019, 3, 2).unwrap());
}

// ===== Update =====

#[test]
fn edit_then_submit_updates_in_place() {
    let (mut store, kv) = store();
    let mut prompt = ScriptedPrompt::always(true);
    let mut editor = Editor::new();

    assert!(editor.start_edit(&store, &PostId::new("3")));
    assert_eq!(editor.submit_label(), SAVE_LABEL);
    editor.set_field(EditorField::Title, "Album review: Eris (updated)");

    let outcome = editor.submit(&mut store, &mut prompt);

    let SubmitOutcome::Updated(posts) = outcome else {
        panic!("expected an update, got {outcome:?}");
    };
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[2].id, PostId::new("3"));
    assert_eq!(posts[2].title, "Album review: Eris (updated)");
    assert_eq!(
        posts[2].excerpt,
        "A deep dive into the textures and motifs of the new release."
    );
    assert_eq!(posts[2].date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
    assert_eq!(editor.editing_id(), None);
    assert_eq!(kv.write_count(), 1);
}

#[test]
fn update_of_vanished_post_is_silent() {
    let (mut store, kv) = store();
    let mut prompt = ScriptedPrompt::always(true);
    let mut editor = Editor::new();
    editor.start_edit(&store, &PostId::new("1"));

    // Deleted from elsewhere while the form was open
    store.delete(&PostId::new("1"), &mut prompt);
    let writes = kv.write_count();

    let outcome = editor.submit(&mut store, &mut prompt);

    assert_eq!(outcome, SubmitOutcome::Vanished);
    assert!(outcome.posts().is_none());
    assert_eq!(kv.write_count(), writes);
    assert_eq!(editor.editing_id(), None);
}

// ===== Rejections =====

#[test]
fn rejected_submit_writes_nothing() {
    let (mut store, kv) = store();
    let mut prompt = ScriptedPrompt::always(true);
    let mut editor = Editor::new();
    fill(&mut editor, "", "2025-01-01", "body");

    assert_eq!(editor.submit(&mut store, &mut prompt), SubmitOutcome::Rejected);
    assert_eq!(kv.write_count(), 0);
    assert_eq!(editor.form().excerpt, "body");
}

// ===== Render + search =====

#[test]
fn empty_search_renders_placeholder_only() {
    let (store, _kv) = store();

    let view = render_posts(&store.search("no post mentions this"));

    assert_eq!(view.placeholder_count(), 1);
    assert!(view.cards().is_empty());
}

#[test]
fn search_then_bindings_target_matches() {
    let (store, _kv) = store();

    let view = render_posts(&store.search("  ERIS "));

    assert_eq!(
        view.bindings(),
        vec![
            PostAction::Edit(PostId::new("3")),
            PostAction::Delete(PostId::new("3")),
        ]
    );
}

#[test]
fn view_model_serializes_for_surfaces() {
    let (store, _kv) = store();
    let view = render_posts(&store.load());

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["kind"], "posts");
    assert_eq!(json["cards"][0]["edit"]["action"], "edit");
    assert_eq!(json["cards"][0]["edit"]["id"], "1");
}

proptest! {
    /// Property: one card per post, or exactly one placeholder
    #[test]
    fn render_shape_matches_input(titles in prop::collection::vec("[A-Za-z<>&\" ]{0,20}", 0..10)) {
        let (mut store, _kv) = store();
        let mut posts = Vec::new();
        store.save(&[]).unwrap();
        for title in &titles {
            posts = store.create(fanpage_core::types::CreatePost {
                title: Some(title.clone()),
                ..Default::default()
            });
        }

        let view = render_posts(&posts);
        prop_assert_eq!(view.cards().len(), titles.len());
        prop_assert_eq!(view.placeholder_count(), usize::from(titles.is_empty()));
        prop_assert_eq!(view.bindings().len(), titles.len() * 2);
    }
}
