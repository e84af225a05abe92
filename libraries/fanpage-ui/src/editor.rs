//! Post editor
//!
//! One shared form serves both create and update. `editing_id` decides which
//! one a submit performs; the form fields mirror it.

use fanpage_core::types::{CreatePost, Post, PostId, UpdatePost};
use fanpage_core::Prompt;
use fanpage_storage::PostStore;
use serde::{Deserialize, Serialize};

pub const CREATE_LABEL: &str = "Create Post";
pub const SAVE_LABEL: &str = "Save Changes";
pub const TITLE_REQUIRED: &str = "Please provide a title";
pub const DATE_INVALID: &str = "Please provide a date as YYYY-MM-DD";

/// Form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorField {
    Title,
    Date,
    Excerpt,
}

/// Raw values of the editor inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditorForm {
    pub title: String,
    /// `YYYY-MM-DD`, or empty for "today" on create
    pub date: String,
    pub excerpt: String,
}

/// Result of a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was rejected with an alert; the editor kept its state
    Rejected,
    Created(Vec<Post>),
    Updated(Vec<Post>),
    /// The edited post disappeared before the save; nothing changed
    Vanished,
}

impl SubmitOutcome {
    /// Post sequence to re-render, if any
    pub fn posts(&self) -> Option<&[Post]> {
        match self {
            Self::Created(posts) | Self::Updated(posts) => Some(posts),
            Self::Rejected | Self::Vanished => None,
        }
    }
}

/// Single-record create-or-update form
#[derive(Debug, Clone, Default)]
pub struct Editor {
    editing_id: Option<PostId>,
    form: EditorForm,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing_id(&self) -> Option<&PostId> {
        self.editing_id.as_ref()
    }

    pub fn form(&self) -> &EditorForm {
        &self.form
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing_id.is_some() {
            SAVE_LABEL
        } else {
            CREATE_LABEL
        }
    }

    /// User typed into one input
    pub fn set_field(&mut self, field: EditorField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EditorField::Title => self.form.title = value,
            EditorField::Date => self.form.date = value,
            EditorField::Excerpt => self.form.excerpt = value,
        }
    }

    /// Fill the form from the stored post
    ///
    /// Returns `false` and leaves the editor alone when `id` is unknown.
    pub fn start_edit(&mut self, store: &PostStore, id: &PostId) -> bool {
        let Some(post) = store.get(id) else {
            tracing::debug!("Edit target {} not found", id);
            return false;
        };

        self.form = EditorForm {
            title: post.title,
            date: post.date.format("%Y-%m-%d").to_string(),
            excerpt: post.excerpt,
        };
        self.editing_id = Some(post.id);
        true
    }

    /// Validate the form and create or update a post
    pub fn submit(&mut self, store: &mut PostStore, prompt: &mut dyn Prompt) -> SubmitOutcome {
        let title = self.form.title.trim().to_string();
        if title.is_empty() {
            prompt.alert(TITLE_REQUIRED);
            return SubmitOutcome::Rejected;
        }

        let date = match self.form.date.trim() {
            "" => None,
            raw => match chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::debug!("Rejecting date {:?}: {}", raw, e);
                    prompt.alert(DATE_INVALID);
                    return SubmitOutcome::Rejected;
                }
            },
        };
        let excerpt = self.form.excerpt.trim().to_string();

        let outcome = match self.editing_id.clone() {
            Some(id) => {
                let update = UpdatePost {
                    title: Some(title),
                    excerpt: Some(excerpt),
                    date,
                };
                store
                    .update(&id, update)
                    .map_or(SubmitOutcome::Vanished, SubmitOutcome::Updated)
            }
            None => SubmitOutcome::Created(store.create(CreatePost {
                title: Some(title),
                excerpt: Some(excerpt),
                date,
            })),
        };

        self.reset();
        outcome
    }

    /// Drop any edit in progress
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.editing_id = None;
        self.form = EditorForm::default();
    }
}
