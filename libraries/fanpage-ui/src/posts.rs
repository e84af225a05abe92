//! Post list rendering
//!
//! `render_posts` is pure: it turns a post sequence into a view model whose
//! bindings carry post ids by value, so nothing from a previous render
//! survives into the next one.

use crate::html::escape_html;
use fanpage_core::types::{Post, PostId};
use serde::Serialize;
use std::fmt::Write;

/// Placeholder shown instead of an empty list
pub const EMPTY_PLACEHOLDER: &str = "No posts found.";

/// Action bound to a post card button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "id", rename_all = "snake_case")]
pub enum PostAction {
    Edit(PostId),
    Delete(PostId),
}

impl PostAction {
    pub fn post_id(&self) -> &PostId {
        match self {
            Self::Edit(id) | Self::Delete(id) => id,
        }
    }
}

/// One rendered post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCard {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub edit: PostAction,
    pub delete: PostAction,
}

impl PostCard {
    fn from_post(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            date: post.date.format("%Y-%m-%d").to_string(),
            edit: PostAction::Edit(post.id.clone()),
            delete: PostAction::Delete(post.id.clone()),
        }
    }
}

/// Rendered post list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PostListView {
    /// Nothing to show; one placeholder
    Empty { message: String },
    Posts { cards: Vec<PostCard> },
}

impl PostListView {
    pub fn cards(&self) -> &[PostCard] {
        match self {
            Self::Empty { .. } => &[],
            Self::Posts { cards } => cards,
        }
    }

    /// Number of placeholders rendered (0 or 1)
    pub fn placeholder_count(&self) -> usize {
        usize::from(matches!(self, Self::Empty { .. }))
    }

    /// Every action binding, in document order
    pub fn bindings(&self) -> Vec<PostAction> {
        self.cards()
            .iter()
            .flat_map(|c| [c.edit.clone(), c.delete.clone()])
            .collect()
    }

    /// Inner HTML of the post list container
    pub fn to_html(&self) -> String {
        match self {
            Self::Empty { message } => {
                format!("<p class=\"muted\">{}</p>", escape_html(message))
            }
            Self::Posts { cards } => {
                let mut html = String::new();
                for card in cards {
                    let id = escape_html(card.id.as_str());
                    let _ = write!(
                        html,
                        "<article class=\"post\"><h3>{}</h3><p>{}</p><div class=\"meta\">{}</div>\
                         <div class=\"post-actions\"><button class=\"edit-post\" data-id=\"{id}\">Edit</button> \
                         <button class=\"delete-post\" data-id=\"{id}\">Delete</button></div></article>",
                        escape_html(&card.title),
                        escape_html(&card.excerpt),
                        escape_html(&card.date),
                    );
                }
                html
            }
        }
    }
}

/// Render a post sequence, preserving its order
pub fn render_posts(posts: &[Post]) -> PostListView {
    if posts.is_empty() {
        return PostListView::Empty {
            message: EMPTY_PLACEHOLDER.to_string(),
        };
    }

    PostListView::Posts {
        cards: posts.iter().map(PostCard::from_post).collect(),
    }
}
