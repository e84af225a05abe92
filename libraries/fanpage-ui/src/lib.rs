//! Fan Page - Rendering and Editing
//!
//! Pure view models for the fan page surfaces:
//! - Post list cards with Edit/Delete bindings (`render_posts`)
//! - Playlist rows and vinyl tiles with pointer bindings (`render_shelf`)
//! - The create-or-update post editor (`Editor`)
//!
//! View models are plain data. A surface mirrors them, either by serializing
//! them to HTML fragments or by diffing them against live DOM nodes, and
//! feeds the bound actions back to the application.
//!
//! # Example
//!
//! ```rust
//! use fanpage_ui::render_posts;
//!
//! let view = render_posts(&[]);
//! assert_eq!(view.to_html(), "<p class=\"muted\">No posts found.</p>");
//! ```

pub mod editor;
mod html;
pub mod posts;
pub mod shelf;

pub use editor::{Editor, EditorField, EditorForm, SubmitOutcome};
pub use html::escape_html;
pub use posts::{render_posts, PostAction, PostCard, PostListView, EMPTY_PLACEHOLDER};
pub use shelf::{render_shelf, PlaylistRow, ShelfAction, ShelfView, VinylTile};
