//! Events dispatched to the application object
//!
//! Every user interaction, primary-sink lifecycle notification and timer
//! firing arrives as one `AppEvent`. Surfaces translate their bindings with
//! the `From` impls below.

use fanpage_core::types::{ElementRef, PostId, TimerId, TimerTask};
use fanpage_ui::{EditorField, PostAction, ShelfAction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    // ===== Posts =====
    SearchChanged { query: String },
    EditPost { id: PostId },
    DeletePost { id: PostId },
    EditorInput { field: EditorField, value: String },
    SubmitEditor,
    CancelEditor,

    // ===== Media shelf =====
    ActivateTrack { element: ElementRef },
    PreviewStart { element: ElementRef },
    PreviewStop { element: ElementRef },

    // ===== Primary sink lifecycle =====
    AudioPlay,
    AudioPause,
    AudioEnded,

    TimerFired { id: TimerId, task: TimerTask },
}

impl From<PostAction> for AppEvent {
    fn from(action: PostAction) -> Self {
        match action {
            PostAction::Edit(id) => Self::EditPost { id },
            PostAction::Delete(id) => Self::DeletePost { id },
        }
    }
}

impl From<ShelfAction> for AppEvent {
    fn from(action: ShelfAction) -> Self {
        match action {
            ShelfAction::Activate { element, .. } => Self::ActivateTrack { element },
            ShelfAction::PreviewStart { element } => Self::PreviewStart { element },
            ShelfAction::PreviewStop { element } => Self::PreviewStop { element },
        }
    }
}
