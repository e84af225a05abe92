use super::{ElementRef, TrackId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a scheduled one-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Work to run when a timer fires
///
/// The scheduler hands the task back with the fired id; the application
/// routes it to the controller that armed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerTask {
    /// Stop the hover preview channel
    PreviewAutoStop,

    /// Drop the transient playing mark left by an external activation
    ReleaseTransient {
        element: ElementRef,
        track_id: TrackId,
    },
}
