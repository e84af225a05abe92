/// Platform capability traits
///
/// The page never talks to a browser directly. Everything it consumes from
/// the platform goes through one of these traits, all driven from a single
/// event-handling thread.
use crate::error::Result;
use crate::types::{TimerId, TimerTask};
use chrono::{DateTime, NaiveDate, Utc};
use std::time::Duration;

/// Persistent key-value store
///
/// Holds the serialized post collection under one fixed key.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// Returns `Ok(None)` when nothing was ever written there.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Audio playback primitive
///
/// Used for both the primary sink and the preview channel. Lifecycle
/// notifications (`play`, `pause`, `ended`) come back to the application as
/// events rather than through this trait.
pub trait AudioSink {
    /// Load a new source, replacing whatever was loaded
    fn load(&mut self, src: &str);

    /// Request playback
    ///
    /// # Errors
    /// Returns an error if the platform refuses to start (autoplay policy,
    /// unsupported source)
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Move the playhead
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Set the volume (0.0 = silent, 1.0 = full volume)
    fn set_volume(&mut self, volume: f32);
}

/// Blocking yes/no and acknowledgment dialogs
pub trait Prompt {
    /// Ask a yes/no question; `true` means confirmed
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message the user has to acknowledge
    fn alert(&mut self, message: &str);
}

/// Opens a resource outside the page (new tab, system handler)
pub trait ExternalOpener {
    /// Open `uri` with a target hint (e.g. `_blank`) and window features
    /// (e.g. `noopener`)
    fn open(&mut self, uri: &str, target: &str, features: &str) -> Result<()>;
}

/// One-shot timer service
///
/// A fired timer is delivered back to the application together with the
/// task it was armed with. Cancelling an id that already fired is a no-op.
pub trait Scheduler {
    /// Arm a timer firing once after `delay`
    fn schedule_once(&mut self, delay: Duration, task: TimerTask) -> TimerId;

    /// Disarm a pending timer
    fn cancel(&mut self, id: TimerId);
}

/// Wall clock
pub trait Clock {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Today's date in UTC
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
