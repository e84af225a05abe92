//! Virtual-time timer queue
//!
//! A `Scheduler` that never fires on its own: the owner advances its clock and
//! collects the timers that came due. The headless shell uses it to replay
//! preview and transient-flag timers, and tests use it to step time exactly.

use crate::traits::Scheduler;
use crate::types::{TimerId, TimerTask};
use std::time::Duration;

#[derive(Debug, Clone)]
struct PendingTimer {
    id: TimerId,
    due: Duration,
    task: TimerTask,
}

/// Timers ordered by due time on a virtual clock
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether `id` is still armed
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    /// Tasks of all armed timers, earliest first
    pub fn pending_tasks(&self) -> Vec<&TimerTask> {
        let mut timers: Vec<&PendingTimer> = self.pending.iter().collect();
        timers.sort_by_key(|t| (t.due, t.id));
        timers.into_iter().map(|t| &t.task).collect()
    }

    /// Move the clock forward and return the timers that came due, in firing
    /// order
    pub fn advance(&mut self, by: Duration) -> Vec<(TimerId, TimerTask)> {
        self.now += by;
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.due <= now);
        self.pending = pending;

        due.sort_by_key(|t| (t.due, t.id));
        due.into_iter().map(|t| (t.id, t.task)).collect()
    }

    /// Fire everything still armed, regardless of due time
    pub fn drain_all(&mut self) -> Vec<(TimerId, TimerTask)> {
        let latest = self.pending.iter().map(|t| t.due).max();
        match latest {
            Some(due) if due > self.now => self.advance(due - self.now),
            _ => self.advance(Duration::ZERO),
        }
    }
}

impl Scheduler for TimerQueue {
    fn schedule_once(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        self.pending.push(PendingTimer {
            id,
            due: self.now + delay,
            task,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|t| t.id != id);
    }
}
