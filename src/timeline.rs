//! Virtual clock for scheduled tasks.
//!
//! Records the timer requests found in effect batches and hands tasks back
//! in due order as time is advanced. Ties run in the order they were
//! scheduled. Scheduling a task that is already pending replaces it, the same
//! rule the browser host follows.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use crate::effect::{Effect, Task};

#[derive(Debug, Clone)]
struct Pending {
    due_ms: u64,
    seq: u64,
    task: Task,
    interval_ms: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    now_ms: u64,
    seq: u64,
    pending: Vec<Pending>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn is_pending(&self, task: Task) -> bool {
        self.pending.iter().any(|p| p.task == task)
    }

    /// Number of scheduled tasks, repeating ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Record every timer request in `effects`; other effects are ignored.
    ///
    /// A repeat with a zero interval would never let the clock move, so it
    /// is dropped (and any pending run of that task cancelled).
    pub fn record(&mut self, effects: &[Effect]) {
        for effect in effects {
            match *effect {
                Effect::Schedule { task, delay_ms } => self.insert(task, delay_ms, None),
                Effect::Repeat { task, interval_ms: 0 } => {
                    log::warn!("refusing zero-interval repeat of {task:?}");
                    self.cancel(task);
                }
                Effect::Repeat { task, interval_ms } => self.insert(task, interval_ms, Some(interval_ms)),
                Effect::Cancel(task) => self.cancel(task),
                _ => {}
            }
        }
    }

    pub fn cancel(&mut self, task: Task) {
        self.pending.retain(|p| p.task != task);
    }

    /// Pop the earliest task due at or before `until_ms`, moving the clock to its due time.
    ///
    /// Repeating tasks are re-armed one interval later.
    pub fn next_due(&mut self, until_ms: u64) -> Option<Task> {
        let (index, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))?;
        let entry = self.pending.remove(index);
        self.now_ms = self.now_ms.max(entry.due_ms);
        if let Some(interval) = entry.interval_ms {
            self.insert(entry.task, interval, Some(interval));
        }
        Some(entry.task)
    }

    /// Move the clock forward without running anything.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    fn insert(&mut self, task: Task, delay_ms: u32, interval_ms: Option<u32>) {
        self.cancel(task);
        self.seq += 1;
        self.pending.push(Pending { due_ms: self.now_ms + u64::from(delay_ms), seq: self.seq, task, interval_ms });
    }
}
