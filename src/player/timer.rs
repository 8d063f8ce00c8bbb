//! Single-shot deferred tasks for the UI event loop.
//!
//! Nothing here runs on its own thread: the event loop asks for the tasks
//! whose deadline has passed and runs them itself. A repeating refresh is a
//! task that re-posts itself while its condition holds.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Deferred<T> {
    pending: Vec<(Instant, T)>,
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T: PartialEq> Deferred<T> {
    /// Run `task` once, `delay` after `now`.
    pub fn post_delayed(&mut self, task: T, delay: Duration, now: Instant) {
        self.pending.push((now + delay, task));
    }

    /// Like `post_delayed`, but a task already pending keeps its earlier deadline.
    ///
    /// Returns `false` when the task was already pending.
    pub fn post_once(&mut self, task: T, delay: Duration, now: Instant) -> bool {
        if self.is_pending(&task) {
            return false;
        }
        self.post_delayed(task, delay, now);
        true
    }

    pub fn is_pending(&self, task: &T) -> bool {
        self.pending.iter().any(|(_, t)| t == task)
    }

    /// Remove and return every task due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let mut due: Vec<(Instant, T)> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].0 <= now {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, t)| t).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(at, _)| *at).min()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
