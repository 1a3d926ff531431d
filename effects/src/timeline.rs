//! Fire-and-forget timer queue on an explicit clock.
//!
//! DESIGN
//! ======
//! Callers pass the current time into every call, so the same queue runs
//! against the browser clock or a virtual clock in tests. Entries cannot be
//! cancelled; consumers make the scheduled work idempotent instead.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

#[derive(Clone, Debug, PartialEq)]
struct Scheduled<E> {
    due_ms: u64,
    event: E,
}

/// Pending events ordered by due time, ties broken by scheduling order.
#[derive(Clone, Debug)]
pub struct Timeline<E> {
    entries: Vec<Scheduled<E>>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<E> Timeline<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` to fire once the clock reaches `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, event: E) {
        // Insert after every entry due at or before `due_ms` so equal due
        // times keep insertion order.
        let at = self.entries.partition_point(|entry| entry.due_ms <= due_ms);
        self.entries.insert(at, Scheduled { due_ms, event });
    }

    /// Remove and return every event due at or before `now_ms`, in firing order.
    pub fn pop_due(&mut self, now_ms: u64) -> Vec<E> {
        let split = self.entries.partition_point(|entry| entry.due_ms <= now_ms);
        self.entries.drain(..split).map(|entry| entry.event).collect()
    }

    /// Earliest pending due time.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.entries.first().map(|entry| entry.due_ms)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
