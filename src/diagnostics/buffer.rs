// SPDX-License-Identifier: MPL-2.0
//! Bounded event log that drops its oldest entry when full.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::EventCapacity;

/// Fixed-capacity log, oldest entry first.
///
/// ```
/// use alert_stack::diagnostics::RingLog;
///
/// let mut log = RingLog::with_raw_capacity(2);
/// log.push("shown");
/// log.push("paused");
/// log.push("closed");
///
/// let entries: Vec<_> = log.iter().copied().collect();
/// assert_eq!(entries, vec!["paused", "closed"]);
/// ```
#[derive(Debug, Clone)]
pub struct RingLog<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> RingLog<T> {
    #[must_use]
    pub fn new(capacity: EventCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a log with an unchecked capacity (at least 1). Meant for tests.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest when at capacity.
    pub fn push(&mut self, entry: T) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Most recent entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
