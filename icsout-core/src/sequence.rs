//! Chronologically ordered collection of event occurrences.

use std::cmp::Ordering;

use crate::event::EventRecord;

/// Every occurrence of a calendar, ordered by start date then start time.
///
/// Records with identical start date and time keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct EventSequence {
    events: Vec<EventRecord>,
}

impl EventSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` after every record that does not sort later than it.
    pub fn insert(&mut self, record: EventRecord) {
        let index = self
            .events
            .partition_point(|existing| existing.chronological_cmp(&record) != Ordering::Greater);
        self.events.insert(index, record);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.events.iter()
    }

    pub fn get(&self, index: usize) -> Option<&EventRecord> {
        self.events.get(index)
    }

    /// The records immediately before and after `index`.
    pub fn neighbors(&self, index: usize) -> (Option<&EventRecord>, Option<&EventRecord>) {
        let prev = index.checked_sub(1).and_then(|i| self.events.get(i));
        let next = index.checked_add(1).and_then(|i| self.events.get(i));
        (prev, next)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventSequence {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<EventRecord> for EventSequence {
    fn from_iter<I: IntoIterator<Item = EventRecord>>(iter: I) -> Self {
        let mut sequence = EventSequence::new();
        for record in iter {
            sequence.insert(record);
        }
        sequence
    }
}
