//! Bounded history of successful lookups.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use chrono::Local;

use crate::icon::IconId;
use crate::model::Unit;

/// Sliding-window size: only the most recent lookups are retained.
pub const HISTORY_CAPACITY: usize = 10;

/// One successful lookup, as shown in the history listing.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// `[yyyy-mm-dd HH:MM:SS] <location>`.
    pub label: String,
    pub temperature: f64,
    pub unit: Unit,
    pub icon: IconId,
}

impl HistoryEntry {
    pub fn new(location: &str, temperature: f64, unit: Unit, icon: IconId) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        Self {
            label: format!("[{timestamp}] {location}"),
            temperature,
            unit,
            icon,
        }
    }
}

/// FIFO ring of the last [`HISTORY_CAPACITY`] lookups, oldest first.
///
/// Appends are serialized through a mutex so that two lookups completing at
/// the same time cannot interleave an eviction with an append. Not persisted
/// across process restarts.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Mutex<VecDeque<HistoryEntry>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest one once the window is full.
    pub fn record(&self, entry: HistoryEntry) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if entries.len() == HISTORY_CAPACITY {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Snapshot of the history, oldest first.
    pub fn all(&self) -> Vec<HistoryEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(location: &str) -> HistoryEntry {
        HistoryEntry::new(location, 20.0, Unit::Celsius, IconId::Sun)
    }

    #[test]
    fn label_carries_timestamp_and_location() {
        let e = entry("Paris");
        assert!(e.label.starts_with('['));
        assert!(e.label.ends_with("] Paris"));
    }

    #[test]
    fn record_keeps_insertion_order() {
        let store = HistoryStore::new();
        store.record(entry("Paris"));
        store.record(entry("London"));
        store.record(entry("Oslo"));

        let all = store.all();
        assert_eq!(all.len(), 3);
        assert!(all[0].label.ends_with("Paris"));
        assert!(all[1].label.ends_with("London"));
        assert!(all[2].label.ends_with("Oslo"));
    }

    #[test]
    fn eleventh_record_evicts_the_oldest() {
        let store = HistoryStore::new();
        for i in 1..=11 {
            store.record(entry(&format!("city-{i}")));
        }

        let all = store.all();
        assert_eq!(all.len(), HISTORY_CAPACITY);
        assert!(all[0].label.ends_with("city-2"));
        assert!(all[9].label.ends_with("city-11"));
    }

    #[test]
    fn duplicate_locations_are_not_deduplicated() {
        let store = HistoryStore::new();
        store.record(entry("Paris"));
        store.record(entry("Paris"));
        assert_eq!(store.len(), 2);
    }
}
