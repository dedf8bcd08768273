// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{hash::bucket_index, Config, Entry, UserKey, UserValue};

#[cfg(feature = "metrics")]
use crate::Metrics;

/// A fixed-capacity hash table that keeps one entry per bucket
///
/// There is no collision handling: inserting a key into a bucket that is
/// held by a different key evicts the previous entry (a warning is logged).
/// Lookups and removals only look at the bucket, not at the stored key, so
/// a colliding key will read (or remove) whatever occupies its bucket.
///
/// Use [`ChainedTable`](crate::ChainedTable) if every inserted key needs
/// to stay retrievable.
///
/// # Examples
///
/// ```
/// # use hashtables::FixedTable;
/// #
/// let mut table = FixedTable::new(16);
///
/// table.insert("line", "Here today...\n");
/// assert_eq!(Some("Here today...\n"), table.retrieve("line"));
///
/// table.remove("line");
/// assert_eq!(None, table.retrieve("line"));
/// ```
#[derive(Debug)]
pub struct FixedTable {
    slots: Box<[Option<Entry>]>,

    /// Number of occupied slots
    len: usize,

    #[cfg(feature = "metrics")]
    metrics: Metrics,
}

impl FixedTable {
    /// Creates a table with the given number of slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; use [`Config::open_fixed`] to get an error instead.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity may not be zero");
        Self::create(Config::new(capacity))
    }

    /// Expects an already validated config.
    pub(crate) fn create(config: Config) -> Self {
        log::trace!("Creating fixed table with {} slots", config.capacity);

        Self {
            slots: std::iter::repeat_with(|| None)
                .take(config.capacity)
                .collect(),
            len: 0,

            #[cfg(feature = "metrics")]
            metrics: Metrics::default(),
        }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the table's runtime counters.
    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[expect(clippy::indexing_slicing, reason = "bucket_index is always in bounds")]
    fn slot(&self, key: &str) -> Option<&Entry> {
        let idx = bucket_index(key, self.capacity());
        self.slots[idx].as_ref()
    }

    #[expect(clippy::indexing_slicing, reason = "bucket_index is always in bounds")]
    fn slot_mut(&mut self, key: &str) -> &mut Option<Entry> {
        let idx = bucket_index(key, self.capacity());
        &mut self.slots[idx]
    }

    /// Inserts a key-value pair into the key's slot.
    ///
    /// If the slot is held by a different key, that entry is dropped and a
    /// warning is logged.
    pub fn insert<K: Into<UserKey>, V: Into<UserValue>>(&mut self, key: K, value: V) {
        let entry = Entry::new(key, value);
        let slot = self.slot_mut(&entry.key);

        match slot.replace(entry) {
            None => {
                self.len += 1;
            }
            Some(old) => {
                if let Some(new) = slot.as_ref().filter(|new| !new.matches(&old.key)) {
                    log::warn!("Overwriting {old} with {new}");

                    #[cfg(feature = "metrics")]
                    self.metrics
                        .evictions
                        .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                }
            }
        }
    }

    /// Returns the value held by the key's slot.
    ///
    /// The stored key is not compared, so a different key that hashes to the
    /// same slot yields that key's value.
    #[must_use]
    pub fn retrieve(&self, key: &str) -> Option<&str> {
        self.slot(key).map(|entry| &*entry.value)
    }

    /// Clears the key's slot, regardless of which key occupies it.
    ///
    /// Does nothing if the slot is empty.
    pub fn remove(&mut self, key: &str) {
        if self.slot_mut(key).take().is_some() {
            self.len -= 1;
        }
    }

    /// Drops every entry, keeping the slot count.
    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.len = 0;
    }
}
