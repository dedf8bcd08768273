// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

mod chain;


use crate::{hash::bucket_index, Config, Entry, UserKey, UserValue};
use chain::Chain;

#[cfg(feature = "metrics")]
use crate::Metrics;

/// A hash table using separate chaining
///
/// Every bucket holds a singly-linked chain of the entries that hash to it,
/// so colliding keys never evict each other.
///
/// When an insert makes the load factor (`len / capacity`) reach the configured
/// threshold (0.7 by default), the bucket count is doubled and every entry is
/// moved into the bucket it hashes to under the new capacity.
///
/// # Examples
///
/// ```
/// # use hashtables::ChainedTable;
/// #
/// let mut table = ChainedTable::new(8);
///
/// for idx in 0..10 {
///     table.insert(format!("key-{idx}"), format!("val-{idx}"));
/// }
/// assert_eq!(10, table.len());
/// assert_eq!(Some("val-3"), table.retrieve("key-3"));
///
/// table.remove("key-3");
/// assert_eq!(None, table.retrieve("key-3"));
/// assert_eq!(9, table.len());
/// ```
#[derive(Debug)]
pub struct ChainedTable {
    buckets: Box<[Chain]>,

    /// Number of entries over all chains
    len: usize,

    max_load_factor: f32,

    #[cfg(feature = "metrics")]
    metrics: Metrics,
}

fn allocate(capacity: usize) -> Box<[Chain]> {
    std::iter::repeat_with(Chain::default)
        .take(capacity)
        .collect()
}

impl ChainedTable {
    /// Creates a table with the given initial number of buckets
    /// and the default load factor threshold.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; use [`Config::open_chained`] to get an error instead.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity may not be zero");
        Self::create(Config::new(capacity))
    }

    /// Expects an already validated config.
    pub(crate) fn create(config: Config) -> Self {
        log::trace!(
            "Creating chained table with {} buckets, max load factor {}",
            config.capacity,
            config.max_load_factor,
        );

        Self {
            buckets: allocate(config.capacity),
            len: 0,
            max_load_factor: config.max_load_factor,

            #[cfg(feature = "metrics")]
            metrics: Metrics::default(),
        }
    }

    /// Returns the number of buckets.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current load factor (entries per bucket).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f32 {
        self.len as f32 / self.capacity() as f32
    }

    /// Returns the load factor at which the table grows.
    #[must_use]
    pub fn max_load_factor(&self) -> f32 {
        self.max_load_factor
    }

    /// Returns the number of entries in the most populated bucket.
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Chain::len).max().unwrap_or_default()
    }

    /// Returns the table's runtime counters.
    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[expect(clippy::indexing_slicing, reason = "bucket_index is always in bounds")]
    fn bucket(&self, key: &str) -> &Chain {
        let idx = bucket_index(key, self.capacity());
        &self.buckets[idx]
    }

    #[expect(clippy::indexing_slicing, reason = "bucket_index is always in bounds")]
    fn bucket_mut(&mut self, key: &str) -> &mut Chain {
        let idx = bucket_index(key, self.capacity());
        &mut self.buckets[idx]
    }

    fn lookup(&self, key: &str) -> Option<&Entry> {
        let chain = self.bucket(key);
        let found = chain.iter().enumerate().find(|(_, entry)| entry.matches(key));

        #[cfg(feature = "metrics")]
        self.metrics
            .record_lookup(found.map_or_else(|| chain.len(), |(idx, _)| idx + 1));

        found.map(|(_, entry)| entry)
    }

    /// Inserts a key-value pair.
    ///
    /// If the key already exists, its value is replaced in place. Otherwise,
    /// the entry is appended to its bucket's chain, which may grow the table.
    pub fn insert<K: Into<UserKey>, V: Into<UserValue>>(&mut self, key: K, value: V) {
        let entry = Entry::new(key, value);

        if self.bucket_mut(&entry.key).insert(entry).is_some() {
            return;
        }

        self.len += 1;

        if self.load_factor() >= self.max_load_factor {
            self.resize();
        }
    }

    /// Returns the value stored under the given key.
    #[must_use]
    pub fn retrieve(&self, key: &str) -> Option<&str> {
        self.lookup(key).map(|entry| &*entry.value)
    }

    /// Returns `true` if the key is stored in the table.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Removes the entry with the given key, returning its value.
    ///
    /// Removing a key that does not exist has no effect, apart from a
    /// logged warning.
    pub fn remove(&mut self, key: &str) -> Option<UserValue> {
        let Some(entry) = self.bucket_mut(key).remove(key) else {
            log::warn!("{key:?} not in hash table");
            return None;
        };

        self.len -= 1;

        Some(entry.value)
    }

    /// Doubles the bucket count and moves every entry into the bucket it
    /// hashes to under the new capacity.
    ///
    /// Called automatically by [`ChainedTable::insert`].
    #[expect(clippy::indexing_slicing, reason = "bucket_index is always in bounds")]
    pub fn resize(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;

        let old_buckets = std::mem::replace(&mut self.buckets, allocate(new_capacity));

        for mut chain in old_buckets.into_vec() {
            while let Some(node) = chain.pop_front() {
                let idx = bucket_index(&node.entry.key, new_capacity);
                self.buckets[idx].push_back(node);
            }
        }

        #[cfg(feature = "metrics")]
        self.metrics
            .resizes
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);

        log::debug!(
            "Resized chained table from {old_capacity} to {new_capacity} buckets ({} entries)",
            self.len,
        );
    }

    /// Drops every entry, keeping the bucket count.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.len = 0;
    }
}
