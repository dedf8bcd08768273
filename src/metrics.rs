// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::Relaxed;

/// Runtime counters of a hash table
#[derive(Debug, Default)]
pub struct Metrics {
    /// Number of entries that were evicted by a colliding insert
    pub(crate) evictions: AtomicUsize,

    /// Number of times the backing array was grown
    pub(crate) resizes: AtomicUsize,

    /// Number of chain lookups that were performed
    pub(crate) chain_lookups: AtomicUsize,

    /// Number of chain nodes that were visited during lookups
    pub(crate) chain_probes: AtomicUsize,
}

#[allow(clippy::cast_precision_loss)]
impl Metrics {
    /// Number of entries lost to slot overwrites.
    pub fn evictions(&self) -> usize {
        self.evictions.load(Relaxed)
    }

    /// Number of times the table was resized.
    pub fn resizes(&self) -> usize {
        self.resizes.load(Relaxed)
    }

    /// Average number of chain nodes visited per lookup.
    pub fn average_probe_length(&self) -> f64 {
        let lookups = self.chain_lookups.load(Relaxed) as f64;
        let probes = self.chain_probes.load(Relaxed) as f64;
        probes / lookups
    }

    pub(crate) fn record_lookup(&self, probes: usize) {
        self.chain_lookups.fetch_add(1, Relaxed);
        self.chain_probes.fetch_add(probes, Relaxed);
    }
}
