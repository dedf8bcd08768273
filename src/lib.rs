// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! A K.I.S.S. implementation of string hash tables.
//!
//! ##### About
//!
//! This crate exports two independent associative stores, keyed and valued by text,
//! that share the same bucket selection: the djb2 hash of the key,
//! modulo the number of buckets.
//!
//! - [`FixedTable`] has a fixed number of slots and holds at most one entry per slot.
//!   When two keys hash to the same slot, the most recently inserted one wins and the
//!   previous entry is dropped (a warning is logged). Lookups do not compare keys.
//!   It is the minimal baseline, not a correct map.
//!
//! - [`ChainedTable`] uses separate chaining: every bucket holds a singly-linked chain of
//!   entries, so colliding keys coexist. Once the load factor (entries per bucket) reaches
//!   0.7, the bucket count is doubled and every entry is rehashed into its new bucket.
//!
//! Both tables are single-threaded; mutating operations take `&mut self`.
//!
//! Diagnostics (overwrites, removal of missing keys, resizes) are emitted through the
//! [`log`] facade and never change return values.
//!
//! ```
//! use hashtables::Config;
//!
//! let mut table = Config::new(8).open_chained()?;
//!
//! table.insert("key-0", "val-0");
//! table.insert("key-8", "val-8"); // same bucket as key-0
//!
//! assert_eq!(Some("val-0"), table.retrieve("key-0"));
//! assert_eq!(Some("val-8"), table.retrieve("key-8"));
//!
//! table.remove("key-0");
//! assert_eq!(None, table.retrieve("key-0"));
//! assert_eq!(1, table.len());
//! #
//! # Ok::<(), hashtables::Error>(())
//! ```

#![deny(clippy::all, missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![allow(clippy::option_if_let_else)]
#![warn(clippy::redundant_feature_names)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod chained;

/// Configuration
pub mod config;

mod entry;
mod error;
mod fixed;

/// djb2 hashing and bucket selection
pub mod hash;

#[cfg(feature = "metrics")]
mod metrics;

/// User defined key (text)
pub type UserKey = String;

/// User defined value (text)
pub type UserValue = String;

pub(crate) use entry::Entry;

pub use {
    chained::ChainedTable,
    config::Config,
    error::{Error, Result},
    fixed::FixedTable,
};

#[cfg(feature = "metrics")]
pub use metrics::Metrics;
