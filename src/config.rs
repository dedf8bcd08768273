// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{ChainedTable, Error, FixedTable};

/// Load factor at which a chained table doubles its bucket count
pub const DEFAULT_MAX_LOAD_FACTOR: f32 = 0.7;

/// Hash table configuration builder
///
/// # Examples
///
/// ```
/// # use hashtables::Config;
/// #
/// let mut table = Config::new(8).max_load_factor(0.75).open_chained()?;
///
/// table.insert("a", "abc");
/// assert_eq!(Some("abc"), table.retrieve("a"));
/// #
/// # Ok::<(), hashtables::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Initial number of buckets
    pub capacity: usize,

    /// Load factor (entries / buckets) at which a chained table grows
    ///
    /// Has no effect on fixed tables.
    pub max_load_factor: f32,
}

impl Config {
    /// Initializes a new config with the given initial bucket count.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }

    /// Sets the initial number of buckets.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the load factor threshold of chained tables.
    ///
    /// Once an insert makes `len / capacity` reach this value, the table
    /// doubles its bucket count and rehashes every entry.
    ///
    /// Use `f32::INFINITY` to never grow.
    ///
    /// Defaults to 0.7.
    #[must_use]
    pub fn max_load_factor(mut self, ratio: f32) -> Self {
        self.max_load_factor = ratio;
        self
    }

    fn validate_capacity(&self) -> crate::Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(())
    }

    fn validate_load_factor(&self) -> crate::Result<()> {
        if self.max_load_factor.is_nan() || self.max_load_factor <= 0.0 {
            return Err(Error::InvalidLoadFactor(self.max_load_factor));
        }
        Ok(())
    }

    /// Opens a fixed-slot table.
    ///
    /// # Errors
    ///
    /// Returns error if the capacity is zero.
    pub fn open_fixed(self) -> crate::Result<FixedTable> {
        self.validate_capacity()?;
        Ok(FixedTable::create(self))
    }

    /// Opens a separate chaining table.
    ///
    /// # Errors
    ///
    /// Returns error if the capacity is zero or the load factor is not positive.
    pub fn open_chained(self) -> crate::Result<ChainedTable> {
        self.validate_capacity()?;
        self.validate_load_factor()?;
        Ok(ChainedTable::create(self))
    }
}
