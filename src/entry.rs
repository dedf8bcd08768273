// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{UserKey, UserValue};

/// An owned key-value pair stored in a table
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    /// User-defined key
    pub key: UserKey,

    /// User-defined value
    pub value: UserValue,
}

impl Entry {
    /// Creates a new entry, taking ownership of key and value.
    pub fn new<K: Into<UserKey>, V: Into<UserValue>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns `true` if the entry is stored under the given key.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        *self.key == *key
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}/{:?}", self.key, self.value)
    }
}
