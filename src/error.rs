// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Represents errors that can occur when opening a hash table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Capacity (bucket count) was zero
    InvalidCapacity,

    /// Load factor threshold was zero, negative or NaN
    InvalidLoadFactor(f32),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HashTableError: {self:?}")
    }
}

impl std::error::Error for Error {}

/// Hash table result
pub type Result<T> = std::result::Result<T, Error>;
