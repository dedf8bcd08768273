// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Initial accumulator of djb2
pub const SEED: usize = 5_381;

/// Computes the raw (unreduced) djb2 hash of the given bytes.
///
/// Every step computes `acc * 33 + byte` as `(acc << 5) + acc + byte`,
/// wrapping at the platform word width.
#[must_use]
pub fn djb2(bytes: &[u8]) -> usize {
    bytes.iter().fold(SEED, |acc, &byte| {
        (acc << 5).wrapping_add(acc).wrapping_add(usize::from(byte))
    })
}

/// Maps a key to a bucket index in `[0, modulus)`.
///
/// `modulus` is the bucket count of the owning table and must not be zero.
#[must_use]
pub fn bucket_index(key: &str, modulus: usize) -> usize {
    debug_assert!(modulus > 0, "bucket count may not be zero");
    djb2(key.as_bytes()) % modulus
}
