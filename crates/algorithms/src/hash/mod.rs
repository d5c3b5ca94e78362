//! Hash function implementations
//!
//! This module provides the hash functions used by the halite workspace and
//! the traits they implement. The only algorithm carried by this library is
//! SHA-512, which the signature scheme and key-derivation paths build on.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{string::String, vec::Vec};

use crate::error::Result;

/// SHA-2 family implementations
pub mod sha2;

// Re-export commonly used types
pub use sha2::Sha512;

/// Raw hash output as a byte vector
pub type Hash = Vec<u8>;

/// Compile-time parameters of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Identifier of the algorithm
    const ALGORITHM_ID: &'static str;
}

/// Common trait for streaming hash function implementations
///
/// The lifecycle is `new` followed by any number of `update` calls and a
/// single `finalize`. Implementations reject `update` after `finalize`.
pub trait HashFunction {
    /// Marker type carrying the algorithm parameters
    type Algorithm: HashAlgorithm;

    /// Digest output type
    type Output: AsRef<[u8]> + Clone;

    /// Create a fresh hasher
    fn new() -> Self;

    /// Feed more input; may be called repeatedly with any chunk sizes
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Consume the pending input and produce the digest
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Digest size in bytes
    fn output_size() -> usize;

    /// Internal block size in bytes
    fn block_size() -> usize;

    /// Human-readable algorithm name
    fn name() -> String;

    /// One-shot convenience: hash `data` in a single call
    fn digest(data: &[u8]) -> Result<Self::Output>
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}
