//! Type-safe wrappers for cryptographic types
//!
//! This module provides domain-specific types with compile-time and runtime
//! guarantees for cryptographic operations, designed to be ergonomic while
//! preventing common mistakes.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

// Submodules
pub mod digest;
pub mod nonce;
pub mod tag;

// Sealed trait module (not public)
pub(crate) mod sealed;

// Re-export main types
pub use digest::Digest;
pub use nonce::Nonce;
pub use tag::Tag;

// Import and re-export core types
pub use halite_api::types::{Ciphertext, SecretBytes};

// Import and re-export security types from halite-common
pub use halite_common::security::{
    EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard,
};

// Common cryptographic traits
use rand::{CryptoRng, RngCore};

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for cryptographic types that can be randomly generated
pub trait RandomGeneration: Sized {
    /// Generate a random instance using the provided RNG
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> crate::error::Result<Self>;
}

/// Trait for types that have a fixed size
pub trait FixedSize {
    /// Get the size in bytes
    fn size() -> usize;
}

/// Trait for types that can be serialized to a byte representation
pub trait ByteSerializable: Sized {
    /// Convert to a byte vector
    fn to_bytes(&self) -> Vec<u8>;

    /// Try to create from a byte slice
    fn from_bytes(bytes: &[u8]) -> crate::error::Result<Self>;
}

// Re-export algorithm compatibility traits from submodules
pub use digest::Sha512Compatible;
pub use nonce::{Salsa20Compatible, XSalsa20Compatible};
pub use tag::Poly1305Compatible;
