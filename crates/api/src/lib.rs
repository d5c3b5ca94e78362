//! Public API traits and types for the halite library
//!
//! This crate provides the public API surface for the halite ecosystem:
//! trait definitions, error types, and the common byte-container types used
//! by the algorithm crates.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{
    AuthenticatedCipher, KeyExchange, Serialize, SerializeSecret, Signature, SignatureDerive,
    SymmetricCipher,
};

// Re-export trait modules for direct access
pub use traits::{kex, serialize, signature, symmetric};
