//! Cryptographic primitives library with constant-time implementation
//!
//! This crate implements the symmetric primitives of the halite library:
//! the streaming SHA-512 hash, the Salsa20/HSalsa20 permutation core, the
//! Poly1305 one-time authenticator, and the XSalsa20-Poly1305 `secretbox`
//! authenticated cipher. Correctness here means bit-exact conformance to
//! FIPS 180-4, the Salsa20 specification, RFC 8439, and NaCl's wire formats.
//!
//! # Security Features
//!
//! - Secure memory handling with automatic zeroization
//! - Constant-time comparison and verification paths
//! - No data-dependent branching on secret material
//! - Fixed-size integer arithmetic only; no heap allocation inside the
//!   permutation and compression loops

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::Sha512;

// AEAD cipher implementations
#[cfg(feature = "alloc")]
pub mod aead;
#[cfg(feature = "alloc")]
pub use aead::XSalsa20Poly1305;

// MAC implementations
pub mod mac;
pub use mac::Poly1305;

// Stream cipher implementations
pub mod stream;
pub use stream::salsa::salsa20::Salsa20;

// Type system
pub mod types;
pub use types::{
    ByteSerializable, ConstantTimeEq, Digest, FixedSize, Nonce, RandomGeneration, SecretBytes,
    SecureZeroingType, Tag,
};

// Re-export security types from halite-common
pub use halite_common::security::{barrier, EphemeralSecret, SecretBuffer, ZeroizeGuard};

// Algorithm compatibility traits
pub use types::{
    digest::Sha512Compatible,
    nonce::{Salsa20Compatible, XSalsa20Compatible},
    tag::Poly1305Compatible,
};
