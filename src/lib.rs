//! # halite
//!
//! A pure Rust implementation of the NaCl cryptographic primitives.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! halite = "0.3"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`halite-algorithms`]: SHA-512, Salsa20/HSalsa20, Poly1305, and the
//!   XSalsa20-Poly1305 `secretbox` AEAD
//! - [`halite-sign`]: Ed25519 digital signatures (RFC 8032)
//! - [`halite-kx`]: X25519 key exchange with the NaCl hashed shared secret
//! - [`halite-common`]: secure-memory types (`SecretBuffer`, zeroize guards)
//! - [`halite-internal`]: constant-time and byte-order utilities
//!
//! All primitives operate on caller-supplied byte buffers; the library does
//! not manage key storage, rotation policy, or transport.

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use halite_api as api;
pub use halite_common as common;
pub use halite_internal as internal;
pub use halite_params as params;

pub use halite_algorithms as algorithms;
pub use halite_kx as kx;
pub use halite_sign as sign;

/// Common imports for halite users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{AuthenticatedCipher, KeyExchange, Serialize, Signature, SymmetricCipher};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

    // Re-export memory safety utilities
    pub use crate::common::{wipe, SecureCompare};

    // The primitives themselves
    pub use crate::algorithms::aead::XSalsa20Poly1305;
    pub use crate::algorithms::hash::sha2::Sha512;
    pub use crate::algorithms::mac::Poly1305;
    pub use crate::algorithms::stream::salsa::Salsa20;
    pub use crate::kx::X25519;
    pub use crate::sign::Ed25519;
}
