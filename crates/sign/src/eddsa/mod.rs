//! EdDSA (Edwards-curve Digital Signature Algorithm) implementations
//!
//! This module provides Ed25519, the most widely used EdDSA variant, as
//! specified in RFC 8032.
//!
//! # Features
//!
//! - Deterministic signature generation
//! - Constant-time verification decision
//! - Secure key generation and zeroized key handling
//! - Comprehensive input validation before secret material is touched
//!
//! # Example
//!
//! ```
//! use halite_sign::eddsa::Ed25519;
//! use halite_api::Signature;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> halite_api::Result<()> {
//! let mut rng = OsRng;
//! let (public_key, secret_key) = Ed25519::keypair(&mut rng)?;
//!
//! let message = b"Hello, Ed25519!";
//! let signature = Ed25519::sign(message, &secret_key)?;
//!
//! assert!(Ed25519::verify(message, &signature, &public_key).is_ok());
//! # Ok(())
//! # }
//! ```

mod ed25519;
mod operations;

// Re-export Ed25519 types
pub use ed25519::{Ed25519, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature};

// The curve arithmetic wrapper is internal and not exported; it confines the
// external arithmetic dependency to a single module.
