//! Key Exchange
//!
//! This crate implements X25519 Diffie-Hellman key exchange over
//! Curve25519's Montgomery form. The shared secret this crate returns is
//! the NaCl variant: the raw curve point is post-processed through HSalsa20
//! with a zero input block, not handed out directly. This matches
//! `crypto_box`'s precomputation step and is an interoperability
//! requirement for NaCl-compatible peers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod x25519;

// Re-exports
pub use x25519::{X25519, X25519PublicKey, X25519SecretKey, X25519SharedSecret};
