//! Digital Signature Schemes
//!
//! This crate implements the Ed25519 signature scheme (RFC 8032). The
//! signature layer owns input validation and hashing; the underlying
//! Edwards-curve point and scalar arithmetic is delegated to the
//! curve25519-dalek crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod eddsa;

// Re-exports
pub use eddsa::{Ed25519, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature};
