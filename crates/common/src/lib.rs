//! Common secure-memory functionality for the halite library
//!
//! This crate provides the foundational types used across the workspace to
//! hold and dispose of sensitive cryptographic material: fixed-size secret
//! buffers, ephemeral secrets, scope-bound zeroize guards, constant-time
//! comparison, memory barriers, and in-place wiping.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

// Re-export memory safety traits and utilities
pub use security::memory::{wipe, SecureCompare};

// Re-export memory barrier utilities
pub use security::memory::barrier;
