//! Security primitives and memory safety utilities
//!
//! Foundational types and patterns used throughout the halite workspace to
//! ensure sensitive material is held briefly and erased reliably.

pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

// Re-export memory safety utilities
pub use memory::{barrier, wipe, SecureCompare};
