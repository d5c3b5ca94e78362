//! MAC (Message Authentication Code) implementations
//!
//! This module provides the Poly1305 one-time authenticator used by the
//! secretbox construction. Poly1305 keys are strictly single-use: the same
//! key must never authenticate two distinct messages.

pub mod poly1305;

pub use poly1305::{Poly1305, POLY1305_BLOCK_SIZE, POLY1305_KEY_SIZE, POLY1305_TAG_SIZE};
