//! Constants for symmetric encryption algorithms

/// Salsa20 key size in bytes
pub const SALSA20_KEY_SIZE: usize = 32;

/// Salsa20 nonce size in bytes
pub const SALSA20_NONCE_SIZE: usize = 8;

/// Salsa20 block size in bytes
pub const SALSA20_BLOCK_SIZE: usize = 64;

/// Number of permutation rounds in standard Salsa20
pub const SALSA20_ROUNDS: usize = 20;

/// HSalsa20 input size in bytes (the first 16 bytes of an XSalsa20 nonce)
pub const HSALSA20_INPUT_SIZE: usize = 16;

/// HSalsa20 output (sub-key) size in bytes
pub const HSALSA20_OUTPUT_SIZE: usize = 32;

/// XSalsa20 nonce size in bytes
pub const XSALSA20_NONCE_SIZE: usize = 24;

/// Poly1305 key size in bytes
pub const POLY1305_KEY_SIZE: usize = 32;

/// Poly1305 tag size in bytes
pub const POLY1305_TAG_SIZE: usize = 16;

/// Poly1305 block size in bytes
pub const POLY1305_BLOCK_SIZE: usize = 16;
