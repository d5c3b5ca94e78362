//! Constants for hash functions

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Internal block size of SHA-512 in bytes
pub const SHA512_BLOCK_SIZE: usize = 128;

/// Maximum SHA-512 input length in bytes accepted by this implementation.
///
/// The padding scheme stores the message length in bits in the trailing
/// 64-bit word of the final block; inputs at or beyond 2^61 bytes no longer
/// fit and are rejected rather than silently truncated.
pub const SHA512_MAX_INPUT_SIZE: u64 = 1 << 61;
