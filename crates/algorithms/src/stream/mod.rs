//! Stream cipher implementations
//!
//! This module provides implementations of stream ciphers, which encrypt by
//! XORing plaintext with a pseudorandom keystream.
//!
//! # Available Stream Ciphers
//!
//! - Salsa20: Daniel J. Bernstein's 20-round ARX stream cipher, the core of
//!   the NaCl constructions in this library
//!
//! # Security Considerations
//!
//! Stream ciphers require unique nonces for each encryption operation with
//! the same key. Reusing a nonce with the same key completely breaks the
//! security of the cipher.

/// Salsa family of stream cipher implementations
pub mod salsa;

// Re-export commonly used types
pub use salsa::salsa20::{
    Salsa20, SALSA20_BLOCK_SIZE, SALSA20_KEY_SIZE, SALSA20_NONCE_SIZE,
};

use crate::error::Result;

/// Common trait for stream cipher implementations
pub trait StreamCipher {
    /// The key size in bytes
    const KEY_SIZE: usize;

    /// The nonce size in bytes
    const NONCE_SIZE: usize;

    /// The internal block size in bytes (if applicable)
    const BLOCK_SIZE: usize;

    /// Process data in place (encrypts for encryption, decrypts for decryption)
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Generate keystream directly into an output buffer
    fn keystream(&mut self, output: &mut [u8]) -> Result<()>;

    /// Reset the cipher to its initial state
    fn reset(&mut self) -> Result<()>;

    /// Seek to a specific block position in the keystream
    fn seek(&mut self, block: u64) -> Result<()>;
}

// Implement StreamCipher for Salsa20
impl StreamCipher for Salsa20 {
    const KEY_SIZE: usize = SALSA20_KEY_SIZE;
    const NONCE_SIZE: usize = SALSA20_NONCE_SIZE;
    const BLOCK_SIZE: usize = SALSA20_BLOCK_SIZE;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data);
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        self.keystream(output);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.reset();
        Ok(())
    }

    fn seek(&mut self, block: u64) -> Result<()> {
        self.seek(block);
        Ok(())
    }
}
