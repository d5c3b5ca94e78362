//! Symmetric cipher traits with operation builders
//!
//! The operation types let call sites read as
//! `cipher.encrypt().with_nonce(&n).encrypt(msg)` while keeping nonce
//! handling explicit: an operation without a nonce fails at execution, not
//! silently with a default.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::Result;
use rand::{CryptoRng, RngCore};

/// Marker trait for ciphers whose output carries an authentication tag
pub trait AuthenticatedCipher {
    /// Size of the authentication tag in bytes
    const TAG_SIZE: usize;

    /// Identifier of the algorithm
    const ALGORITHM_ID: &'static str;
}

/// A deferred cipher operation that produces `T` when executed
pub trait Operation<T> {
    /// Run the operation
    fn execute(self) -> Result<T>;
}

/// Core trait for symmetric ciphers
pub trait SymmetricCipher {
    /// Key type for this cipher
    type Key: Clone;

    /// Nonce type for this cipher
    type Nonce: Clone;

    /// Ciphertext container type
    type Ciphertext;

    /// Builder for encryption operations
    type EncryptOperation<'a>: EncryptOperation<'a, Self>
    where
        Self: 'a;

    /// Builder for decryption operations
    type DecryptOperation<'a>: DecryptOperation<'a, Self>
    where
        Self: 'a;

    /// Returns the name of this cipher
    fn name() -> &'static str;

    /// Begin an encryption operation
    fn encrypt(&self) -> Self::EncryptOperation<'_>;

    /// Begin a decryption operation
    fn decrypt(&self) -> Self::DecryptOperation<'_>;

    /// Generate a fresh key from the provided RNG
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Key>;

    /// Generate a fresh nonce from the provided RNG
    fn generate_nonce<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Nonce>;
}

/// Builder contract for encryption operations
pub trait EncryptOperation<'a, C: SymmetricCipher + ?Sized>: Operation<C::Ciphertext> {
    /// Set the nonce for this operation
    fn with_nonce(self, nonce: &'a C::Nonce) -> Self;

    /// Encrypt the plaintext
    fn encrypt(self, plaintext: &'a [u8]) -> Result<C::Ciphertext>;
}

/// Builder contract for decryption operations
pub trait DecryptOperation<'a, C: SymmetricCipher + ?Sized>: Operation<Vec<u8>> {
    /// Set the nonce for this operation
    fn with_nonce(self, nonce: &'a C::Nonce) -> Self;

    /// Decrypt the ciphertext, verifying authenticity first
    fn decrypt(self, ciphertext: &'a C::Ciphertext) -> Result<Vec<u8>>;
}
