//! Trait definition for Diffie-Hellman style key exchange
//!
//! A key exchange produces the same shared secret on both sides from one
//! party's secret key and the other's public key. Unlike a KEM there is no
//! ciphertext: the public keys themselves are the exchanged messages.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for key exchange with domain-specific types
pub trait KeyExchange {
    /// Public key type.
    ///
    /// Implements `Serialize` to guarantee safe `from_bytes`/`to_bytes`.
    type PublicKey: Clone + Serialize;

    /// Secret key type.
    ///
    /// Implements `Zeroize` for cleanup and `SerializeSecret` so byte
    /// exports are themselves zeroizing.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type.
    ///
    /// Should be fed to a KDF or used as a symmetric key immediately rather
    /// than stored.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Keypair type for storage of related keys
    type KeyPair: Clone;

    /// Returns the algorithm name
    fn name() -> &'static str;

    /// Generate a new keypair from the provided CSPRNG
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Derive the public key that corresponds to a secret key
    fn derive_public(secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;

    /// Compute the shared secret from our secret key and the peer's public
    /// key
    ///
    /// Must be constant-time in the secret key and must reject degenerate
    /// peer values rather than return a predictable secret.
    fn exchange(
        secret_key: &Self::SecretKey,
        peer_public: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
