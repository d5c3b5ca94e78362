//! X25519 key exchange with the NaCl hashed shared secret
//!
//! `derive_public` clamps the private scalar per RFC 7748 and multiplies
//! the Curve25519 base point; `exchange` multiplies the peer's point by the
//! clamped scalar and then derives the final shared secret as
//! `HSalsa20(raw_point, zero)`. Returning the hashed value instead of the
//! raw coordinate is the NaCl-compatible behavior consumers of this crate
//! depend on; it is not an optimization target.
//!
//! # Security Features
//!
//! - No direct byte access to secret scalars outside zeroizing exports
//! - Constant-time scalar multiplication (delegated to curve25519-dalek)
//! - Rejection of low-order peer points that would force a predictable
//!   shared secret

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Error as KxError;
use curve25519_dalek::montgomery::MontgomeryPoint;
use halite_algorithms::stream::salsa::hsalsa20;
use halite_api::{
    error::Error as ApiError, KeyExchange, Result as ApiResult, Serialize, SerializeSecret,
};
use halite_common::security::SecretBuffer;
use halite_params::traditional::curve25519::{
    X25519_PUBLIC_KEY_SIZE, X25519_SECRET_KEY_SIZE, X25519_SHARED_SECRET_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// X25519 key exchange with NaCl shared-secret derivation
pub struct X25519;

/// Public key for X25519 (compressed Montgomery u-coordinate)
#[derive(Clone, Zeroize)]
pub struct X25519PublicKey([u8; X25519_PUBLIC_KEY_SIZE]);

/// Secret key for X25519 (scalar value, clamped at use)
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct X25519SecretKey(SecretBuffer<X25519_SECRET_KEY_SIZE>);

/// Shared secret from X25519, already passed through HSalsa20
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct X25519SharedSecret(SecretBuffer<X25519_SHARED_SECRET_SIZE>);

impl core::fmt::Debug for X25519PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("X25519PublicKey")
            .field("algorithm", &"X25519")
            .finish()
    }
}

impl core::fmt::Debug for X25519SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("X25519SecretKey")
            .field("algorithm", &"X25519")
            .finish()
    }
}

impl core::fmt::Debug for X25519SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("X25519SharedSecret").finish()
    }
}

// Public key methods
impl X25519PublicKey {
    /// Create a public key from its 32-byte u-coordinate encoding
    ///
    /// Any 32-byte string decodes (RFC 7748 masks the high bit during
    /// multiplication); low-order points are caught at exchange time, when
    /// the degenerate result is visible.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != X25519_PUBLIC_KEY_SIZE {
            return Err(ApiError::InvalidLength {
                context: "X25519PublicKey::from_bytes",
                expected: X25519_PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }

        let mut key_bytes = [0u8; X25519_PUBLIC_KEY_SIZE];
        key_bytes.copy_from_slice(bytes);
        Ok(Self(key_bytes))
    }

    /// Export the public key bytes
    pub fn to_bytes(&self) -> [u8; X25519_PUBLIC_KEY_SIZE] {
        self.0
    }
}

// Secret key methods
impl X25519SecretKey {
    /// Create a secret key from raw scalar bytes
    ///
    /// The bytes are stored as supplied; RFC 7748 clamping is applied at
    /// each use, so pre-clamped and raw random scalars behave identically.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != X25519_SECRET_KEY_SIZE {
            return Err(ApiError::InvalidLength {
                context: "X25519SecretKey::from_bytes",
                expected: X25519_SECRET_KEY_SIZE,
                actual: bytes.len(),
            });
        }

        let mut buffer_bytes = [0u8; X25519_SECRET_KEY_SIZE];
        buffer_bytes.copy_from_slice(bytes);
        Ok(Self(SecretBuffer::new(buffer_bytes)))
    }

    /// Export the secret scalar with zeroization on drop
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }

    fn scalar_array(&self) -> [u8; X25519_SECRET_KEY_SIZE] {
        let mut scalar = [0u8; X25519_SECRET_KEY_SIZE];
        scalar.copy_from_slice(self.0.as_ref());
        scalar
    }
}

// Shared secret methods
impl X25519SharedSecret {
    /// Export the shared secret bytes
    ///
    /// Use the result immediately as a symmetric key or KDF input rather
    /// than storing it.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }

    /// Borrow the shared secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Serialize for X25519PublicKey {
    fn to_bytes(&self) -> ApiResult<Vec<u8>> {
        Ok(self.0.to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        X25519PublicKey::from_bytes(bytes)
    }
}

impl SerializeSecret for X25519SecretKey {
    fn to_bytes_zeroizing(&self) -> ApiResult<Zeroizing<Vec<u8>>> {
        Ok(self.to_bytes())
    }

    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        X25519SecretKey::from_bytes(bytes)
    }
}

impl SerializeSecret for X25519SharedSecret {
    fn to_bytes_zeroizing(&self) -> ApiResult<Zeroizing<Vec<u8>>> {
        Ok(self.to_bytes())
    }

    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != X25519_SHARED_SECRET_SIZE {
            return Err(ApiError::InvalidLength {
                context: "X25519SharedSecret::from_bytes",
                expected: X25519_SHARED_SECRET_SIZE,
                actual: bytes.len(),
            });
        }
        let mut data = [0u8; X25519_SHARED_SECRET_SIZE];
        data.copy_from_slice(bytes);
        Ok(Self(SecretBuffer::new(data)))
    }
}

impl KeyExchange for X25519 {
    type PublicKey = X25519PublicKey;
    type SecretKey = X25519SecretKey;
    type SharedSecret = X25519SharedSecret;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "X25519"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let mut scalar = [0u8; X25519_SECRET_KEY_SIZE];
        rng.fill_bytes(&mut scalar);

        let secret = X25519SecretKey(SecretBuffer::new(scalar));
        scalar.zeroize();
        let public = Self::derive_public(&secret)?;

        Ok((public, secret))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// Derive the public key: clamp, then multiply the base point
    fn derive_public(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        let mut scalar = secret_key.scalar_array();
        let point = MontgomeryPoint::mul_base_clamped(scalar);
        scalar.zeroize();

        Ok(X25519PublicKey(point.to_bytes()))
    }

    /// Compute the NaCl shared secret: clamped scalar multiplication of the
    /// peer point, then HSalsa20 with a zero input block
    fn exchange(
        secret_key: &Self::SecretKey,
        peer_public: &Self::PublicKey,
    ) -> ApiResult<Self::SharedSecret> {
        let mut scalar = secret_key.scalar_array();
        let peer_point = MontgomeryPoint(peer_public.0);

        let mut raw = peer_point.mul_clamped(scalar).to_bytes();
        scalar.zeroize();

        // A low-order peer point collapses the product to the identity,
        // which would hand every such peer the same "secret"
        if raw.iter().all(|&b| b == 0) {
            raw.zeroize();
            return Err(ApiError::from(KxError::DegenerateSharedSecret {
                algorithm: "X25519",
            }));
        }

        let zero = [0u8; 16];
        let hashed = hsalsa20(&raw, &zero);
        raw.zeroize();

        Ok(X25519SharedSecret(SecretBuffer::new(hashed)))
    }
}

#[cfg(test)]
mod tests;
