//! Ed25519 signature scheme implementation
//!
//! This implements Ed25519 as specified in RFC 8032. The scheme layer owns
//! length validation, the SHA-512 hashing steps, and key lifecycle; all
//! point and scalar arithmetic is delegated to the operations module.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use halite_algorithms::hash::sha2::Sha512;
use halite_algorithms::hash::HashFunction;
use halite_api::{error::Error as ApiError, Result as ApiResult, Signature as SignatureTrait};
use halite_api::SignatureDerive;
use halite_internal::constant_time::ct_eq;
use halite_params::traditional::curve25519::{
    ED25519_EXPANDED_KEY_SIZE, ED25519_PUBLIC_KEY_SIZE, ED25519_SECRET_KEY_SIZE,
    ED25519_SIGNATURE_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::operations;

/// Ed25519 signature scheme
///
/// # Security Considerations
///
/// - Always use a cryptographically secure RNG for key generation
/// - Verify public key authenticity through secure channels
/// - Never reuse seeds across different applications or purposes
/// - Secret key material is cleared from memory automatically on drop
pub struct Ed25519;

/// Ed25519 public key (32 bytes)
#[derive(Clone, Zeroize)]
pub struct Ed25519PublicKey(pub [u8; ED25519_PUBLIC_KEY_SIZE]);

impl core::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519PublicKey")
            .field("algorithm", &"Ed25519")
            .finish()
    }
}

/// Ed25519 secret key
///
/// The internal representation holds both the 32-byte seed and the 64-byte
/// expanded key material (clamped scalar followed by the signing prefix).
/// Only the seed needs to be stored for persistence; the expansion is
/// deterministic.
#[derive(Clone)]
pub struct Ed25519SecretKey {
    /// The original 32-byte seed
    seed: [u8; ED25519_SECRET_KEY_SIZE],
    /// The expanded key material (64 bytes from SHA-512)
    expanded: [u8; ED25519_EXPANDED_KEY_SIZE],
}

impl Zeroize for Ed25519SecretKey {
    fn zeroize(&mut self) {
        self.seed.zeroize();
        self.expanded.zeroize();
    }
}

impl Drop for Ed25519SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl core::fmt::Debug for Ed25519SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519SecretKey")
            .field("algorithm", &"Ed25519")
            .finish()
    }
}

/// Ed25519 signature (64 bytes: R || s)
#[derive(Clone, Zeroize)]
pub struct Ed25519Signature(pub [u8; ED25519_SIGNATURE_SIZE]);

impl core::fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519Signature")
            .field("length", &self.0.len())
            .finish()
    }
}

// Public key methods
impl Ed25519PublicKey {
    /// Create a public key from bytes
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != ED25519_PUBLIC_KEY_SIZE {
            return Err(ApiError::InvalidKey {
                context: "Ed25519PublicKey::from_bytes",
                #[cfg(feature = "std")]
                message: format!(
                    "Invalid key size: expected {}, got {}",
                    ED25519_PUBLIC_KEY_SIZE,
                    bytes.len()
                ),
            });
        }
        let mut key = [0u8; ED25519_PUBLIC_KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Ed25519PublicKey(key))
    }

    /// Convert public key to bytes
    pub fn to_bytes(&self) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
        self.0
    }
}

// Secret key methods
impl Ed25519SecretKey {
    /// Create a secret key from a 32-byte seed
    ///
    /// The seed is expanded with SHA-512 and the low 32 bytes are clamped
    /// per RFC 8032. Only seeds produced by a cryptographic RNG give a
    /// secure key.
    pub fn from_seed(seed: &[u8; ED25519_SECRET_KEY_SIZE]) -> ApiResult<Self> {
        // Expand seed using SHA-512
        let mut hasher = Sha512::new();
        hasher.update(seed).map_err(ApiError::from)?;
        let hash = hasher.finalize().map_err(ApiError::from)?;

        let mut expanded = [0u8; ED25519_EXPANDED_KEY_SIZE];
        expanded.copy_from_slice(hash.as_ref());

        // Apply Ed25519 clamping to the scalar half
        expanded[0] &= 248; // Clear bits 0, 1, 2
        expanded[31] &= 127; // Clear bit 255
        expanded[31] |= 64; // Set bit 254

        Ok(Ed25519SecretKey {
            seed: *seed,
            expanded,
        })
    }

    /// Get the 32-byte seed value
    ///
    /// This is what should be stored when saving keys to persistent
    /// storage; encrypt it at rest and never log it.
    pub fn seed(&self) -> &[u8; ED25519_SECRET_KEY_SIZE] {
        &self.seed
    }

    /// Export the seed as a Zeroizing vector for secure handling
    pub fn export_seed(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.seed.to_vec())
    }

    /// Export the 64-byte expanded key (clamped scalar || prefix)
    ///
    /// Needed by callers that persist the expanded form instead of the
    /// seed. The export is zeroizing; handle with the same care as the
    /// seed.
    pub fn export_expanded(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.expanded.to_vec())
    }

    /// Reconstruct a signing key from a 64-byte expanded key
    ///
    /// The seed is unrecoverable from the expanded form and is stored as
    /// zeros; such a key signs and derives its public key normally but
    /// cannot re-export a seed.
    pub fn from_expanded(expanded: &[u8]) -> ApiResult<Self> {
        if expanded.len() != ED25519_EXPANDED_KEY_SIZE {
            return Err(ApiError::InvalidLength {
                context: "Ed25519SecretKey::from_expanded",
                expected: ED25519_EXPANDED_KEY_SIZE,
                actual: expanded.len(),
            });
        }
        let mut key = [0u8; ED25519_EXPANDED_KEY_SIZE];
        key.copy_from_slice(expanded);
        Ok(Ed25519SecretKey {
            seed: [0u8; ED25519_SECRET_KEY_SIZE],
            expanded: key,
        })
    }

    /// Get the public key corresponding to this secret key
    ///
    /// The derivation is deterministic, so calling this multiple times
    /// always returns the same public key.
    pub fn public_key(&self) -> ApiResult<Ed25519PublicKey> {
        Ed25519::derive_public_from_secret(self)
    }
}

// Signature methods
impl Ed25519Signature {
    /// Create a signature from bytes
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != ED25519_SIGNATURE_SIZE {
            return Err(ApiError::InvalidSignature {
                context: "Ed25519Signature::from_bytes",
                #[cfg(feature = "std")]
                message: format!(
                    "Invalid signature size: expected {}, got {}",
                    ED25519_SIGNATURE_SIZE,
                    bytes.len()
                ),
            });
        }
        let mut sig = [0u8; ED25519_SIGNATURE_SIZE];
        sig.copy_from_slice(bytes);
        Ok(Ed25519Signature(sig))
    }

    /// Convert signature to bytes
    pub fn to_bytes(&self) -> [u8; ED25519_SIGNATURE_SIZE] {
        self.0
    }
}

impl SignatureTrait for Ed25519 {
    type PublicKey = Ed25519PublicKey;
    type SecretKey = Ed25519SecretKey;
    type SignatureData = Ed25519Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "Ed25519"
    }

    /// Generate an Ed25519 key pair
    ///
    /// Follows RFC 8032 key generation: a random 32-byte seed is expanded
    /// with SHA-512, the scalar half is clamped, and the public key is the
    /// clamped scalar times the base point.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let mut seed = [0u8; ED25519_SECRET_KEY_SIZE];
        rng.fill_bytes(&mut seed);

        let secret = Ed25519SecretKey::from_seed(&seed)?;
        seed.zeroize();
        let public = secret.public_key()?;

        Ok((public, secret))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// Sign a message using Ed25519
    ///
    /// The signing process follows RFC 8032:
    /// 1. r = SHA-512(prefix || message) mod L
    /// 2. R = \[r\]B
    /// 3. k = SHA-512(R || A || message) mod L
    /// 4. s = (r + k*a) mod L
    /// 5. Return (R, s)
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        // Extract scalar and prefix from expanded secret key
        let scalar = &secret_key.expanded[0..32];
        let prefix = &secret_key.expanded[32..64];

        // Step 1: Compute r = SHA-512(prefix || message) mod L
        let mut hasher = Sha512::new();
        hasher.update(prefix).map_err(ApiError::from)?;
        hasher.update(message).map_err(ApiError::from)?;
        let r_hash = hasher.finalize().map_err(ApiError::from)?;

        let mut r = [0u8; 32];
        operations::reduce_512_to_scalar(r_hash.as_ref(), &mut r);

        // Step 2: Compute R = \[r\]B
        let r_point = operations::scalar_mult_base(&r);

        // Step 3: Recompute the public key A
        let mut public_key = [0u8; ED25519_PUBLIC_KEY_SIZE];
        operations::derive_public_key(scalar, &mut public_key).map_err(|e| {
            ApiError::InvalidParameter {
                context: "Ed25519 signing",
                #[cfg(feature = "std")]
                message: format!("Failed to derive public key: {}", e),
            }
        })?;

        // Step 4: Compute k = SHA-512(R || A || message) mod L
        let mut hasher = Sha512::new();
        hasher.update(&r_point).map_err(ApiError::from)?;
        hasher.update(&public_key).map_err(ApiError::from)?;
        hasher.update(message).map_err(ApiError::from)?;
        let k_hash = hasher.finalize().map_err(ApiError::from)?;

        let mut k = [0u8; 32];
        operations::reduce_512_to_scalar(k_hash.as_ref(), &mut k);

        // Step 5: Compute s = (r + k*a) mod L
        let mut s = [0u8; 32];
        operations::compute_s(&r, &k, scalar, &mut s);
        r.zeroize();

        // Step 6: Construct signature (R || s)
        let mut signature = [0u8; ED25519_SIGNATURE_SIZE];
        signature[0..32].copy_from_slice(&r_point);
        signature[32..64].copy_from_slice(&s);

        Ok(Ed25519Signature(signature))
    }

    /// Verify an Ed25519 signature
    ///
    /// Checks that \[s\]B = R + \[k\]A where k = SHA-512(R || A || message)
    /// mod L. Every failure mode returns the same `InvalidSignature` error.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        // Input validation
        if public_key.0.len() != ED25519_PUBLIC_KEY_SIZE {
            return Err(ApiError::InvalidKey {
                context: "Ed25519 verify",
                #[cfg(feature = "std")]
                message: "Invalid public key size".to_string(),
            });
        }

        if signature.0.len() != ED25519_SIGNATURE_SIZE {
            return Err(ApiError::InvalidSignature {
                context: "Ed25519 verify",
                #[cfg(feature = "std")]
                message: "Invalid signature size".to_string(),
            });
        }

        // Parse signature as (R, s)
        let r_bytes = &signature.0[0..32];
        let s_bytes = &signature.0[32..64];

        // Compute k = SHA-512(R || A || message) mod L
        let mut hasher = Sha512::new();
        hasher.update(r_bytes).map_err(ApiError::from)?;
        hasher.update(&public_key.0).map_err(ApiError::from)?;
        hasher.update(message).map_err(ApiError::from)?;
        let k_hash = hasher.finalize().map_err(ApiError::from)?;

        let mut k = [0u8; 32];
        operations::reduce_512_to_scalar(k_hash.as_ref(), &mut k);

        // Verify the signature equation: \[s\]B = R + \[k\]A
        let mut check = [0u8; 32];
        operations::verify_equation(s_bytes, r_bytes, &k, &public_key.0, &mut check).map_err(
            |_| ApiError::InvalidSignature {
                context: "Ed25519 verify",
                #[cfg(feature = "std")]
                message: "signature rejected".to_string(),
            },
        )?;

        // Check result using constant-time comparison
        if !ct_eq(check, [1u8; 32]) {
            return Err(ApiError::InvalidSignature {
                context: "Ed25519 verify",
                #[cfg(feature = "std")]
                message: "signature rejected".to_string(),
            });
        }

        Ok(())
    }
}

impl Ed25519 {
    /// Derive the public key from an existing secret key
    pub fn derive_public_from_secret(
        secret_key: &Ed25519SecretKey,
    ) -> ApiResult<Ed25519PublicKey> {
        // Extract the clamped scalar from the expanded key material
        let scalar = &secret_key.expanded[0..32];

        let mut public_key_bytes = [0u8; ED25519_PUBLIC_KEY_SIZE];
        operations::derive_public_key(scalar, &mut public_key_bytes).map_err(|e| {
            ApiError::InvalidParameter {
                context: "Ed25519::derive_public_from_secret",
                #[cfg(feature = "std")]
                message: format!("Failed to derive public key: {}", e),
            }
        })?;

        Ok(Ed25519PublicKey(public_key_bytes))
    }
}

impl SignatureDerive for Ed25519 {
    const MIN_SEED_SIZE: usize = ED25519_SECRET_KEY_SIZE;

    fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        if seed.len() < Self::MIN_SEED_SIZE {
            return Err(ApiError::InvalidLength {
                context: "Ed25519::derive_keypair",
                expected: Self::MIN_SEED_SIZE,
                actual: seed.len(),
            });
        }

        let mut seed_array = [0u8; ED25519_SECRET_KEY_SIZE];
        seed_array.copy_from_slice(&seed[..ED25519_SECRET_KEY_SIZE]);

        let secret = Ed25519SecretKey::from_seed(&seed_array)?;
        seed_array.zeroize();
        let public = secret.public_key()?;
        Ok((public, secret))
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        secret_key.public_key()
    }
}

#[cfg(test)]
mod tests;
