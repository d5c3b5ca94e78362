//! Serialization contracts for cryptographic types
//!
//! Two tiers: `Serialize` for data that may be copied freely (public keys,
//! ciphertexts) and `SerializeSecret` for key material, whose byte export is
//! wrapped in `Zeroizing` so the copy is erased when dropped.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::Result;
use zeroize::Zeroizing;

/// Serialization for non-secret cryptographic values
pub trait Serialize: Sized {
    /// Convert to a byte vector
    fn to_bytes(&self) -> Result<Vec<u8>>;

    /// Try to create from a byte slice
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Serialization for secret cryptographic values
///
/// The exported bytes are zeroized when the returned wrapper is dropped.
/// Implementors must validate the input format in `from_bytes`.
pub trait SerializeSecret: Sized {
    /// Export the secret bytes under a zeroizing wrapper
    fn to_bytes_zeroizing(&self) -> Result<Zeroizing<Vec<u8>>>;

    /// Try to create from a byte slice
    ///
    /// Callers should zeroize the input after use.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}
