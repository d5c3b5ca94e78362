//! XSalsa20-Poly1305 authenticated encryption
//!
//! This module implements NaCl's `secretbox`: XSalsa20 extends the Salsa20
//! nonce to 24 bytes through an HSalsa20 sub-key step, and Poly1305
//! authenticates the ciphertext under a one-time key drawn from the first
//! keystream block.
//!
//! ## Constant-Time Guarantees
//!
//! * No variable-length early-returns after authentication is checked.
//! * Heap allocations and frees are balanced in both success and failure
//!   paths.
//! * Authentication is decided with a branch-free constant-time mask; the
//!   same byte-wise loop executes whatever the tag's validity, and no
//!   plaintext byte survives a failed check.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::error::{validate, Error, Result};
use crate::mac::poly1305::{Poly1305, POLY1305_KEY_SIZE, POLY1305_TAG_SIZE};
use crate::stream::salsa::salsa20::{
    hsalsa20, Salsa20, HSALSA20_INPUT_SIZE, SALSA20_BLOCK_SIZE, SALSA20_KEY_SIZE,
    SALSA20_NONCE_SIZE,
};
use crate::types::nonce::XSalsa20Compatible;
use crate::types::{Nonce, SecretBytes, Tag};
use halite_api::traits::symmetric::{
    DecryptOperation, EncryptOperation, Operation,
};
use halite_api::traits::{AuthenticatedCipher, SymmetricCipher};
use halite_api::types::Ciphertext;
use halite_api::Error as CoreError;
use halite_common::security::{EphemeralSecret, SecretBuffer};
use halite_params::utils::symmetric::XSALSA20_NONCE_SIZE;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of the XSalsa20Poly1305 key in bytes
pub const XSALSA20POLY1305_KEY_SIZE: usize = SALSA20_KEY_SIZE;
/// Size of the nonce used by XSalsa20Poly1305 in bytes
pub const XSALSA20POLY1305_NONCE_SIZE: usize = XSALSA20_NONCE_SIZE;
/// Size of the authentication tag produced by XSalsa20Poly1305 in bytes
pub const XSALSA20POLY1305_TAG_SIZE: usize = POLY1305_TAG_SIZE;

/// XSalsa20-Poly1305 AEAD (NaCl `secretbox`)
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct XSalsa20Poly1305 {
    key: SecretBuffer<XSALSA20POLY1305_KEY_SIZE>,
}

/// Operation for XSalsa20Poly1305 encryption operations
pub struct XSalsa20Poly1305EncryptOperation<'a> {
    cipher: &'a XSalsa20Poly1305,
    nonce: Option<&'a Nonce<XSALSA20POLY1305_NONCE_SIZE>>,
}

/// Operation for XSalsa20Poly1305 decryption operations
pub struct XSalsa20Poly1305DecryptOperation<'a> {
    cipher: &'a XSalsa20Poly1305,
    nonce: Option<&'a Nonce<XSALSA20POLY1305_NONCE_SIZE>>,
}

impl XSalsa20Poly1305 {
    /// Create a new instance from a 256-bit key
    pub fn new(key: &[u8; XSALSA20POLY1305_KEY_SIZE]) -> Self {
        Self {
            key: SecretBuffer::new(*key),
        }
    }

    /// Derive the per-message Salsa20 sub-key from the first 16 nonce bytes
    fn subkey(&self, nonce: &[u8; XSALSA20POLY1305_NONCE_SIZE]) -> SecretBuffer<SALSA20_KEY_SIZE> {
        let key_array: &[u8; SALSA20_KEY_SIZE] = self
            .key
            .as_ref()
            .try_into()
            .expect("SecretBuffer has correct size");

        let mut prefix = [0u8; HSALSA20_INPUT_SIZE];
        prefix.copy_from_slice(&nonce[..HSALSA20_INPUT_SIZE]);

        SecretBuffer::new(hsalsa20(key_array, &prefix))
    }

    /* --------------------------------------------------------------------- */
    /*                               ENCRYPT                                 */
    /* --------------------------------------------------------------------- */

    /// Encrypt plaintext with a raw nonce array
    ///
    /// # Arguments
    /// * `nonce` - A 24-byte array; must never repeat under the same key
    /// * `plaintext` - The data to encrypt
    ///
    /// # Returns
    /// A vector containing the 16-byte Poly1305 tag followed by the
    /// ciphertext body (`tag || ciphertext`, the secretbox layout)
    pub fn encrypt_with_nonce(
        &self,
        nonce: &[u8; XSALSA20POLY1305_NONCE_SIZE],
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        let subkey = self.subkey(nonce);
        let salsa_nonce = Nonce::<SALSA20_NONCE_SIZE>::from_slice(&nonce[HSALSA20_INPUT_SIZE..])
            .map_err(|_| Error::param("nonce", "Failed to split extended nonce"))?;

        let mut cipher = Salsa20::from_secret_key(&subkey, &salsa_nonce);

        // First keystream block: bytes 0..32 seed the one-time Poly1305
        // key, bytes 32..64 encrypt the head of the message
        let mut block0 = EphemeralSecret::new([0u8; SALSA20_BLOCK_SIZE]);
        cipher.keystream(block0.as_mut());

        let mut poly_key = EphemeralSecret::new([0u8; POLY1305_KEY_SIZE]);
        poly_key.copy_from_slice(&block0[..POLY1305_KEY_SIZE]);

        // --- encryption ----------------------------------------------------
        let mut body = Vec::with_capacity(plaintext.len());
        body.extend_from_slice(plaintext);

        let head = core::cmp::min(body.len(), SALSA20_BLOCK_SIZE - POLY1305_KEY_SIZE);
        for (byte, pad) in body[..head]
            .iter_mut()
            .zip(block0[POLY1305_KEY_SIZE..].iter())
        {
            *byte ^= pad;
        }
        // The stream cipher is already positioned at block 1 for the rest
        cipher.encrypt(&mut body[head..]);

        // --- tag -----------------------------------------------------------
        let tag = Poly1305::mac(&poly_key, &body)?;

        let mut out = Vec::with_capacity(POLY1305_TAG_SIZE + body.len());
        out.extend_from_slice(tag.as_ref());
        out.extend_from_slice(&body);
        body.zeroize();
        Ok(out)
    }

    /* --------------------------------------------------------------------- */
    /*                               DECRYPT                                 */
    /* --------------------------------------------------------------------- */

    /// Decrypt ciphertext with a raw nonce array
    ///
    /// The tag is verified over the ciphertext body **before** any plaintext
    /// is produced; on failure every candidate plaintext byte is zeroed and
    /// an authentication error is returned.
    ///
    /// # Arguments
    /// * `nonce` - The 24-byte nonce the ciphertext was produced under
    /// * `ciphertext` - `tag || ciphertext` as produced by encryption
    ///
    /// # Errors
    /// Returns a length error for inputs shorter than the tag and an
    /// authentication error if the tag does not match
    pub fn decrypt_with_nonce(
        &self,
        nonce: &[u8; XSALSA20POLY1305_NONCE_SIZE],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        validate::min_length(
            "XSalsa20Poly1305 ciphertext",
            ciphertext.len(),
            POLY1305_TAG_SIZE,
        )?;

        let (tag, body) = ciphertext.split_at(POLY1305_TAG_SIZE);

        let subkey = self.subkey(nonce);
        let salsa_nonce = Nonce::<SALSA20_NONCE_SIZE>::from_slice(&nonce[HSALSA20_INPUT_SIZE..])
            .map_err(|_| Error::param("nonce", "Failed to split extended nonce"))?;

        let mut cipher = Salsa20::from_secret_key(&subkey, &salsa_nonce);

        let mut block0 = EphemeralSecret::new([0u8; SALSA20_BLOCK_SIZE]);
        cipher.keystream(block0.as_mut());

        let mut poly_key = EphemeralSecret::new([0u8; POLY1305_KEY_SIZE]);
        poly_key.copy_from_slice(&block0[..POLY1305_KEY_SIZE]);

        // -------- expected tag, before any plaintext exists ----------------
        let expected = Poly1305::mac(&poly_key, body)?;
        let tag_ok = expected.as_ref().ct_eq(tag); // subtle::Choice

        // -------- decrypt ---------------------------------------------------
        let mut m = Vec::with_capacity(body.len());
        m.extend_from_slice(body);

        let head = core::cmp::min(m.len(), SALSA20_BLOCK_SIZE - POLY1305_KEY_SIZE);
        for (byte, pad) in m[..head]
            .iter_mut()
            .zip(block0[POLY1305_KEY_SIZE..].iter())
        {
            *byte ^= pad;
        }
        cipher.decrypt(&mut m[head..]);

        // -------- constant-time post-processing ----------------------------
        // mask = 0xFF when tag_ok == 1, else 0x00; a failed check leaves no
        // plaintext byte standing
        let mask = 0u8.wrapping_sub(tag_ok.unwrap_u8());

        for byte in &mut m {
            *byte &= mask;
        }

        // Burn buffer on the success path to match the deallocation pattern
        // of the failure path
        let mut burn = m.clone();
        for b in &mut burn {
            *b = 0;
        }
        drop(burn);

        if bool::from(tag_ok) {
            Ok(m) // m lives on success
        } else {
            Err(Error::Authentication {
                algorithm: "XSalsa20Poly1305",
            }) // drops the zeroed m on failure
        }
    }

    /// Encrypt data
    pub fn encrypt<const N: usize>(&self, nonce: &Nonce<N>, plaintext: &[u8]) -> Result<Vec<u8>>
    where
        Nonce<N>: XSalsa20Compatible,
    {
        let mut nonce_array = [0u8; XSALSA20POLY1305_NONCE_SIZE];
        nonce_array.copy_from_slice(nonce.as_ref());
        self.encrypt_with_nonce(&nonce_array, plaintext)
    }

    /// Decrypt data
    pub fn decrypt<const N: usize>(&self, nonce: &Nonce<N>, ciphertext: &[u8]) -> Result<Vec<u8>>
    where
        Nonce<N>: XSalsa20Compatible,
    {
        let mut nonce_array = [0u8; XSALSA20POLY1305_NONCE_SIZE];
        nonce_array.copy_from_slice(nonce.as_ref());
        self.decrypt_with_nonce(&nonce_array, ciphertext)
    }

    /// Expose the authentication tag of a ciphertext produced by this cipher
    pub fn tag_of(ciphertext: &[u8]) -> Result<Tag<XSALSA20POLY1305_TAG_SIZE>> {
        validate::min_length("XSalsa20Poly1305 ciphertext", ciphertext.len(), POLY1305_TAG_SIZE)?;
        Tag::from_slice(&ciphertext[..POLY1305_TAG_SIZE])
    }
}

// Implement the marker trait AuthenticatedCipher
impl AuthenticatedCipher for XSalsa20Poly1305 {
    const TAG_SIZE: usize = POLY1305_TAG_SIZE;
    const ALGORITHM_ID: &'static str = "XSalsa20Poly1305";
}

// Implement SymmetricCipher trait
impl SymmetricCipher for XSalsa20Poly1305 {
    type Key = SecretBytes<XSALSA20POLY1305_KEY_SIZE>;
    type Nonce = Nonce<XSALSA20POLY1305_NONCE_SIZE>;
    type Ciphertext = Ciphertext;
    type EncryptOperation<'a>
        = XSalsa20Poly1305EncryptOperation<'a>
    where
        Self: 'a;
    type DecryptOperation<'a>
        = XSalsa20Poly1305DecryptOperation<'a>
    where
        Self: 'a;

    fn name() -> &'static str {
        "XSalsa20Poly1305"
    }

    fn encrypt(&self) -> Self::EncryptOperation<'_> {
        XSalsa20Poly1305EncryptOperation {
            cipher: self,
            nonce: None,
        }
    }

    fn decrypt(&self) -> Self::DecryptOperation<'_> {
        XSalsa20Poly1305DecryptOperation {
            cipher: self,
            nonce: None,
        }
    }

    fn generate_key<R: rand::RngCore + rand::CryptoRng>(
        rng: &mut R,
    ) -> core::result::Result<Self::Key, CoreError> {
        let mut key_data = [0u8; XSALSA20POLY1305_KEY_SIZE];
        rng.fill_bytes(&mut key_data);
        Ok(SecretBytes::new(key_data))
    }

    fn generate_nonce<R: rand::RngCore + rand::CryptoRng>(
        rng: &mut R,
    ) -> core::result::Result<Self::Nonce, CoreError> {
        let mut nonce_data = [0u8; XSALSA20POLY1305_NONCE_SIZE];
        rng.fill_bytes(&mut nonce_data);
        Ok(Nonce::new(nonce_data))
    }
}

// Implement Operation for XSalsa20Poly1305EncryptOperation
impl<'a> Operation<Ciphertext> for XSalsa20Poly1305EncryptOperation<'a> {
    fn execute(self) -> core::result::Result<Ciphertext, CoreError> {
        Err(CoreError::InvalidParameter {
            context: "XSalsa20Poly1305 encryption",
            #[cfg(feature = "std")]
            message: "Use the encrypt method with a plaintext".to_string(),
        })
    }
}

impl<'a> EncryptOperation<'a, XSalsa20Poly1305> for XSalsa20Poly1305EncryptOperation<'a> {
    fn with_nonce(mut self, nonce: &'a <XSalsa20Poly1305 as SymmetricCipher>::Nonce) -> Self {
        self.nonce = Some(nonce);
        self
    }

    fn encrypt(self, plaintext: &'a [u8]) -> core::result::Result<Ciphertext, CoreError> {
        let nonce = self.nonce.ok_or(CoreError::InvalidParameter {
            context: "XSalsa20Poly1305 encryption",
            #[cfg(feature = "std")]
            message: "Nonce is required for XSalsa20Poly1305 encryption".to_string(),
        })?;

        let mut nonce_array = [0u8; XSALSA20POLY1305_NONCE_SIZE];
        nonce_array.copy_from_slice(nonce.as_ref());

        let ciphertext = self
            .cipher
            .encrypt_with_nonce(&nonce_array, plaintext)
            .map_err(CoreError::from)?;

        Ok(Ciphertext::new(&ciphertext))
    }
}

// Implement Operation for XSalsa20Poly1305DecryptOperation
impl<'a> Operation<Vec<u8>> for XSalsa20Poly1305DecryptOperation<'a> {
    fn execute(self) -> core::result::Result<Vec<u8>, CoreError> {
        Err(CoreError::InvalidParameter {
            context: "XSalsa20Poly1305 decryption",
            #[cfg(feature = "std")]
            message: "Use the decrypt method with a ciphertext".to_string(),
        })
    }
}

impl<'a> DecryptOperation<'a, XSalsa20Poly1305> for XSalsa20Poly1305DecryptOperation<'a> {
    fn with_nonce(mut self, nonce: &'a <XSalsa20Poly1305 as SymmetricCipher>::Nonce) -> Self {
        self.nonce = Some(nonce);
        self
    }

    fn decrypt(
        self,
        ciphertext: &'a <XSalsa20Poly1305 as SymmetricCipher>::Ciphertext,
    ) -> core::result::Result<Vec<u8>, CoreError> {
        let nonce = self.nonce.ok_or(CoreError::InvalidParameter {
            context: "XSalsa20Poly1305 decryption",
            #[cfg(feature = "std")]
            message: "Nonce is required for XSalsa20Poly1305 decryption".to_string(),
        })?;

        let mut nonce_array = [0u8; XSALSA20POLY1305_NONCE_SIZE];
        nonce_array.copy_from_slice(nonce.as_ref());

        self.cipher
            .decrypt_with_nonce(&nonce_array, ciphertext.as_ref())
            .map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests;
