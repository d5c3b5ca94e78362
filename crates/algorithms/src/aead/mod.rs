//! Authenticated encryption implementations
//!
//! This module provides the XSalsa20-Poly1305 construction (NaCl's
//! `secretbox`): a 24-byte-nonce authenticated cipher whose output is the
//! 16-byte Poly1305 tag followed by the ciphertext body.

pub mod xsalsa20poly1305;

pub use xsalsa20poly1305::{
    XSalsa20Poly1305, XSALSA20POLY1305_KEY_SIZE, XSALSA20POLY1305_NONCE_SIZE,
    XSALSA20POLY1305_TAG_SIZE,
};
