//! Hex and Base64 conversion helpers
//!
//! Thin wrappers over the `hex` and `base64` crates so callers get a single
//! error type and a consistent call shape. These are convenience utilities
//! for fingerprints, test vectors, and key transport formats; none of them
//! carry a constant-time requirement.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{string::String, vec::Vec};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Error returned when decoding malformed hex or base64 input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    /// The encoding that failed to parse
    pub encoding: &'static str,
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid {} input", self.encoding)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Encode bytes as a lowercase hexadecimal string
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode a hexadecimal string into bytes
pub fn from_hex(input: &str) -> Result<Vec<u8>, DecodeError> {
    hex::decode(input).map_err(|_| DecodeError { encoding: "hex" })
}

/// Encode bytes as standard Base64 with padding
pub fn to_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a standard Base64 string into bytes
pub fn from_base64(input: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD
        .decode(input)
        .map_err(|_| DecodeError { encoding: "base64" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let data = [0x00u8, 0x01, 0x7F, 0x80, 0xFF];
        let encoded = to_hex(&data);
        assert_eq!(encoded, "00017f80ff");
        assert_eq!(from_hex(&encoded).unwrap(), data);
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(from_hex("zz").is_err());
        assert!(from_hex("abc").is_err()); // odd length
    }

    #[test]
    fn test_base64_round_trip() {
        let data = b"any carnal pleasure";
        let encoded = to_base64(data);
        assert_eq!(from_base64(&encoded).unwrap(), data);
    }

    #[test]
    fn test_base64_rejects_garbage() {
        assert!(from_base64("not base64!!").is_err());
    }
}
