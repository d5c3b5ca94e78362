//! Error handling for key exchange operations

use core::fmt;
use halite_api::Error as CoreError;

/// Error type for key exchange operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key format
    InvalidKey {
        /// Which key was rejected
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The exchange produced a degenerate shared point
    DegenerateSharedSecret {
        /// Algorithm that rejected the result
        algorithm: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::DegenerateSharedSecret { algorithm } => {
                write!(f, "{} produced a degenerate shared secret", algorithm)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKey { key_type, .. } => CoreError::InvalidKey {
                context: key_type,
                #[cfg(feature = "std")]
                message: "key validation failed".to_string(),
            },
            Error::DegenerateSharedSecret { algorithm } => CoreError::InvalidKey {
                context: algorithm,
                #[cfg(feature = "std")]
                message: "low-order peer public key".to_string(),
            },
        }
    }
}

/// Result type for key exchange operations
pub type Result<T> = core::result::Result<T, Error>;
