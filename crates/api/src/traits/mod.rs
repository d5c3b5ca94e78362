//! Trait definitions for the halite public API

pub mod kex;
pub mod serialize;
pub mod signature;
pub mod symmetric;

pub use kex::KeyExchange;
pub use serialize::{Serialize, SerializeSecret};
pub use signature::{Signature, SignatureDerive};
pub use symmetric::{AuthenticatedCipher, SymmetricCipher};
