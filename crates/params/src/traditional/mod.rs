//! Parameters for traditional public-key algorithms

pub mod curve25519;
