//! Constants for the Curve25519-based schemes

/// Ed25519 public key size in bytes
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Ed25519 seed (stored secret key) size in bytes
pub const ED25519_SECRET_KEY_SIZE: usize = 32;

/// Ed25519 expanded secret key size in bytes (clamped scalar || prefix)
pub const ED25519_EXPANDED_KEY_SIZE: usize = 64;

/// Ed25519 signature size in bytes (R || s)
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// X25519 public key size in bytes
pub const X25519_PUBLIC_KEY_SIZE: usize = 32;

/// X25519 secret scalar size in bytes
pub const X25519_SECRET_KEY_SIZE: usize = 32;

/// X25519 shared secret size in bytes
pub const X25519_SHARED_SECRET_SIZE: usize = 32;
