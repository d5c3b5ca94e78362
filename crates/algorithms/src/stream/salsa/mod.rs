// Make the salsa20 module public
pub mod salsa20;

// Re-export for convenience
pub use salsa20::{hsalsa20, hsalsa_core, salsa_core, Salsa20};
