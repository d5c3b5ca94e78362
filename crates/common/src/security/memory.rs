//! Memory safety patterns and secure operations
//!
//! Constant-time comparison traits, memory barriers, and the in-place wipe
//! primitive used to erase caller-owned buffers.

use zeroize::Zeroize;

/// Trait for types that can be securely compared
///
/// Provides constant-time comparison to prevent the comparison itself from
/// leaking where two values diverge.
pub trait SecureCompare: Sized {
    /// Compare two values in constant time
    fn secure_eq(&self, other: &Self) -> bool;

    /// Compare two values and return a constant-time choice
    fn secure_cmp(&self, other: &Self) -> subtle::Choice;
}

impl<const N: usize> SecureCompare for [u8; N] {
    fn secure_eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        bool::from(self.ct_eq(other))
    }

    fn secure_cmp(&self, other: &Self) -> subtle::Choice {
        use subtle::ConstantTimeEq;
        self.ct_eq(other)
    }
}

impl SecureCompare for &[u8] {
    fn secure_eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        bool::from(self.ct_eq(other))
    }

    fn secure_cmp(&self, other: &Self) -> subtle::Choice {
        use subtle::ConstantTimeEq;
        self.ct_eq(other)
    }
}

/// Overwrite a buffer with zeros, in place
///
/// The write goes through `zeroize`, whose volatile store and fence prevent
/// the compiler from eliminating it as a dead store, so the erasure happens
/// even when the buffer is never read again. To wipe part of a buffer, pass
/// the sub-slice: `wipe(&mut buf[offset..offset + count])`.
pub fn wipe(buffer: &mut [u8]) {
    buffer.zeroize();
    barrier::compiler_fence_seq_cst();
}

/// Memory barrier utilities
pub mod barrier {
    use core::sync::atomic::{compiler_fence, fence, Ordering};

    /// Insert a compiler fence to prevent reordering
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }

    /// Insert a full memory fence
    #[inline(always)]
    pub fn memory_fence_seq_cst() {
        fence(Ordering::SeqCst);
    }

    /// Execute a closure with memory barriers before and after
    #[inline(always)]
    pub fn with_barriers<T, F: FnOnce() -> T>(f: F) -> T {
        compiler_fence_seq_cst();
        let result = f();
        compiler_fence_seq_cst();
        result
    }
}
