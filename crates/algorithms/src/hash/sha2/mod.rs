//! SHA-512 hash function implementation with enhanced memory safety
//!
//! This module implements SHA-512 as specified in FIPS PUB 180-4 with
//! additional security measures for memory handling. The hasher is
//! streaming: input may arrive in chunks of any size, and finalization is
//! terminal.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{string::String, string::ToString, vec::Vec};

use crate::error::{Error, Result};
use crate::hash::{Hash, HashAlgorithm, HashFunction};
use crate::types::Digest;
use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

// Import security types from halite-common
use halite_common::security::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};

use core::sync::atomic::{compiler_fence, Ordering};

use halite_params::utils::hash::{SHA512_BLOCK_SIZE, SHA512_MAX_INPUT_SIZE, SHA512_OUTPUT_SIZE};

// SHA-512 round constants
const K512: [u64; 80] = [
    0x428a2f98d728ae22,
    0x7137449123ef65cd,
    0xb5c0fbcfec4d3b2f,
    0xe9b5dba58189dbbc,
    0x3956c25bf348b538,
    0x59f111f1b605d019,
    0x923f82a4af194f9b,
    0xab1c5ed5da6d8118,
    0xd807aa98a3030242,
    0x12835b0145706fbe,
    0x243185be4ee4b28c,
    0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f,
    0x80deb1fe3b1696b1,
    0x9bdc06a725c71235,
    0xc19bf174cf692694,
    0xe49b69c19ef14ad2,
    0xefbe4786384f25e3,
    0x0fc19dc68b8cd5b5,
    0x240ca1cc77ac9c65,
    0x2de92c6f592b0275,
    0x4a7484aa6ea6e483,
    0x5cb0a9dcbd41fbd4,
    0x76f988da831153b5,
    0x983e5152ee66dfab,
    0xa831c66d2db43210,
    0xb00327c898fb213f,
    0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2,
    0xd5a79147930aa725,
    0x06ca6351e003826f,
    0x142929670a0e6e70,
    0x27b70a8546d22ffc,
    0x2e1b21385c26c926,
    0x4d2c6dfc5ac42aed,
    0x53380d139d95b3df,
    0x650a73548baf63de,
    0x766a0abb3c77b2a8,
    0x81c2c92e47edaee6,
    0x92722c851482353b,
    0xa2bfe8a14cf10364,
    0xa81a664bbc423001,
    0xc24b8b70d0f89791,
    0xc76c51a30654be30,
    0xd192e819d6ef5218,
    0xd69906245565a910,
    0xf40e35855771202a,
    0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8,
    0x1e376c085141ab53,
    0x2748774cdf8eeb99,
    0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63,
    0x4ed8aa4ae3418acb,
    0x5b9cca4f7763e373,
    0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc,
    0x78a5636f43172f60,
    0x84c87814a1f0ab72,
    0x8cc702081a6439ec,
    0x90befffa23631e28,
    0xa4506cebde82bde9,
    0xbef9a3f7b2c67915,
    0xc67178f2e372532b,
    0xca273eceea26619c,
    0xd186b8c721c0c207,
    0xeada7dd6cde0eb1e,
    0xf57d4f7fee6ed178,
    0x06f067aa72176fba,
    0x0a637dc5a2c898a6,
    0x113f9804bef90dae,
    0x1b710b35131c471b,
    0x28db77f523047d84,
    0x32caab7b40c72493,
    0x3c9ebe0a15c9bebc,
    0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6,
    0x597f299cfc657e2a,
    0x5fcb6fab3ad6faec,
    0x6c44198c4a475817,
];

/// Marker type for SHA-512 algorithm
pub enum Sha512Algorithm {}

impl HashAlgorithm for Sha512Algorithm {
    const OUTPUT_SIZE: usize = SHA512_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA512_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-512";
}

/// SHA-512 hash function state with enhanced memory safety
#[derive(Clone, Zeroize)]
pub struct Sha512 {
    state: [u64; 8],
    buffer: [u8; SHA512_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
    finalized: bool,
}

impl Drop for Sha512 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Sha512 {
    fn init_state() -> [u64; 8] {
        [
            0x6a09e667f3bcc908,
            0xbb67ae8584caa73b,
            0x3c6ef372fe94f82b,
            0xa54ff53a5f1d36f1,
            0x510e527fade682d1,
            0x9b05688c2b3e6c1f,
            0x1f83d9abfb41bd6b,
            0x5be0cd19137e2179,
        ]
    }

    fn new() -> Self {
        Sha512 {
            state: Self::init_state(),
            buffer: [0u8; SHA512_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
            finalized: false,
        }
    }

    fn compress(state: &mut [u64; 8], block: &[u8; SHA512_BLOCK_SIZE]) {
        // Use EphemeralSecret for the message schedule
        let mut w = EphemeralSecret::new([0u64; 80]);

        // Memory barrier before processing
        compiler_fence(Ordering::SeqCst);

        for i in 0..16 {
            w[i] = BigEndian::read_u64(&block[i * 8..]);
        }

        for i in 16..80 {
            let s0 = w[i - 15].rotate_right(1) ^ w[i - 15].rotate_right(8) ^ (w[i - 15] >> 7);
            let s1 = w[i - 2].rotate_right(19) ^ w[i - 2].rotate_right(61) ^ (w[i - 2] >> 6);
            w[i] = w[i - 16]
                .wrapping_add(s0)
                .wrapping_add(w[i - 7])
                .wrapping_add(s1);
        }

        // Use ZeroizeGuard for working variables
        let mut working_vars = [
            state[0], state[1], state[2], state[3], state[4], state[5], state[6], state[7],
        ];
        let mut guard = ZeroizeGuard::new(&mut working_vars);

        let mut a = guard[0];
        let mut b = guard[1];
        let mut c = guard[2];
        let mut d = guard[3];
        let mut e = guard[4];
        let mut f = guard[5];
        let mut g = guard[6];
        let mut h = guard[7];

        for i in 0..80 {
            let s1 = e.rotate_right(14) ^ e.rotate_right(18) ^ e.rotate_right(41);
            let ch = (e & f) ^ ((!e) & g);
            let temp1 = h
                .wrapping_add(s1)
                .wrapping_add(ch)
                .wrapping_add(K512[i])
                .wrapping_add(w[i]);
            let s0 = a.rotate_right(28) ^ a.rotate_right(34) ^ a.rotate_right(39);
            let maj = (a & b) ^ (a & c) ^ (b & c);
            let temp2 = s0.wrapping_add(maj);

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(temp1);
            d = c;
            c = b;
            b = a;
            a = temp1.wrapping_add(temp2);
        }

        // Write back the results
        guard[0] = a;
        guard[1] = b;
        guard[2] = c;
        guard[3] = d;
        guard[4] = e;
        guard[5] = f;
        guard[6] = g;
        guard[7] = h;

        // Update state
        state[0] = state[0].wrapping_add(guard[0]);
        state[1] = state[1].wrapping_add(guard[1]);
        state[2] = state[2].wrapping_add(guard[2]);
        state[3] = state[3].wrapping_add(guard[3]);
        state[4] = state[4].wrapping_add(guard[4]);
        state[5] = state[5].wrapping_add(guard[5]);
        state[6] = state[6].wrapping_add(guard[6]);
        state[7] = state[7].wrapping_add(guard[7]);

        // Memory barrier after processing
        compiler_fence(Ordering::SeqCst);
    }

    /// Reject input that would push the byte counter past the supported
    /// ceiling, before any of it is consumed.
    fn check_capacity(&self, incoming: usize) -> Result<()> {
        let pending = self.total_bytes.checked_add(self.buffer_idx as u64);
        let projected = pending.and_then(|p| p.checked_add(incoming as u64));
        match projected {
            Some(total) if total < SHA512_MAX_INPUT_SIZE => Ok(()),
            _ => Err(Error::Overflow {
                operation: "SHA-512 update",
            }),
        }
    }

    fn update_internal(&mut self, mut input: &[u8]) -> Result<()> {
        if self.finalized {
            // Equal-cost dummy path so the rejected call burns the same
            // cycles as an accepted one.
            let mut dummy_state = Self::init_state();
            let dummy_block = [0u8; SHA512_BLOCK_SIZE];
            Self::compress(&mut dummy_state, &dummy_block);
            dummy_state.zeroize();
            return Err(Error::param(
                "sha512_state",
                "Cannot update after finalization",
            ));
        }

        self.check_capacity(input.len())?;

        while !input.is_empty() {
            let fill = core::cmp::min(input.len(), SHA512_BLOCK_SIZE - self.buffer_idx);
            self.buffer[self.buffer_idx..self.buffer_idx + fill].copy_from_slice(&input[..fill]);
            self.buffer_idx += fill;
            input = &input[fill..];
            if self.buffer_idx == SHA512_BLOCK_SIZE {
                let mut block = [0u8; SHA512_BLOCK_SIZE];
                block.copy_from_slice(&self.buffer);
                Self::compress(&mut self.state, &block);
                block.zeroize();
                self.total_bytes += SHA512_BLOCK_SIZE as u64;
                self.buffer_idx = 0;
            }
        }
        Ok(())
    }

    fn finalize_internal(&mut self) -> Result<Hash> {
        if self.finalized {
            let mut dummy_state = Self::init_state();
            let dummy_block = [0u8; SHA512_BLOCK_SIZE];
            Self::compress(&mut dummy_state, &dummy_block);
            dummy_state.zeroize();
            return Err(Error::param("sha512_state", "Hash already finalized"));
        }

        let total = self.total_bytes + self.buffer_idx as u64;
        // The capacity check in update keeps total below 2^61, so the bit
        // length fits the low 64-bit word of the length field.
        let bit_len = total * 8;

        let pad_buffer = EphemeralSecret::new([0u8; SHA512_BLOCK_SIZE]);

        self.buffer[self.buffer_idx] = 0x80;
        if self.buffer_idx >= SHA512_BLOCK_SIZE - 16 {
            for b in &mut self.buffer[self.buffer_idx + 1..] {
                *b = 0;
            }
            let mut block = [0u8; SHA512_BLOCK_SIZE];
            block.copy_from_slice(&self.buffer);
            Self::compress(&mut self.state, &block);
            block.zeroize();
            self.buffer = *pad_buffer.as_ref();
        } else {
            for b in &mut self.buffer[self.buffer_idx + 1..SHA512_BLOCK_SIZE - 16] {
                *b = 0;
            }
        }

        BigEndian::write_u64(
            &mut self.buffer[SHA512_BLOCK_SIZE - 16..SHA512_BLOCK_SIZE - 8],
            0,
        );
        BigEndian::write_u64(&mut self.buffer[SHA512_BLOCK_SIZE - 8..], bit_len);
        let mut block = [0u8; SHA512_BLOCK_SIZE];
        block.copy_from_slice(&self.buffer);
        Self::compress(&mut self.state, &block);
        block.zeroize();

        let mut out = Vec::with_capacity(SHA512_OUTPUT_SIZE);
        for &word in &self.state {
            out.extend_from_slice(&word.to_be_bytes());
        }
        self.zeroize();
        self.finalized = true;
        Ok(out)
    }
}

impl SecureZeroingType for Sha512 {
    fn zeroed() -> Self {
        Self::new()
    }
}

impl HashFunction for Sha512 {
    type Algorithm = Sha512Algorithm;
    type Output = Digest<SHA512_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha512::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.update_internal(data)?;
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let hash = self.finalize_internal()?;
        let mut digest = [0u8; SHA512_OUTPUT_SIZE];
        digest.copy_from_slice(&hash);
        Ok(Digest::new(digest))
    }

    fn output_size() -> usize {
        SHA512_OUTPUT_SIZE
    }

    fn block_size() -> usize {
        SHA512_BLOCK_SIZE
    }

    fn name() -> String {
        "SHA-512".to_string()
    }
}

#[cfg(test)]
mod tests;
