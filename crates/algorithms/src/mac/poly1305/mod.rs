//! Poly1305 one-time message authenticator – constant-time & allocation-free
//!
//! • RFC 8439 compliant, using the 26-bit-limb "Donna" arithmetic over
//!   GF(2^130 − 5)
//! • Secret-dependent work happens on stack-fixed buffers
//! • Error paths burn the same CPU cycles as success paths
//!
//! The key is single-use: authenticating two messages under one key lets an
//! attacker recover the key. The secretbox construction derives a fresh key
//! per message from the cipher keystream.

use crate::error::{Error, Result};
use crate::types::Tag;
use halite_internal::endian::{u32_from_le_bytes, u32_to_le_bytes};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub use halite_params::utils::symmetric::{
    POLY1305_BLOCK_SIZE, POLY1305_KEY_SIZE, POLY1305_TAG_SIZE,
};

const LIMB_MASK: u32 = 0x3ffffff;

/// Constant-time Poly1305 implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Poly1305 {
    /// Clamped r limbs
    r: [u32; 5],
    /// Accumulator limbs
    h: [u32; 5],
    /// The s half of the key, added after the final reduction
    pad: [u32; 4],
    /// Bytes pending in `buffer`
    leftover: usize,
    buffer: [u8; POLY1305_BLOCK_SIZE],
    finalized: bool,
}

impl Poly1305 {
    /// Create a new Poly1305 instance from a 32-byte one-time key
    pub fn new(key: &[u8; POLY1305_KEY_SIZE]) -> Result<Self> {
        // Clamp r per the Poly1305 specification: the limb loads overlap so
        // each 26-bit window lands on a limb boundary.
        let r = [
            u32_from_le_bytes(&key[0..4]) & 0x3ffffff,
            (u32_from_le_bytes(&key[3..7]) >> 2) & 0x3ffff03,
            (u32_from_le_bytes(&key[6..10]) >> 4) & 0x3ffc0ff,
            (u32_from_le_bytes(&key[9..13]) >> 6) & 0x3f03fff,
            (u32_from_le_bytes(&key[12..16]) >> 8) & 0x00fffff,
        ];

        let pad = [
            u32_from_le_bytes(&key[16..20]),
            u32_from_le_bytes(&key[20..24]),
            u32_from_le_bytes(&key[24..28]),
            u32_from_le_bytes(&key[28..32]),
        ];

        Ok(Self {
            r,
            h: [0u32; 5],
            pad,
            leftover: 0,
            buffer: [0u8; POLY1305_BLOCK_SIZE],
            finalized: false,
        })
    }

    /// Absorb one 16-byte block into the accumulator.
    ///
    /// `hibit` is `1 << 24` for full message blocks and 0 for the final
    /// padded block, whose 1 marker byte is already in the buffer.
    fn process_block(&mut self, block: &[u8; POLY1305_BLOCK_SIZE], hibit: u32) {
        let r0 = self.r[0];
        let r1 = self.r[1];
        let r2 = self.r[2];
        let r3 = self.r[3];
        let r4 = self.r[4];

        let s1 = r1 * 5;
        let s2 = r2 * 5;
        let s3 = r3 * 5;
        let s4 = r4 * 5;

        let h0 = self.h[0] + (u32_from_le_bytes(&block[0..4]) & LIMB_MASK);
        let h1 = self.h[1] + ((u32_from_le_bytes(&block[3..7]) >> 2) & LIMB_MASK);
        let h2 = self.h[2] + ((u32_from_le_bytes(&block[6..10]) >> 4) & LIMB_MASK);
        let h3 = self.h[3] + ((u32_from_le_bytes(&block[9..13]) >> 6) & LIMB_MASK);
        let h4 = self.h[4] + ((u32_from_le_bytes(&block[12..16]) >> 8) | hibit);

        // h *= r mod 2^130 - 5, with the high limbs folded back in through
        // the 5x multiples
        let d0 = (h0 as u64) * (r0 as u64)
            + (h1 as u64) * (s4 as u64)
            + (h2 as u64) * (s3 as u64)
            + (h3 as u64) * (s2 as u64)
            + (h4 as u64) * (s1 as u64);
        let mut d1 = (h0 as u64) * (r1 as u64)
            + (h1 as u64) * (r0 as u64)
            + (h2 as u64) * (s4 as u64)
            + (h3 as u64) * (s3 as u64)
            + (h4 as u64) * (s2 as u64);
        let mut d2 = (h0 as u64) * (r2 as u64)
            + (h1 as u64) * (r1 as u64)
            + (h2 as u64) * (r0 as u64)
            + (h3 as u64) * (s4 as u64)
            + (h4 as u64) * (s3 as u64);
        let mut d3 = (h0 as u64) * (r3 as u64)
            + (h1 as u64) * (r2 as u64)
            + (h2 as u64) * (r1 as u64)
            + (h3 as u64) * (r0 as u64)
            + (h4 as u64) * (s4 as u64);
        let mut d4 = (h0 as u64) * (r4 as u64)
            + (h1 as u64) * (r3 as u64)
            + (h2 as u64) * (r2 as u64)
            + (h3 as u64) * (r1 as u64)
            + (h4 as u64) * (r0 as u64);

        // Partial carry propagation back to 26-bit limbs
        let mut c = (d0 >> 26) as u32;
        self.h[0] = (d0 as u32) & LIMB_MASK;
        d1 += c as u64;
        c = (d1 >> 26) as u32;
        self.h[1] = (d1 as u32) & LIMB_MASK;
        d2 += c as u64;
        c = (d2 >> 26) as u32;
        self.h[2] = (d2 as u32) & LIMB_MASK;
        d3 += c as u64;
        c = (d3 >> 26) as u32;
        self.h[3] = (d3 as u32) & LIMB_MASK;
        d4 += c as u64;
        c = (d4 >> 26) as u32;
        self.h[4] = (d4 as u32) & LIMB_MASK;

        self.h[0] += c * 5;
        c = self.h[0] >> 26;
        self.h[0] &= LIMB_MASK;
        self.h[1] += c;
    }

    /// Feed additional message bytes into the MAC
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.finalized {
            // Equal-cost dummy path so rejected calls match accepted ones
            let mut dummy = Self::new(&[0u8; POLY1305_KEY_SIZE])?;
            let block = [0u8; POLY1305_BLOCK_SIZE];
            dummy.process_block(&block, 1 << 24);
            return Err(Error::param(
                "poly1305_state",
                "Cannot update after finalization",
            ));
        }

        let mut input = data;

        // Top up a pending partial block first
        if self.leftover > 0 {
            let want = core::cmp::min(POLY1305_BLOCK_SIZE - self.leftover, input.len());
            self.buffer[self.leftover..self.leftover + want].copy_from_slice(&input[..want]);
            self.leftover += want;
            input = &input[want..];

            if self.leftover < POLY1305_BLOCK_SIZE {
                return Ok(());
            }

            let mut block = [0u8; POLY1305_BLOCK_SIZE];
            block.copy_from_slice(&self.buffer);
            self.process_block(&block, 1 << 24);
            block.zeroize();
            self.leftover = 0;
        }

        // Full blocks straight from the input
        while input.len() >= POLY1305_BLOCK_SIZE {
            let mut block = [0u8; POLY1305_BLOCK_SIZE];
            block.copy_from_slice(&input[..POLY1305_BLOCK_SIZE]);
            self.process_block(&block, 1 << 24);
            block.zeroize();
            input = &input[POLY1305_BLOCK_SIZE..];
        }

        // Stash the tail
        if !input.is_empty() {
            self.buffer[..input.len()].copy_from_slice(input);
            self.leftover = input.len();
        }

        Ok(())
    }

    /// Finalize and produce the 16-byte tag
    pub fn finalize(&mut self) -> Result<Tag<POLY1305_TAG_SIZE>> {
        if self.finalized {
            let mut dummy = Self::new(&[0u8; POLY1305_KEY_SIZE])?;
            let block = [0u8; POLY1305_BLOCK_SIZE];
            dummy.process_block(&block, 0);
            return Err(Error::param("poly1305_state", "MAC already finalized"));
        }

        // Final partial block: 1 marker byte, zero fill, no high bit
        if self.leftover > 0 {
            let mut block = [0u8; POLY1305_BLOCK_SIZE];
            block[..self.leftover].copy_from_slice(&self.buffer[..self.leftover]);
            block[self.leftover] = 1;
            self.process_block(&block, 0);
            block.zeroize();
            self.leftover = 0;
        }

        // Fully carry the accumulator
        let mut h0 = self.h[0];
        let mut h1 = self.h[1];
        let mut h2 = self.h[2];
        let mut h3 = self.h[3];
        let mut h4 = self.h[4];

        let mut c = h1 >> 26;
        h1 &= LIMB_MASK;
        h2 += c;
        c = h2 >> 26;
        h2 &= LIMB_MASK;
        h3 += c;
        c = h3 >> 26;
        h3 &= LIMB_MASK;
        h4 += c;
        c = h4 >> 26;
        h4 &= LIMB_MASK;
        h0 += c * 5;
        c = h0 >> 26;
        h0 &= LIMB_MASK;
        h1 += c;

        // Compute h + -p and select the reduced value without branching
        let mut g0 = h0.wrapping_add(5);
        c = g0 >> 26;
        g0 &= LIMB_MASK;
        let mut g1 = h1.wrapping_add(c);
        c = g1 >> 26;
        g1 &= LIMB_MASK;
        let mut g2 = h2.wrapping_add(c);
        c = g2 >> 26;
        g2 &= LIMB_MASK;
        let mut g3 = h3.wrapping_add(c);
        c = g3 >> 26;
        g3 &= LIMB_MASK;
        let g4 = h4.wrapping_add(c).wrapping_sub(1 << 26);

        let mask = (g4 >> 31).wrapping_sub(1);
        g0 &= mask;
        g1 &= mask;
        g2 &= mask;
        g3 &= mask;
        let g4 = g4 & mask;
        let not_mask = !mask;
        h0 = (h0 & not_mask) | g0;
        h1 = (h1 & not_mask) | g1;
        h2 = (h2 & not_mask) | g2;
        h3 = (h3 & not_mask) | g3;
        h4 = (h4 & not_mask) | g4;

        // h mod 2^128, repacked into 32-bit words
        h0 |= h1 << 26;
        h1 = (h1 >> 6) | (h2 << 20);
        h2 = (h2 >> 12) | (h3 << 14);
        h3 = (h3 >> 18) | (h4 << 8);

        // tag = (h + pad) mod 2^128
        let mut f = (h0 as u64) + (self.pad[0] as u64);
        h0 = f as u32;
        f = (h1 as u64) + (self.pad[1] as u64) + (f >> 32);
        h1 = f as u32;
        f = (h2 as u64) + (self.pad[2] as u64) + (f >> 32);
        h2 = f as u32;
        f = (h3 as u64) + (self.pad[3] as u64) + (f >> 32);
        h3 = f as u32;

        let mut tag = [0u8; POLY1305_TAG_SIZE];
        tag[0..4].copy_from_slice(&u32_to_le_bytes(h0));
        tag[4..8].copy_from_slice(&u32_to_le_bytes(h1));
        tag[8..12].copy_from_slice(&u32_to_le_bytes(h2));
        tag[12..16].copy_from_slice(&u32_to_le_bytes(h3));

        self.zeroize();
        self.finalized = true;

        Ok(Tag::new(tag))
    }

    /// One-shot MAC helper
    pub fn mac(key: &[u8; POLY1305_KEY_SIZE], message: &[u8]) -> Result<Tag<POLY1305_TAG_SIZE>> {
        let mut poly = Self::new(key)?;
        poly.update(message)?;
        poly.finalize()
    }

    /// Constant-time verification of `tag` against `key` / `message`
    ///
    /// The freshly computed tag is compared against the supplied one across
    /// the full, fixed tag width; a mismatch position never changes the work
    /// done.
    pub fn verify(key: &[u8; POLY1305_KEY_SIZE], message: &[u8], tag: &[u8]) -> Result<bool> {
        let expected = Self::mac(key, message)?;

        // Always iterate over the fixed, public tag length to avoid timing
        // variation when the caller supplies a shorter tag.
        let mut diff = 0u8;
        for i in 0..POLY1305_TAG_SIZE {
            let a = expected.as_ref()[i];
            let b = tag.get(i).copied().unwrap_or(0);
            diff |= a ^ b;
        }
        // Fold any length mismatch into the diff in a single operation.
        diff |= (tag.len() ^ POLY1305_TAG_SIZE) as u8;

        Ok(diff.ct_eq(&0u8).unwrap_u8() == 1)
    }
}

#[cfg(test)]
mod tests;
