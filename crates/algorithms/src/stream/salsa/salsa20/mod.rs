//! Salsa20 stream cipher implementation
//!
//! This module implements the Salsa20 stream cipher and the HSalsa20
//! sub-key derivation function as defined in Bernstein's Salsa20
//! specification and the NaCl library. The block function and its
//! add-back-free variant are exposed directly for the extended-nonce
//! constructions built on top of them.

use crate::types::nonce::Salsa20Compatible;
use crate::types::Nonce;
use byteorder::{ByteOrder, LittleEndian};
use halite_common::security::{EphemeralSecret, SecretBuffer};
use halite_internal::endian::{u32_from_le_bytes, u32_to_le_bytes};
use zeroize::{Zeroize, ZeroizeOnDrop};

pub use halite_params::utils::symmetric::{
    HSALSA20_INPUT_SIZE, HSALSA20_OUTPUT_SIZE, SALSA20_BLOCK_SIZE, SALSA20_KEY_SIZE,
    SALSA20_NONCE_SIZE, SALSA20_ROUNDS,
};

/// The Salsa20 constant words, "expand 32-byte k" in little-endian
pub const SIGMA: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];

/// The word positions HSalsa20 extracts its output from.
///
/// The non-sequential order (constant words first, then the input words) is
/// fixed by the HSalsa20 definition and required for interoperability.
const HSALSA20_OUTPUT_WORDS: [usize; 8] = [0, 5, 10, 15, 6, 7, 8, 9];

/// The Salsa20 quarter round function
#[inline]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

/// One double round: a column round followed by a row round
#[inline]
fn double_round(state: &mut [u32; 16]) {
    // Column round
    quarter_round(state, 0, 4, 8, 12);
    quarter_round(state, 5, 9, 13, 1);
    quarter_round(state, 10, 14, 2, 6);
    quarter_round(state, 15, 3, 7, 11);

    // Row round
    quarter_round(state, 0, 1, 2, 3);
    quarter_round(state, 5, 6, 7, 4);
    quarter_round(state, 10, 11, 8, 9);
    quarter_round(state, 15, 12, 13, 14);
}

/// The Salsa permutation without the final add-back, used for sub-key
/// derivation.
///
/// `rounds` must be a positive even number; standard deployments use 20.
pub fn hsalsa_core(input: &[u32; 16], rounds: usize) -> [u32; 16] {
    debug_assert!(rounds > 0 && rounds % 2 == 0, "round count must be even");

    let mut state = *input;
    for _ in 0..rounds / 2 {
        double_round(&mut state);
    }
    state
}

/// The full Salsa20 block function: the permutation followed by word-wise
/// addition of the input state.
///
/// `rounds` must be a positive even number; standard deployments use 20.
pub fn salsa_core(input: &[u32; 16], rounds: usize) -> [u32; 16] {
    let mut state = hsalsa_core(input, rounds);
    for (word, original) in state.iter_mut().zip(input.iter()) {
        *word = word.wrapping_add(*original);
    }
    state
}

/// Derive a 32-byte sub-key from a key and a 16-byte input using HSalsa20
///
/// This is the nonce-extension step of XSalsa20 and the hashing step of the
/// NaCl X25519 shared-secret derivation.
pub fn hsalsa20(
    key: &[u8; SALSA20_KEY_SIZE],
    input: &[u8; HSALSA20_INPUT_SIZE],
) -> [u8; HSALSA20_OUTPUT_SIZE] {
    let mut state = EphemeralSecret::new([0u32; 16]);

    state[0] = SIGMA[0];
    state[5] = SIGMA[1];
    state[10] = SIGMA[2];
    state[15] = SIGMA[3];

    for i in 0..4 {
        state[1 + i] = u32_from_le_bytes(&key[i * 4..]);
        state[11 + i] = u32_from_le_bytes(&key[16 + i * 4..]);
        state[6 + i] = u32_from_le_bytes(&input[i * 4..]);
    }

    let permuted = EphemeralSecret::new(hsalsa_core(&state, SALSA20_ROUNDS));

    let mut output = [0u8; HSALSA20_OUTPUT_SIZE];
    for (i, &word) in HSALSA20_OUTPUT_WORDS.iter().enumerate() {
        output[i * 4..i * 4 + 4].copy_from_slice(&u32_to_le_bytes(permuted[word]));
    }
    output
}

/// Salsa20 stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Salsa20 {
    /// The key schedule (initial state; counter words hold the start value)
    state: [u32; 16],
    /// Keystream buffer
    buffer: [u8; SALSA20_BLOCK_SIZE],
    /// Current position in the buffer
    position: usize,
    /// Current block counter
    counter: u64,
}

impl Salsa20 {
    /// Creates a new Salsa20 instance with the specified key and nonce
    pub fn new<const N: usize>(key: &[u8; SALSA20_KEY_SIZE], nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        // Wrap key in SecretBuffer for secure handling
        let key_buf = SecretBuffer::new(*key);
        Self::with_counter_secure(&key_buf, nonce, 0)
    }

    /// Creates a new Salsa20 instance with the specified key, nonce, and
    /// block counter
    pub fn with_counter<const N: usize>(
        key: &[u8; SALSA20_KEY_SIZE],
        nonce: &Nonce<N>,
        counter: u64,
    ) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        let key_buf = SecretBuffer::new(*key);
        Self::with_counter_secure(&key_buf, nonce, counter)
    }

    /// Internal constructor that works with SecretBuffer for secure key
    /// handling
    fn with_counter_secure<const N: usize>(
        key: &SecretBuffer<SALSA20_KEY_SIZE>,
        nonce: &Nonce<N>,
        counter: u64,
    ) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        let mut state = [0u32; 16];

        // Constant words at the diagonal
        state[0] = SIGMA[0];
        state[5] = SIGMA[1];
        state[10] = SIGMA[2];
        state[15] = SIGMA[3];

        // Key (8 words split around the nonce/counter block)
        let key_bytes = key.as_ref();
        for i in 0..4 {
            state[1 + i] = LittleEndian::read_u32(&key_bytes[i * 4..]);
            state[11 + i] = LittleEndian::read_u32(&key_bytes[16 + i * 4..]);
        }

        // Nonce (2 words)
        let nonce_bytes = nonce.as_ref();
        state[6] = LittleEndian::read_u32(&nonce_bytes[0..4]);
        state[7] = LittleEndian::read_u32(&nonce_bytes[4..8]);

        // Block counter (2 words, little-endian)
        state[8] = counter as u32;
        state[9] = (counter >> 32) as u32;

        Self {
            state,
            buffer: [0; SALSA20_BLOCK_SIZE],
            position: SALSA20_BLOCK_SIZE, // Force initial keystream generation
            counter,
        }
    }

    /// Creates from a SecretBuffer key (internal use)
    pub(crate) fn from_secret_key<const N: usize>(
        key: &SecretBuffer<SALSA20_KEY_SIZE>,
        nonce: &Nonce<N>,
    ) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        Self::with_counter_secure(key, nonce, 0)
    }

    /// Generate a block of keystream
    fn generate_keystream(&mut self) {
        // Working copy of the state with the current counter spliced in
        let mut input = EphemeralSecret::new(self.state);
        input[8] = self.counter as u32;
        input[9] = (self.counter >> 32) as u32;

        let output = EphemeralSecret::new(salsa_core(&input, SALSA20_ROUNDS));

        // Convert to bytes (little-endian)
        for i in 0..16 {
            LittleEndian::write_u32(&mut self.buffer[i * 4..], output[i]);
        }

        // Reset position and increment counter for next block
        self.position = 0;
        self.counter = self.counter.wrapping_add(1);
    }

    /// Encrypt or decrypt data in place using the Salsa20 stream cipher
    pub fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            // Generate new keystream block if needed
            if self.position >= SALSA20_BLOCK_SIZE {
                self.generate_keystream();
            }

            // XOR data with keystream
            *byte ^= self.buffer[self.position];
            self.position += 1;
        }
    }

    /// Encrypt data in place
    pub fn encrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Decrypt data in place
    pub fn decrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Generate keystream directly into an output buffer
    pub fn keystream(&mut self, output: &mut [u8]) {
        // Zero the output buffer
        for byte in output.iter_mut() {
            *byte = 0;
        }

        // Force generation from a block boundary (ignore any leftover position)
        self.position = SALSA20_BLOCK_SIZE;

        // Then run the encryption pass to copy the keystream
        self.process(output);
    }

    /// Seek so that the next generated keystream block is `block`
    pub fn seek(&mut self, block: u64) {
        self.counter = block;

        // Force regeneration on next use
        self.position = SALSA20_BLOCK_SIZE;

        // Clear any old keystream
        self.buffer.zeroize();
    }

    /// Reset to initial state with the same key and nonce
    pub fn reset(&mut self) {
        // Restore the original counter from the key schedule
        self.counter = (self.state[8] as u64) | ((self.state[9] as u64) << 32);
        self.position = SALSA20_BLOCK_SIZE; // Force keystream regeneration
        self.buffer.zeroize(); // Clear keystream buffer
    }
}
