//! Ginga-Hash-256 core hashing functions
//!
//! This module implements the Ginga-Hash-256 construction:
//! - a 512-bit chaining state (16 × 32-bit words)
//! - 32-byte message blocks read as 8 little-endian words
//! - an 8-round ARX compression function with a feed-forward of both the
//!   message and the previous chaining value
//! - Merkle–Damgård padding with a little-endian 64-bit bit-length
//! - a 256-bit digest taken from the first 8 state words
//!
//! Both a one-shot function ([`ginga_hash`]) and an incremental hasher
//! ([`GingaHasher`]) are provided; they agree for every split of the input.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::computations::{mix, round, sub_key};
use crate::hash::Hasher;
use crate::primitives::codec::{load_le_words, store_le_u64, store_le_words};

/// Message block size in bytes.
pub const BLOCK_SIZE: usize = 32;

/// Digest size in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Compression rounds per block.
pub const ROUNDS: usize = 8;

/// Chaining state size in 32-bit words.
pub const STATE_WORDS: usize = 16;

/// Initial chaining value: the first fractional hexadecimal digits of π.
pub const GINGA_INIT: [u32; STATE_WORDS] = [
    0x243F_6A88, 0x85A3_08D3, 0x1319_8A2E, 0x0370_7344,
    0xA409_3822, 0x299F_31D0, 0x082E_FA98, 0xEC4E_6C89,
    0x4528_21E6, 0x38D0_1377, 0xBE54_66CF, 0x34E9_0C6C,
    0xC0AC_29B7, 0xC97C_50DD, 0x3F84_D5B5, 0xB547_0917,
];

/// Compresses a single 256-bit message block into the chaining state.
///
/// # Parameters
/// - `block`: A 32-byte message block
/// - `state`: The current chaining state (16 × 32-bit words)
///
/// # Notes
/// - Round keys come from the message words, indexed cyclically.
/// - The final `state ^= m ^ prev` step is what makes the function
///   one-way; without it the rounds could simply be run backwards.
pub fn compress(block: &[u8; BLOCK_SIZE], state: &mut [u32; STATE_WORDS]) {
    let m: [u32; 8] = load_le_words(block);
    let prev = *state;

    let mut s = *state;

    for r in 0..ROUNDS {
        for (j, word) in s.iter_mut().enumerate() {
            *word = round(*word, sub_key(&m, r, j % 8), r);
        }
        s = mix(s);
    }

    for (j, word) in s.iter_mut().enumerate() {
        *word ^= m[j % 8] ^ prev[j];
    }

    *state = s;
}

/// Incremental Ginga-Hash-256 state.
///
/// Input may be fed in any number of [`update`](Self::update) calls; the
/// digest only depends on the concatenated bytes.
///
/// # Examples
///
/// ```
/// use ginga::hash::{GingaHasher, ginga_hash};
///
/// let mut hasher = GingaHasher::new();
/// hasher.update(b"Exemplo da ");
/// hasher.update("função hash Ginga".as_bytes());
///
/// assert_eq!(hasher.finalize(), ginga_hash("Exemplo da função hash Ginga".as_bytes()));
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GingaHasher {
    state: [u32; STATE_WORDS],
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,
    length: u64,
}

impl GingaHasher {
    /// Creates a hasher in its initial state.
    pub fn new() -> Self {
        GingaHasher {
            state: GINGA_INIT,
            buffer: [0u8; BLOCK_SIZE],
            buffered: 0,
            length: 0,
        }
    }

    /// Absorbs `data`.
    pub fn update(&mut self, data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);

        let mut data = data;

        if self.buffered > 0 {
            let take = (BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_SIZE {
                return;
            }

            compress(&self.buffer, &mut self.state);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_SIZE);

        for chunk in &mut blocks {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            compress(&block, &mut self.state);
        }

        let rem = blocks.remainder();
        self.buffer[..rem.len()].copy_from_slice(rem);
        self.buffered = rem.len();
    }

    /// Pads the message, processes the final block(s) and returns the digest.
    pub fn finalize(mut self) -> [u8; DIGEST_SIZE] {
        self.finish()
    }

    /// Returns the digest and puts the hasher back into its initial state.
    pub fn finalize_reset(&mut self) -> [u8; DIGEST_SIZE] {
        let digest = self.finish();
        self.reset();

        digest
    }

    /// Discards all absorbed input.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn finish(&mut self) -> [u8; DIGEST_SIZE] {
        let bit_len = self.length.wrapping_mul(8);

        let mut block = [0u8; BLOCK_SIZE];
        block[..self.buffered].copy_from_slice(&self.buffer[..self.buffered]);
        block[self.buffered] = 0x80;

        // The length field needs the last 8 bytes of a block.
        if self.buffered > BLOCK_SIZE - 9 {
            compress(&block, &mut self.state);
            block = [0u8; BLOCK_SIZE];
        }

        store_le_u64(bit_len, &mut block[BLOCK_SIZE - 8..]);
        compress(&block, &mut self.state);
        block.zeroize();

        let mut out = [0u8; DIGEST_SIZE];
        store_le_words(&self.state[..DIGEST_SIZE / 4], &mut out);

        out
    }
}

impl Default for GingaHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for GingaHasher {
    const BLOCK_SIZE: usize = BLOCK_SIZE;
    const OUTPUT_SIZE: usize = DIGEST_SIZE;

    type Output = [u8; DIGEST_SIZE];

    fn update(&mut self, data: &[u8]) {
        GingaHasher::update(self, data);
    }

    fn finalize(self) -> Self::Output {
        GingaHasher::finalize(self)
    }
}

/// Computes the Ginga-Hash-256 digest of `input`.
///
/// # Returns
/// - Always exactly 32 bytes, including for empty input
///
/// # Notes
/// - The message length is appended as a 64-bit little-endian bit count.
/// - State words are serialized little-endian.
pub fn ginga_hash(input: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut hasher = GingaHasher::new();
    hasher.update(input);
    hasher.finalize()
}
