//! Ginga-128 block cipher core.
//!
//! A 16-round ARX permutation over a 128-bit block (four little-endian
//! `u32` words) keyed by a 256-bit key (eight little-endian `u32` words).
//!
//! Each round applies the keyed [`round`] function to every state word and
//! then the [`mix`] diffusion chain, so after a couple of rounds every
//! output word depends on every input word. Decryption walks the rounds
//! backwards with [`inv_mix`] and [`inv_round`].
//!
//! The sub-key schedule is a pure function of the key, so [`Ginga`]
//! computes it once at construction.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::computations::{inv_mix, inv_round, mix, round, sub_key};
use crate::error::{Error, Input};
use crate::primitives::codec::{load_le_words, store_le_words};

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Key size in bytes.
pub const KEY_SIZE: usize = 32;

/// Number of cipher rounds.
pub const ROUNDS: usize = 16;

const STATE_WORDS: usize = BLOCK_SIZE / 4;

/// Ginga-128 keyed with a fixed 256-bit key.
///
/// Holds the expanded round-key schedule, which is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ginga {
    round_keys: [[u32; STATE_WORDS]; ROUNDS],
}

impl Ginga {
    /// Block size in bytes.
    pub const BLOCK_SIZE: usize = BLOCK_SIZE;

    /// Key size in bytes.
    pub const KEY_SIZE: usize = KEY_SIZE;

    /// Creates a cipher instance from a key slice.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLength`] if `key` is not exactly 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        Error::check(Input::Key, KEY_SIZE, key.len())?;

        let mut words: [u32; 8] = load_le_words(key);
        let cipher = Self::from_words(&words);
        words.zeroize();

        Ok(cipher)
    }

    /// Creates a cipher instance from a key of the correct size.
    pub fn from_key(key: &[u8; KEY_SIZE]) -> Self {
        let mut words: [u32; 8] = load_le_words(key);
        let cipher = Self::from_words(&words);
        words.zeroize();

        cipher
    }

    fn from_words(key: &[u32; 8]) -> Self {
        let mut round_keys = [[0u32; STATE_WORDS]; ROUNDS];

        for (r, keys) in round_keys.iter_mut().enumerate() {
            for (i, k) in keys.iter_mut().enumerate() {
                *k = sub_key(key, r, i);
            }
        }

        Ginga { round_keys }
    }

    /// Encrypts one block in place.
    pub fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        let state = self.encrypt_words(load_le_words(block));
        store_le_words(&state, block);
    }

    /// Decrypts one block in place.
    pub fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        let state = self.decrypt_words(load_le_words(block));
        store_le_words(&state, block);
    }

    fn encrypt_words(&self, mut s: [u32; STATE_WORDS]) -> [u32; STATE_WORDS] {
        for (r, keys) in self.round_keys.iter().enumerate() {
            for (word, &k) in s.iter_mut().zip(keys) {
                *word = round(*word, k, r);
            }
            s = mix(s);
        }

        s
    }

    fn decrypt_words(&self, mut s: [u32; STATE_WORDS]) -> [u32; STATE_WORDS] {
        for (r, keys) in self.round_keys.iter().enumerate().rev() {
            s = inv_mix(s);
            for (word, &k) in s.iter_mut().zip(keys) {
                *word = inv_round(*word, k, r);
            }
        }

        s
    }
}

impl fmt::Debug for Ginga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ginga").finish_non_exhaustive()
    }
}

/// Encrypts a single 16-byte block under a 32-byte key.
///
/// # Errors
/// Returns [`Error::InvalidLength`] if `plaintext` is not 16 bytes or
/// `key` is not 32 bytes. Inputs are never truncated or padded.
///
/// # Examples
///
/// ```
/// use ginga::encryption::ginga::{decrypt_block, encrypt_block};
///
/// let key = [7u8; 32];
/// let ciphertext = encrypt_block(b"Ginga CipherTest", &key).unwrap();
///
/// assert_eq!(&decrypt_block(&ciphertext, &key).unwrap(), b"Ginga CipherTest");
/// ```
pub fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<[u8; BLOCK_SIZE], Error> {
    let mut block = to_block(plaintext)?;
    Ginga::new(key)?.encrypt_block(&mut block);

    Ok(block)
}

/// Decrypts a single 16-byte block under a 32-byte key.
///
/// # Errors
/// Returns [`Error::InvalidLength`] if `ciphertext` is not 16 bytes or
/// `key` is not 32 bytes.
pub fn decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<[u8; BLOCK_SIZE], Error> {
    let mut block = to_block(ciphertext)?;
    Ginga::new(key)?.decrypt_block(&mut block);

    Ok(block)
}

fn to_block(bytes: &[u8]) -> Result<[u8; BLOCK_SIZE], Error> {
    Error::check(Input::Block, BLOCK_SIZE, bytes.len())?;

    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(bytes);

    Ok(block)
}
