//! Counter-mode stream construction over Ginga-128.
//!
//! The 16-byte nonce is split into a 96-bit fixed prefix and a 32-bit
//! block counter. For block `i` the counter field (bytes 12..16) is
//! overwritten with `i` in **big-endian** order, the resulting IV is
//! encrypted, and the output is XORed into the data. Whatever the caller
//! placed in bytes 12..16 of the nonce is ignored.
//!
//! Encryption and decryption are the same operation. No integrity is
//! provided, and reusing a `(key, nonce)` pair leaks the XOR of the
//! plaintexts; nonce uniqueness is the caller's responsibility.
//!
//! Each keystream block depends only on the key, the nonce prefix and its
//! own counter value, which is what makes [`GingaCtr::seek`] cheap.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::core::{BLOCK_SIZE, Ginga};
use crate::error::{Error, Input};
use crate::primitives::codec::store_be_u32;

/// Nonce size in bytes.
pub const NONCE_SIZE: usize = 16;

/// Length of the fixed nonce prefix; the remaining 4 bytes hold the counter.
pub const NONCE_PREFIX_SIZE: usize = 12;

/// Incremental Ginga-CTR keystream.
///
/// Applying the keystream over several calls with arbitrary chunk sizes
/// produces the same bytes as a single [`ctr_mode`] call over the
/// concatenated data.
///
/// Block counters are 32 bits wide. Past 2³² blocks (64 GiB) under one
/// nonce the counter wraps and the keystream repeats. The byte position
/// itself wraps at `u64::MAX`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GingaCtr {
    cipher: Ginga,
    prefix: [u8; NONCE_PREFIX_SIZE],
    position: u64,
}

impl GingaCtr {
    /// Creates a keystream positioned at byte 0.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLength`] if `key` is not 32 bytes or `nonce`
    /// is not 16 bytes.
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self, Error> {
        let cipher = Ginga::new(key)?;
        Error::check(Input::Nonce, NONCE_SIZE, nonce.len())?;

        let mut prefix = [0u8; NONCE_PREFIX_SIZE];
        prefix.copy_from_slice(&nonce[..NONCE_PREFIX_SIZE]);

        Ok(GingaCtr {
            cipher,
            prefix,
            position: 0,
        })
    }

    /// XORs the keystream into `buf` and advances the position.
    pub fn apply_keystream(&mut self, buf: &mut [u8]) {
        let mut offset = 0usize;

        while offset < buf.len() {
            let skip = (self.position % BLOCK_SIZE as u64) as usize;
            let keystream = self.keystream_block(self.block_counter());

            let take = (BLOCK_SIZE - skip).min(buf.len() - offset);

            buf[offset..offset + take]
                .iter_mut()
                .zip(&keystream[skip..skip + take])
                .for_each(|(b, k)| *b ^= k);

            offset += take;
            self.position = self.position.wrapping_add(take as u64);
        }
    }

    /// Moves the keystream to absolute byte offset `position`.
    pub fn seek(&mut self, position: u64) {
        self.position = position;
    }

    /// Current keystream byte offset.
    pub fn position(&self) -> u64 {
        self.position
    }

    fn block_counter(&self) -> u32 {
        (self.position / BLOCK_SIZE as u64) as u32
    }

    fn keystream_block(&self, counter: u32) -> [u8; BLOCK_SIZE] {
        let mut block = [0u8; BLOCK_SIZE];
        block[..NONCE_PREFIX_SIZE].copy_from_slice(&self.prefix);
        store_be_u32(counter, &mut block[NONCE_PREFIX_SIZE..]);

        self.cipher.encrypt_block(&mut block);

        block
    }
}

/// Encrypts or decrypts `data` with Ginga-CTR.
///
/// The output has the same length as `data`; empty input yields empty
/// output. Applying the function twice with the same key and nonce returns
/// the original data.
///
/// # Errors
/// Returns [`Error::InvalidLength`] if `key` is not 32 bytes or `nonce` is
/// not 16 bytes.
///
/// # Examples
///
/// ```
/// use ginga::encryption::ginga::ctr_mode;
///
/// let key = [0u8; 32];
/// let nonce = [0u8; 16];
///
/// let ciphertext = ctr_mode(b"attack at dawn", &key, &nonce).unwrap();
/// let plaintext = ctr_mode(&ciphertext, &key, &nonce).unwrap();
///
/// assert_eq!(plaintext, b"attack at dawn");
/// ```
pub fn ctr_mode(data: &[u8], key: &[u8], nonce: &[u8]) -> Result<Vec<u8>, Error> {
    let mut ctr = GingaCtr::new(key, nonce)?;

    let mut out = data.to_vec();
    ctr.apply_keystream(&mut out);

    Ok(out)
}
