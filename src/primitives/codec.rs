//! Fixed-width word codecs.
//!
//! Every Ginga state, key and digest buffer is a sequence of 32-bit words
//! stored **little-endian**. The single exception is the CTR counter field,
//! which is stored **big-endian**. Keeping both directions here keeps the
//! cipher and hash code free of ad hoc byte shuffling.
//!
//! With the `speed` feature the loaders and stores use explicit shifts
//! instead of `from_le_bytes` on sub-slices. Both paths produce identical
//! bytes.

/// Reads one little-endian word from the first four bytes of `bytes`.
#[cfg(not(feature = "speed"))]
#[inline(always)]
pub fn load_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Reads one little-endian word (shift-based fast path).
#[cfg(feature = "speed")]
#[inline(always)]
pub fn load_le(bytes: &[u8]) -> u32 {
    (bytes[0] as u32)
        | ((bytes[1] as u32) << 8)
        | ((bytes[2] as u32) << 16)
        | ((bytes[3] as u32) << 24)
}

/// Writes `word` little-endian into the first four bytes of `out`.
#[cfg(not(feature = "speed"))]
#[inline(always)]
pub fn store_le(word: u32, out: &mut [u8]) {
    out[..4].copy_from_slice(&word.to_le_bytes());
}

/// Writes `word` little-endian (shift-based fast path).
#[cfg(feature = "speed")]
#[inline(always)]
pub fn store_le(word: u32, out: &mut [u8]) {
    out[0] = word as u8;
    out[1] = (word >> 8) as u8;
    out[2] = (word >> 16) as u8;
    out[3] = (word >> 24) as u8;
}

/// Decodes `N` little-endian words from `bytes`.
///
/// `bytes` must hold exactly `4 * N` bytes; callers validate lengths at
/// the API boundary before reaching this point.
#[inline(always)]
pub fn load_le_words<const N: usize>(bytes: &[u8]) -> [u32; N] {
    debug_assert_eq!(bytes.len(), 4 * N);

    let mut out = [0u32; N];

    for (slot, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
        *slot = load_le(chunk);
    }

    out
}

/// Encodes `words` little-endian into `out` (`out.len() == 4 * words.len()`).
#[inline(always)]
pub fn store_le_words(words: &[u32], out: &mut [u8]) {
    debug_assert_eq!(out.len(), 4 * words.len());

    for (chunk, &word) in out.chunks_exact_mut(4).zip(words) {
        store_le(word, chunk);
    }
}

/// Writes a 32-bit counter big-endian into the first four bytes of `out`.
#[inline(always)]
pub fn store_be_u32(value: u32, out: &mut [u8]) {
    out[..4].copy_from_slice(&value.to_be_bytes());
}

/// Writes a 64-bit length field little-endian into the first eight bytes
/// of `out`.
#[inline(always)]
pub fn store_le_u64(value: u64, out: &mut [u8]) {
    out[..8].copy_from_slice(&value.to_le_bytes());
}
