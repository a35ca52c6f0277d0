//! Shared ARX helpers.
//!
//! The cipher and the hash each define their own confusion and round
//! functions (see `encryption::ginga::computations` and
//! `hash::ginga::computations`). What they genuinely share is word rotation
//! and cyclic indexing into fixed-size word arrays, which live here.

/// Rotates `x` left by `n` bits, with `n` reduced modulo 32.
#[inline(always)]
pub fn rotl(x: u32, n: u32) -> u32 {
    x.rotate_left(n & 31)
}

/// Rotates `x` right by `n` bits, with `n` reduced modulo 32.
#[inline(always)]
pub fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n & 31)
}

/// Returns `words[i mod N]`.
///
/// Round schedules address 8-word keys and message blocks with indices
/// that run past the end of the array; this is the single place that wraps
/// them.
#[inline(always)]
pub fn cyclic<const N: usize>(words: &[u32; N], i: usize) -> u32 {
    words[i % N]
}
