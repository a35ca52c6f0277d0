//! ARX building blocks of the Ginga-128 block cipher.
//!
//! Every function here is a bijection on `u32` (for a fixed key word and
//! round index) and comes paired with its exact inverse, which is what lets
//! decryption run the rounds backwards.

use crate::primitives::arx::{cyclic, rotl, rotr};

/// XOR constant of the confusion step.
pub const CONFUSE_XOR: u32 = 0xA5A5_A5A5;

/// Additive constant of the confusion step.
pub const CONFUSE_ADD: u32 = 0x3C3C_3C3C;

/// Fixed nonlinear step: XOR, modular add, rotate left 7.
#[inline(always)]
pub fn confuse(x: u32) -> u32 {
    rotl((x ^ CONFUSE_XOR).wrapping_add(CONFUSE_ADD), 7)
}

/// Inverse of [`confuse`].
#[inline(always)]
pub fn deconfuse(x: u32) -> u32 {
    rotr(x, 7).wrapping_sub(CONFUSE_ADD) ^ CONFUSE_XOR
}

/// Keyed round function applied to a single state word.
#[inline(always)]
pub fn round(x: u32, k: u32, r: usize) -> u32 {
    let x = confuse(x.wrapping_add(k));
    let x = rotl(x, r as u32 + 3);
    rotl(x ^ k, r as u32 + 5)
}

/// Inverse of [`round`] for the same `k` and `r`.
#[inline(always)]
pub fn inv_round(x: u32, k: u32, r: usize) -> u32 {
    let x = rotr(x, r as u32 + 5) ^ k;
    let x = rotr(x, r as u32 + 3);
    deconfuse(x).wrapping_sub(k)
}

/// Derives the sub-key for state word `i` in round `round`.
#[inline(always)]
pub fn sub_key(key: &[u32; 8], round: usize, i: usize) -> u32 {
    let tweak = (i as u32).wrapping_mul(73).wrapping_add((round as u32).wrapping_mul(91));

    rotl(cyclic(key, i + round) ^ tweak, (round + i) as u32)
}

/// Diffusion layer over the four state words.
///
/// Applied in place and in order, so word 3 absorbs the already-updated
/// word 0.
#[inline(always)]
pub fn mix(mut s: [u32; 4]) -> [u32; 4] {
    s[0] ^= rotl(s[1], 5);
    s[1] ^= rotl(s[2], 11);
    s[2] ^= rotl(s[3], 17);
    s[3] ^= rotl(s[0], 23);
    s
}

/// Inverse of [`mix`]: undoes the chain from word 3 back to word 0.
#[inline(always)]
pub fn inv_mix(mut s: [u32; 4]) -> [u32; 4] {
    s[3] ^= rotl(s[0], 23);
    s[2] ^= rotl(s[3], 17);
    s[1] ^= rotl(s[2], 11);
    s[0] ^= rotl(s[1], 5);
    s
}
