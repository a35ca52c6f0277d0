use crate::primitives::arx::{cyclic, rotl};

/// XOR constant of the confusion step.
pub const CONFUSE_XOR: u32 = 0xA5A5_A5A5;

/// Additive constant of the confusion step.
pub const CONFUSE_ADD: u32 = 0x3C3C_3C3C;

#[inline(always)]
pub fn confuse(x: u32) -> u32 {
    rotl((x ^ CONFUSE_XOR).wrapping_add(CONFUSE_ADD), 7)
}

#[inline(always)]
pub fn round(x: u32, k: u32, r: usize) -> u32 {
    let x = confuse(x.wrapping_add(k));
    let x = rotl(x, r as u32 + 3);
    rotl(x ^ k, r as u32 + 5)
}

/// Sub-key for chain word `i` in round `round`, drawn from the message block.
#[inline(always)]
pub fn sub_key(m: &[u32; 8], round: usize, i: usize) -> u32 {
    let tweak = (i as u32).wrapping_mul(73).wrapping_add((round as u32).wrapping_mul(91));

    rotl(cyclic(m, i + round) ^ tweak, (round + i) as u32)
}

/// 512-bit diffusion layer.
///
/// Word `j` absorbs word `j + 3` (cyclically) rotated by `7j + 13`. The
/// update is sequential, so the last three words see the already-mixed
/// words 0..3.
#[inline(always)]
pub fn mix(mut state: [u32; 16]) -> [u32; 16] {
    for j in 0..16 {
        let neighbour = rotl(cyclic(&state, j + 3), 7 * j as u32 + 13);
        state[j] ^= neighbour;
    }

    state
}
