//! Ginga-128 block cipher and its CTR stream mode.
//!
//! - `computations`: the cipher's ARX round functions and their inverses
//! - `core`: the 16-round keyed permutation ([`Ginga`])
//! - `ctr`: counter mode over arbitrary-length data ([`GingaCtr`])

pub mod computations;
pub mod core;
pub mod ctr;

pub use self::core::{BLOCK_SIZE, Ginga, KEY_SIZE, ROUNDS, decrypt_block, encrypt_block};
pub use ctr::{GingaCtr, NONCE_SIZE, ctr_mode};
