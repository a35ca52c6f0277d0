//! Ginga-Hash-256.
//!
//! - `computations`: ARX round function, sub-key derivation and the
//!   512-bit diffusion layer
//! - `core`: compression, padding, [`GingaHasher`](self::core::GingaHasher) and
//!   [`ginga_hash`](self::core::ginga_hash)

pub mod computations;
pub mod core;

pub use self::core::{BLOCK_SIZE, DIGEST_SIZE, GINGA_INIT, ROUNDS, STATE_WORDS};
