//! The Ginga primitive family
//!
//! This crate provides a small suite of symmetric primitives built from
//! the same ARX (add, rotate, XOR) vocabulary:
//!
//! # Module overview
//!
//! - `primitives`  
//!   Word rotation, cyclic indexing and the little-endian / big-endian
//!   word codecs shared by every algorithm in the crate.
//!
//! - `encryption`  
//!   The Ginga-128 block cipher (128-bit block, 256-bit key, 16 rounds)
//!   and a counter-mode stream construction on top of it.
//!
//! - `hash`  
//!   Ginga-Hash-256, a Merkle–Damgård hash with a 512-bit chaining state,
//!   8-round compression and a 256-bit digest.
//!
//! - `mac`  
//!   HMAC, generic over the crate's `Hasher` trait and instantiated over
//!   Ginga-Hash-256.
//!
//! - `error`  
//!   The single error type, raised only when a fixed-size input (block,
//!   key, nonce) has the wrong length.
//!
//! # Byte order
//!
//! Every 32-bit word inside a block, key or digest is little-endian. The
//! CTR counter field is big-endian. The hash length field is a
//! little-endian 64-bit bit count.
//!
//! # Scope
//!
//! These primitives make no claim of side-channel resistance and provide
//! no authenticated encryption or key derivation. Key and nonce
//! generation are the caller's responsibility.
//!
//! # Examples
//!
//! ```
//! use ginga::encryption::ginga::ctr_mode;
//! use ginga::hash::ginga_hash;
//! use ginga::mac::hmac_ginga;
//!
//! let key = [0u8; 32];
//! let nonce = [0u8; 16];
//!
//! let ciphertext = ctr_mode(b"Mensagem confidencial", &key, &nonce).unwrap();
//! assert_eq!(ctr_mode(&ciphertext, &key, &nonce).unwrap(), b"Mensagem confidencial");
//!
//! assert_eq!(ginga_hash(b"").len(), 32);
//! assert_eq!(hmac_ginga(b"key", b"message").len(), 32);
//! ```

pub mod encryption;
pub mod error;
pub mod hash;
pub mod mac;
pub mod primitives;

pub use error::Error;
