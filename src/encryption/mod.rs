//! Symmetric encryption.
//!
//! This module exposes the Ginga-128 block cipher and its counter-mode
//! stream construction.
//!
//! # Notes
//!
//! - CTR mode provides confidentiality only; no integrity tag is bound to
//!   the ciphertext.
//! - Nonce reuse with the same key is catastrophic and must be avoided.
pub mod ginga;
