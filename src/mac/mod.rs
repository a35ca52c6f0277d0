//! Message authentication codes.
//!
//! HMAC is implemented once, generically over [`crate::hash::Hasher`], and
//! instantiated over Ginga-Hash-256 as [`HmacGinga`].

pub mod hmac;

pub use hmac::{Hmac, HmacGinga, hmac_ginga};
