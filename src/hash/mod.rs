//! Hash algorithms exposed by the crate.
//!
//! Currently includes Ginga-Hash-256, a 256-bit ARX hash with a 512-bit
//! chaining state, together with the [`Hasher`] trait that keyed
//! constructions such as HMAC are written against.

pub mod ginga;

/// Re-export of the Ginga-Hash-256 convenience function and hasher.
pub use self::ginga::core::{GingaHasher, ginga_hash};

/// Incremental hash function with a fixed block and output size.
///
/// This is the seam between hash cores and the constructions built on top
/// of them (see [`crate::mac::Hmac`]).
pub trait Hasher: Clone + Default {
    /// Input block size in bytes.
    const BLOCK_SIZE: usize;

    /// Digest size in bytes.
    const OUTPUT_SIZE: usize;

    /// Digest type.
    type Output: AsRef<[u8]>;

    /// Absorbs `data`.
    fn update(&mut self, data: &[u8]);

    /// Consumes the hasher and returns the digest.
    fn finalize(self) -> Self::Output;

    /// One-shot digest of `data`.
    fn digest(data: &[u8]) -> Self::Output {
        let mut hasher = Self::default();
        hasher.update(data);
        hasher.finalize()
    }
}
