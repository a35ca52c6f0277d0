//! HMAC over any [`Hasher`].
//!
//! ```text
//! HMAC(K, m) = H((K' ^ opad) || H((K' ^ ipad) || m))
//! ```
//!
//! `K'` is the key adjusted to the hasher's block size: keys longer than a
//! block are replaced by their digest, and shorter keys are zero-padded on
//! the right. The hasher's digest must fit in one block.

use zeroize::Zeroizing;

use crate::hash::{GingaHasher, Hasher};

/// Byte XORed into the key for the inner hash.
pub const IPAD: u8 = 0x36;

/// Byte XORed into the key for the outer hash.
pub const OPAD: u8 = 0x5c;

/// Incremental HMAC state.
///
/// Both hashers are keyed at construction; only the message flows through
/// [`update`](Self::update).
#[derive(Clone)]
pub struct Hmac<H: Hasher> {
    inner: H,
    outer: H,
}

/// HMAC instantiated over Ginga-Hash-256 (32-byte block, 32-byte tag).
pub type HmacGinga = Hmac<GingaHasher>;

impl<H: Hasher> Hmac<H> {
    /// Creates an HMAC state for `key`. Any key length is accepted.
    ///
    /// Instantiating this for a hasher whose digest is longer than its
    /// block is a compile-time error:
    ///
    /// ```compile_fail
    /// use ginga::hash::{GingaHasher, Hasher};
    /// use ginga::mac::Hmac;
    ///
    /// #[derive(Clone, Default)]
    /// struct Narrow(GingaHasher);
    ///
    /// impl Hasher for Narrow {
    ///     const BLOCK_SIZE: usize = 16;
    ///     const OUTPUT_SIZE: usize = 32;
    ///
    ///     type Output = [u8; 32];
    ///
    ///     fn update(&mut self, data: &[u8]) {
    ///         self.0.update(data);
    ///     }
    ///
    ///     fn finalize(self) -> [u8; 32] {
    ///         self.0.finalize()
    ///     }
    /// }
    ///
    /// let _ = Hmac::<Narrow>::new(b"key");
    /// ```
    pub fn new(key: &[u8]) -> Self {
        const { assert!(H::OUTPUT_SIZE <= H::BLOCK_SIZE, "digest must fit in one block") };

        let mut block = Zeroizing::new(vec![0u8; H::BLOCK_SIZE]);

        if key.len() > H::BLOCK_SIZE {
            let digest = H::digest(key);
            let digest = digest.as_ref();
            block[..digest.len()].copy_from_slice(digest);
        } else {
            block[..key.len()].copy_from_slice(key);
        }

        let mut pad = Zeroizing::new(vec![0u8; H::BLOCK_SIZE]);

        let mut inner = H::default();
        pad.iter_mut()
            .zip(block.iter())
            .for_each(|(p, k)| *p = k ^ IPAD);
        inner.update(&pad);

        let mut outer = H::default();
        pad.iter_mut()
            .zip(block.iter())
            .for_each(|(p, k)| *p = k ^ OPAD);
        outer.update(&pad);

        Hmac { inner, outer }
    }

    /// Absorbs message bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Returns the authentication tag.
    pub fn finalize(self) -> H::Output {
        let Hmac { inner, mut outer } = self;

        let inner_digest = inner.finalize();
        outer.update(inner_digest.as_ref());

        outer.finalize()
    }
}

/// Computes HMAC-Ginga of `message` under `key`.
///
/// # Examples
///
/// ```
/// use ginga::hash::ginga_hash;
/// use ginga::mac::hmac_ginga;
///
/// let tag = hmac_ginga(b"chave-secreta", b"mensagem");
///
/// assert_eq!(tag.len(), 32);
/// assert_ne!(tag, ginga_hash(b"chave-secretamensagem"));
/// ```
pub fn hmac_ginga(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut mac = HmacGinga::new(key);
    mac.update(message);
    mac.finalize()
}
