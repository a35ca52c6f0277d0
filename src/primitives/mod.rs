//! Primitive building blocks
//!
//! Word-level helpers shared by the Ginga cipher and hash:
//! - `arx`: rotations and cyclic indexing into fixed-size word arrays
//! - `codec`: fixed-width little-endian / big-endian word codecs
//!
//! The cipher and hash keep their own round functions; only these
//! algorithm-neutral pieces are shared.

pub mod arx;
pub mod codec;
