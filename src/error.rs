//! Error types for the Ginga primitives.
//!
//! Only the block cipher and the CTR wrapper can fail, and only because a
//! caller handed them a buffer of the wrong size. Hashing and HMAC accept
//! arbitrary input and are infallible.

use std::fmt;

/// Names the buffer that failed length validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Plaintext or ciphertext block.
    Block,
    /// Cipher key.
    Key,
    /// CTR nonce.
    Nonce,
}

/// Errors produced by the Ginga primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A fixed-size input did not have its required length.
    InvalidLength {
        input: Input,
        expected: usize,
        actual: usize,
    },
}

impl Error {
    pub(crate) fn check(input: Input, expected: usize, actual: usize) -> Result<(), Error> {
        if expected == actual {
            Ok(())
        } else {
            Err(Error::InvalidLength {
                input,
                expected,
                actual,
            })
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Block => f.write_str("block"),
            Input::Key => f.write_str("key"),
            Input::Nonce => f.write_str("nonce"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength {
                input,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid {} length: expected {} bytes, got {}",
                    input, expected, actual
                )
            }
        }
    }
}

impl std::error::Error for Error {}
