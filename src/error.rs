//! Library error types.

use std::fmt;
use std::io;

/// A wordpack Result, normally returning a wordpack [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A wordpack error. Anything that can go wrong while decoding a packed
/// stream; encoding has no failure modes beyond the word-alignment assertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Packed input ran out partway through an encoded word or run. Every
    /// byte value is a valid tag, so truncation is the only way a packed
    /// stream can be malformed.
    UnexpectedEnd {
        /// What step of the decoding we were on when the input ran out.
        step: &'static str,
        /// How many bytes were still available.
        actual: usize,
        /// How many bytes that step needed.
        expected: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::UnexpectedEnd {
                step,
                actual,
                expected,
            } => write!(
                f,
                "Packed data ended early: needed {} bytes but had {} on step [{}]",
                expected, actual, step
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for io::Error {
    fn from(e: Error) -> Self {
        io::Error::new(io::ErrorKind::UnexpectedEof, e)
    }
}
