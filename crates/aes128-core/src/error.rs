//! Error handling for the cipher core.

use std::fmt;

/// The error type for key expansion and block transformation.
///
/// Every failure is a local precondition violation on fixed-size data; none
/// are transient, so there is no retry path. Fallible operations return these
/// explicitly instead of recording them in session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The supplied key is not exactly 16 bytes.
    KeyLength {
        /// Length of the rejected key in bytes.
        actual: usize,
    },
    /// A key-schedule word is not exactly 4 bytes.
    WordLength {
        /// Length of the rejected word in bytes.
        actual: usize,
    },
    /// A round key is not exactly 16 bytes.
    RoundKeyLength {
        /// Length of the rejected round key in bytes.
        actual: usize,
    },
    /// A state matrix was missing where one was required. Unreachable through
    /// this crate's value-typed API; kept so callers can match on the full
    /// taxonomy.
    NullState,
    /// Unclassified failure.
    Unknown,
}

/// Result type for cipher-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyLength { actual } => {
                write!(f, "invalid key length: expected 16 bytes, got {}", actual)
            }
            Error::WordLength { actual } => {
                write!(
                    f,
                    "invalid key-schedule word: expected 4 bytes, got {}",
                    actual
                )
            }
            Error::RoundKeyLength { actual } => {
                write!(
                    f,
                    "round key length mismatch: expected 16 bytes, got {}",
                    actual
                )
            }
            Error::NullState => write!(f, "state matrix is missing"),
            Error::Unknown => write!(f, "unknown cipher failure"),
        }
    }
}

impl std::error::Error for Error {}
