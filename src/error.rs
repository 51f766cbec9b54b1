#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

/// Error creating or generating a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A byte sequence of `len` bytes was given where exactly 16 are required.
    InvalidLength {
        /// Length of the rejected byte sequence.
        len: usize,
    },

    /// A string of `len` bytes could not hold the 8-4-4-4-12 form once its optional `urn:uuid:`
    /// prefix and braces were stripped.
    MalformedText {
        /// Length of the rejected string.
        len: usize,
    },

    /// An opening brace without the matching closing brace, or vice versa.
    MalformedBracket,

    /// A non-hyphen character where the 8-4-4-4-12 form requires a hyphen.
    BadSeparator {
        /// Byte offset of the offending character in the input string.
        index: usize,
    },

    /// A character outside `0-9a-fA-F` where a hexadecimal digit is expected.
    BadDigit {
        /// Byte offset of the offending character in the input string.
        index: usize,
    },

    /// The random number source could not supply bytes.
    EntropyUnavailable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => {
                write!(f, "invalid byte length: expected 16, found {}", len)
            }
            Self::MalformedText { len } => {
                write!(f, "invalid string representation of length {}", len)
            }
            Self::MalformedBracket => write!(f, "unbalanced braces in string representation"),
            Self::BadSeparator { index } => write!(f, "expected '-' at index {}", index),
            Self::BadDigit { index } => {
                write!(f, "invalid hexadecimal digit at index {}", index)
            }
            Self::EntropyUnavailable => write!(f, "random number source unavailable"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}
