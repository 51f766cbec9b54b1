//! Parser of the textual representations of UUID.

#[cfg(not(feature = "std"))]
use core as std;

use crate::{Error, Uuid};
use std::str;

/// Prefix of the URN form defined by RFC 4122 (`urn:uuid:` followed by the 8-4-4-4-12 form).
const URN_PREFIX: &str = "urn:uuid:";

impl Uuid {
    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation, optionally
    /// prefixed with `urn:uuid:` and/or enclosed in braces.
    ///
    /// Hexadecimal digits are accepted in both cases. The `urn:uuid:` prefix is matched
    /// case-sensitively. The version nibble is not validated, so any UUID value written in a
    /// supported form is accepted.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedBracket`] if only one of the braces is present.
    /// - [`Error::MalformedText`] if the string has a wrong length after the prefix and braces are
    ///   stripped.
    /// - [`Error::BadSeparator`] or [`Error::BadDigit`], carrying the byte offset in `src`, if a
    ///   character does not fit its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Error, Uuid};
    ///
    /// let x = Uuid::parse("6ba7b810-9dad-11d1-80b4-00c04fd430c8")?;
    /// assert_eq!(Uuid::parse("{6ba7b810-9dad-11d1-80b4-00c04fd430c8}")?, x);
    /// assert_eq!(Uuid::parse("urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8")?, x);
    ///
    /// assert_eq!(Uuid::parse("foo"), Err(Error::MalformedText { len: 3 }));
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn parse(src: &str) -> Result<Self, Error> {
        let (offset, body) = strip_decorations(src)?;

        let mut dst = [0u8; 16];
        let mut n_digits = 0;
        for (i, &c) in body.as_bytes().iter().enumerate() {
            if i == 8 || i == 13 || i == 18 || i == 23 {
                if c != b'-' {
                    return Err(Error::BadSeparator { index: offset + i });
                }
            } else {
                let Some(num) = decode_hex_digit(c) else {
                    return Err(Error::BadDigit { index: offset + i });
                };
                dst[n_digits >> 1] |= if n_digits & 1 == 0 { num << 4 } else { num };
                n_digits += 1;
            }
        }
        debug_assert_eq!(n_digits, 32);
        Ok(Self::from(dst))
    }
}

/// Strips the optional `urn:uuid:` prefix and braces, returning the byte offset and contents of
/// the 36-character body.
fn strip_decorations(src: &str) -> Result<(usize, &str), Error> {
    let (offset, text) = match src.strip_prefix(URN_PREFIX) {
        Some(rest) => (URN_PREFIX.len(), rest),
        None => (0, src),
    };

    match (text.starts_with('{'), text.ends_with('}')) {
        (true, true) if text.len() == 38 => Ok((offset + 1, &text[1..37])),
        (false, false) if text.len() == 36 => Ok((offset, text)),
        (true, false) | (false, true) => Err(Error::MalformedBracket),
        _ => Err(Error::MalformedText { len: src.len() }),
    }
}

const fn decode_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// See [`Uuid::parse()`] for the accepted forms.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse(src)
    }
}
