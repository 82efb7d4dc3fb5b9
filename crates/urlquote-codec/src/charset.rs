// Copyright (c) 2024 Zensical <contributors@zensical.org>

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! Character set.

use std::fmt;
use std::str::FromStr;

use super::error::{Error, Result};

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Unreserved characters, which are never escaped.
pub const UNRESERVED: Charset = Charset::from_bytes(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~",
);

/// Sub-delimiters, which are passed through literally in every component.
pub const SUB_DELIMS: Charset = Charset::from_bytes(b"!$'()*,");

/// Sub-delimiters, which carry structure in query strings.
pub const QUERY_DELIMS: Charset = Charset::from_bytes(b"+&=;");

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Character set.
///
/// Character sets are immutable bitsets over the ASCII range, which are used
/// to classify characters during encoding and decoding. Membership tests are
/// a single shift and mask, and all constructors are `const`, so sets can be
/// computed at compile time. Non-ASCII characters are never members.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use urlquote_codec::Charset;
///
/// // Create character set from string
/// let charset: Charset = "@:".parse()?;
/// assert!(charset.contains(b'@'));
/// assert!(!charset.contains(b'/'));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Charset {
    /// Membership bits, one per ASCII character.
    bits: u128,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Charset {
    /// Empty character set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates a character set from the given bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII. When used to initialize a
    /// constant, this is reported at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::Charset;
    ///
    /// // Create character set from bytes
    /// let charset = Charset::from_bytes(b"/+");
    /// assert!(charset.contains(b'+'));
    /// ```
    #[must_use]
    pub const fn from_bytes(mut bytes: &[u8]) -> Self {
        let mut set = Self::EMPTY;
        while let [byte, rest @ ..] = bytes {
            set = set.add(*byte);
            bytes = rest;
        }
        set
    }

    /// Adds a byte to the character set.
    ///
    /// # Panics
    ///
    /// Panics if the byte is not ASCII.
    #[must_use]
    pub const fn add(self, byte: u8) -> Self {
        assert!(byte.is_ascii(), "character set must be ASCII");
        Self { bits: self.bits | (1u128 << byte) }
    }

    /// Returns the union of two character sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::charset::{Charset, SUB_DELIMS, UNRESERVED};
    ///
    /// // Create union of character sets
    /// let charset = UNRESERVED.union(SUB_DELIMS);
    /// assert!(charset.contains(b'a'));
    /// assert!(charset.contains(b'!'));
    /// ```
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self { bits: self.bits | other.bits }
    }

    /// Returns whether the character set contains the given byte.
    #[inline]
    #[must_use]
    pub const fn contains(&self, byte: u8) -> bool {
        byte < 128 && self.bits & (1u128 << byte) != 0
    }

    /// Returns whether the character set contains the given character.
    #[inline]
    #[must_use]
    pub fn contains_char(&self, ch: char) -> bool {
        u8::try_from(ch).is_ok_and(|byte| self.contains(byte))
    }

    /// Returns whether the character set is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the characters in the character set.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        (0..128u8)
            .filter(|&byte| self.contains(byte))
            .map(char::from)
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl FromStr for Charset {
    type Err = Error;

    /// Attempts to create a character set from a string.
    ///
    /// # Errors
    ///
    /// If the string contains a non-ASCII character, [`Error::NonAscii`] is
    /// returned, as character sets are limited to the ASCII range.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::{Charset, Error};
    ///
    /// // Create character set from string
    /// let res = "ä".parse::<Charset>();
    /// assert_eq!(res, Err(Error::NonAscii('ä')));
    /// ```
    fn from_str(value: &str) -> Result<Self> {
        value.chars().try_fold(Self::EMPTY, |set, ch| {
            u8::try_from(ch)
                .ok()
                .filter(u8::is_ascii)
                .map(|byte| set.add(byte))
                .ok_or(Error::NonAscii(ch))
        })
    }
}

// ----------------------------------------------------------------------------

impl fmt::Debug for Charset {
    /// Formats the character set for debugging.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.chars()).finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
