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

//! Encoder.

use log::trace;
use std::borrow::Cow;
use std::fmt;

mod builder;

pub use builder::Builder;

use super::charset::{Charset, QUERY_DELIMS, SUB_DELIMS, UNRESERVED};
use super::error::Result;
use super::escape;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Encoder.
///
/// Encoders convert arbitrary text into a percent-escaped ASCII representation
/// as used in URL components. Unreserved characters and sub-delimiters are
/// passed through literally, together with the configured `safe` and
/// `protected` characters. All other characters are encoded as UTF-8, and each
/// byte is written as an escape with uppercase hexadecimal digits.
///
/// When requoting is enabled, which is the default, existing escapes in the
/// input are normalized: escapes of characters that would be passed through
/// literally are collapsed, unless the character is `protected`, and all other
/// escapes are uppercased. A `%` that doesn't start a valid escape is escaped
/// as `%25`. In query string mode, spaces are encoded as `+`, which is why `+`
/// and the other query delimiters `&`, `=` and `;` are escaped.
///
/// Encoders are immutable after construction, and can be shared across
/// threads. If the input doesn't need to be changed, it is returned borrowed
/// without allocation, which is expected to be the common case.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use urlquote_codec::Encoder;
///
/// // Create encoder for paths
/// let encoder = Encoder::builder()
///     .safe("@:")?
///     .protected("/+")?
///     .build();
///
/// // Encode path
/// let path = encoder.encode("/path%2fto/my file");
/// assert_eq!(path, "/path%2Fto/my%20file");
/// # Ok(())
/// # }
/// ```
pub struct Encoder {
    /// Characters passed through literally.
    safe: Charset,
    /// Characters whose escapes are preserved.
    protected: Charset,
    /// Whether to use query string mode.
    query_string: bool,
    /// Whether to normalize existing escapes.
    requote: bool,
    /// Characters passed through literally, including all fixed classes.
    literal: Charset,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Encoder {
    /// Creates an encoder.
    ///
    /// This is a `const` function, so encoders can be created at compile time,
    /// which is how the [`preset`][] encoders are defined. For creating an
    /// encoder from strings, use [`Encoder::builder`].
    ///
    /// [`preset`]: crate::preset
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::{Charset, Encoder};
    ///
    /// // Create encoder for query strings
    /// let encoder = Encoder::new(Charset::EMPTY, Charset::EMPTY, true, true);
    /// assert_eq!(encoder.encode("a b+c"), "a+b%2Bc");
    /// ```
    #[must_use]
    pub const fn new(
        safe: Charset, protected: Charset, query_string: bool, requote: bool,
    ) -> Self {
        let mut literal =
            UNRESERVED.union(SUB_DELIMS).union(safe).union(protected);
        if !query_string {
            literal = literal.union(QUERY_DELIMS);
        }
        Self {
            safe,
            protected,
            query_string,
            requote,
            literal,
        }
    }

    /// Creates an encoder builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::Encoder;
    ///
    /// // Create encoder builder
    /// let mut builder = Encoder::builder();
    /// ```
    #[inline]
    #[must_use]
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Encodes the given text.
    ///
    /// The input is first scanned for the first byte that needs to be changed.
    /// If there is none, the input is returned as a borrowed value. Otherwise,
    /// the unchanged prefix is copied, and the remainder is encoded in runs
    /// between the characters that need special handling, which are spaces in
    /// query string mode and `%` when requoting.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::borrow::Cow;
    /// use urlquote_codec::Encoder;
    ///
    /// // Encode text
    /// let encoder = Encoder::default();
    /// assert_eq!(encoder.encode("%41%d1%84"), "A%D1%84");
    ///
    /// // Encode text that doesn't need to be changed
    /// let value = encoder.encode("abc%A0");
    /// assert!(matches!(value, Cow::Borrowed("abc%A0")));
    /// ```
    #[must_use]
    pub fn encode<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let bytes = input.as_bytes();
        let Some(start) = self.scan(bytes) else {
            return Cow::Borrowed(input);
        };

        // Spaces and percent signs only need special handling if they are not
        // configured to be passed through literally
        let plus = self.is_plus();
        let requote = self.is_requoting();

        // Escaping grows the output, so reserve some additional capacity
        let mut buffer = String::with_capacity(input.len() + input.len() / 2);
        buffer.push_str(&input[..start]);

        // Handle special characters, and encode all runs in between, which
        // is safe to slice, as special characters are always ASCII
        let mut i = start;
        while i < bytes.len() {
            match bytes[i] {
                b' ' if plus => {
                    buffer.push('+');
                    i += 1;
                }
                b'%' if requote => {
                    i += self.requote_at(&mut buffer, bytes, i);
                }
                _ => {
                    let end = bytes[i + 1..]
                        .iter()
                        .position(|&byte| {
                            (byte == b' ' && plus) || (byte == b'%' && requote)
                        })
                        .map_or(bytes.len(), |n| i + 1 + n);
                    self.escape_run(&mut buffer, &input[i..end]);
                    i = end;
                }
            }
        }

        // Return encoded text
        Cow::Owned(buffer)
    }

    /// Encodes the given text, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::Encoder;
    ///
    /// // Encode missing text
    /// let encoder = Encoder::default();
    /// assert_eq!(encoder.encode_opt(None), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn encode_opt<'a>(
        &self, input: Option<&'a str>,
    ) -> Option<Cow<'a, str>> {
        input.map(|input| self.encode(input))
    }

    /// Encodes the given UTF-16 text.
    ///
    /// Text originating from UTF-16 sources might contain unpaired surrogates,
    /// which can't be encoded as UTF-8. Those are dropped, and the remaining
    /// text is encoded, which makes sure that encoding is total.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::Encoder;
    ///
    /// // Encode text with an unpaired surrogate
    /// let encoder = Encoder::default();
    /// let value = encoder.encode_wide(&[0x61, 0xDCF4, 0x2F]);
    /// assert_eq!(value, "a%2F");
    /// ```
    #[must_use]
    pub fn encode_wide(&self, input: &[u16]) -> String {
        let mut value = String::with_capacity(input.len());
        for res in char::decode_utf16(input.iter().copied()) {
            match res {
                Ok(ch) => value.push(ch),
                Err(err) => trace!(
                    "dropping unpaired surrogate {:#06x}",
                    err.unpaired_surrogate()
                ),
            }
        }
        self.encode(&value).into_owned()
    }

    /// Returns the position of the first byte that needs to be changed.
    ///
    /// Escapes that are already normalized and wouldn't be collapsed are left
    /// untouched by requoting, so they don't count as changes.
    fn scan(&self, bytes: &[u8]) -> Option<usize> {
        let requote = self.is_requoting();
        let mut i = 0;
        while i < bytes.len() {
            let byte = bytes[i];
            if self.literal.contains(byte) {
                i += 1;
            } else if byte == b'%' && requote && self.is_stable(bytes, i) {
                i += 3;
            } else {
                return Some(i);
            }
        }
        None
    }

    /// Returns whether requoting leaves the escape at the given position as is.
    fn is_stable(&self, bytes: &[u8], at: usize) -> bool {
        escape::parse(bytes, at).is_some_and(|value| {
            escape::is_normalized(bytes, at)
                && (self.protected.contains(value)
                    || !self.literal.contains(value))
        })
    }

    /// Escapes the given run, copying literal characters in bulk.
    ///
    /// Non-ASCII characters are never literal, so every byte of them is
    /// escaped, which writes their UTF-8 encoding. Literal runs only consist
    /// of ASCII characters, so they always start on a character boundary.
    fn escape_run(&self, buffer: &mut String, run: &str) {
        let bytes = run.as_bytes();
        let mut start = 0;
        for (i, &byte) in bytes.iter().enumerate() {
            if !self.literal.contains(byte) {
                if start < i {
                    buffer.push_str(&run[start..i]);
                }
                escape::push_byte(buffer, byte);
                start = i + 1;
            }
        }
        buffer.push_str(&run[start..]);
    }

    /// Requotes the escape at the given position.
    ///
    /// Each escape is handled on its own, as all character sets are limited
    /// to ASCII, and non-ASCII code points are thus never collapsed. Returns
    /// the number of bytes consumed.
    fn requote_at(
        &self, buffer: &mut String, bytes: &[u8], at: usize,
    ) -> usize {
        match escape::parse(bytes, at) {
            Some(value) if self.protected.contains(value) => {
                escape::push_byte(buffer, value);
            }
            Some(value) if self.literal.contains(value) => {
                buffer.push(char::from(value));
            }
            Some(value) => escape::push_byte(buffer, value),
            None => {
                trace!("escaping lone percent sign at {at}");
                buffer.push_str("%25");
                return 1;
            }
        }
        3
    }
}

#[allow(clippy::must_use_candidate)]
impl Encoder {
    /// Returns the characters passed through literally.
    #[inline]
    pub fn safe(&self) -> Charset {
        self.safe
    }

    /// Returns the characters whose escapes are preserved.
    #[inline]
    pub fn protected(&self) -> Charset {
        self.protected
    }

    /// Returns whether the encoder uses query string mode.
    #[inline]
    pub fn query_string(&self) -> bool {
        self.query_string
    }

    /// Returns whether the encoder normalizes existing escapes.
    #[inline]
    pub fn requote(&self) -> bool {
        self.requote
    }

    /// Returns all characters passed through literally.
    #[inline]
    pub(crate) fn literal(&self) -> Charset {
        self.literal
    }

    /// Returns whether spaces are encoded as `+`.
    #[inline]
    pub(crate) fn is_plus(&self) -> bool {
        self.query_string && !self.literal.contains(b' ')
    }

    /// Returns whether `%` starts an escape to be requoted.
    #[inline]
    pub(crate) fn is_requoting(&self) -> bool {
        self.requote && !self.literal.contains(b'%')
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Clone for Encoder {
    /// Clones the encoder.
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.safe, self.protected, self.query_string, self.requote)
    }
}

// ----------------------------------------------------------------------------

impl Default for Encoder {
    /// Creates an encoder with the default configuration.
    ///
    /// The default encoder has no `safe` or `protected` characters, doesn't
    /// use query string mode, and normalizes existing escapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::Encoder;
    ///
    /// // Create encoder
    /// let encoder = Encoder::default();
    /// assert_eq!(encoder.encode("a b"), "a%20b");
    /// ```
    #[inline]
    fn default() -> Self {
        Self::new(Charset::EMPTY, Charset::EMPTY, false, true)
    }
}

// ----------------------------------------------------------------------------

impl fmt::Debug for Encoder {
    /// Formats the encoder for debugging.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("safe", &self.safe)
            .field("protected", &self.protected)
            .field("query_string", &self.query_string)
            .field("requote", &self.requote)
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::{Charset, Encoder};

    fn escape_run(encoder: &Encoder, run: &str) -> String {
        let mut buffer = String::new();
        encoder.escape_run(&mut buffer, run);
        buffer
    }

    #[test]
    fn escape_run_copies_literal_runs() {
        let encoder = Encoder::default();
        assert_eq!(escape_run(&encoder, ""), "");
        assert_eq!(escape_run(&encoder, "abc"), "abc");
        assert_eq!(escape_run(&encoder, "a b<c"), "a%20b%3Cc");
    }

    #[test]
    fn escape_run_escapes_every_byte_of_non_ascii() {
        let encoder = Encoder::default();
        assert_eq!(escape_run(&encoder, "éé"), "%C3%A9%C3%A9");
        assert_eq!(escape_run(&encoder, "aé"), "a%C3%A9");
        assert_eq!(escape_run(&encoder, "éa"), "%C3%A9a");
        assert_eq!(escape_run(&encoder, "🐍x漢"), "%F0%9F%90%8Dx%E6%BC%A2");
    }

    #[test]
    fn escape_run_uses_configured_literals() {
        let encoder =
            Encoder::new(Charset::from_bytes(b"<"), Charset::EMPTY, true, true);
        assert_eq!(escape_run(&encoder, "<&>"), "<%26%3E");
    }
}
