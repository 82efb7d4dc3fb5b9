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

//! Decoder.

use log::trace;
use std::borrow::Cow;

mod builder;

pub use builder::Builder;

use super::charset::{Charset, QUERY_DELIMS};
use super::error::Result;
use super::escape;
use super::utf8::{Step, Utf8};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Decoder.
///
/// Decoders reverse percent-encoding, turning escapes back into characters.
/// Consecutive escapes are assembled into UTF-8 sequences, and every escape
/// that isn't part of a valid sequence is passed through exactly as given,
/// including the case of its digits. A `%` that doesn't start a valid escape
/// is passed through as well, so decoding never fails on malformed input.
///
/// Characters in the `unsafe` set are escaped if found literally, and kept
/// escaped if decoded. The exception is a literal `+`, which is passed through
/// as is, but never decoded as a space if `+` is unsafe. Escapes
/// of characters in the `ignore` set are passed through undecoded. In query
/// string mode, `+` is decoded as a space, and escapes of the query delimiters
/// `+`, `&`, `=` and `;` are kept, as decoding them would change the structure
/// of the query string.
///
/// Like encoders, decoders are immutable after construction, and return the
/// input borrowed if nothing needs to be decoded.
///
/// # Examples
///
/// ```
/// use urlquote_codec::Decoder;
///
/// // Decode text
/// let decoder = Decoder::default();
/// assert_eq!(decoder.decode("abc%20def"), "abc def");
///
/// // Decode text with invalid UTF-8 sequence
/// assert_eq!(decoder.decode("%e2%82%e2%82%ac"), "%e2%82€");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoder {
    /// Characters whose escapes are passed through.
    ignore: Charset,
    /// Characters that must never appear literally.
    unsafe_chars: Charset,
    /// Whether to use query string mode.
    query_string: bool,
    /// Whether to decode `+` as a space, overriding query string mode.
    plus: Option<bool>,
}

/// Decoding state.
struct State<'a> {
    /// Input text.
    input: &'a str,
    /// Output buffer.
    buffer: String,
    /// Pending bytes of the current sequence.
    utf8: Utf8,
    /// Position of the first pending escape.
    start: usize,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Decoder {
    /// Creates a decoder.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::{Charset, Decoder};
    ///
    /// // Create decoder for query strings
    /// let decoder = Decoder::new(Charset::EMPTY, Charset::EMPTY, true, None);
    /// assert_eq!(decoder.decode("a+b%3D"), "a b%3D");
    /// ```
    #[must_use]
    pub const fn new(
        ignore: Charset, unsafe_chars: Charset, query_string: bool,
        plus: Option<bool>,
    ) -> Self {
        Self { ignore, unsafe_chars, query_string, plus }
    }

    /// Creates a decoder builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::Decoder;
    ///
    /// // Create decoder builder
    /// let mut builder = Decoder::builder();
    /// ```
    #[inline]
    #[must_use]
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Decodes the given text.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::Decoder;
    ///
    /// // Decode text with mixed case escapes
    /// let decoder = Decoder::default();
    /// assert_eq!(decoder.decode("%F0%9d%95%a6"), "𝕦");
    /// ```
    #[must_use]
    pub fn decode<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let bytes = input.as_bytes();
        let plus = self.is_plus();
        let Some(start) = bytes
            .iter()
            .position(|&byte| self.is_special(byte, plus))
        else {
            return Cow::Borrowed(input);
        };

        // Initialize state, copying the prefix that needs no decoding
        let mut state = State {
            input,
            buffer: String::with_capacity(input.len()),
            utf8: Utf8::new(),
            start,
        };
        state.buffer.push_str(&input[..start]);

        // Decode escapes and special characters, and copy all runs of literal
        // characters in between, which is safe to slice, as special characters
        // are always ASCII
        let mut i = start;
        while i < bytes.len() {
            let byte = bytes[i];
            if byte == b'%' {
                if let Some(value) = escape::parse(bytes, i) {
                    self.feed(&mut state, i, value);
                    i += 3;
                    continue;
                }
            }

            // Every other token interrupts the current sequence
            state.flush(i);
            match byte {
                b'%' => {
                    trace!("passing through lone percent sign at {i}");
                    state.buffer.push('%');
                    i += 1;
                }
                b'+' if plus => {
                    state.buffer.push(' ');
                    i += 1;
                }
                b'+' => {
                    state.buffer.push('+');
                    i += 1;
                }
                _ if self.unsafe_chars.contains(byte) => {
                    escape::push_byte(&mut state.buffer, byte);
                    i += 1;
                }
                _ => {
                    let end = bytes[i + 1..]
                        .iter()
                        .position(|&byte| self.is_special(byte, plus))
                        .map_or(bytes.len(), |n| i + 1 + n);
                    state.buffer.push_str(&input[i..end]);
                    i = end;
                }
            }
        }

        // Flush incomplete sequence at the end of the input
        state.flush(bytes.len());
        Cow::Owned(state.buffer)
    }

    /// Decodes the given text, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::Decoder;
    ///
    /// // Decode missing text
    /// let decoder = Decoder::default();
    /// assert_eq!(decoder.decode_opt(None), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn decode_opt<'a>(
        &self, input: Option<&'a str>,
    ) -> Option<Cow<'a, str>> {
        input.map(|input| self.decode(input))
    }

    /// Feeds the byte decoded from the escape at the given position.
    fn feed(&self, state: &mut State<'_>, at: usize, value: u8) {
        if state.utf8.is_empty() {
            state.start = at;
            if self.ignore.contains(value) {
                state.buffer.push_str(&state.input[at..at + 3]);
                return;
            }
        }
        match state.utf8.push(value) {
            Step::Pending => {}
            Step::Complete(ch) => {
                if self.is_kept(ch) {
                    escape::push_char(&mut state.buffer, ch);
                } else {
                    state.buffer.push(ch);
                }
            }

            // If the byte is invalid on its own, pass the escape through as is,
            // otherwise it interrupts the current sequence, so flush pending
            // escapes and start over, which happens at most once per byte
            Step::Invalid if state.utf8.is_empty() => {
                trace!("passing through invalid escape at {at}");
                state.buffer.push_str(&state.input[at..at + 3]);
            }
            Step::Invalid => {
                state.flush(at);
                self.feed(state, at, value);
            }
        }
    }

    /// Returns whether the given byte needs special handling.
    #[inline]
    fn is_special(&self, byte: u8, plus: bool) -> bool {
        match byte {
            b'%' => true,
            b'+' => plus,
            _ => self.unsafe_chars.contains(byte),
        }
    }

    /// Returns whether the given decoded character must be kept escaped.
    #[inline]
    pub(crate) fn is_kept(&self, ch: char) -> bool {
        self.unsafe_chars.contains_char(ch)
            || (self.query_string && QUERY_DELIMS.contains_char(ch))
    }

    /// Returns whether `+` is decoded as a space.
    #[inline]
    pub(crate) fn is_plus(&self) -> bool {
        let plus = match self.plus {
            Some(plus) => plus,
            None => self.query_string,
        };
        plus && !self.unsafe_chars.contains(b'+')
    }
}

#[allow(clippy::must_use_candidate)]
impl Decoder {
    /// Returns the characters whose escapes are passed through.
    #[inline]
    pub fn ignore(&self) -> Charset {
        self.ignore
    }

    /// Returns the characters that must never appear literally.
    #[inline]
    pub fn unsafe_chars(&self) -> Charset {
        self.unsafe_chars
    }

    /// Returns whether the decoder uses query string mode.
    #[inline]
    pub fn query_string(&self) -> bool {
        self.query_string
    }

    /// Returns whether `+` is decoded as a space, if explicitly configured.
    #[inline]
    pub fn plus(&self) -> Option<bool> {
        self.plus
    }
}

// ----------------------------------------------------------------------------

impl State<'_> {
    /// Flushes pending escapes up to the given position as given.
    fn flush(&mut self, at: usize) {
        if !self.utf8.is_empty() {
            trace!("passing through incomplete sequence at {}", self.start);
            self.buffer.push_str(&self.input[self.start..at]);
            self.utf8.clear();
        }
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Default for Decoder {
    /// Creates a decoder with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::Decoder;
    ///
    /// // Create decoder
    /// let decoder = Decoder::default();
    /// assert_eq!(decoder.decode("a+b"), "a+b");
    /// ```
    #[inline]
    fn default() -> Self {
        Self::new(Charset::EMPTY, Charset::EMPTY, false, None)
    }
}
