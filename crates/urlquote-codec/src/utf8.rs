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

//! UTF-8 accumulator.

use std::str::from_utf8;
use tinyvec::ArrayVec;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Result of pushing a byte into a [`Utf8`] accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Bytes are a valid prefix, more continuation bytes are needed.
    Pending,
    /// Bytes form a complete code point, and the accumulator was cleared.
    Complete(char),
    /// Byte can't extend the pending bytes, or is not a valid lead byte.
    ///
    /// The byte is not consumed. If the accumulator holds pending bytes, the
    /// caller must take them, clear the accumulator, and push the byte again.
    Invalid,
}

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// UTF-8 accumulator.
///
/// This is an explicit finite-state machine, which assembles bytes recovered
/// from percent-escapes into code points. The state consists of the pending
/// bytes, the number of bytes expected for the current sequence, and the range
/// that the next byte must fall into. The range of the second byte depends on
/// the lead byte, which rules out overlong encodings, surrogates and values
/// beyond U+10FFFF, so every completed sequence is a valid code point.
///
/// At most four bytes are ever buffered, so pushing is constant time.
///
/// # Examples
///
/// ```
/// use urlquote_codec::utf8::{Step, Utf8};
///
/// // Assemble euro sign from bytes
/// let mut utf8 = Utf8::new();
/// assert_eq!(utf8.push(0xE2), Step::Pending);
/// assert_eq!(utf8.push(0x82), Step::Pending);
/// assert_eq!(utf8.push(0xAC), Step::Complete('€'));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Utf8 {
    /// Pending bytes.
    bytes: ArrayVec<[u8; 4]>,
    /// Number of bytes of the current sequence.
    expected: u8,
    /// Lower bound of the next byte.
    lower: u8,
    /// Upper bound of the next byte.
    upper: u8,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Utf8 {
    /// Creates a UTF-8 accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a byte into the accumulator.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::utf8::{Step, Utf8};
    ///
    /// // Interrupt incomplete sequence
    /// let mut utf8 = Utf8::new();
    /// assert_eq!(utf8.push(0xE2), Step::Pending);
    /// assert_eq!(utf8.push(b'a'), Step::Invalid);
    /// assert_eq!(utf8.as_bytes(), &[0xE2]);
    /// ```
    pub fn push(&mut self, byte: u8) -> Step {
        if self.bytes.is_empty() {
            return self.lead(byte);
        }

        // Continuation bytes must fall into the range determined by the lead
        // byte, or, from the third byte on, the regular continuation range
        if byte < self.lower || byte > self.upper {
            return Step::Invalid;
        }
        self.bytes.push(byte);
        self.lower = 0x80;
        self.upper = 0xBF;
        if self.bytes.len() < usize::from(self.expected) {
            return Step::Pending;
        }

        // All bytes were checked against their ranges, so decoding succeeds
        let step = match from_utf8(&self.bytes) {
            Ok(value) => {
                value.chars().next().map_or(Step::Invalid, Step::Complete)
            }
            Err(_) => Step::Invalid,
        };
        self.clear();
        step
    }

    /// Starts a new sequence with the given lead byte.
    fn lead(&mut self, byte: u8) -> Step {
        let (expected, lower, upper) = match byte {
            0x00..=0x7F => return Step::Complete(char::from(byte)),
            0xC2..=0xDF => (2, 0x80, 0xBF),
            0xE0 => (3, 0xA0, 0xBF),
            0xE1..=0xEC | 0xEE..=0xEF => (3, 0x80, 0xBF),
            0xED => (3, 0x80, 0x9F),
            0xF0 => (4, 0x90, 0xBF),
            0xF1..=0xF3 => (4, 0x80, 0xBF),
            0xF4 => (4, 0x80, 0x8F),
            _ => return Step::Invalid,
        };
        self.bytes.push(byte);
        self.expected = expected;
        self.lower = lower;
        self.upper = upper;
        Step::Pending
    }

    /// Clears the accumulator.
    #[inline]
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.expected = 0;
    }
}

#[allow(clippy::must_use_candidate)]
impl Utf8 {
    /// Returns the pending bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the number of pending bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns whether there are no pending bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::{Step, Utf8};

    fn feed(bytes: &[u8]) -> Vec<Step> {
        let mut utf8 = Utf8::new();
        bytes.iter().map(|&byte| utf8.push(byte)).collect()
    }

    #[test]
    fn ascii_completes_immediately() {
        let expected = [
            Step::Complete('\0'),
            Step::Complete('A'),
            Step::Complete('\x7f'),
        ];
        assert_eq!(feed(b"\x00A\x7f"), expected);
    }

    #[test]
    fn multibyte_boundaries() {
        let cases: [(&[u8], char); 7] = [
            (&[0xC2, 0x80], '\u{80}'),
            (&[0xDF, 0xBF], '\u{7ff}'),
            (&[0xE0, 0xA0, 0x80], '\u{800}'),
            (&[0xED, 0x9F, 0xBF], '\u{d7ff}'),
            (&[0xEE, 0x80, 0x80], '\u{e000}'),
            (&[0xF0, 0x90, 0x80, 0x80], '\u{10000}'),
            (&[0xF4, 0x8F, 0xBF, 0xBF], '\u{10ffff}'),
        ];
        for (bytes, ch) in cases {
            let mut steps = feed(bytes);
            assert_eq!(steps.pop(), Some(Step::Complete(ch)));
            assert!(steps.iter().all(|&step| step == Step::Pending));
        }
    }

    #[test]
    fn invalid_lead_bytes() {
        for byte in [0x80, 0xBF, 0xC0, 0xC1, 0xF5, 0xFF] {
            let mut utf8 = Utf8::new();
            assert_eq!(utf8.push(byte), Step::Invalid);
            assert!(utf8.is_empty());
        }
    }

    #[test]
    fn invalid_continuations_are_not_consumed() {
        // Overlong, surrogate and out of range sequences
        let cases = [(0xE0, 0x9F), (0xED, 0xA0), (0xF0, 0x8F), (0xF4, 0x90)];
        for (lead, next) in cases {
            let mut utf8 = Utf8::new();
            assert_eq!(utf8.push(lead), Step::Pending);
            assert_eq!(utf8.push(next), Step::Invalid);
            assert_eq!(utf8.as_bytes(), &[lead]);
        }
    }

    #[test]
    fn restart_after_clear() {
        let mut utf8 = Utf8::new();
        assert_eq!(utf8.push(0xE2), Step::Pending);
        assert_eq!(utf8.push(0x82), Step::Pending);
        assert_eq!(utf8.push(0xE2), Step::Invalid);
        assert_eq!(utf8.len(), 2);
        utf8.clear();
        assert_eq!(utf8.push(0xE2), Step::Pending);
        assert_eq!(utf8.push(0x82), Step::Pending);
        assert_eq!(utf8.push(0xAC), Step::Complete('€'));
        assert!(utf8.is_empty());
    }
}
