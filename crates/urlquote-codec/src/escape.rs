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

//! Percent-escape primitives.

use percent_encoding::percent_encode_byte;

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Returns the value of a hexadecimal digit, accepting both cases.
#[inline]
const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}

/// Parses the escape starting at the given position, which must hold a `%`.
///
/// Returns the decoded byte if the `%` is followed by exactly two hexadecimal
/// digits, and [`None`] if the input ends early or either digit is invalid.
#[inline]
pub(crate) fn parse(bytes: &[u8], at: usize) -> Option<u8> {
    debug_assert_eq!(bytes.get(at), Some(&b'%'));
    if let Some(&[b1, b2]) = bytes.get(at + 1..at + 3) {
        match (hex_value(b1), hex_value(b2)) {
            (Some(hi), Some(lo)) => Some((hi << 4) | lo),
            _ => None,
        }
    } else {
        None
    }
}

/// Returns whether the escape starting at the given position is normalized,
/// which means that both of its digits are uppercase.
#[inline]
pub(crate) fn is_normalized(bytes: &[u8], at: usize) -> bool {
    !bytes[at + 1].is_ascii_lowercase() && !bytes[at + 2].is_ascii_lowercase()
}

/// Appends a byte as an escape with uppercase hexadecimal digits.
#[inline]
pub(crate) fn push_byte(buffer: &mut String, byte: u8) {
    buffer.push_str(percent_encode_byte(byte));
}

/// Appends the UTF-8 encoding of a character as a sequence of escapes.
#[inline]
pub(crate) fn push_char(buffer: &mut String, ch: char) {
    let mut bytes = [0; 4];
    for &byte in ch.encode_utf8(&mut bytes).as_bytes() {
        push_byte(buffer, byte);
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
