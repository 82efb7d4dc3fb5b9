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

//! Reference implementation.
//!
//! The functions in this module implement encoding and decoding character by
//! character, without the pre-scan and bulk copying done by [`Encoder::encode`]
//! and [`Decoder::decode`]. When requoting, the encoder assembles consecutive
//! escapes into UTF-8 sequences before classifying them, instead of handling
//! each escape on its own. Both implementations must produce identical output
//! for all inputs, which is what the conformance tests check.

use super::decoder::Decoder;
use super::encoder::Encoder;
use super::escape;
use super::utf8::{Step, Utf8};

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Encodes the given text.
///
/// # Examples
///
/// ```
/// use urlquote_codec::{reference, Encoder};
///
/// // Encode text
/// let encoder = Encoder::default();
/// assert_eq!(reference::encode(&encoder, "%41%d1%84"), "A%D1%84");
/// ```
#[must_use]
pub fn encode(encoder: &Encoder, input: &str) -> String {
    let literal = encoder.literal();
    let mut buffer = String::with_capacity(input.len());
    let mut i = 0;
    while let Some(ch) = input[i..].chars().next() {
        if literal.contains_char(ch) {
            buffer.push(ch);
            i += 1;
        } else if ch == ' ' && encoder.query_string() {
            buffer.push('+');
            i += 1;
        } else if ch == '%' && encoder.requote() {
            i += requote(encoder, &mut buffer, &input[i..]);
        } else {
            escape::push_char(&mut buffer, ch);
            i += ch.len_utf8();
        }
    }
    buffer
}

/// Encodes the given UTF-16 text, dropping unpaired surrogates.
///
/// # Examples
///
/// ```
/// use urlquote_codec::{reference, Encoder};
///
/// // Encode text with an unpaired surrogate
/// let encoder = Encoder::default();
/// let value = reference::encode_wide(&encoder, &[0x61, 0xDCF4, 0x2F]);
/// assert_eq!(value, "a%2F");
/// ```
#[must_use]
pub fn encode_wide(encoder: &Encoder, input: &[u16]) -> String {
    let value: String = char::decode_utf16(input.iter().copied())
        .filter_map(Result::ok)
        .collect();
    encode(encoder, &value)
}

/// Requotes the escapes at the start of the given text.
///
/// Escapes are assembled into the shortest sequence forming a code point, or
/// until the sequence turns out to be invalid. Returns the number of bytes
/// consumed, which is always at least one.
fn requote(encoder: &Encoder, buffer: &mut String, input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut utf8 = Utf8::new();
    let mut at = 0;
    while bytes.get(at) == Some(&b'%') {
        let Some(value) = escape::parse(bytes, at) else {
            break;
        };
        match utf8.push(value) {
            Step::Pending => at += 3,
            Step::Complete(ch) => {
                if encoder.protected().contains_char(ch)
                    || !encoder.literal().contains_char(ch)
                {
                    escape::push_char(buffer, ch);
                } else {
                    buffer.push(ch);
                }
                return at + 3;
            }
            Step::Invalid if utf8.is_empty() => {
                escape::push_byte(buffer, value);
                return at + 3;
            }
            Step::Invalid => break,
        }
    }

    // A lone percent sign is escaped, pending bytes are written as escapes,
    // and scanning resumes right after them
    if utf8.is_empty() {
        buffer.push_str("%25");
        return 1;
    }
    for &byte in utf8.as_bytes() {
        escape::push_byte(buffer, byte);
    }
    at
}

/// Decodes the given text.
///
/// # Examples
///
/// ```
/// use urlquote_codec::{reference, Decoder};
///
/// // Decode text
/// let decoder = Decoder::default();
/// assert_eq!(reference::decode(&decoder, "%e2%82%e2%82%ac"), "%e2%82€");
/// ```
#[must_use]
pub fn decode(decoder: &Decoder, input: &str) -> String {
    let bytes = input.as_bytes();
    let plus = decoder.is_plus();
    let mut buffer = String::with_capacity(input.len());
    let mut utf8 = Utf8::new();
    let mut start = 0;
    let mut i = 0;
    while let Some(ch) = input[i..].chars().next() {
        if ch == '%' {
            if let Some(value) = escape::parse(bytes, i) {
                loop {
                    if utf8.is_empty() {
                        start = i;
                        if decoder.ignore().contains(value) {
                            buffer.push_str(&input[i..i + 3]);
                            break;
                        }
                    }
                    match utf8.push(value) {
                        Step::Pending => break,
                        Step::Complete(ch) => {
                            if decoder.is_kept(ch) {
                                escape::push_char(&mut buffer, ch);
                            } else {
                                buffer.push(ch);
                            }
                            break;
                        }
                        Step::Invalid if utf8.is_empty() => {
                            buffer.push_str(&input[i..i + 3]);
                            break;
                        }
                        Step::Invalid => {
                            buffer.push_str(&input[start..i]);
                            utf8.clear();
                        }
                    }
                }
                i += 3;
                continue;
            }
        }

        // Flush pending escapes as given
        if !utf8.is_empty() {
            buffer.push_str(&input[start..i]);
            utf8.clear();
        }
        if ch == '%' {
            buffer.push('%');
        } else if ch == '+' {
            buffer.push(if plus { ' ' } else { '+' });
        } else if decoder.unsafe_chars().contains_char(ch) {
            escape::push_char(&mut buffer, ch);
        } else {
            buffer.push(ch);
        }
        i += ch.len_utf8();
    }
    if !utf8.is_empty() {
        buffer.push_str(&input[start..]);
    }
    buffer
}
