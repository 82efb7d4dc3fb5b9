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

#![allow(dead_code)]

use urlquote_codec::{reference, Decoder, Encoder};

/// Error type used by tests
pub type Error = Box<dyn std::error::Error>;

/// Implementation under test.
///
/// Every behavioral test runs against both implementations, which must be
/// indistinguishable from the outside.
#[derive(Clone, Copy, Debug)]
pub enum Impl {
    /// Accelerated implementation of [`Encoder`] and [`Decoder`].
    Fast,
    /// Character by character implementation in [`reference`].
    Reference,
}

impl Impl {
    /// Encodes the given text.
    pub fn encode(self, encoder: &Encoder, input: &str) -> String {
        match self {
            Impl::Fast => encoder.encode(input).into_owned(),
            Impl::Reference => reference::encode(encoder, input),
        }
    }

    /// Encodes the given UTF-16 text.
    pub fn encode_wide(self, encoder: &Encoder, input: &[u16]) -> String {
        match self {
            Impl::Fast => encoder.encode_wide(input),
            Impl::Reference => reference::encode_wide(encoder, input),
        }
    }

    /// Decodes the given text.
    pub fn decode(self, decoder: &Decoder, input: &str) -> String {
        match self {
            Impl::Fast => decoder.decode(input).into_owned(),
            Impl::Reference => reference::decode(decoder, input),
        }
    }
}

/// Escapes a character below 256 with uppercase digits.
pub fn hexescape(ch: char) -> String {
    format!("%{:02X}", u32::from(ch))
}

/// Characters that are escaped by default, except for the space.
pub fn should_quote() -> impl Iterator<Item = char> {
    (0..32u8)
        .map(char::from)
        .chain("<>#\"{}|\\^[]`".chars())
        .chain(['\x7f'])
}

/// Tokens that are combined into inputs, covering literal characters,
/// delimiters, broken and valid escapes, and partial UTF-8 sequences.
pub static TOKENS: &[&str] = &[
    "a", "2", "f", " ", "+", "/", "@", "=", "%", "%41", "%2b", "%2F", "%25",
    "%e2", "%82", "%AC", "%C3", "%f8", "é", "€",
];

/// Returns all sequences of up to three tokens.
pub fn corpus() -> Vec<String> {
    let mut corpus = vec![String::new()];
    for a in TOKENS {
        corpus.push((*a).to_string());
        for b in TOKENS {
            corpus.push(format!("{a}{b}"));
            for c in TOKENS {
                corpus.push(format!("{a}{b}{c}"));
            }
        }
    }
    corpus
}

/// Returns all strings of up to two ASCII characters, excluding `%`.
pub fn ascii_pairs() -> Vec<String> {
    let chars = (0..128u8).map(char::from).filter(|&ch| ch != '%');
    let mut pairs = vec![String::new()];
    for a in chars.clone() {
        pairs.push(a.to_string());
        for b in chars.clone() {
            pairs.push(format!("{a}{b}"));
        }
    }
    pairs
}
