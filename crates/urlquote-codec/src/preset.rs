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

//! Presets for URL components.
//!
//! All presets are computed at compile time.

use super::charset::Charset;
use super::decoder::Decoder;
use super::encoder::Encoder;

// ----------------------------------------------------------------------------
// Statics
// ----------------------------------------------------------------------------

/// Encoder for paths.
///
/// Escaped slashes and plus signs are preserved, so `%2F` inside a segment
/// is never confused with a segment separator.
///
/// # Examples
///
/// ```
/// use urlquote_codec::preset::PATH_ENCODER;
///
/// // Encode path
/// let path = PATH_ENCODER.encode("/test/x+y%2bz/:@");
/// assert_eq!(path, "/test/x+y%2Bz/:@");
/// ```
pub static PATH_ENCODER: Encoder = Encoder::new(
    Charset::from_bytes(b"@:"),
    Charset::from_bytes(b"/+"),
    false,
    true,
);

/// Encoder for query strings, escaping every `%`.
///
/// # Examples
///
/// ```
/// use urlquote_codec::preset::QUERY_ENCODER;
///
/// // Encode query string value
/// let value = QUERY_ENCODER.encode("50% off & more");
/// assert_eq!(value, "50%25+off+%26+more");
/// ```
pub static QUERY_ENCODER: Encoder =
    Encoder::new(Charset::from_bytes(b"?/:@"), Charset::EMPTY, true, false);

/// Encoder for query strings, normalizing existing escapes.
///
/// # Examples
///
/// ```
/// use urlquote_codec::preset::QUERY_REQUOTER;
///
/// // Normalize query string value
/// let value = QUERY_REQUOTER.encode("next=http%3a//example.com/");
/// assert_eq!(value, "next%3Dhttp://example.com/");
/// ```
pub static QUERY_REQUOTER: Encoder =
    Encoder::new(Charset::from_bytes(b"?/:@"), Charset::EMPTY, true, true);

/// Encoder for whole query strings, escaping every `%`.
///
/// Unlike [`QUERY_ENCODER`], which encodes single keys and values, the query
/// delimiters `=`, `+`, `&` and `;` are passed through, so the structure of
/// the query string is preserved.
///
/// # Examples
///
/// ```
/// use urlquote_codec::preset::QUERY_STRING_ENCODER;
///
/// // Encode query string
/// let query = QUERY_STRING_ENCODER.encode("q=rust lang&page=2;50%");
/// assert_eq!(query, "q=rust+lang&page=2;50%25");
/// ```
pub static QUERY_STRING_ENCODER: Encoder = Encoder::new(
    Charset::from_bytes(b"?/:@"),
    Charset::from_bytes(b"=+&;"),
    true,
    false,
);

/// Encoder for fragments.
pub static FRAGMENT_ENCODER: Encoder =
    Encoder::new(Charset::from_bytes(b"?/:@"), Charset::EMPTY, false, true);

/// Decoder with the default configuration.
pub static DECODER: Decoder =
    Decoder::new(Charset::EMPTY, Charset::EMPTY, false, None);

/// Decoder for paths.
///
/// Escapes of `/` and `%` are kept, so decoding doesn't change the structure
/// of the path, and `%2B` is never confused with a literal `+`.
///
/// # Examples
///
/// ```
/// use urlquote_codec::preset::PATH_DECODER;
///
/// // Decode path
/// let path = PATH_DECODER.decode("/a%2Fb/50%25/c%20d");
/// assert_eq!(path, "/a%2Fb/50%25/c d");
/// ```
pub static PATH_DECODER: Decoder = Decoder::new(
    Charset::from_bytes(b"/%"),
    Charset::from_bytes(b"+"),
    false,
    None,
);

/// Decoder for query strings.
pub static QUERY_DECODER: Decoder =
    Decoder::new(Charset::EMPTY, Charset::EMPTY, true, None);

/// Decoder that decodes `+` as a space outside of query strings.
pub static PLUS_DECODER: Decoder =
    Decoder::new(Charset::EMPTY, Charset::EMPTY, false, Some(true));
