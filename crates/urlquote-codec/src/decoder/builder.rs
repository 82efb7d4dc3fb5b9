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

//! Decoder builder.

use super::{Charset, Decoder, Result};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Decoder builder.
#[derive(Clone, Debug)]
pub struct Builder {
    /// Characters whose escapes are passed through.
    ignore: Charset,
    /// Characters that must never appear literally.
    unsafe_chars: Charset,
    /// Whether to use query string mode.
    query_string: bool,
    /// Whether to decode `+` as a space, overriding query string mode.
    plus: Option<bool>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Builder {
    /// Creates a decoder builder.
    ///
    /// Note that the canonical way to create a [`Decoder`] is to invoke the
    /// [`Decoder::builder`] method, which creates an instance of [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::Decoder;
    ///
    /// // Create decoder builder
    /// let mut builder = Decoder::builder();
    /// ```
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            ignore: Charset::EMPTY,
            unsafe_chars: Charset::EMPTY,
            query_string: false,
            plus: None,
        }
    }

    /// Sets the characters whose escapes are passed through.
    ///
    /// Escapes of ignored characters are neither decoded nor normalized, e.g.,
    /// ignoring `/` keeps `%2f` in paths, so it can't be confused with `/`.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::NonAscii`][], if the given characters are
    /// not limited to the ASCII range.
    ///
    /// [`Error::NonAscii`]: crate::Error::NonAscii
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use urlquote_codec::Decoder;
    ///
    /// // Create decoder with ignored characters
    /// let decoder = Decoder::builder().ignore("/%")?.build();
    /// assert_eq!(decoder.decode("a%2fb%25%20"), "a%2fb%25 ");
    /// # Ok(())
    /// # }
    /// ```
    pub fn ignore<S>(&mut self, ignore: S) -> Result<&mut Self>
    where
        S: AsRef<str>,
    {
        self.ignore = ignore.as_ref().parse()?;
        Ok(self)
    }

    /// Sets the characters that must never appear literally.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::NonAscii`][], if the given characters are
    /// not limited to the ASCII range.
    ///
    /// [`Error::NonAscii`]: crate::Error::NonAscii
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use urlquote_codec::Decoder;
    ///
    /// // Create decoder with unsafe characters
    /// let decoder = Decoder::builder().unsafe_chars("@")?.build();
    /// assert_eq!(decoder.decode("a@b%40c"), "a%40b%40c");
    /// # Ok(())
    /// # }
    /// ```
    pub fn unsafe_chars<S>(&mut self, unsafe_chars: S) -> Result<&mut Self>
    where
        S: AsRef<str>,
    {
        self.unsafe_chars = unsafe_chars.as_ref().parse()?;
        Ok(self)
    }

    /// Sets whether to use query string mode.
    #[inline]
    pub fn query_string(&mut self, query_string: bool) -> &mut Self {
        self.query_string = query_string;
        self
    }

    /// Sets whether to decode `+` as a space.
    ///
    /// By default, `+` is decoded as a space in query string mode only. This
    /// setting overrides the default in both directions.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::Decoder;
    ///
    /// // Create decoder that decodes `+` as a space
    /// let decoder = Decoder::builder().plus(true).build();
    /// assert_eq!(decoder.decode("a+b"), "a b");
    /// ```
    #[inline]
    pub fn plus(&mut self, plus: bool) -> &mut Self {
        self.plus = Some(plus);
        self
    }

    /// Builds the decoder.
    #[must_use]
    pub fn build(&self) -> Decoder {
        let Self { ignore, unsafe_chars, query_string, plus } = *self;
        Decoder::new(ignore, unsafe_chars, query_string, plus)
    }
}
