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

//! Encoder builder.

use super::{Charset, Encoder, Result};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Encoder builder.
#[derive(Clone, Debug)]
pub struct Builder {
    /// Characters passed through literally.
    safe: Charset,
    /// Characters whose escapes are preserved.
    protected: Charset,
    /// Whether to use query string mode.
    query_string: bool,
    /// Whether to normalize existing escapes.
    requote: bool,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Builder {
    /// Creates an encoder builder.
    ///
    /// Note that the canonical way to create an [`Encoder`] is to invoke the
    /// [`Encoder::builder`] method, which creates an instance of [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::Encoder;
    ///
    /// // Create encoder builder
    /// let mut builder = Encoder::builder();
    /// ```
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            safe: Charset::EMPTY,
            protected: Charset::EMPTY,
            query_string: false,
            requote: true,
        }
    }

    /// Sets the characters passed through literally.
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
    /// use urlquote_codec::Encoder;
    ///
    /// // Create encoder with safe characters
    /// let encoder = Encoder::builder().safe("<>")?.build();
    /// assert_eq!(encoder.encode("<>"), "<>");
    /// # Ok(())
    /// # }
    /// ```
    pub fn safe<S>(&mut self, safe: S) -> Result<&mut Self>
    where
        S: AsRef<str>,
    {
        self.safe = safe.as_ref().parse()?;
        Ok(self)
    }

    /// Sets the characters whose escapes are preserved.
    ///
    /// Literal occurrences of protected characters are passed through, but
    /// their escapes are never collapsed, only normalized to uppercase.
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
    /// use urlquote_codec::Encoder;
    ///
    /// // Create encoder with protected characters
    /// let encoder = Encoder::builder().protected("/")?.build();
    /// assert_eq!(encoder.encode("/path%2fto/three"), "/path%2Fto/three");
    /// # Ok(())
    /// # }
    /// ```
    pub fn protected<S>(&mut self, protected: S) -> Result<&mut Self>
    where
        S: AsRef<str>,
    {
        self.protected = protected.as_ref().parse()?;
        Ok(self)
    }

    /// Sets whether to use query string mode.
    #[inline]
    pub fn query_string(&mut self, query_string: bool) -> &mut Self {
        self.query_string = query_string;
        self
    }

    /// Sets whether to normalize existing escapes.
    #[inline]
    pub fn requote(&mut self, requote: bool) -> &mut Self {
        self.requote = requote;
        self
    }

    /// Builds the encoder.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlquote_codec::Encoder;
    ///
    /// // Create encoder from builder
    /// let encoder = Encoder::builder().requote(false).build();
    /// assert_eq!(encoder.encode("%25"), "%2525");
    /// ```
    #[must_use]
    pub fn build(&self) -> Encoder {
        Encoder::new(self.safe, self.protected, self.query_string, self.requote)
    }
}
