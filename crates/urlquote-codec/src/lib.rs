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

//! Percent-encoding codec for URL components.
//!
//! This crate provides the [`Encoder`] and [`Decoder`], which implement the
//! escaping rules of URL components, i.e., scheme, path, query and fragment.
//! Both are configured with character sets, which are immutable and limited
//! to ASCII, and both tolerate malformed input, which means that encoding and
//! decoding never fail.
//!
//! # Examples
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use urlquote_codec::{Decoder, Encoder};
//!
//! // Create encoder and decoder for query strings
//! let encoder = Encoder::builder().safe("?/:@")?.query_string(true).build();
//! let decoder = Decoder::builder().query_string(true).build();
//!
//! // Encode and decode text
//! let value = encoder.encode("rust & crates");
//! assert_eq!(value, "rust+%26+crates");
//! assert_eq!(decoder.decode(&value), "rust %26 crates");
//! # Ok(())
//! # }
//! ```

pub mod charset;
pub mod decoder;
pub mod encoder;
mod error;
mod escape;
pub mod preset;
pub mod reference;
pub mod utf8;

pub use charset::Charset;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, Result};
