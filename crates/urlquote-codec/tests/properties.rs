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

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::thread;
use urlquote_codec::preset::{FRAGMENT_ENCODER, PATH_DECODER, PATH_ENCODER};
use urlquote_codec::{Decoder, Encoder};

mod fixtures;

use fixtures::{ascii_pairs, corpus, Error, Impl};

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[rstest]
fn decodes_encoded_text(
    #[values(Impl::Fast, Impl::Reference)] encode: Impl,
    #[values(Impl::Fast, Impl::Reference)] decode: Impl,
    #[values(false, true)] requote: bool,
) {
    let encoder = Encoder::builder().requote(requote).build();
    let decoder = Decoder::default();
    for text in ascii_pairs() {
        let value = encode.encode(&encoder, &text);
        assert_eq!(decode.decode(&decoder, &value), text);
    }
}

#[rstest]
#[case("+", "")]
#[case("@", "")]
#[case("!@#$", "")]
#[case("@", "%")]
#[case("+", "/%")]
fn decodes_encoded_text_without_unsafe(
    #[values(Impl::Fast, Impl::Reference)] imp: Impl,
    #[case] unsafe_chars: &str,
    #[case] ignore: &str,
) -> Result<(), Error> {
    let encoder = Encoder::default();
    let decoder = Decoder::builder()
        .unsafe_chars(unsafe_chars)?
        .ignore(ignore)?
        .build();
    let excluded =
        |ch: char| unsafe_chars.contains(ch) || ignore.contains(ch);
    for text in ascii_pairs() {
        if text.contains(excluded) {
            continue;
        }
        let value = imp.encode(&encoder, &text);
        assert_eq!(imp.decode(&decoder, &value), text);
    }
    Ok(())
}

#[rstest]
fn decodes_encoded_path(#[values(Impl::Fast, Impl::Reference)] imp: Impl) {
    for text in ascii_pairs() {
        if text.contains(['+', '/']) {
            continue;
        }
        let value = imp.encode(&Encoder::default(), &text);
        assert_eq!(imp.decode(&PATH_DECODER, &value), text);
    }
}

#[rstest]
#[case(Encoder::default())]
#[case(PATH_ENCODER.clone())]
#[case(FRAGMENT_ENCODER.clone())]
#[case(Encoder::builder().requote(false).build())]
fn requoting_is_idempotent(
    #[values(Impl::Fast, Impl::Reference)] imp: Impl,
    #[case] encoder: Encoder,
) {
    let requoter = Encoder::new(
        encoder.safe(),
        encoder.protected(),
        encoder.query_string(),
        true,
    );
    for text in corpus() {
        let once = imp.encode(&encoder, &text);
        assert_eq!(imp.encode(&requoter, &once), once, "{text:?}");
    }
}

#[test]
fn encodes_and_decodes_concurrently() {
    let corpus = corpus();
    let encoder = Encoder::default();
    let decoder = Decoder::default();
    let expected: Vec<_> = corpus
        .iter()
        .map(|text| decoder.decode(&encoder.encode(text)).into_owned())
        .collect();

    // Share encoder and decoder across threads
    let (corpus, encoder, decoder) = (&corpus, &encoder, &decoder);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move || {
                    corpus
                        .iter()
                        .map(|text| {
                            decoder.decode(&encoder.encode(text)).into_owned()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
