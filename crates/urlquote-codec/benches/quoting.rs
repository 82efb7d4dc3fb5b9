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

//! Benchmarks for encoding and decoding.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use urlquote_codec::preset::{DECODER, QUERY_STRING_ENCODER};
use urlquote_codec::{reference, Charset, Decoder, Encoder};

// ----------------------------------------------------------------------------
// Statics
// ----------------------------------------------------------------------------

/// Encoder with `/` as the only safe character.
static SLASH_ENCODER: Encoder =
    Encoder::new(Charset::from_bytes(b"/"), Charset::EMPTY, false, true);

/// Encoder for paths, without requoting.
static PATH_ENCODER: Encoder = Encoder::new(
    Charset::from_bytes(b"@:"),
    Charset::from_bytes(b"/+"),
    false,
    false,
);

/// Query string parameter made of escapes.
const PCT_PARAMETER: &str = "&d=%25%2F%3F%3A%40%26%3B%3D%2B";

/// Query string with ten parameters.
const QUERY: &str = "a=1&b=2&c=3&d=4&e=5&f=6&g=7&h=8&i=9&j=0";

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Benchmarks both implementations of the given encoder.
fn bench_encode(
    c: &mut Criterion, name: &str, encoder: &Encoder, input: &str,
) {
    let mut group = c.benchmark_group(name);
    group.bench_function("fast", |b| {
        b.iter(|| encoder.encode(black_box(input)));
    });
    group.bench_function("reference", |b| {
        b.iter(|| reference::encode(encoder, black_box(input)));
    });
    group.finish();
}

/// Benchmarks both implementations of the given decoder.
fn bench_decode(
    c: &mut Criterion, name: &str, decoder: &Decoder, input: &str,
) {
    let mut group = c.benchmark_group(name);
    group.bench_function("fast", |b| {
        b.iter(|| decoder.decode(black_box(input)));
    });
    group.bench_function("reference", |b| {
        b.iter(|| reference::decode(decoder, black_box(input)));
    });
    group.finish();
}

/// Benchmarks encoding.
fn encode(c: &mut Criterion) {
    let long_path = "/path/to".repeat(100);
    let long_query = QUERY.repeat(25);
    let long_query_with_pct = format!("{long_query}{PCT_PARAMETER}");

    bench_encode(c, "encode/query_string", &QUERY_STRING_ENCODER, QUERY);
    bench_encode(c, "encode/ascii", &SLASH_ENCODER, "/path/to");
    bench_encode(c, "encode/long_path", &PATH_ENCODER, &long_path);
    bench_encode(c, "encode/pct", &Encoder::default(), "abc%0a");
    bench_encode(c, "encode/long_query", &QUERY_STRING_ENCODER, &long_query);
    bench_encode(
        c,
        "encode/long_query_with_pct",
        &QUERY_STRING_ENCODER,
        &long_query_with_pct,
    );
    bench_encode(c, "encode/utf8", &PATH_ENCODER, "/шлях/файл");
}

/// Benchmarks decoding.
fn decode(c: &mut Criterion) {
    let long_query = QUERY.repeat(25);
    let long_query_with_pct = format!("{long_query}{PCT_PARAMETER}");

    bench_decode(c, "decode/short", &DECODER, "/path/to");
    bench_decode(c, "decode/long_ascii", &DECODER, &long_query);
    bench_decode(c, "decode/long_pct", &DECODER, &long_query_with_pct);
}

// ----------------------------------------------------------------------------

criterion_group!(benches, encode, decode);
criterion_main!(benches);
