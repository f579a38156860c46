// Dweve Benchparse - Benchmark Report Format
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Benchmark Report Format
//!
//! Decode and re-encode the line-oriented text that benchmark harnesses such
//! as `go test -bench` print: `key: value` configuration lines interleaved
//! with `BenchmarkName iterations value unit...` result lines. Every other
//! line is ignored.
//!
//! # Quick Start
//!
//! ```rust
//! use benchparse::{decode_str, encode_to_string, UNIT_RUNTIME};
//!
//! let input = "commit: 7cd9055
//! BenchmarkDecode/text=digits/level=speed/size=1e4-8   100   154125 ns/op   64.88 MB/s
//! PASS
//! ";
//!
//! let run = decode_str(input).unwrap();
//! let result = &run.results[0];
//! assert_eq!(result.config_value("commit"), Some("7cd9055"));
//! assert_eq!(result.value_by_unit(UNIT_RUNTIME), Some(154125.0));
//! assert_eq!(result.name_as_key_value().get("level"), Some("speed"));
//!
//! // Encoding writes configuration only where it changes.
//! assert_eq!(
//!     encode_to_string(&run).unwrap(),
//!     "commit: 7cd9055\nBenchmarkDecode/text=digits/level=speed/size=1e4-8 100 154125 ns/op 64.88 MB/s\n"
//! );
//! ```
//!
//! # Crates
//!
//! - `benchparse-core`: data model, line grammars and the encoder
//! - `benchparse-stream`: streaming decoder, cancellation and async support
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the data model
//! - `async`: [`stream::AsyncStreamDecoder`] on tokio

mod error;

pub use error::{Error, Result};

// Re-export core types
pub use benchparse_core::{
    classify_line, parse_key_value_line, parse_result_line, strip_parallelism_suffix, transition,
    BenchmarkResult, EncodeError, EncodeResult, Encoder, KeyValue, KeyValueError, Line,
    OrderedMap, ResultLineError, Run, ValueUnitPair, BENCHMARK_PREFIX, UNIT_BYTES_ALLOC,
    UNIT_BYTES_PER_SECOND, UNIT_OBJECT_ALLOCS, UNIT_RUNTIME,
};

pub use benchparse_stream::{CancellationToken, Decoder, DecoderConfig, StreamError};

// Re-export streaming
pub mod stream {
    //! Streaming decoder and its configuration
    pub use benchparse_stream::{
        CancellationToken, Decoder, DecoderConfig, DecoderConfigBuilder, InvalidResultPolicy,
        LineReader, StreamDecoder, StreamError, StreamResult, DEFAULT_BUFFER_SIZE,
    };

    #[cfg(feature = "async")]
    pub use benchparse_stream::AsyncStreamDecoder;
}

use std::io::{Read, Write};

// Convenience functions at crate root

/// Decode every result from `reader` with the default configuration.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let run = benchparse::decode(Cursor::new("")).unwrap();
/// assert!(run.is_empty());
/// ```
#[inline]
pub fn decode<R: Read>(reader: R) -> Result<Run> {
    Ok(Decoder::new().decode(reader)?)
}

/// Decode every result from an in-memory report.
#[inline]
pub fn decode_str(input: &str) -> Result<Run> {
    decode(input.as_bytes())
}

/// Decode `reader`, pushing each result to `on_result` as soon as it is read.
///
/// Stops with a cancellation error once `cancel` fires; results already
/// pushed stay pushed.
///
/// ```rust
/// use benchparse::CancellationToken;
///
/// let mut total_ns = 0.0;
/// benchparse::stream(
///     &CancellationToken::new(),
///     "BenchmarkA 1 10 ns/op\nBenchmarkB 1 32 ns/op\n".as_bytes(),
///     |result| total_ns += result.value_by_unit("ns/op").unwrap_or(0.0),
/// )
/// .unwrap();
/// assert_eq!(total_ns, 42.0);
/// ```
#[inline]
pub fn stream<R, F>(cancel: &CancellationToken, reader: R, on_result: F) -> Result<()>
where
    R: Read,
    F: FnMut(BenchmarkResult),
{
    Ok(Decoder::new().stream(cancel, reader, on_result)?)
}

/// Write `run` to `writer`, emitting configuration lines only where the
/// configuration changes between consecutive results.
///
/// ```rust
/// use benchparse::{BenchmarkResult, Run, ValueUnitPair};
///
/// let run = Run::from(vec![BenchmarkResult {
///     name: "BenchmarkBob".to_string(),
///     iterations: 1,
///     values: vec![ValueUnitPair::new(345.0, "ns/op")],
///     configuration: None,
/// }]);
///
/// let mut out = Vec::new();
/// benchparse::encode(&mut out, &run).unwrap();
/// assert_eq!(out, b"BenchmarkBob 1 345 ns/op\n");
/// ```
#[inline]
pub fn encode<W: Write>(writer: &mut W, run: &Run) -> Result<()> {
    Ok(Encoder::new().encode(writer, run)?)
}

/// Encode `run` into a string.
#[inline]
pub fn encode_to_string(run: &Run) -> Result<String> {
    Ok(Encoder::new().encode_to_string(run)?)
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
