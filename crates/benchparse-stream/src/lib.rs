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

//! Streaming Benchmark Report Decoder
//!
//! Reads benchmark output line by line and yields one result at a time.
//! Memory use is bounded by the longest line plus the configuration state,
//! so multi-GB logs decode in constant space.
//!
//! # Features
//!
//! - **Iterator-based**: [`StreamDecoder`] implements `Iterator`
//! - **Callback-based**: [`Decoder::stream`] pushes results to a closure
//! - **Shared Configuration**: consecutive results share one `Arc<OrderedMap>`;
//!   the map is copied only when a configuration line follows a result that
//!   still holds it
//! - **Cancellation**: [`CancellationToken`] checked after every line
//! - **Timeout Protection**: optional wall-clock budget in [`DecoderConfig`]
//! - **Async Support**: [`AsyncStreamDecoder`] on tokio (feature `async`)
//!
//! # Synchronous API
//!
//! ```rust,no_run
//! use benchparse_stream::StreamDecoder;
//! use std::fs::File;
//!
//! let file = File::open("bench.txt").unwrap();
//!
//! for result in StreamDecoder::new(file) {
//!     match result {
//!         Ok(result) => println!("{} {:?}", result.name, result.value_by_unit("ns/op")),
//!         Err(e) => {
//!             eprintln!("Error: {}", e);
//!             break;
//!         }
//!     }
//! }
//! ```
//!
//! # Asynchronous API (feature = "async")
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use benchparse_stream::AsyncStreamDecoder;
//!
//! let input: &[u8] = b"BenchmarkA 10 5 ns/op\n";
//! let run = AsyncStreamDecoder::new(input).decode().await?;
//! assert_eq!(run.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Timeout Protection for Untrusted Input
//!
//! ```rust
//! use benchparse_stream::{Decoder, DecoderConfig, InvalidResultPolicy};
//! use std::io::Cursor;
//! use std::time::Duration;
//!
//! let config = DecoderConfig::builder()
//!     .timeout(Duration::from_secs(10))
//!     .invalid_results(InvalidResultPolicy::Skip)
//!     .build();
//!
//! let run = Decoder::with_config(config)
//!     .decode(Cursor::new("BenchmarkA 1 ten ns/op\nBenchmarkB 1 10 ns/op\n"))
//!     .unwrap();
//! assert_eq!(run.len(), 1);
//! ```

mod cancel;
mod config;
mod decoder;
mod error;
mod reader;
mod state;

#[cfg(feature = "async")]
mod async_decoder;

pub use cancel::CancellationToken;
pub use config::{
    DecoderConfig, DecoderConfigBuilder, InvalidResultPolicy, DEFAULT_BUFFER_SIZE,
};
pub use decoder::{Decoder, StreamDecoder};
pub use error::{StreamError, StreamResult};
pub use reader::LineReader;

#[cfg(feature = "async")]
pub use async_decoder::AsyncStreamDecoder;

/// Re-export core types for convenience.
pub use benchparse_core::{BenchmarkResult, OrderedMap, Run, ValueUnitPair};
