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

//! Error types for stream decoding.
//!
//! Lines that match neither grammar are never errors. Decoding stops only for:
//!
//! - **I/O Errors**: reading the input failed
//! - **Invalid Results**: a line shaped like a result had a non-numeric
//!   iteration count or value (unless the decoder is configured to skip them)
//! - **Cancellation**: the caller's [`CancellationToken`](crate::CancellationToken) fired
//! - **Timeout**: the configured time budget ran out
//!
//! # Error Handling Examples
//!
//! ```rust
//! use benchparse_stream::{Decoder, StreamError};
//! use std::io::Cursor;
//!
//! let input = "BenchmarkA 1 10 ns/op\nBenchmarkB 1 ten ns/op\n";
//!
//! match Decoder::new().decode(Cursor::new(input)) {
//!     Err(StreamError::InvalidResult { line, source }) => {
//!         assert_eq!(line, 2);
//!         eprintln!("bad result at line {}: {}", line, source);
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use benchparse_core::ResultLineError;
use thiserror::Error;

/// Errors that can occur during stream decoding.
///
/// Use [`line()`](Self::line) to get the 1-based line number where one applies.
#[derive(Error, Debug)]
pub enum StreamError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A result line whose numeric content failed to parse.
    #[error("Invalid benchmark result at line {line}: {source}")]
    InvalidResult {
        line: usize,
        #[source]
        source: ResultLineError,
    },

    /// The cancellation token fired.
    #[error("Decoding cancelled after line {line}")]
    Cancelled { line: usize },

    /// Timeout exceeded during decoding.
    #[error("Decoding timeout: elapsed {elapsed:?} exceeded limit {limit:?}")]
    Timeout {
        elapsed: std::time::Duration,
        limit: std::time::Duration,
    },
}

impl StreamError {
    /// Create an invalid result error.
    #[inline]
    pub fn invalid_result(line: usize, source: ResultLineError) -> Self {
        Self::InvalidResult { line, source }
    }

    /// Get the line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidResult { line, .. } | Self::Cancelled { line } => Some(*line),
            _ => None,
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Result type for streaming operations.
pub type StreamResult<T> = Result<T, StreamError>;
