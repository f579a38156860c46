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

//! Error types for the line grammars and the encoder.
//!
//! Grammar failures are ordinary values: the stream decoder tries the
//! configuration grammar, then the result grammar, and only a
//! [`ResultLineError`] whose [`is_content_error`](ResultLineError::is_content_error)
//! is true can ever reach the caller.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Why a line is not a configuration line.
///
/// Checks run in declaration order; the first failing one is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyValueError {
    /// No `:` anywhere in the line.
    #[error("invalid keyvalue: key has no colon")]
    NoColon,

    /// Nothing before the first `:`.
    #[error("invalid keyvalue: empty key")]
    EmptyKey,

    /// First character of the key is not lower case.
    #[error("invalid keyvalue: expect lowercase start")]
    LowercaseRequired,

    /// Key contains whitespace or an upper case character.
    #[error("invalid keyvalue: key has spaces or upper case")]
    KeyHasSpacesOrUppercase,

    /// Value contains a newline.
    #[error("invalid keyvalue: value has newline")]
    ValueHasNewline,
}

/// Why a line is not a valid benchmark result line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResultLineError {
    /// Fewer than four whitespace-separated fields.
    #[error("invalid benchmark result: not enough fields (got {found}, need at least 4)")]
    NotEnoughFields { found: usize },

    /// Odd number of fields; values and units must come in pairs.
    #[error("invalid benchmark result: expect even number of fields (got {found})")]
    ExpectEvenFields { found: usize },

    /// Name does not start with `Benchmark`.
    #[error("invalid benchmark result: no prefix Benchmark")]
    NoPrefixBenchmark,

    /// Character after the `Benchmark` prefix is not upper case.
    #[error("invalid benchmark result: no uppercase after Benchmark")]
    UpperAfterBenchmarkRequired,

    /// Iteration count is not an integer.
    #[error("invalid iteration count {field:?}: {source}")]
    InvalidIterations {
        field: String,
        #[source]
        source: ParseIntError,
    },

    /// A measurement value is not a number.
    #[error("invalid value {field:?}: {source}")]
    InvalidValue {
        field: String,
        #[source]
        source: ParseFloatError,
    },

    /// A finite decimal literal too large to fit in an `f64`.
    #[error("value out of range {field:?}")]
    ValueOutOfRange { field: String },
}

impl ResultLineError {
    /// True when the line had the shape of a result line but a field failed
    /// to parse as a number.
    ///
    /// Shape errors mean "this is not a result line at all"; content errors
    /// mean "this is a broken result line".
    #[inline]
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidIterations { .. }
                | Self::InvalidValue { .. }
                | Self::ValueOutOfRange { .. }
        )
    }
}

/// Errors raised while writing a run back to text.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The underlying writer failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Formatting into an in-memory buffer failed.
    #[error("format error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;
