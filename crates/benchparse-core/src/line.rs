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

//! Line classification.
//!
//! Each input line is tried against the configuration grammar first and the
//! result grammar second. Anything matching neither is noise.

use crate::error::{KeyValueError, ResultLineError};
use crate::keyvalue::{parse_key_value_line, KeyValue};
use crate::result::{parse_result_line, BenchmarkResult};

/// What a single input line turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// A `key: value` configuration line.
    Configuration(KeyValue),
    /// A well-formed result line, without configuration attached.
    Result(BenchmarkResult),
    /// A line shaped like a result whose iteration count or a value did not
    /// parse. The caller decides whether this is fatal.
    InvalidResult(ResultLineError),
    /// Neither grammar matched.
    Unrecognized {
        key_value: KeyValueError,
        result: ResultLineError,
    },
}

/// Classify one raw line (without its line terminator).
///
/// ```rust
/// use benchparse_core::{classify_line, Line};
///
/// assert!(matches!(classify_line("commit: 7cd9055"), Line::Configuration(_)));
/// assert!(matches!(classify_line("BenchmarkA 1 2 ns/op"), Line::Result(_)));
/// assert!(matches!(classify_line("PASS"), Line::Unrecognized { .. }));
/// ```
pub fn classify_line(line: &str) -> Line {
    let key_value = match parse_key_value_line(line) {
        Ok(kv) => return Line::Configuration(kv),
        Err(e) => e,
    };
    match parse_result_line(line) {
        Ok(result) => Line::Result(result),
        Err(e) if e.is_content_error() => Line::InvalidResult(e),
        Err(result) => Line::Unrecognized { key_value, result },
    }
}
