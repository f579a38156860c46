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

//! Diff-based encoder.
//!
//! Before each result line the encoder writes only the configuration lines
//! that changed since the previous result. For input that already uses single
//! spaces between fields, decoding and re-encoding reproduces it byte for byte.

use crate::error::EncodeResult;
use crate::keyvalue::write_config_line;
use crate::ordered_map::OrderedMap;
use crate::result::BenchmarkResult;
use crate::run::Run;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::io::Write;
use std::sync::Arc;

/// Initial capacity of the per-result line buffer.
const LINE_BUFFER_CAPACITY: usize = 256;

/// Configuration lines needed to move from `previous` to `next`.
///
/// - Same `Arc` (or both `None`): nothing.
/// - `previous` missing or empty: all of `next`.
/// - `next` missing: all of `previous`.
/// - Otherwise: each entry of `next`, in order, whose key is new or whose
///   value changed.
///
/// Keys dropped between the two maps cannot be expressed in the format and
/// are not reported.
pub fn transition<'a>(
    previous: Option<&'a Arc<OrderedMap>>,
    next: Option<&'a Arc<OrderedMap>>,
) -> Cow<'a, OrderedMap> {
    match (previous, next) {
        (None, None) => Cow::Owned(OrderedMap::new()),
        (Some(prev), Some(next)) if Arc::ptr_eq(prev, next) => Cow::Owned(OrderedMap::new()),
        (None, Some(next)) => Cow::Borrowed(next.as_ref()),
        (Some(prev), _) if prev.is_empty() => {
            next.map_or_else(|| Cow::Owned(OrderedMap::new()), |n| Cow::Borrowed(n.as_ref()))
        }
        (Some(prev), None) => Cow::Borrowed(prev.as_ref()),
        (Some(prev), Some(next)) => Cow::Owned(
            next.iter()
                .filter(|(key, value)| !prev.exists(key, value))
                .collect(),
        ),
    }
}

/// Writes a [`Run`] back to the line format.
///
/// # Examples
///
/// ```rust
/// use benchparse_core::{BenchmarkResult, Encoder, Run, ValueUnitPair};
///
/// let run = Run::from(vec![BenchmarkResult {
///     name: "BenchmarkBob".to_string(),
///     iterations: 1,
///     values: vec![ValueUnitPair::new(345.0, "ns/op")],
///     configuration: None,
/// }]);
///
/// let text = Encoder::new().encode_to_string(&run).unwrap();
/// assert_eq!(text, "BenchmarkBob 1 345 ns/op\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    buffer: String,
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(LINE_BUFFER_CAPACITY),
        }
    }

    /// Encode `run` into `writer`, one result (with its configuration diff)
    /// per write call.
    pub fn encode<W: Write>(&mut self, writer: &mut W, run: &Run) -> EncodeResult<()> {
        let mut previous: Option<&Arc<OrderedMap>> = None;
        for result in run {
            self.buffer.clear();
            write_result_group(&mut self.buffer, previous, result)?;
            writer.write_all(self.buffer.as_bytes())?;
            previous = result.configuration.as_ref();
        }
        writer.flush()?;
        Ok(())
    }

    /// Encode `run` into a new string.
    pub fn encode_to_string(&mut self, run: &Run) -> EncodeResult<String> {
        let mut out = String::new();
        let mut previous: Option<&Arc<OrderedMap>> = None;
        for result in run {
            write_result_group(&mut out, previous, result)?;
            previous = result.configuration.as_ref();
        }
        Ok(out)
    }
}

fn write_result_group<W: std::fmt::Write>(
    out: &mut W,
    previous: Option<&Arc<OrderedMap>>,
    result: &BenchmarkResult,
) -> std::fmt::Result {
    for (key, value) in transition(previous, result.configuration.as_ref()).iter() {
        write_config_line(out, key, value)?;
        out.write_char('\n')?;
    }
    writeln!(out, "{}", result)
}
