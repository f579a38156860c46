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

//! Streaming decoder implementation.

use crate::cancel::CancellationToken;
use crate::config::DecoderConfig;
use crate::error::StreamResult;
use crate::reader::LineReader;
use crate::state::DecodeState;
use benchparse_core::{BenchmarkResult, OrderedMap, Run};
use std::io::Read;
use std::sync::Arc;

/// Pull-based decoder over any [`Read`].
///
/// Yields one [`BenchmarkResult`] per result line, each carrying the
/// configuration in effect when it was read. Configuration lines, blank
/// lines and every other line that matches neither grammar produce nothing.
///
/// # Iterator Interface
///
/// `StreamDecoder` implements `Iterator<Item = StreamResult<BenchmarkResult>>`.
/// After the first error the iterator is finished.
///
/// # Examples
///
/// ```rust
/// use benchparse_stream::StreamDecoder;
/// use std::io::Cursor;
/// use std::sync::Arc;
///
/// let input = "\
/// commit: 7cd9055
/// BenchmarkDecode/text=digits/level=speed/size=1e4-8   100   154125 ns/op  64.88 MB/s  40418 B/op  7 allocs/op
/// PASS
/// BenchmarkEncode-8   200   90000 ns/op
/// ";
///
/// let results: Vec<_> = StreamDecoder::new(Cursor::new(input))
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].values.len(), 4);
/// assert_eq!(results[1].config_value("commit"), Some("7cd9055"));
///
/// let a = results[0].configuration.as_ref().unwrap();
/// let b = results[1].configuration.as_ref().unwrap();
/// assert!(Arc::ptr_eq(a, b));
/// ```
pub struct StreamDecoder<R: Read> {
    reader: LineReader<R>,
    state: DecodeState,
    finished: bool,
}

impl<R: Read> StreamDecoder<R> {
    /// Create a decoder with default configuration.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, DecoderConfig::default())
    }

    pub fn with_config(reader: R, config: DecoderConfig) -> Self {
        let mut lines = LineReader::with_capacity(reader, config.buffer_size);
        if let Some(limit) = config.max_line_length {
            lines = lines.with_max_line_length(limit);
        }
        Self {
            reader: lines,
            state: DecodeState::new(config),
            finished: false,
        }
    }

    /// Stop with [`StreamError::Cancelled`](crate::StreamError::Cancelled)
    /// once `token` fires. Checked after every line.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.state.set_cancellation(token);
        self
    }

    #[inline]
    pub fn config(&self) -> &DecoderConfig {
        self.state.config()
    }

    /// Number of the last line read.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.reader.line_number()
    }

    /// Configuration accumulated so far.
    ///
    /// Includes configuration lines read after the last returned result.
    #[inline]
    pub fn configuration(&self) -> &Arc<OrderedMap> {
        self.state.current_configuration()
    }

    /// Decode up to and including the next result line.
    ///
    /// Returns `Ok(None)` at end of input and after any error.
    pub fn next_result(&mut self) -> StreamResult<Option<BenchmarkResult>> {
        if self.finished {
            return Ok(None);
        }
        let outcome = self.advance();
        if !matches!(outcome, Ok(Some(_))) {
            self.finished = true;
        }
        outcome
    }

    fn advance(&mut self) -> StreamResult<Option<BenchmarkResult>> {
        self.state.resume(self.reader.line_number())?;

        while let Some((line_num, line)) = self.reader.next_line()? {
            if let Some(result) = self.state.process_line(line_num, &line)? {
                return Ok(Some(result));
            }
            self.state.check_interrupts(line_num)?;
        }

        self.state.finish(self.reader.bytes_read());
        Ok(None)
    }

    /// Push every result to `on_result` in input order.
    ///
    /// Results handed over before an error stay handed over.
    pub fn stream<F>(mut self, mut on_result: F) -> StreamResult<()>
    where
        F: FnMut(BenchmarkResult),
    {
        while let Some(result) = self.next_result()? {
            on_result(result);
        }
        Ok(())
    }

    /// Collect every result into a [`Run`].
    pub fn decode(self) -> StreamResult<Run> {
        let mut run = Run::new();
        self.stream(|result| run.push(result))?;
        Ok(run)
    }
}

impl<R: Read> Iterator for StreamDecoder<R> {
    type Item = StreamResult<BenchmarkResult>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_result().transpose()
    }
}

/// Reusable decoder settings.
///
/// Holds a [`DecoderConfig`] and builds a fresh [`StreamDecoder`] per input,
/// so one `Decoder` can decode many reports.
///
/// ```rust
/// use benchparse_stream::{CancellationToken, Decoder};
/// use std::io::Cursor;
///
/// let decoder = Decoder::new();
/// let run = decoder.decode(Cursor::new("BenchmarkA 10 5 ns/op\n")).unwrap();
/// assert_eq!(run.len(), 1);
///
/// let mut names = Vec::new();
/// decoder
///     .stream(&CancellationToken::new(), Cursor::new("BenchmarkB 1 1 ns/op\n"), |r| {
///         names.push(r.name)
///     })
///     .unwrap();
/// assert_eq!(names, ["BenchmarkB"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Start a pull-based decode of `reader`.
    pub fn reader<R: Read>(&self, reader: R) -> StreamDecoder<R> {
        StreamDecoder::with_config(reader, self.config.clone())
    }

    /// Decode `reader` to completion.
    pub fn decode<R: Read>(&self, reader: R) -> StreamResult<Run> {
        self.reader(reader).decode()
    }

    /// Decode `reader`, pushing each result to `on_result` as it is read.
    ///
    /// Stops with [`StreamError::Cancelled`](crate::StreamError::Cancelled)
    /// once `cancel` fires.
    pub fn stream<R, F>(
        &self,
        cancel: &CancellationToken,
        reader: R,
        on_result: F,
    ) -> StreamResult<()>
    where
        R: Read,
        F: FnMut(BenchmarkResult),
    {
        self.reader(reader)
            .with_cancellation(cancel.clone())
            .stream(on_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InvalidResultPolicy;
    use crate::error::StreamError;
    use std::io::Cursor;

    fn decode(input: &str) -> StreamResult<Run> {
        Decoder::new().decode(Cursor::new(input))
    }

    // ==================== Basic decoding ====================

    #[test]
    fn test_empty_input() {
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn test_single_result() {
        let run = decode("BenchmarkA 10 5 ns/op").unwrap();
        assert_eq!(run.len(), 1);
        let result = &run.results[0];
        assert_eq!(result.name, "BenchmarkA");
        assert_eq!(result.iterations, 10);
        assert_eq!(result.value_by_unit("ns/op"), Some(5.0));
    }

    #[test]
    fn test_configuration_only() {
        let mut decoder = StreamDecoder::new(Cursor::new("a: 1\nb: 2\n"));
        assert!(decoder.next_result().unwrap().is_none());
        assert_eq!(decoder.configuration().len(), 2);
        assert_eq!(decoder.line_number(), 2);
    }

    #[test]
    fn test_results_in_input_order() {
        let run =
            decode("BenchmarkC 1 1 ns/op\nBenchmarkA 1 1 ns/op\nBenchmarkB 1 1 ns/op\n").unwrap();
        let names: Vec<_> = run.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["BenchmarkC", "BenchmarkA", "BenchmarkB"]);
    }

    // ==================== Error handling ====================

    #[test]
    fn test_invalid_result_stops_iteration() {
        let mut decoder = StreamDecoder::new(Cursor::new(
            "BenchmarkA 1 1 ns/op\nBenchmarkB one 1 ns/op\nBenchmarkC 1 1 ns/op\n",
        ));
        assert!(decoder.next().unwrap().is_ok());
        let err = decoder.next().unwrap().unwrap_err();
        assert!(matches!(err, StreamError::InvalidResult { line: 2, .. }));
        assert!(decoder.next().is_none());
    }

    #[test]
    fn test_skip_policy_continues() {
        let decoder = Decoder::with_config(
            DecoderConfig::builder()
                .invalid_results(InvalidResultPolicy::Skip)
                .build(),
        );
        let run = decoder
            .decode(Cursor::new(
                "BenchmarkA 1 1 ns/op\nBenchmarkB one 1 ns/op\nBenchmarkC 1 1 ns/op\n",
            ))
            .unwrap();
        assert_eq!(run.len(), 2);
    }

    // ==================== Cancellation ====================

    #[test]
    fn test_cancel_between_results() {
        let token = CancellationToken::new();
        let mut decoder = StreamDecoder::new(Cursor::new(
            "BenchmarkA 1 1 ns/op\nBenchmarkB 1 1 ns/op\n",
        ))
        .with_cancellation(token.clone());

        assert!(decoder.next_result().unwrap().is_some());
        token.cancel();
        let err = decoder.next_result().unwrap_err();
        assert!(matches!(err, StreamError::Cancelled { line: 1 }));
        assert!(decoder.next_result().unwrap().is_none());
    }

    #[test]
    fn test_cancel_inside_callback() {
        let token = CancellationToken::new();
        let mut seen = 0;
        let err = Decoder::new()
            .stream(
                &token,
                Cursor::new("BenchmarkA 1 1 ns/op\nBenchmarkB 1 1 ns/op\nBenchmarkC 1 1 ns/op\n"),
                |_| {
                    seen += 1;
                    token.cancel();
                },
            )
            .unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_cancelled_token_on_empty_input() {
        let token = CancellationToken::new();
        token.cancel();
        let mut count = 0;
        Decoder::new()
            .stream(&token, Cursor::new(""), |_| count += 1)
            .unwrap();
        assert_eq!(count, 0);
    }
}
