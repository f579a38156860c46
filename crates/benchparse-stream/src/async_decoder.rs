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

//! Async streaming decoder on tokio.
//!
//! Same line handling, configuration sharing and cancellation points as
//! [`StreamDecoder`](crate::StreamDecoder); only the reads await.

use crate::cancel::CancellationToken;
use crate::config::DecoderConfig;
use crate::error::StreamResult;
use crate::reader::{decode_line, LineLimit};
use crate::state::DecodeState;
use benchparse_core::{BenchmarkResult, OrderedMap, Run};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::trace;

/// Async decoder over any tokio [`AsyncRead`].
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// use benchparse_stream::AsyncStreamDecoder;
///
/// let input: &[u8] = b"commit: 7cd9055\nBenchmarkA 10 5 ns/op\n";
/// let mut decoder = AsyncStreamDecoder::new(input);
///
/// while let Some(result) = decoder.next_result().await? {
///     println!("{} {:?}", result.name, result.value_by_unit("ns/op"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct AsyncStreamDecoder<R: AsyncRead + Unpin> {
    reader: BufReader<R>,
    buffer: Vec<u8>,
    line_number: usize,
    bytes_read: u64,
    state: DecodeState,
    finished: bool,
}

impl<R: AsyncRead + Unpin> AsyncStreamDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, DecoderConfig::default())
    }

    pub fn with_config(reader: R, config: DecoderConfig) -> Self {
        Self {
            reader: BufReader::with_capacity(config.buffer_size, reader),
            buffer: Vec::new(),
            line_number: 0,
            bytes_read: 0,
            state: DecodeState::new(config),
            finished: false,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.state.set_cancellation(token);
        self
    }

    #[inline]
    pub fn config(&self) -> &DecoderConfig {
        self.state.config()
    }

    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    #[inline]
    pub fn configuration(&self) -> &Arc<OrderedMap> {
        self.state.current_configuration()
    }

    async fn next_line(&mut self) -> StreamResult<Option<(usize, String)>> {
        let max_line_length = self.state.config().max_line_length;
        loop {
            self.buffer.clear();
            let (n, too_long) = match max_line_length {
                None => (self.reader.read_until(b'\n', &mut self.buffer).await?, false),
                Some(limit) => self.read_bounded(limit).await?,
            };
            if n == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            self.bytes_read += n as u64;
            if too_long {
                trace!(
                    line = self.line_number,
                    bytes = n,
                    "skipping line over max_line_length"
                );
                continue;
            }
            return Ok(Some((self.line_number, decode_line(&self.buffer))));
        }
    }

    async fn read_bounded(&mut self, limit: usize) -> StreamResult<(usize, bool)> {
        let mut bounded = LineLimit::new(limit);
        let mut total = 0;
        loop {
            let available = self.reader.fill_buf().await?;
            if available.is_empty() {
                break;
            }
            let (used, done) = bounded.push(available, &mut self.buffer);
            self.reader.consume(used);
            total += used;
            if done {
                break;
            }
        }
        Ok((total, bounded.finish(&mut self.buffer)))
    }

    /// Decode up to and including the next result line.
    ///
    /// Returns `Ok(None)` at end of input and after any error.
    pub async fn next_result(&mut self) -> StreamResult<Option<BenchmarkResult>> {
        if self.finished {
            return Ok(None);
        }
        let outcome = self.advance().await;
        if !matches!(outcome, Ok(Some(_))) {
            self.finished = true;
        }
        outcome
    }

    async fn advance(&mut self) -> StreamResult<Option<BenchmarkResult>> {
        self.state.resume(self.line_number)?;

        while let Some((line_num, line)) = self.next_line().await? {
            if let Some(result) = self.state.process_line(line_num, &line)? {
                return Ok(Some(result));
            }
            self.state.check_interrupts(line_num)?;
        }

        self.state.finish(self.bytes_read);
        Ok(None)
    }

    pub async fn stream<F>(mut self, mut on_result: F) -> StreamResult<()>
    where
        F: FnMut(BenchmarkResult),
    {
        while let Some(result) = self.next_result().await? {
            on_result(result);
        }
        Ok(())
    }

    pub async fn decode(self) -> StreamResult<Run> {
        let mut run = Run::new();
        self.stream(|result| run.push(result)).await?;
        Ok(run)
    }
}
