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

//! Line reader for the stream decoder.
//!
//! Reads raw bytes up to each `\n`, strips the terminator (and a preceding
//! `\r`), and numbers lines from 1. Invalid UTF-8 is replaced rather than
//! rejected: benchmark output is often mixed with arbitrary program output,
//! and a garbled noise line must not abort decoding.
//!
//! With a maximum line length set, a line is dropped as soon as it passes
//! the limit and the rest of it is consumed without being buffered.

use crate::error::{StreamError, StreamResult};
use std::io::{self, BufRead, BufReader, Read};
use tracing::trace;

/// Buffered line reader with line number tracking.
///
/// # Examples
///
/// ```rust
/// use benchparse_stream::LineReader;
/// use std::io::Cursor;
///
/// let input = "commit: 7cd9055\r\nBenchmarkA 1 2 ns/op";
/// let mut reader = LineReader::new(Cursor::new(input));
///
/// assert_eq!(reader.next_line().unwrap(), Some((1, "commit: 7cd9055".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((2, "BenchmarkA 1 2 ns/op".to_string())));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    bytes_read: u64,
    buffer: Vec<u8>,
    max_line_length: Option<usize>,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: R) -> Self {
        Self::from_buf_reader(BufReader::new(reader))
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self::from_buf_reader(BufReader::with_capacity(capacity, reader))
    }

    fn from_buf_reader(reader: BufReader<R>) -> Self {
        Self {
            reader,
            line_number: 0,
            bytes_read: 0,
            buffer: Vec::new(),
            max_line_length: None,
        }
    }

    /// Skip lines longer than `limit` bytes, terminator excluded.
    ///
    /// Skipped lines still advance the line number.
    pub fn with_max_line_length(mut self, limit: usize) -> Self {
        self.max_line_length = Some(limit);
        self
    }

    /// Number of the last line returned (0 before the first read).
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Total bytes consumed, including line terminators.
    #[inline]
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Read the next line.
    pub fn next_line(&mut self) -> StreamResult<Option<(usize, String)>> {
        loop {
            self.buffer.clear();

            let read = match self.max_line_length {
                None => self.reader.read_until(b'\n', &mut self.buffer).map(|n| (n, false)),
                Some(limit) => self.read_bounded(limit),
            };
            let (n, too_long) = read.map_err(StreamError::Io)?;
            if n == 0 {
                return Ok(None); // EOF
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

    fn read_bounded(&mut self, limit: usize) -> io::Result<(usize, bool)> {
        let mut bounded = LineLimit::new(limit);
        let mut total = 0;
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
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
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = StreamResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

/// Length of `raw` without its `\n` or `\r\n` terminator.
fn content_len(raw: &[u8]) -> usize {
    let mut end = raw.len();
    if end > 0 && raw[end - 1] == b'\n' {
        end -= 1;
        if end > 0 && raw[end - 1] == b'\r' {
            end -= 1;
        }
    }
    end
}

/// Strip the line terminator and convert to a string.
pub(crate) fn decode_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(&raw[..content_len(raw)]).into_owned()
}

/// Accumulates one line chunk by chunk, dropping it once it is too long.
///
/// Holds at most `limit + 2` bytes of the line plus one input chunk.
pub(crate) struct LineLimit {
    limit: usize,
    too_long: bool,
}

impl LineLimit {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            limit,
            too_long: false,
        }
    }

    /// Take bytes from `available` up to and including the first `\n`.
    ///
    /// Returns how many bytes were taken and whether the line is complete.
    pub(crate) fn push(&mut self, available: &[u8], buffer: &mut Vec<u8>) -> (usize, bool) {
        let (used, done) = match available.iter().position(|&b| b == b'\n') {
            Some(i) => (i + 1, true),
            None => (available.len(), false),
        };
        if !self.too_long {
            buffer.extend_from_slice(&available[..used]);
            // room for a `\r\n` terminator
            if buffer.len() > self.limit.saturating_add(2) {
                self.too_long = true;
                buffer.clear();
            }
        }
        (used, done)
    }

    /// Whether the finished line is over the limit.
    pub(crate) fn finish(mut self, buffer: &mut Vec<u8>) -> bool {
        if !self.too_long && content_len(buffer) > self.limit {
            self.too_long = true;
            buffer.clear();
        }
        self.too_long
    }
}
