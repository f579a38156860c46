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

//! Per-decode state shared by the sync and async decoders.
//!
//! The current configuration is an `Arc<OrderedMap>`. Every result takes a
//! clone of the `Arc`, never of the map. A configuration line mutates through
//! [`Arc::make_mut`], which copies the map only when some result still holds a
//! reference to it. Results between two configuration lines therefore share
//! one map instance, and no result ever observes a later mutation.

use crate::cancel::CancellationToken;
use crate::config::{DecoderConfig, InvalidResultPolicy};
use crate::error::{StreamError, StreamResult};
use benchparse_core::{classify_line, BenchmarkResult, Line, OrderedMap};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace, warn};

#[derive(Debug)]
pub(crate) struct DecodeState {
    config: DecoderConfig,
    cancel: Option<CancellationToken>,
    current: Arc<OrderedMap>,
    start_time: Instant,
    /// A result was handed out; interrupts are checked before the next read.
    check_pending: bool,
    lines_processed: usize,
    results_emitted: usize,
}

impl DecodeState {
    pub(crate) fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            cancel: None,
            current: Arc::new(OrderedMap::new()),
            start_time: Instant::now(),
            check_pending: false,
            lines_processed: 0,
            results_emitted: 0,
        }
    }

    #[inline]
    pub(crate) fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub(crate) fn set_cancellation(&mut self, token: CancellationToken) {
        self.cancel = Some(token);
    }

    #[inline]
    pub(crate) fn current_configuration(&self) -> &Arc<OrderedMap> {
        &self.current
    }

    #[inline]
    pub(crate) fn results_emitted(&self) -> usize {
        self.results_emitted
    }

    /// Run the interrupt check owed for the last line, if its result was
    /// returned before the check could happen.
    pub(crate) fn resume(&mut self, last_line: usize) -> StreamResult<()> {
        if std::mem::take(&mut self.check_pending) {
            self.check_interrupts(last_line)?;
        }
        Ok(())
    }

    /// Classify and apply one line.
    ///
    /// Returns the result if the line was a result line. After a `Some`, the
    /// caller must deliver the result and call [`resume`](Self::resume)
    /// before reading further; otherwise it must call
    /// [`check_interrupts`](Self::check_interrupts).
    pub(crate) fn process_line(
        &mut self,
        line_num: usize,
        line: &str,
    ) -> StreamResult<Option<BenchmarkResult>> {
        self.lines_processed += 1;

        match classify_line(line) {
            Line::Configuration(kv) => {
                if Arc::strong_count(&self.current) > 1 {
                    debug!(
                        line = line_num,
                        entries = self.current.len(),
                        "configuration shared with emitted results, cloning before update"
                    );
                }
                trace!(line = line_num, key = %kv.key, value = %kv.value, "configuration line");
                Arc::make_mut(&mut self.current).add(kv.key, kv.value);
                Ok(None)
            }
            Line::Result(mut result) => {
                result.configuration = Some(Arc::clone(&self.current));
                self.results_emitted += 1;
                self.check_pending = true;
                Ok(Some(result))
            }
            Line::InvalidResult(source) => match self.config.invalid_results {
                InvalidResultPolicy::Error => Err(StreamError::invalid_result(line_num, source)),
                InvalidResultPolicy::Skip => {
                    debug!(line = line_num, error = %source, "skipping invalid result line");
                    Ok(None)
                }
            },
            Line::Unrecognized { key_value, result } => {
                trace!(
                    line = line_num,
                    as_configuration = %key_value,
                    as_result = %result,
                    "skipping unrecognized line"
                );
                Ok(None)
            }
        }
    }

    /// Fail if cancellation was requested or the time budget is spent.
    pub(crate) fn check_interrupts(&self, line_num: usize) -> StreamResult<()> {
        if let Some(token) = &self.cancel {
            if token.is_cancelled() {
                warn!(
                    line = line_num,
                    results = self.results_emitted,
                    "decode cancelled"
                );
                return Err(StreamError::Cancelled { line: line_num });
            }
        }
        if let Some(limit) = self.config.timeout {
            let elapsed = self.start_time.elapsed();
            if elapsed > limit {
                warn!(line = line_num, ?elapsed, ?limit, "decode timed out");
                return Err(StreamError::Timeout { elapsed, limit });
            }
        }
        Ok(())
    }

    pub(crate) fn finish(&self, bytes_read: u64) {
        debug!(
            lines = self.lines_processed,
            results = self.results_emitted,
            bytes = bytes_read,
            elapsed = ?self.start_time.elapsed(),
            "decode finished"
        );
    }
}
