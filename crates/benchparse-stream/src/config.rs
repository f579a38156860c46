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

//! Decoder configuration.

use std::time::Duration;

/// Default read buffer size.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// What to do with a line that looks like a result but has a non-numeric
/// iteration count or value, such as `BenchmarkX 1 ten ns/op`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum InvalidResultPolicy {
    /// Stop decoding with [`StreamError::InvalidResult`](crate::StreamError::InvalidResult).
    #[default]
    Error,

    /// Drop the line like any other unrecognized line.
    Skip,
}

/// Configuration options for the stream decoder.
///
/// # Examples
///
/// ## Default Configuration
///
/// ```rust
/// use benchparse_stream::{DecoderConfig, InvalidResultPolicy};
///
/// let config = DecoderConfig::default();
/// assert_eq!(config.buffer_size, 64 * 1024);
/// assert_eq!(config.max_line_length, None);
/// assert_eq!(config.timeout, None);
/// assert_eq!(config.invalid_results, InvalidResultPolicy::Error);
/// ```
///
/// ## Permissive Decoding of Noisy Logs
///
/// ```rust
/// use benchparse_stream::{DecoderConfig, InvalidResultPolicy};
/// use std::time::Duration;
///
/// let config = DecoderConfig::builder()
///     .invalid_results(InvalidResultPolicy::Skip)
///     .timeout(Duration::from_secs(10))
///     .build();
/// assert_eq!(config.invalid_results, InvalidResultPolicy::Skip);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecoderConfig {
    /// Buffer size for reading input.
    ///
    /// Default: 64KB
    pub buffer_size: usize,

    /// Lines longer than this many bytes (terminator excluded) are skipped
    /// without being classified. The reader stops buffering a line once it
    /// passes the limit, so this also bounds memory per line.
    ///
    /// Default: None (every line is read whole)
    pub max_line_length: Option<usize>,

    /// Wall-clock budget for the whole decode.
    ///
    /// Checked once per line, together with cancellation; a slow reader can
    /// overrun it by the time one read takes.
    ///
    /// Default: None (no timeout)
    pub timeout: Option<Duration>,

    /// Handling of result lines with non-numeric content.
    ///
    /// Default: [`InvalidResultPolicy::Error`]
    pub invalid_results: InvalidResultPolicy,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            max_line_length: None,
            timeout: None,
            invalid_results: InvalidResultPolicy::default(),
        }
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> DecoderConfigBuilder {
        DecoderConfigBuilder::default()
    }
}

/// Fluent builder for [`DecoderConfig`].
#[derive(Debug, Clone, Default)]
pub struct DecoderConfigBuilder {
    config: DecoderConfig,
}

impl DecoderConfigBuilder {
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.config.buffer_size = size;
        self
    }

    pub fn max_line_length(mut self, length: usize) -> Self {
        self.config.max_line_length = Some(length);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn invalid_results(mut self, policy: InvalidResultPolicy) -> Self {
        self.config.invalid_results = policy;
        self
    }

    pub fn build(self) -> DecoderConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = DecoderConfig::new();
        assert_eq!(config.buffer_size, DEFAULT_BUFFER_SIZE);
        assert_eq!(config.max_line_length, None);
        assert!(config.timeout.is_none());
        assert_eq!(config.invalid_results, InvalidResultPolicy::Error);
    }

    #[test]
    fn test_builder_sets_every_field() {
        let config = DecoderConfig::builder()
            .buffer_size(1024)
            .max_line_length(80)
            .timeout(Duration::from_millis(5))
            .invalid_results(InvalidResultPolicy::Skip)
            .build();

        assert_eq!(
            config,
            DecoderConfig {
                buffer_size: 1024,
                max_line_length: Some(80),
                timeout: Some(Duration::from_millis(5)),
                invalid_results: InvalidResultPolicy::Skip,
            }
        );
    }

    #[test]
    fn test_builder_defaults_match_default() {
        assert_eq!(DecoderConfig::builder().build(), DecoderConfig::default());
    }
}
