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

//! Async decoder tests for benchparse-stream

#![cfg(feature = "async")]

use benchparse_stream::{
    AsyncStreamDecoder, CancellationToken, DecoderConfig, InvalidResultPolicy, StreamDecoder,
    StreamError,
};
use benchparse_test::fixtures::{self, errors};
use std::io::Cursor;
use std::sync::Arc;

// ==================== Parity with the sync decoder ====================

#[tokio::test]
async fn test_go_report() {
    let run = AsyncStreamDecoder::new(fixtures::GO_REPORT.as_bytes())
        .decode()
        .await
        .unwrap();

    assert_eq!(run.len(), fixtures::GO_REPORT_RESULTS);
    let config = run.results[0].configuration.as_ref().unwrap();
    assert_eq!(config.len(), fixtures::GO_REPORT_CONFIG_KEYS);
}

#[tokio::test]
async fn test_matches_sync_decoder() {
    for report in [
        fixtures::GO_REPORT,
        fixtures::NOISY_REPORT,
        fixtures::CHANGE_KEYS_REPORT,
        fixtures::RESTATED_KEY_REPORT,
    ] {
        let sync = StreamDecoder::new(Cursor::new(report)).decode().unwrap();
        let async_run = AsyncStreamDecoder::new(report.as_bytes())
            .decode()
            .await
            .unwrap();
        assert_eq!(sync, async_run);
    }
}

#[tokio::test]
async fn test_shared_configuration() {
    let mut decoder = AsyncStreamDecoder::new(fixtures::CHANGE_KEYS_REPORT.as_bytes());
    let first = decoder.next_result().await.unwrap().unwrap();
    assert!(Arc::ptr_eq(
        first.configuration.as_ref().unwrap(),
        decoder.configuration()
    ));

    let second = decoder.next_result().await.unwrap().unwrap();
    assert!(!Arc::ptr_eq(
        first.configuration.as_ref().unwrap(),
        second.configuration.as_ref().unwrap()
    ));
    assert!(decoder.next_result().await.unwrap().is_none());
    assert_eq!(decoder.line_number(), 4);
}

// ==================== Errors ====================

#[tokio::test]
async fn test_invalid_result() {
    for (name, line) in errors::invalid_result_samples() {
        let input = format!("{}\n", line);
        let err = AsyncStreamDecoder::new(input.as_bytes())
            .decode()
            .await
            .unwrap_err();
        assert!(
            matches!(err, StreamError::InvalidResult { line: 1, .. }),
            "{}",
            name
        );
    }
}

#[tokio::test]
async fn test_invalid_result_skipped() {
    let config = DecoderConfig::builder()
        .invalid_results(InvalidResultPolicy::Skip)
        .build();
    let run = AsyncStreamDecoder::with_config(
        "BenchmarkA 1 x ns/op\nBenchmarkB 1 1 ns/op\n".as_bytes(),
        config,
    )
    .decode()
    .await
    .unwrap();
    assert_eq!(run.len(), 1);
}

#[tokio::test]
async fn test_cancellation() {
    let token = CancellationToken::new();
    token.cancel();

    let mut count = 0;
    let err = AsyncStreamDecoder::new(fixtures::GO_REPORT.as_bytes())
        .with_cancellation(token)
        .stream(|_| count += 1)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(count, 0);
}

// ==================== Line length ====================

#[tokio::test]
async fn test_long_result_line_decodes_by_default() {
    let input = format!("BenchmarkA 1{}\n", " 1 ns/op".repeat(150_000));
    let run = AsyncStreamDecoder::new(input.as_bytes())
        .decode()
        .await
        .unwrap();
    assert_eq!(run.len(), 1);
    assert_eq!(run.results[0].values.len(), 150_000);
}

#[tokio::test]
async fn test_max_line_length_skips_long_lines() {
    let input = format!(
        "{}\nBenchmarkB 1 1 ns/op\nBenchmarkC 1 x ns/op\n",
        format!("BenchmarkA 1{}", " 1 ns/op".repeat(100))
    );
    let config = DecoderConfig::builder()
        .max_line_length(100)
        .buffer_size(16)
        .build();
    let mut decoder = AsyncStreamDecoder::with_config(input.as_bytes(), config);

    let result = decoder.next_result().await.unwrap().unwrap();
    assert_eq!(result.name, "BenchmarkB");
    assert_eq!(decoder.line_number(), 2);
    let err = decoder.next_result().await.unwrap_err();
    assert_eq!(err.line(), Some(3));
}

#[tokio::test]
async fn test_empty_input() {
    let mut decoder = AsyncStreamDecoder::new(&b""[..]);
    assert!(decoder.next_result().await.unwrap().is_none());
    assert!(decoder.next_result().await.unwrap().is_none());
}
