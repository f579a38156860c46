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

//! Lines each grammar must reject.

use crate::SampleList;

/// Result lines with a valid shape but non-numeric content.
pub fn invalid_result_samples() -> SampleList {
    vec![
        ("float_iterations", "BenchmarkBob 1.5 10 ns/op"),
        ("word_iterations", "BenchmarkBob one 10 ns/op"),
        ("suffixed_value", "BenchmarkBob 1 10b ns/op"),
        ("word_value", "BenchmarkInvalidLine 1 ten ns/op"),
        ("bad_second_value", "BenchmarkBob 1 10 ns/op x B/op"),
    ]
}

/// Lines that match neither grammar and must be skipped silently.
pub fn ignored_line_samples() -> SampleList {
    vec![
        ("empty", ""),
        ("whitespace_only", "  \t "),
        ("pass", "PASS"),
        ("ok_summary", "ok  \tgithub.com/cep21/benchparse\t1.234s"),
        ("run_header", "=== RUN   TestRoundTrip"),
        ("test_pass", "--- PASS: TestRoundTrip (0.00s)"),
        ("lower_after_prefix", "Benchmarkfoo 1 10 ns/op"),
        ("odd_fields", "BenchmarkBob 1 10 ns/op 7"),
        ("too_few_fields", "BenchmarkBob 1 10"),
        ("no_prefix", "TestBob 1 10 ns/op"),
        ("key_with_space", "a key: bob"),
        ("upper_key", "Akey: bob"),
    ]
}

/// Key-value lines the configuration grammar rejects.
pub fn invalid_key_value_samples() -> SampleList {
    vec![
        ("startspace", " akey: bob"),
        ("empty", ""),
        ("upperstart", "Akey: bob"),
        ("emptykey", ": bob"),
        ("keywithspaces", "a key: bob"),
        ("keywithtab", "a\tkey: bob"),
        ("keywithnewline", "a\nkey: bob"),
        ("valuewithnewline", "akey: bo\nb"),
    ]
}
