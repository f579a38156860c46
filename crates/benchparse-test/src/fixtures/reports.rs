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

//! Full report texts and samples that re-encode unchanged.

use crate::SampleList;

/// Column-aligned `go test -bench` output: 9 configuration lines followed
/// by 27 result lines.
pub const GO_REPORT: &str = include_str!("../../data/go_report.txt");

/// Number of configuration entries in [`GO_REPORT`].
pub const GO_REPORT_CONFIG_KEYS: usize = 9;

/// Number of result lines in [`GO_REPORT`].
pub const GO_REPORT_RESULTS: usize = 27;

/// Test runner chatter around two results, with a single configuration line.
pub const NOISY_REPORT: &str = include_str!("../../data/noisy_report.txt");

/// The single-result report from the format's documentation.
pub const README_REPORT: &str = "commit: 7cd9055
BenchmarkDecode/text=digits/level=speed/size=1e4-8 100 154125 ns/op 64.88 MB/s 40418 B/op 7 allocs/op
";

/// [`README_REPORT`] with its configuration line removed.
pub const NO_KEYS_REPORT: &str = "BenchmarkDecode/text=digits/level=speed/size=1e4-8 100 154125 ns/op 64.88 MB/s 40418 B/op 7 allocs/op
";

/// Two results separated by a configuration change.
pub const CHANGE_KEYS_REPORT: &str = "commit: 7cd9055
BenchmarkDecode/text=digits/level=speed/size=1e4-8 100 154125 ns/op 64.88 MB/s 40418 B/op 7 allocs/op
commit: 7cd9056
BenchmarkDecode/text=digits/level=speed/size=1e4-8 100 154125 ns/op 64.88 MB/s 40418 B/op 8 allocs/op
";

/// A configuration line restating its current value.
///
/// Decodes to two results with equal configurations; re-encoding drops the
/// restated line.
pub const RESTATED_KEY_REPORT: &str = "commit: 7cd9055
BenchmarkA 1 10 ns/op
commit: 7cd9055
BenchmarkB 1 20 ns/op
";

/// Reports in canonical form: decoding then encoding reproduces them exactly.
pub fn symmetric_samples() -> SampleList {
    vec![
        ("empty", ""),
        ("readme", README_REPORT),
        ("nokeys", NO_KEYS_REPORT),
        ("changekeys", CHANGE_KEYS_REPORT),
        ("emptyvalue", "note:\nBenchmarkA 1 10 ns/op\n"),
        (
            "partialchange",
            "goos: linux\ngoarch: amd64\nBenchmarkA 1 10 ns/op\ngoarch: arm64\nBenchmarkA 1 12 ns/op\n",
        ),
        (
            "reorder",
            "a: 1\nb: 2\nBenchmarkA 1 10 ns/op\na: 9\nBenchmarkB 1 10 ns/op\n",
        ),
        (
            "fractional",
            "BenchmarkA-8 3 0.25 ns/op 1234.5 MB/s\nBenchmarkB-8 1000000000 0.001 ns/op\n",
        ),
    ]
}
