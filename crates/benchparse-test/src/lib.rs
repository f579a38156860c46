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

//! Shared test fixtures and report builders for benchparse.
//!
//! # Quick Start
//!
//! ```rust
//! use benchparse_test::fixtures;
//! use benchparse_test::builders::ReportBuilder;
//!
//! // Pre-built reports
//! assert_eq!(benchparse_test::count_results(fixtures::GO_REPORT), 27);
//!
//! // Reports that re-encode byte for byte
//! for (name, text) in fixtures::symmetric_samples() {
//!     assert!(text.is_empty() || text.ends_with('\n'), "{}", name);
//! }
//!
//! // Custom reports
//! let text = ReportBuilder::new()
//!     .config("commit", "7cd9055")
//!     .result("BenchmarkBob", 1, &[(10.0, "ns/op")])
//!     .build();
//! assert_eq!(text, "commit: 7cd9055\nBenchmarkBob 1 10 ns/op\n");
//! ```

pub mod builders;
pub mod fixtures;

pub use builders::{synthetic_report, synthetic_run, ReportBuilder};

/// Type alias for a list of named text samples.
pub type SampleList = Vec<(&'static str, &'static str)>;

/// Count lines of `text` that are result lines.
pub fn count_results(text: &str) -> usize {
    text.lines()
        .filter(|line| benchparse_core::parse_result_line(line).is_ok())
        .count()
}
