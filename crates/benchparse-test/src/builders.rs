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

//! Builders for benchmark report text and decoded runs.

use benchparse_core::{BenchmarkResult, KeyValue, OrderedMap, Run, ValueUnitPair};
use std::sync::Arc;

/// Fluent builder for report text.
///
/// Lines are written in call order, each terminated by `\n`.
///
/// ```rust
/// use benchparse_test::ReportBuilder;
///
/// let text = ReportBuilder::new()
///     .config("goos", "linux")
///     .noise("PASS")
///     .result("BenchmarkA-8", 100, &[(12.5, "ns/op"), (0.0, "B/op")])
///     .build();
/// assert_eq!(text, "goos: linux\nPASS\nBenchmarkA-8 100 12.5 ns/op 0 B/op\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    text: String,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `key: value` line.
    pub fn config(mut self, key: &str, value: &str) -> Self {
        self.text.push_str(&KeyValue::new(key, value).to_string());
        self.text.push('\n');
        self
    }

    /// Append a result line in canonical single-space form.
    pub fn result(mut self, name: &str, iterations: i64, values: &[(f64, &str)]) -> Self {
        self.text.push_str(&format!("{} {}", name, iterations));
        for (value, unit) in values {
            self.text.push_str(&format!(" {} {}", value, unit));
        }
        self.text.push('\n');
        self
    }

    /// Append a line verbatim.
    pub fn noise(mut self, line: &str) -> Self {
        self.text.push_str(line);
        self.text.push('\n');
        self
    }

    pub fn build(self) -> String {
        self.text
    }
}

/// Report with `sections` configuration changes, each followed by
/// `results_per_section` results. Used to size benchmarks.
pub fn synthetic_report(sections: usize, results_per_section: usize) -> String {
    let mut builder = ReportBuilder::new()
        .config("goos", "linux")
        .config("goarch", "amd64")
        .config("pkg", "github.com/example/compress");

    for section in 0..sections {
        builder = builder.config("commit", &format!("{:07x}", section));
        for i in 0..results_per_section {
            builder = builder.result(
                &format!("BenchmarkCompress/level={}/size=1e{}-8", i % 10, i % 7),
                1000 + i as i64,
                &[
                    (15412.0 + i as f64, "ns/op"),
                    (64.88, "MB/s"),
                    (40418.0, "B/op"),
                    (7.0, "allocs/op"),
                ],
            );
        }
        if section % 4 == 3 {
            builder = builder.noise("PASS").noise("ok  \tgithub.com/example/compress\t1.234s");
        }
    }
    builder.build()
}

/// Decoded-form counterpart of [`synthetic_report`], with one shared
/// configuration map per section.
pub fn synthetic_run(sections: usize, results_per_section: usize) -> Run {
    let mut run = Run::new();
    let mut config = OrderedMap::new();
    config.add("goos", "linux");
    config.add("goarch", "amd64");
    config.add("pkg", "github.com/example/compress");

    for section in 0..sections {
        config.add("commit", format!("{:07x}", section));
        let shared = Arc::new(config.clone());
        for i in 0..results_per_section {
            run.push(BenchmarkResult {
                name: format!("BenchmarkCompress/level={}/size=1e{}-8", i % 10, i % 7),
                iterations: 1000 + i as i64,
                values: vec![
                    ValueUnitPair::new(15412.0 + i as f64, "ns/op"),
                    ValueUnitPair::new(64.88, "MB/s"),
                    ValueUnitPair::new(40418.0, "B/op"),
                    ValueUnitPair::new(7.0, "allocs/op"),
                ],
                configuration: Some(Arc::clone(&shared)),
            });
        }
    }
    run
}
