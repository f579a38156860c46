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

//! Benchmark result lines.
//!
//! A result line is a whitespace-separated sequence of fields:
//!
//! ```text
//! BenchmarkDecode/text=digits-8   100   154125 ns/op   64.88 MB/s
//! ^ name                          ^ iterations  ^ value/unit pairs...
//! ```
//!
//! There must be an even number of fields and at least four. The name starts
//! with `Benchmark`, followed either by nothing or by an upper case character.

use crate::error::ResultLineError;
use crate::ordered_map::OrderedMap;
use std::fmt;
use std::sync::Arc;

/// Prefix every benchmark name starts with.
pub const BENCHMARK_PREFIX: &str = "Benchmark";

/// Nanoseconds per operation.
pub const UNIT_RUNTIME: &str = "ns/op";
/// Bytes allocated per operation.
pub const UNIT_BYTES_ALLOC: &str = "B/op";
/// Allocations per operation.
pub const UNIT_OBJECT_ALLOCS: &str = "allocs/op";
/// Throughput in megabytes per second.
pub const UNIT_BYTES_PER_SECOND: &str = "MB/s";

/// One measurement of a result line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueUnitPair {
    pub value: f64,
    pub unit: String,
}

impl ValueUnitPair {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// Renders the shortest decimal that parses back to the same `f64`, never in
/// exponent form, followed by the unit.
impl fmt::Display for ValueUnitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A single decoded result line.
///
/// `configuration` is shared: every result decoded between two configuration
/// lines points at the same [`OrderedMap`]. Clone the map before changing it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkResult {
    /// Full benchmark name, including any `/key=value` sub-benchmark parts.
    pub name: String,
    pub iterations: i64,
    /// Measurements in line order. Never empty for a decoded result.
    pub values: Vec<ValueUnitPair>,
    /// Configuration in effect when the result was read.
    pub configuration: Option<Arc<OrderedMap>>,
}

impl BenchmarkResult {
    /// Name with the `Benchmark` prefix removed. May be empty.
    pub fn base_name(&self) -> &str {
        self.name
            .strip_prefix(BENCHMARK_PREFIX)
            .unwrap_or(&self.name)
    }

    /// First value reported with `unit`.
    ///
    /// ```rust
    /// use benchparse_core::{BenchmarkResult, ValueUnitPair, UNIT_RUNTIME};
    ///
    /// let result = BenchmarkResult {
    ///     values: vec![ValueUnitPair::new(125.0, "ns/op")],
    ///     ..Default::default()
    /// };
    /// assert_eq!(result.value_by_unit(UNIT_RUNTIME), Some(125.0));
    /// assert_eq!(result.value_by_unit("misses/op"), None);
    /// ```
    pub fn value_by_unit(&self, unit: &str) -> Option<f64> {
        self.values.iter().find(|v| v.unit == unit).map(|v| v.value)
    }

    /// Configuration value for `key`, if a configuration is attached.
    pub fn config_value(&self, key: &str) -> Option<&str> {
        self.configuration.as_deref().and_then(|c| c.get(key))
    }
}

/// Renders the canonical result line: single spaces, no trailing whitespace.
impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.iterations)?;
        for value in &self.values {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

/// Parse a benchmark result line.
///
/// Leading and trailing whitespace is ignored and fields may be separated by
/// any run of whitespace. The returned result has no configuration attached.
///
/// # Errors
///
/// Shape violations (field count, name prefix) return the matching
/// [`ResultLineError`] variant. A line with the right shape whose iteration
/// count or values fail to parse returns
/// [`InvalidIterations`](ResultLineError::InvalidIterations) or
/// [`InvalidValue`](ResultLineError::InvalidValue). A finite literal that
/// overflows `f64` returns [`ValueOutOfRange`](ResultLineError::ValueOutOfRange).
pub fn parse_result_line(line: &str) -> Result<BenchmarkResult, ResultLineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ResultLineError::NotEnoughFields {
            found: fields.len(),
        });
    }
    if fields.len() % 2 != 0 {
        return Err(ResultLineError::ExpectEvenFields {
            found: fields.len(),
        });
    }

    let name = fields[0];
    let rest = name
        .strip_prefix(BENCHMARK_PREFIX)
        .ok_or(ResultLineError::NoPrefixBenchmark)?;
    if let Some(next) = rest.chars().next() {
        if !next.is_uppercase() {
            return Err(ResultLineError::UpperAfterBenchmarkRequired);
        }
    }

    let iterations = fields[1]
        .parse::<i64>()
        .map_err(|source| ResultLineError::InvalidIterations {
            field: fields[1].to_string(),
            source,
        })?;

    let values = fields[2..]
        .chunks_exact(2)
        .map(|pair| {
            let value = pair[0]
                .parse::<f64>()
                .map_err(|source| ResultLineError::InvalidValue {
                    field: pair[0].to_string(),
                    source,
                })?;
            if value.is_infinite() && !is_infinity_literal(pair[0]) {
                return Err(ResultLineError::ValueOutOfRange {
                    field: pair[0].to_string(),
                });
            }
            Ok(ValueUnitPair::new(value, pair[1]))
        })
        .collect::<Result<Vec<_>, ResultLineError>>()?;

    Ok(BenchmarkResult {
        name: name.to_string(),
        iterations,
        values,
        configuration: None,
    })
}

/// `inf`, `infinity` in any case, optionally signed.
fn is_infinity_literal(field: &str) -> bool {
    let digits = field.strip_prefix(['+', '-']).unwrap_or(field);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}
