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

//! Key/value views derived from a benchmark name.
//!
//! Sub-benchmarks are conventionally named `Parent/key=value/key=value`, and
//! the harness appends `-N` (GOMAXPROCS) to the final segment. These helpers
//! turn that name into an [`OrderedMap`].

use crate::ordered_map::OrderedMap;
use crate::result::BenchmarkResult;

impl BenchmarkResult {
    /// Split the name on `/` into key/value pairs.
    ///
    /// Each segment is split on its first `=`. A segment without `=` becomes
    /// a key with an empty value. The parallelism suffix is kept.
    ///
    /// ```rust
    /// use benchparse_core::BenchmarkResult;
    ///
    /// let result = BenchmarkResult {
    ///     name: "BenchmarkDecode/text=digits/level=speed/size=1e4-8".to_string(),
    ///     ..Default::default()
    /// };
    /// let pairs = result.name_as_key_value();
    /// assert_eq!(
    ///     pairs.iter().collect::<Vec<_>>(),
    ///     vec![("BenchmarkDecode", ""), ("text", "digits"), ("level", "speed"), ("size", "1e4-8")]
    /// );
    /// ```
    pub fn name_as_key_value(&self) -> OrderedMap {
        self.name
            .split('/')
            .map(|segment| segment.split_once('=').unwrap_or((segment, "")))
            .collect()
    }

    /// Configuration entries followed by the name-derived entries.
    ///
    /// Name entries overwrite configuration entries with the same key. The
    /// trailing `-N` parallelism suffix is stripped from the value of the last
    /// name entry, so `size=1e4-8` yields `size: 1e4`.
    ///
    /// ```rust
    /// use benchparse_core::{BenchmarkResult, OrderedMap};
    /// use std::sync::Arc;
    ///
    /// let config: OrderedMap = [("commit", "a3abd32")].into_iter().collect();
    /// let result = BenchmarkResult {
    ///     name: "BenchmarkDecode/text=digits/level=speed/size=1e4-8".to_string(),
    ///     configuration: Some(Arc::new(config)),
    ///     ..Default::default()
    /// };
    /// let all = result.all_key_value_pairs();
    /// assert_eq!(all.get("size"), Some("1e4"));
    /// assert_eq!(all.get("commit"), Some("a3abd32"));
    /// ```
    pub fn all_key_value_pairs(&self) -> OrderedMap {
        let name_pairs = self.name_as_key_value();
        let config_len = self.configuration.as_ref().map_or(0, |c| c.len());

        let mut all = OrderedMap::with_capacity(config_len + name_pairs.len());
        if let Some(config) = &self.configuration {
            all.extend(config.iter());
        }
        all.extend(name_pairs.iter());

        // The last name entry is always last in `all`, even if a config or
        // earlier name entry had the same key.
        if !name_pairs.is_empty() {
            if let Some(value) = all.last_mut() {
                let stripped = strip_parallelism_suffix(value).len();
                value.truncate(stripped);
            }
        }
        all
    }
}

/// Remove a trailing `-<digits>` from `value`.
///
/// The run after the last `-` must be non-empty and all ASCII digits;
/// otherwise `value` is returned unchanged.
pub fn strip_parallelism_suffix(value: &str) -> &str {
    match value.rfind('-') {
        Some(dash) => {
            let digits = &value[dash + 1..];
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                &value[..dash]
            } else {
                value
            }
        }
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn named(name: &str) -> BenchmarkResult {
        BenchmarkResult {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn with_config(name: &str, config: &[(&str, &str)]) -> BenchmarkResult {
        BenchmarkResult {
            name: name.to_string(),
            configuration: Some(Arc::new(config.iter().copied().collect())),
            ..Default::default()
        }
    }

    fn pairs(map: &OrderedMap) -> Vec<(String, String)> {
        map.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ==================== name_as_key_value ====================

    #[test]
    fn test_name_only_keeps_suffix() {
        let result = named("BenchmarkDecode/text=digits/level=speed/size=1e4-8");
        assert_eq!(
            pairs(&result.name_as_key_value()),
            owned(&[
                ("BenchmarkDecode", ""),
                ("text", "digits"),
                ("level", "speed"),
                ("size", "1e4-8"),
            ])
        );
    }

    #[test]
    fn test_name_splits_on_first_equals() {
        let result = named("BenchmarkX/expr=a=b");
        assert_eq!(result.name_as_key_value().get("expr"), Some("a=b"));
    }

    #[test]
    fn test_name_duplicate_segments_last_wins() {
        let result = named("BenchmarkX/a=1/b=2/a=3");
        assert_eq!(
            pairs(&result.name_as_key_value()),
            owned(&[("BenchmarkX", ""), ("b", "2"), ("a", "3")])
        );
    }

    // ==================== all_key_value_pairs ====================

    #[test]
    fn test_all_simple() {
        assert_eq!(
            pairs(&named("BenchmarkBob").all_key_value_pairs()),
            owned(&[("BenchmarkBob", "")])
        );
    }

    #[test]
    fn test_all_with_config() {
        let result = with_config("BenchmarkBob/name=bob", &[("commit", "7cd9055")]);
        assert_eq!(
            pairs(&result.all_key_value_pairs()),
            owned(&[("commit", "7cd9055"), ("BenchmarkBob", ""), ("name", "bob")])
        );
    }

    #[test]
    fn test_all_name_overrides_config() {
        let result = with_config("BenchmarkBob/name=bob", &[("name", "john")]);
        assert_eq!(
            pairs(&result.all_key_value_pairs()),
            owned(&[("BenchmarkBob", ""), ("name", "bob")])
        );
    }

    #[test]
    fn test_all_strips_dash_number() {
        let all = named("BenchmarkDecode/text=digits/level=speed/size=1e4-8").all_key_value_pairs();
        assert_eq!(all.get("size"), Some("1e4"));
        assert_eq!(all.get("text"), Some("digits"));
    }

    #[test]
    fn test_all_keeps_trailing_dash() {
        let all = named("BenchmarkBob/name=bob-").all_key_value_pairs();
        assert_eq!(all.get("name"), Some("bob-"));
    }

    #[test]
    fn test_all_keeps_mixed_suffix() {
        let all = named("BenchmarkBob/name=bob-3n").all_key_value_pairs();
        assert_eq!(all.get("name"), Some("bob-3n"));
    }

    #[test]
    fn test_all_only_last_entry_stripped() {
        let all = named("BenchmarkBob/a=x-1/b=y-2").all_key_value_pairs();
        assert_eq!(all.get("a"), Some("x-1"));
        assert_eq!(all.get("b"), Some("y"));
    }

    #[test]
    fn test_all_does_not_touch_config_value() {
        let result = with_config("BenchmarkBob", &[("version", "go1-12")]);
        let all = result.all_key_value_pairs();
        assert_eq!(all.get("version"), Some("go1-12"));
        assert_eq!(all.get("BenchmarkBob"), Some(""));
    }

    #[test]
    fn test_all_does_not_mutate_shared_config() {
        let result = with_config("BenchmarkBob/name=bob-8", &[("name", "x-1")]);
        let _ = result.all_key_value_pairs();
        assert_eq!(result.config_value("name"), Some("x-1"));
    }

    // ==================== strip_parallelism_suffix ====================

    #[test]
    fn test_strip_suffix() {
        assert_eq!(strip_parallelism_suffix("1e4-8"), "1e4");
        assert_eq!(strip_parallelism_suffix("bob-16"), "bob");
        assert_eq!(strip_parallelism_suffix("a-b-4"), "a-b");
        assert_eq!(strip_parallelism_suffix("-8"), "");
    }

    #[test]
    fn test_strip_suffix_leaves_non_numeric() {
        assert_eq!(strip_parallelism_suffix("bob-"), "bob-");
        assert_eq!(strip_parallelism_suffix("bob-3n"), "bob-3n");
        assert_eq!(strip_parallelism_suffix("bob"), "bob");
        assert_eq!(strip_parallelism_suffix(""), "");
    }
}
