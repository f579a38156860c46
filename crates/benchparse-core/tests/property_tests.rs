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

//! Property-based tests for the core grammars and the ordered map.

use benchparse_core::{
    classify_line, parse_key_value_line, parse_result_line, strip_parallelism_suffix, Line,
    OrderedMap,
};
use proptest::prelude::*;
use std::collections::HashMap;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_./-]{0,15}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "([!-~]([ -~]{0,30}[!-~])?)?"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: the map mirrors a last-write-position model.
    #[test]
    fn prop_ordered_map_matches_model(
        ops in prop::collection::vec(("[a-e]", "[0-9]{0,2}", any::<bool>()), 0..60)
    ) {
        let mut map = OrderedMap::new();
        let mut model: Vec<(String, String)> = Vec::new();

        for (key, value, is_remove) in ops {
            model.retain(|(k, _)| *k != key);
            if is_remove {
                map.remove(&key);
            } else {
                map.add(key.clone(), value.clone());
                model.push((key, value));
            }
        }

        let actual: Vec<(String, String)> = map
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        prop_assert_eq!(actual, model.clone());
        prop_assert_eq!(map.len(), model.len());

        let unique: HashMap<_, _> = model.into_iter().collect();
        prop_assert_eq!(unique.len(), map.len());
    }

    /// Property: valid configuration lines re-render identically.
    #[test]
    fn prop_config_line_round_trip(key in key_strategy(), value in value_strategy()) {
        let line = if value.is_empty() {
            format!("{}:", key)
        } else {
            format!("{}: {}", key, value)
        };

        let kv = parse_key_value_line(&line);
        prop_assert!(kv.is_ok(), "Failed to parse {:?}: {:?}", line, kv.err());
        let kv = kv.unwrap();
        prop_assert_eq!(&kv.key, &key);
        prop_assert_eq!(&kv.value, &value);
        prop_assert_eq!(kv.to_string(), line);
    }

    /// Property: result lines collapse any whitespace to single spaces.
    #[test]
    fn prop_result_line_round_trip(
        suffix in "([A-Z][A-Za-z0-9]{0,10})?",
        iterations in 1_i64..10_000_000,
        values in prop::collection::vec((0_u32..1_000_000, "[a-zA-Z]{1,6}/[a-z]{1,3}"), 1..5),
        separators in prop::collection::vec("[ \t]{1,4}", 12),
    ) {
        let name = format!("Benchmark{}", suffix);
        let mut fields = vec![name.clone(), iterations.to_string()];
        for (value, unit) in &values {
            fields.push(value.to_string());
            fields.push(unit.clone());
        }

        let canonical = fields.join(" ");
        let mut spaced = String::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                spaced.push_str(&separators[i % separators.len()]);
            }
            spaced.push_str(field);
        }

        let parsed = parse_result_line(&spaced);
        prop_assert!(parsed.is_ok(), "Failed to parse {:?}", spaced);
        let parsed = parsed.unwrap();
        prop_assert_eq!(parsed.values.len(), values.len());
        prop_assert_eq!(parsed.to_string(), canonical);
    }

    /// Property: floats survive render-then-parse exactly.
    #[test]
    fn prop_float_values_round_trip(value in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        let line = format!("BenchmarkX 1 {} ns/op", value);
        let parsed = parse_result_line(&line).unwrap();
        prop_assert_eq!(parsed.values[0].value.to_bits(), value.to_bits());
        prop_assert_eq!(parsed.to_string(), line);
    }

    /// Property: the classifier never panics and never reports a config line
    /// that the config grammar would reject.
    #[test]
    fn prop_classify_is_total(line in "\\PC{0,80}") {
        if let Line::Configuration(kv) = classify_line(&line) {
            prop_assert!(parse_key_value_line(&line).is_ok());
            prop_assert!(!kv.key.is_empty());
        }
    }

    /// Property: stripping removes at most one `-digits` group.
    #[test]
    fn prop_strip_suffix(base in "[a-z0-9]{0,8}", digits in "[0-9]{1,3}") {
        let value = format!("{}-{}", base, digits);
        prop_assert_eq!(strip_parallelism_suffix(&value), base.as_str());
        prop_assert_eq!(strip_parallelism_suffix(&base), base.as_str());
    }
}
