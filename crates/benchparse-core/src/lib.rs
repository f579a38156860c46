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

//! Core data model and line grammars for benchmark reports.
//!
//! A report is a stream of configuration lines (`key: value`) interleaved
//! with result lines (`BenchmarkName iterations value unit [value unit...]`).
//! This crate holds the pure, I/O-free pieces:
//!
//! - [`OrderedMap`]: configuration state, unique keys in last-write order
//! - [`parse_key_value_line`] and [`parse_result_line`]: the two grammars
//! - [`classify_line`]: tries both grammars in order
//! - [`BenchmarkResult::name_as_key_value`] and
//!   [`BenchmarkResult::all_key_value_pairs`]: name decomposition
//! - [`Encoder`]: writes a [`Run`] back out with minimal configuration diffs
//!
//! Reading from a stream lives in `benchparse-stream`.

mod error;
mod keyvalue;
mod line;
mod name;
mod ordered_map;
mod result;
mod run;
mod writer;

pub use error::{EncodeError, EncodeResult, KeyValueError, ResultLineError};
pub use keyvalue::{parse_key_value_line, KeyValue};
pub use line::{classify_line, Line};
pub use name::strip_parallelism_suffix;
pub use ordered_map::{Iter, OrderedMap};
pub use result::{
    parse_result_line, BenchmarkResult, ValueUnitPair, BENCHMARK_PREFIX, UNIT_BYTES_ALLOC,
    UNIT_BYTES_PER_SECOND, UNIT_OBJECT_ALLOCS, UNIT_RUNTIME,
};
pub use run::Run;
pub use writer::{transition, Encoder};
