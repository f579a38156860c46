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

//! A fully decoded benchmark run.

use crate::result::BenchmarkResult;

/// All results decoded from one input, in input order.
///
/// Consecutive results share their configuration maps. A decoded run is meant
/// to be read; to edit configurations, clone the map out of its `Arc` first.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    pub results: Vec<BenchmarkResult>,
}

impl Run {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkResult> {
        self.results.iter()
    }
}

impl From<Vec<BenchmarkResult>> for Run {
    fn from(results: Vec<BenchmarkResult>) -> Self {
        Self { results }
    }
}

impl FromIterator<BenchmarkResult> for Run {
    fn from_iter<T: IntoIterator<Item = BenchmarkResult>>(iter: T) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Run {
    type Item = BenchmarkResult;
    type IntoIter = std::vec::IntoIter<BenchmarkResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a Run {
    type Item = &'a BenchmarkResult;
    type IntoIter = std::slice::Iter<'a, BenchmarkResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
