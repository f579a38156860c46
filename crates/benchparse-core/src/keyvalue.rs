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

//! Configuration line grammar: `key: value`.

use crate::error::KeyValueError;
use std::fmt;

/// A single configuration pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Renders `key: value`, or `key:` when the value is empty.
impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_config_line(f, &self.key, &self.value)
    }
}

pub(crate) fn write_config_line<W: fmt::Write>(w: &mut W, key: &str, value: &str) -> fmt::Result {
    if value.is_empty() {
        write!(w, "{}:", key)
    } else {
        write!(w, "{}: {}", key, value)
    }
}

/// Parse a raw configuration line.
///
/// The key is everything before the first `:`, taken literally. Leading
/// spaces and tabs after the colon are dropped from the value; nothing else
/// is trimmed, so a line with leading whitespace fails the lowercase check.
///
/// # Examples
///
/// ```rust
/// use benchparse_core::{parse_key_value_line, KeyValueError};
///
/// let kv = parse_key_value_line("commit:   7cd9055").unwrap();
/// assert_eq!(kv.key, "commit");
/// assert_eq!(kv.value, "7cd9055");
///
/// assert_eq!(parse_key_value_line("Commit: x"), Err(KeyValueError::LowercaseRequired));
/// ```
pub fn parse_key_value_line(line: &str) -> Result<KeyValue, KeyValueError> {
    let colon = line.find(':').ok_or(KeyValueError::NoColon)?;
    let key = &line[..colon];
    let value = line[colon + 1..].trim_start_matches(|c: char| c == ' ' || c == '\t');

    let first = key.chars().next().ok_or(KeyValueError::EmptyKey)?;
    if !first.is_lowercase() {
        return Err(KeyValueError::LowercaseRequired);
    }
    if key.chars().any(|c| c.is_whitespace() || c.is_uppercase()) {
        return Err(KeyValueError::KeyHasSpacesOrUppercase);
    }
    if value.contains('\n') {
        return Err(KeyValueError::ValueHasNewline);
    }

    Ok(KeyValue::new(key, value))
}
