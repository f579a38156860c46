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

//! Insertion-ordered string map used for configuration state.
//!
//! A configuration key describes every result that follows it until it is
//! overwritten, so keys are unique. Re-assigning a key moves it to the end of
//! the order: iteration follows the position of the *last* write, which is
//! what the encoder needs to reproduce configuration lines in input order.

use std::collections::HashMap;

/// Ordered map of unique string keys to string values.
///
/// Keys are iterated in last-write order. [`add`](Self::add) removes an
/// existing key before appending it again; [`Clone`] produces a fully
/// independent deep copy.
///
/// # Examples
///
/// ```rust
/// use benchparse_core::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.add("commit", "7cd9055");
/// map.add("goos", "linux");
/// map.add("commit", "ab322f4");
///
/// assert_eq!(map.keys().collect::<Vec<_>>(), vec!["goos", "commit"]);
/// assert_eq!(map.get("commit"), Some("ab322f4"));
/// assert_eq!(map.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedMap {
    contents: HashMap<String, String>,
    order: Vec<String>,
}

impl OrderedMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contents: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Assign `value` to `key`, moving the key to the end of the order.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.remove(&key);
        self.order.push(key.clone());
        self.contents.insert(key, value.into());
    }

    /// Remove `key`, preserving the relative order of the remaining keys.
    ///
    /// Returns the removed value, or `None` if the key was absent.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let value = self.contents.remove(key)?;
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
        Some(value)
    }

    /// True iff `key` is present with exactly `value`.
    ///
    /// A missing key never exists, even when `value` is empty.
    #[inline]
    pub fn exists(&self, key: &str, value: &str) -> bool {
        self.contents.get(key).is_some_and(|v| v == value)
    }

    /// Look up a key. `Some("")` means the key exists with an empty value.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.contents.get(key).map(String::as_str)
    }

    /// Look up a key, returning the empty string when it is absent.
    ///
    /// Use [`get`](Self::get) to tell a missing key from an empty value.
    #[inline]
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.contents.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in last-write order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Key/value pairs in last-write order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            keys: self.order.iter(),
            contents: &self.contents,
        }
    }

    /// The value stored for the last key in the order, if any.
    pub(crate) fn last_mut(&mut self) -> Option<&mut String> {
        let key = self.order.last()?;
        self.contents.get_mut(key)
    }
}

/// Iterator over the entries of an [`OrderedMap`] in order.
pub struct Iter<'a> {
    keys: std::slice::Iter<'a, String>,
    contents: &'a HashMap<String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        let value = self.contents.get(key).map_or("", String::as_str);
        Some((key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a OrderedMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OrderedMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for OrderedMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

// Serialized as a sequence of [key, value] pairs so that order survives
// formats whose maps are unordered.
#[cfg(feature = "serde")]
impl serde::Serialize for OrderedMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for pair in self.iter() {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OrderedMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = <Vec<(String, String)> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}
