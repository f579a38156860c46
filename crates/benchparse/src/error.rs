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

//! Unified error type for the facade functions.

use benchparse_core::EncodeError;
use benchparse_stream::StreamError;
use thiserror::Error;

/// Any error returned by [`decode`](crate::decode), [`stream`](fn@crate::stream)
/// or [`encode`](crate::encode).
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] StreamError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl Error {
    /// 1-based input line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Decode(e) => e.line(),
            Self::Encode(_) => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Decode(e) if e.is_cancelled())
    }
}

/// Result type for the facade functions.
pub type Result<T> = std::result::Result<T, Error>;
