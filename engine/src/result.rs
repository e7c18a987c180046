//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for the merge engine.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`MergeError`].
pub type MergeResult<T> = Result<T, MergeError>;

/// Errors that can occur while merging spans.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    /// A span ends before it starts.
    #[error("Invalid range for span {index}: end {end} is before start {start}")]
    InvalidRange {
        /// Position of the span in the caller's input
        index: usize,
        /// The span's start offset
        start: usize,
        /// The span's end offset
        end: usize,
    },
}

impl MergeError {
    /// Create an invalid range error
    pub fn invalid_range(index: usize, start: usize, end: usize) -> Self {
        Self::InvalidRange { index, start, end }
    }

    /// Index of the offending input span
    pub fn index(&self) -> usize {
        match self {
            MergeError::InvalidRange { index, .. } => *index,
        }
    }
}
