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

//! Error types for the render crate.

use markblend_color::ColorError;
use std::ops::Range;
use thiserror::Error;

/// Result type alias for operations that may fail with a [`RenderError`].
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering marks.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A span reaches past the end of the buffer or ends before it starts.
    #[error("Range {range:?} is out of bounds for a buffer of {max} bytes")]
    RangeOutOfBounds {
        /// The range that was requested
        range: Range<usize>,
        /// The buffer length
        max: usize,
    },

    /// A span boundary falls inside a multi-byte character.
    #[error("Offset {offset} is not on a character boundary")]
    NotCharBoundary {
        /// The offending offset
        offset: usize,
    },

    /// Writing to the output failed.
    #[error("Formatting failed")]
    Format(#[from] std::fmt::Error),

    /// A color descriptor could not be parsed.
    #[error("Color error: {0}")]
    Color(#[from] ColorError),
}

impl RenderError {
    /// Create a range out of bounds error
    pub fn range_out_of_bounds(range: Range<usize>, max: usize) -> Self {
        Self::RangeOutOfBounds { range, max }
    }

    /// Create a character boundary error
    pub fn not_char_boundary(offset: usize) -> Self {
        Self::NotCharBoundary { offset }
    }

    /// Check if this error concerns the requested range
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            RenderError::RangeOutOfBounds { .. } | RenderError::NotCharBoundary { .. }
        )
    }
}
