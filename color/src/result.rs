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

//! Error types for color parsing.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`ColorError`].
pub type ColorResult<T> = Result<T, ColorError>;

/// Errors produced while parsing a color descriptor.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The descriptor was empty or only whitespace.
    #[error("Empty color descriptor")]
    Empty,

    /// A `#` prefixed descriptor that is not 3 or 6 hex digits.
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// An `rgb(...)` descriptor with a missing or out of range component.
    #[error("Invalid rgb component in '{descriptor}': {component}")]
    InvalidComponent {
        /// The full descriptor being parsed
        descriptor: String,
        /// The offending component text
        component: String,
    },

    /// A bare word that does not name a known color.
    #[error("Unknown color name: {0}")]
    UnknownName(String),
}

impl ColorError {
    /// Create an invalid hex error
    pub fn invalid_hex(descriptor: impl Into<String>) -> Self {
        Self::InvalidHex(descriptor.into())
    }

    /// Create an invalid component error
    pub fn invalid_component(descriptor: impl Into<String>, component: impl Into<String>) -> Self {
        Self::InvalidComponent {
            descriptor: descriptor.into(),
            component: component.into(),
        }
    }

    /// Create an unknown name error
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownName(name.into())
    }
}
