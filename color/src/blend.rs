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

//! Color blending for overlapping highlights.

use crate::Color;
use tracing::debug;

/// Combines the colors of two overlapping highlights into one.
///
/// Implementations must be deterministic. They are not required to be commutative:
/// the merge engine always passes the color of the earlier span (by start
/// position) as `a`.
pub trait ColorBlend {
    /// Blend two color descriptors into a single descriptor.
    fn blend(&self, a: &str, b: &str) -> String;
}

impl<F> ColorBlend for F
where
    F: Fn(&str, &str) -> String,
{
    fn blend(&self, a: &str, b: &str) -> String {
        self(a, b)
    }
}

/// Default blend: averages the RGB channels of both colors.
///
/// Blending a color with itself returns the first descriptor verbatim, so a
/// highlight stacked on an identical highlight keeps its original descriptor.
/// When one descriptor cannot be parsed the other one is returned unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MixBlend;

impl ColorBlend for MixBlend {
    fn blend(&self, a: &str, b: &str) -> String {
        if a == b {
            return a.to_string();
        }
        match (a.parse::<Color>(), b.parse::<Color>()) {
            (Ok(x), Ok(y)) if x.rgb() == y.rgb() => a.to_string(),
            (Ok(x), Ok(y)) => x.mix(&y).to_string(),
            (Ok(_), Err(error)) => {
                debug!("Keeping '{}', cannot blend with '{}': {}", a, b, error);
                a.to_string()
            }
            (Err(error), _) => {
                debug!("Keeping '{}', cannot blend with '{}': {}", b, a, error);
                b.to_string()
            }
        }
    }
}
