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

use crate::Color;

/// Brightness below which a background counts as dark.
pub const DARK_THRESHOLD: u8 = 128;

/// Returns `true` when `color` is dark enough that white foreground text should
/// be used on top of it.
///
/// Unparseable descriptors are treated as light backgrounds.
pub fn lumin_test(color: &str) -> bool {
    color
        .parse::<Color>()
        .is_ok_and(|color| is_dark(&color))
}

/// Returns `true` when the perceived brightness of `color` is below
/// [`DARK_THRESHOLD`].
pub fn is_dark(color: &Color) -> bool {
    color.brightness() < DARK_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lumin_dark_backgrounds() {
        assert!(lumin_test("#000000"));
        assert!(lumin_test("red"));
        assert!(lumin_test("rgb(0, 0, 238)"));
    }

    #[test]
    fn test_lumin_light_backgrounds() {
        assert!(!lumin_test("#84d2ff"));
        assert!(!lumin_test("yellow"));
        assert!(!lumin_test("#ffffff"));
    }

    #[test]
    fn test_lumin_unparseable_is_light() {
        assert!(!lumin_test(""));
        assert!(!lumin_test("sparkly"));
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(is_dark(&Color::RGB(127, 127, 127)));
        assert!(!is_dark(&Color::RGB(128, 128, 128)));
    }
}
