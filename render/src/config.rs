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

use markblend_color::Color;

///
/// Rendering options for highlighted text.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderConfig {
    /// Terminal color capability to render for
    pub color_mode: ColorMode,
    /// Background used for spans without a usable color
    pub default_color: Color,
    /// Render a badge with the tag after each tagged mark
    pub show_tags: bool,
    /// Spaces of padding on each side of a mark's text
    pub pad: usize,
}

impl RenderConfig {
    /// Default highlight color, a light sky blue.
    pub const DEFAULT_HIGHLIGHT: Color = Color::RGB(0x84, 0xd2, 0xff);

    /// Plain text with tag badges and no ANSI codes
    pub fn plain() -> RenderConfig {
        RenderConfig {
            color_mode: ColorMode::None,
            default_color: Self::DEFAULT_HIGHLIGHT,
            show_tags: true,
            pad: 0,
        }
    }

    /// 24-bit color with tag badges
    pub fn true_color() -> RenderConfig {
        RenderConfig {
            color_mode: ColorMode::TrueColor,
            default_color: Self::DEFAULT_HIGHLIGHT,
            show_tags: true,
            pad: 1,
        }
    }

    /// Sets the color mode
    pub fn with_color_mode(mut self, color_mode: ColorMode) -> RenderConfig {
        self.color_mode = color_mode;
        self
    }

    /// Sets the background used for spans without a usable color
    pub fn with_default_color(mut self, color: Color) -> RenderConfig {
        self.default_color = color;
        self
    }

    /// Shows or hides tag badges
    pub fn with_show_tags(mut self, show_tags: bool) -> RenderConfig {
        self.show_tags = show_tags;
        self
    }

    /// Sets the padding around each mark's text
    pub fn with_pad(mut self, pad: usize) -> RenderConfig {
        self.pad = pad;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            color_mode: ColorMode::FixedColor,
            default_color: Self::DEFAULT_HIGHLIGHT,
            show_tags: true,
            pad: 1,
        }
    }
}

/// Represents the color capabilities of a terminal.
///
/// - **None**: No ANSI codes are generated, resulting in plain text output
/// - **Basic**: 4-bit color supporting 16 colors (8 basic + 8 bright variants)
/// - **FixedColor**: 8-bit color supporting 256 colors
/// - **TrueColor**: 24-bit RGB color supporting 16.7 million colors
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// No ANSI color codes are generated.
    None,
    /// 4-bit color mode supporting 16 colors.
    Basic,
    /// 8-bit color mode supporting 256 colors.
    FixedColor,
    /// 24-bit true color mode.
    TrueColor,
}

impl ColorMode {
    /// Returns `true` if this color mode supports ANSI escape codes.
    pub fn is_ansi(&self) -> bool {
        match self {
            ColorMode::None => false,
            ColorMode::Basic | ColorMode::FixedColor | ColorMode::TrueColor => true,
        }
    }

    /// Returns `true` if this color mode is [`ColorMode::TrueColor`].
    pub fn is_true_color(&self) -> bool {
        matches!(self, ColorMode::TrueColor)
    }

    /// Down-samples `color` to what this mode can display.
    ///
    /// Returns `None` when the mode shows no color at all.
    pub fn adapt(&self, color: Color) -> Option<Color> {
        match self {
            ColorMode::None => None,
            ColorMode::Basic => Some(color.to_basic()),
            ColorMode::FixedColor => Some(color.to_fixed()),
            ColorMode::TrueColor => Some(color.to_truecolor()),
        }
    }
}
