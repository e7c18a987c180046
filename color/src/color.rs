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

use crate::{ColorError, ColorResult};
use std::str::FromStr;

/// RGB values of the 16 named colors, indexed by their palette number.
const PALETTE: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Named colors in palette order, used for both parsing and display.
const NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "purple",
    "cyan",
    "white",
    "bright-black",
    "bright-red",
    "bright-green",
    "bright-yellow",
    "bright-blue",
    "bright-purple",
    "bright-cyan",
    "bright-white",
];

/// A highlight color.
///
/// Annotation spans carry their color as an opaque descriptor string; `Color` is
/// the parsed form used when blending two descriptors or choosing a readable
/// foreground. The 16 named variants follow the xterm default palette.
///
/// # Descriptor Syntax
///
/// | Form            | Example              |
/// |-----------------|----------------------|
/// | short hex       | `#f80`               |
/// | long hex        | `#ff8800`            |
/// | functional rgb  | `rgb(255, 136, 0)`   |
/// | name            | `red`, `Bright-Blue` |
///
/// Names are case-insensitive and accept `-`, `_` or a space between words.
/// `magenta` is an alias of `purple` and `gray`/`grey` of `bright-black`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// Black - Color #0
    Black,
    /// Red - Color #1
    Red,
    /// Green - Color #2
    Green,
    /// Yellow - Color #3
    Yellow,
    /// Blue - Color #4
    Blue,
    /// Purple - Color #5
    Purple,
    /// Cyan - Color #6
    Cyan,
    /// White - Color #7
    White,
    /// Bright Black - Color #8
    BrightBlack,
    /// Bright Red - Color #9
    BrightRed,
    /// Bright Green - Color #10
    BrightGreen,
    /// Bright Yellow - Color #11
    BrightYellow,
    /// Bright Blue - Color #12
    BrightBlue,
    /// Bright Purple - Color #13
    BrightPurple,
    /// Bright Cyan - Color #14
    BrightCyan,
    /// Bright White - Color #15
    BrightWhite,
    /// A color number from 0 to 255 of the 256-color palette.
    ///
    /// - 0 to 15 are the named colors.
    /// - 16 to 231 are a 6x6x6 color cube.
    /// - 232 to 255 are a grayscale ramp.
    Fixed(u8),
    /// A 24-bit RGB color.
    RGB(u8, u8, u8),
}

impl Color {
    const NAMED: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Purple,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightPurple,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Palette number of a named color, `None` for `Fixed` and `RGB`.
    fn palette_index(&self) -> Option<usize> {
        Self::NAMED.iter().position(|named| named == self)
    }

    /// Returns the red, green and blue channels of this color.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self.to_truecolor() {
            Color::RGB(r, g, b) => (r, g, b),
            _ => (0, 0, 0),
        }
    }

    /// Converts this color to an [`RGB`](Color::RGB) color.
    ///
    /// Named colors use the xterm default palette, fixed colors are expanded from
    /// the color cube or grayscale ramp, and RGB colors are returned unchanged.
    pub fn to_truecolor(&self) -> Color {
        match *self {
            Color::RGB(r, g, b) => Color::RGB(r, g, b),
            Color::Fixed(n) if n < 16 => {
                let (r, g, b) = PALETTE[n as usize];
                Color::RGB(r, g, b)
            }
            Color::Fixed(n) if n < 232 => {
                let idx = u16::from(n) - 16;
                let level = |v: u16| (v * 51) as u8;
                Color::RGB(level(idx / 36), level((idx % 36) / 6), level(idx % 6))
            }
            Color::Fixed(n) => {
                let gray = ((u16::from(n) - 232) * 10 + 8) as u8;
                Color::RGB(gray, gray, gray)
            }
            named => {
                let (r, g, b) = named.palette_index().map_or((0, 0, 0), |i| PALETTE[i]);
                Color::RGB(r, g, b)
            }
        }
    }

    /// Converts this color to the nearest entry of the 256-color palette.
    pub fn to_fixed(&self) -> Color {
        match *self {
            Color::Fixed(n) => Color::Fixed(n),
            Color::RGB(r, g, b) => Color::Fixed(rgb_to_fixed_index(r, g, b)),
            named => Color::Fixed(named.palette_index().unwrap_or(0) as u8),
        }
    }

    /// Converts this color to the nearest of the 16 named colors.
    ///
    /// Uses the squared distance in RGB space against the xterm palette.
    pub fn to_basic(&self) -> Color {
        if self.palette_index().is_some() {
            return *self;
        }
        let (r, g, b) = self.rgb();
        let distance = |&(pr, pg, pb): &(u8, u8, u8)| {
            let dr = i32::from(r) - i32::from(pr);
            let dg = i32::from(g) - i32::from(pg);
            let db = i32::from(b) - i32::from(pb);
            dr * dr + dg * dg + db * db
        };
        PALETTE
            .iter()
            .enumerate()
            .min_by_key(|(_, rgb)| distance(rgb))
            .map_or(Color::Black, |(i, _)| Self::NAMED[i])
    }

    /// Mixes two colors by averaging each channel, rounding half up.
    pub fn mix(&self, other: &Color) -> Color {
        let (r1, g1, b1) = self.rgb();
        let (r2, g2, b2) = other.rgb();
        let avg = |a: u8, b: u8| ((u16::from(a) + u16::from(b) + 1) / 2) as u8;
        Color::RGB(avg(r1, r2), avg(g1, g2), avg(b1, b2))
    }

    /// Perceived brightness of this color from 0 (black) to 255 (white).
    ///
    /// Uses the ITU-R BT.601 luma weights `(299 r + 587 g + 114 b) / 1000`.
    pub fn brightness(&self) -> u8 {
        let (r, g, b) = self.rgb();
        ((u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000) as u8
    }
}

/// Maps RGB channels to the 256-color palette, preferring the grayscale ramp for
/// near-neutral colors.
fn rgb_to_fixed_index(r: u8, g: u8, b: u8) -> u8 {
    let avg = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
    let spread = [r, g, b]
        .iter()
        .map(|c| (i32::from(*c) - i32::from(avg)).unsigned_abs())
        .sum::<u32>();

    if spread < 15 {
        return match avg {
            0..8 => 16,
            239.. => 231,
            _ => (232 + (avg - 8) / 10) as u8,
        };
    }

    let level = |c: u8| ((u16::from(c) * 5 + 127) / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

fn parse_hex(descriptor: &str, digits: &str) -> ColorResult<Color> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_hex(descriptor));
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::invalid_hex(descriptor));
    match digits.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, i) in rgb.iter_mut().zip(0..3) {
                let nibble = channel(&digits[i..i + 1])?;
                *slot = nibble * 17;
            }
            Ok(Color::RGB(rgb[0], rgb[1], rgb[2]))
        }
        6 => Ok(Color::RGB(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => Err(ColorError::invalid_hex(descriptor)),
    }
}

fn parse_functional(descriptor: &str, body: &str) -> ColorResult<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ColorError::invalid_component(descriptor, body));
    }
    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part
            .parse::<u8>()
            .map_err(|_| ColorError::invalid_component(descriptor, *part))?;
    }
    Ok(Color::RGB(rgb[0], rgb[1], rgb[2]))
}

fn parse_name(descriptor: &str) -> ColorResult<Color> {
    let normalized = descriptor.to_ascii_lowercase().replace(['_', ' '], "-");
    let alias = match normalized.as_str() {
        "magenta" => "purple",
        "bright-magenta" => "bright-purple",
        "gray" | "grey" => "bright-black",
        other => other,
    };
    NAMES
        .iter()
        .position(|name| *name == alias)
        .map(|i| Color::NAMED[i])
        .ok_or_else(|| ColorError::unknown_name(descriptor))
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let descriptor = s.trim();
        if descriptor.is_empty() {
            return Err(ColorError::Empty);
        }
        if let Some(digits) = descriptor.strip_prefix('#') {
            return parse_hex(descriptor, digits);
        }
        let lower = descriptor.to_ascii_lowercase();
        if lower.starts_with("rgb(") && lower.ends_with(')') {
            return parse_functional(descriptor, &descriptor[4..descriptor.len() - 1]);
        }
        parse_name(descriptor)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(i) = self.palette_index() {
            return f.write_str(NAMES[i]);
        }
        let (r, g, b) = self.rgb();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}
