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

//! A single rendered highlight.

use crate::config::{ColorMode, RenderConfig};
use crate::result::{RenderError, RenderResult};
use bytes::BufMut;
use markblend_color::{Color, is_dark, lumin_test};
use markblend_engine::Span;
use std::fmt::Write;
use tracing::debug;

/// The range reported when a mark is released.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// First selected offset
    pub start: usize,
    /// One past the last selected offset
    pub end: usize,
}

/// One non-overlapping span painted over its slice of the buffer.
///
/// The background is the span's color, or the configured default highlight when
/// the span has none. Text on a dark background is white, otherwise black. A
/// tagged span is followed by a bold black on white badge holding the tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mark<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    tag: Option<&'a str>,
    color: Option<&'a str>,
}

impl<'a> Mark<'a> {
    /// Creates a mark for `span` over `buffer`.
    ///
    /// # Errors
    ///
    /// Fails when the span ends before it starts or past the end of the buffer,
    /// or when either boundary splits a character.
    pub fn new(buffer: &'a str, span: &'a Span) -> RenderResult<Mark<'a>> {
        if span.end < span.start || span.end > buffer.len() {
            return Err(RenderError::range_out_of_bounds(span.range(), buffer.len()));
        }
        for offset in [span.start, span.end] {
            if !buffer.is_char_boundary(offset) {
                return Err(RenderError::not_char_boundary(offset));
            }
        }
        Ok(Mark {
            start: span.start,
            end: span.end,
            text: &buffer[span.range()],
            tag: span.tag.as_deref(),
            color: span.color.as_deref(),
        })
    }

    /// First covered offset
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last covered offset
    pub fn end(&self) -> usize {
        self.end
    }

    /// The highlighted text
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The badge text
    pub fn tag(&self) -> Option<&'a str> {
        self.tag
    }

    /// Parsed background color.
    ///
    /// # Errors
    ///
    /// Fails when the span's color descriptor cannot be parsed.
    pub fn background(&self, config: &RenderConfig) -> RenderResult<Color> {
        match self.color {
            Some(color) => Ok(color.parse()?),
            None => Ok(config.default_color),
        }
    }

    /// Background to paint and whether it is dark.
    fn style(&self, config: &RenderConfig) -> (Color, bool) {
        match self.background(config) {
            Ok(background) => {
                let dark = self.color.map_or_else(|| is_dark(&background), lumin_test);
                (background, dark)
            }
            Err(error) => {
                debug!("Falling back to default highlight: {}", error);
                (config.default_color, is_dark(&config.default_color))
            }
        }
    }

    fn badge(&self, config: &RenderConfig) -> Option<&'a str> {
        self.tag.filter(|_| config.show_tags)
    }

    /// Writes the mark to `writer`.
    pub fn write_str<W: Write>(&self, writer: &mut W, config: &RenderConfig) -> std::fmt::Result {
        let pad = config.pad;
        if !config.color_mode.is_ansi() {
            write!(writer, "{:pad$}{}{:pad$}", "", self.text, "")?;
            if let Some(tag) = self.badge(config) {
                write!(writer, "[{}]", tag)?;
            }
            return Ok(());
        }

        let (background, dark) = self.style(config);
        let foreground = if dark { Color::BrightWhite } else { Color::Black };
        let mut codes = Vec::new();
        push_color(&mut codes, config.color_mode, background, Layer::Background);
        push_color(&mut codes, config.color_mode, foreground, Layer::Foreground);
        write!(writer, "\x1b[{}m{:pad$}{}{:pad$}", codes.join(";"), "", self.text, "")?;

        if let Some(tag) = self.badge(config) {
            let mut codes = vec!["1".to_string()];
            push_color(&mut codes, config.color_mode, Color::Black, Layer::Foreground);
            push_color(&mut codes, config.color_mode, Color::BrightWhite, Layer::Background);
            write!(writer, "\x1b[0m\x1b[{}m {} ", codes.join(";"), tag)?;
        }
        writer.write_str("\x1b[0m")
    }

    /// Encodes the rendered mark into `dst`, returning the bytes written.
    pub fn encode<T: BufMut>(&self, dst: &mut T, config: &RenderConfig) -> RenderResult<usize> {
        let mut rendered = String::new();
        self.write_str(&mut rendered, config)?;
        dst.put_slice(rendered.as_bytes());
        Ok(rendered.len())
    }

    /// The selection reported when the pointer is released over this mark.
    pub fn on_release(&self) -> Selection {
        Selection {
            start: self.start,
            end: self.end,
        }
    }
}

#[derive(Clone, Copy)]
enum Layer {
    Foreground,
    Background,
}

/// Appends the SGR parameters selecting `color` on `layer`.
fn push_color(codes: &mut Vec<String>, mode: ColorMode, color: Color, layer: Layer) {
    let base: u8 = match layer {
        Layer::Foreground => 30,
        Layer::Background => 40,
    };
    match mode.adapt(color) {
        None => {}
        Some(Color::Fixed(n)) => {
            codes.push((base + 8).to_string());
            codes.push("5".to_string());
            codes.push(n.to_string());
        }
        Some(Color::RGB(r, g, b)) => {
            codes.push((base + 8).to_string());
            codes.push("2".to_string());
            codes.push(r.to_string());
            codes.push(g.to_string());
            codes.push(b.to_string());
        }
        Some(named) => {
            if let Color::Fixed(index) = named.to_fixed() {
                let code = match index {
                    0..8 => base + index,
                    _ => base + 60 + (index - 8),
                };
                codes.push(code.to_string());
            }
        }
    }
}
