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

//! A whole buffer rendered with its highlights.

use crate::config::RenderConfig;
use crate::mark::{Mark, Selection};
use crate::result::RenderResult;
use bytes::BufMut;
use markblend_engine::{Partition, Span};
use std::fmt::Write;
use tracing::{debug, instrument, trace};

/// A text buffer with a set of non-overlapping marks painted over it.
///
/// Text between marks is written unstyled.
#[derive(Clone, Debug)]
pub struct MarkedText<'a> {
    buffer: &'a str,
    marks: Vec<Mark<'a>>,
    config: RenderConfig,
}

impl<'a> MarkedText<'a> {
    /// Prepares `spans` for rendering over `buffer`.
    ///
    /// Marks are ordered by start. A mark overlapping the one before it is
    /// skipped when writing.
    #[instrument(skip_all, fields(spans = spans.len()))]
    pub fn new(buffer: &'a str, spans: &'a [Span], config: RenderConfig) -> RenderResult<Self> {
        let mut marks = spans
            .iter()
            .map(|span| Mark::new(buffer, span))
            .collect::<RenderResult<Vec<_>>>()?;
        marks.sort_by_key(Mark::start);
        debug!(marks = marks.len(), "Prepared marks");
        Ok(MarkedText {
            buffer,
            marks,
            config,
        })
    }

    /// Prepares the spans of a merged partition.
    pub fn from_partition(
        buffer: &'a str,
        partition: &'a Partition,
        config: RenderConfig,
    ) -> RenderResult<Self> {
        Self::new(buffer, &partition.spans, config)
    }

    /// The marks, ordered by start.
    pub fn marks(&self) -> &[Mark<'a>] {
        &self.marks
    }

    /// The rendering options in use.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Writes the buffer with every mark painted in.
    pub fn write_str<W: Write>(&self, writer: &mut W) -> std::fmt::Result {
        let mut cursor = 0;
        for mark in &self.marks {
            if mark.start() < cursor {
                trace!("Skipping mark at {} overlapping the previous mark", mark.start());
                continue;
            }
            writer.write_str(&self.buffer[cursor..mark.start()])?;
            mark.write_str(writer, &self.config)?;
            cursor = mark.end();
        }
        writer.write_str(&self.buffer[cursor..])
    }

    /// Encodes the rendered buffer into `dst`, returning the bytes written.
    pub fn encode<T: BufMut>(&self, dst: &mut T) -> RenderResult<usize> {
        let mut rendered = String::new();
        self.write_str(&mut rendered)?;
        dst.put_slice(rendered.as_bytes());
        Ok(rendered.len())
    }

    /// Selection reported by a pointer release at `offset`, if a mark is there.
    pub fn selection_at(&self, offset: usize) -> Option<Selection> {
        self.marks
            .iter()
            .find(|mark| mark.start() <= offset && offset < mark.end())
            .map(Mark::on_release)
    }
}

impl std::fmt::Display for MarkedText<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_str(f)
    }
}

/// Renders `partition` over `buffer` into a string.
pub fn render(buffer: &str, partition: &Partition, config: RenderConfig) -> RenderResult<String> {
    let text = MarkedText::from_partition(buffer, partition, config)?;
    let mut out = String::with_capacity(buffer.len());
    text.write_str(&mut out)?;
    Ok(out)
}
