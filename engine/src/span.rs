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

use std::ops::Range;

/// A labeled, optionally colored interval over a text buffer.
///
/// Offsets are byte positions into the buffer the annotations were made on. The
/// span covers the half-open interval `start..end`, so spans that merely touch
/// (`a.end == b.start`) do not overlap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First covered offset
    pub start: usize,
    /// One past the last covered offset
    pub end: usize,
    /// Label shown to the user
    pub tag: Option<String>,
    /// Highlight color descriptor; uncolored spans never blend
    pub color: Option<String>,
    /// Covered text, carried through untouched
    pub text: Option<String>,
}

impl Span {
    /// Creates an untagged, uncolored span.
    pub fn new(start: usize, end: usize) -> Span {
        Span {
            start,
            end,
            ..Default::default()
        }
    }

    /// Sets the tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Span {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the color descriptor
    pub fn with_color(mut self, color: impl Into<String>) -> Span {
        self.color = Some(color.into());
        self
    }

    /// Sets the covered text
    pub fn with_text(mut self, text: impl Into<String>) -> Span {
        self.text = Some(text.into());
        self
    }

    /// The covered offsets as a range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of covered offsets.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span covers nothing.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns `true` if `other` lies entirely within this span.
    pub fn contains_span(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if both spans share at least one offset.
    pub fn intersects(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns `true` if both spans have the same `(start, end, tag)` identity.
    pub fn same_identity(&self, other: &Span) -> bool {
        self.start == other.start && self.end == other.end && self.tag == other.tag
    }

    /// Copy of this span narrowed to `range`.
    ///
    /// The text is only kept when the range is unchanged.
    pub(crate) fn narrowed(&self, range: Range<usize>) -> Span {
        let text = if range == self.range() {
            self.text.clone()
        } else {
            None
        };
        Span {
            start: range.start,
            end: range.end,
            tag: self.tag.clone(),
            color: self.color.clone(),
            text,
        }
    }
}

/// A sub-interval where two colored spans overlap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlendRegion {
    /// First overlapping offset
    pub start: usize,
    /// One past the last overlapping offset
    pub end: usize,
    /// Blend of the two contributing colors
    pub color: String,
    /// Tag of the later contributor
    pub tag: Option<String>,
}

impl BlendRegion {
    /// The overlapping offsets as a range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Converts the region into an output span.
    pub fn into_span(self) -> Span {
        Span {
            start: self.start,
            end: self.end,
            tag: self.tag,
            color: Some(self.color),
            text: None,
        }
    }
}

/// A span paired with its position in the caller's input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indexed {
    /// Position in the caller's input
    pub index: usize,
    /// The span itself
    pub span: Span,
}

impl Indexed {
    /// Pairs every span with its input position, sorted by start.
    ///
    /// The sort is stable, so spans with equal starts keep their input order.
    pub fn sorted(spans: &[Span]) -> Vec<Indexed> {
        let mut indexed: Vec<Indexed> = spans
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, span)| Indexed { index, span })
            .collect();
        indexed.sort_by_key(|entry| entry.span.start);
        indexed
    }
}

/// Non-overlapping result of a merge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    /// Output spans ordered by position
    pub spans: Vec<Span>,
    /// Ascending input positions of every span that took part in a blend
    pub blend_indices: Vec<usize>,
}

impl Partition {
    /// Returns `true` if the input span at `index` took part in a blend.
    pub fn is_blended(&self, index: usize) -> bool {
        self.blend_indices.binary_search(&index).is_ok()
    }
}
