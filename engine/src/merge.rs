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

//! Merge orchestration.
//!
//! [`Merger::merge`] drives the whole pipeline: spans are sorted, overlapping
//! colored spans produce blend regions, every span is classified against those
//! regions, residual ranges are rebuilt into spans, and the pieces are resolved
//! into one ordered list in which no two spans share a position.
//!
//! Boundary collisions are settled by a single policy everywhere: candidates are
//! walked in ascending `end` order and each one keeps only the positions nothing
//! before it has claimed.

use crate::classify::classify;
use crate::overlap::detect_overlaps;
use crate::range::RangeSet;
use crate::reconstruct::reconstruct;
use crate::result::{MergeError, MergeResult};
use crate::span::{Indexed, Partition, Span};
use markblend_color::{ColorBlend, MixBlend};
use std::collections::HashSet;
use tracing::{debug, instrument, trace};

/// Splits overlapping spans into blended, non-overlapping spans.
///
/// The blend applied where colored spans overlap is pluggable; [`MixBlend`] is
/// used unless another one is supplied through [`Merger::with_blender`].
#[derive(Clone, Debug)]
pub struct Merger<B = MixBlend> {
    blender: B,
}

impl Merger<MixBlend> {
    /// Creates a merger using [`MixBlend`].
    pub fn new() -> Self {
        Merger { blender: MixBlend }
    }
}

impl<B: Default> Default for Merger<B> {
    fn default() -> Self {
        Merger {
            blender: B::default(),
        }
    }
}

impl<B: ColorBlend> Merger<B> {
    /// Creates a merger using `blender` to combine overlapping colors.
    pub fn with_blender(blender: B) -> Self {
        Merger { blender }
    }

    /// The blend in use.
    pub fn blender(&self) -> &B {
        &self.blender
    }

    /// Merges `spans` into a non-overlapping partition.
    ///
    /// The input may be in any order and is never modified. When no two colored
    /// spans overlap the spans come back sorted by start and unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::InvalidRange`] when a span ends before it starts.
    #[instrument(skip_all, fields(spans = spans.len()))]
    pub fn merge(&self, spans: &[Span]) -> MergeResult<Partition> {
        validate(spans)?;

        let sorted = Indexed::sorted(spans);
        let regions = detect_overlaps(&sorted, &self.blender);
        if regions.is_empty() {
            debug!("No overlapping spans");
            return Ok(Partition {
                spans: sorted.into_iter().map(|entry| entry.span).collect(),
                blend_indices: Vec::new(),
            });
        }
        debug!(regions = regions.len(), "Detected blend regions");

        let classification = classify(&sorted, &regions);
        let blend_indices = classification.blend_indices();
        debug!(
            residuals = classification.residuals.len(),
            enclosing = classification.fully_contained.len(),
            touched = classification.touched.len(),
            "Classified spans"
        );

        let out_tags: Vec<Span> = classification
            .residuals
            .iter()
            .flat_map(|residual| reconstruct(residual, &sorted))
            .collect();
        let remainder: Vec<Span> = sorted
            .iter()
            .filter(|entry| !blend_indices.contains(&entry.index))
            .map(|entry| entry.span.clone())
            .collect();

        let mut blended = dedup(regions.into_iter().map(|region| region.into_span()));
        blended.extend(sorted.into_iter().map(|entry| entry.span));
        let blended = dedup(resolve_boundaries(blended, false));

        let candidates = blended.into_iter().chain(out_tags).chain(remainder);
        let resolved = dedup(resolve_boundaries(candidates.collect(), true));
        let spans = collapse(resolved);
        debug!(spans = spans.len(), "Merged spans");

        Ok(Partition {
            spans,
            blend_indices: blend_indices.into_iter().collect(),
        })
    }
}

/// Merges `spans` using [`MixBlend`].
///
/// See [`Merger::merge`].
pub fn merge(spans: &[Span]) -> MergeResult<Partition> {
    Merger::new().merge(spans)
}

fn validate(spans: &[Span]) -> MergeResult<()> {
    match spans.iter().position(|span| span.end < span.start) {
        Some(index) => Err(MergeError::invalid_range(
            index,
            spans[index].start,
            spans[index].end,
        )),
        None => Ok(()),
    }
}

/// Keeps the first span of every `(start, end, tag)` identity.
fn dedup<I>(spans: I) -> Vec<Span>
where
    I: IntoIterator<Item = Span>,
{
    let mut seen = HashSet::new();
    spans
        .into_iter()
        .filter(|span| seen.insert((span.start, span.end, span.tag.clone())))
        .collect()
}

/// Walks `spans` by ascending end, cutting each one down to the positions no
/// earlier span has claimed.
///
/// A span that loses every position is dropped, and one that loses an interior
/// stretch is split. With `drop_contained`, a span lying within the last kept
/// span and carrying the same tag is dropped outright. The result is ordered by
/// start.
fn resolve_boundaries(mut spans: Vec<Span>, drop_contained: bool) -> Vec<Span> {
    spans.sort_by_key(|span| span.end);

    let mut covered = RangeSet::new();
    let mut kept: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        if span.is_empty() {
            trace!("Dropping empty span at {}", span.start);
            continue;
        }
        if drop_contained
            && kept
                .last()
                .is_some_and(|last| last.contains_span(&span) && last.tag == span.tag)
        {
            trace!("Dropping span {:?} covered by the same tag", span.range());
            continue;
        }
        let gaps = covered.gaps_within(&span.range());
        if gaps.count() != 1 || !gaps.covers(&span.range()) {
            trace!("Truncating span {:?} to {:?}", span.range(), gaps);
        }
        for gap in &gaps {
            kept.push(span.narrowed(gap.clone()));
        }
        covered.insert(span.range());
    }

    kept.sort_by_key(|span| span.start);
    kept
}

/// Folds duplicate endings and same-styled continuations into one span.
fn collapse(spans: Vec<Span>) -> Vec<Span> {
    let mut survivors: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match survivors.last_mut() {
            Some(last) if last.end == span.end && last.tag == span.tag => {
                if span.len() > last.len() {
                    *last = span;
                }
            }
            Some(last)
                if last.end == span.start && last.tag == span.tag && last.color == span.color =>
            {
                last.end = span.end;
                last.text = None;
            }
            _ => survivors.push(span),
        }
    }
    survivors
}
