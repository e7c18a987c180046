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

//! Classification of spans against the blend regions.

use crate::range::RangeSet;
use crate::span::{BlendRegion, Indexed, Span};
use std::collections::BTreeSet;
use tracing::trace;

/// How a span relates to the union of blend regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The span shares no position with any blend region.
    Disjoint,
    /// Part of the span lies outside the blend regions.
    Partial,
    /// Every position of the span lies inside the blend regions.
    FullyContained,
}

/// What is left of a span once every blend region is cut out of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Residual {
    /// Position of the owning span in the sorted span list
    pub owner: usize,
    /// Remaining positions
    pub ranges: RangeSet,
    /// Color of the owning span
    pub color: Option<String>,
}

/// Output of [`classify`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    /// Residuals of partially overlapping spans followed by those of enclosing spans
    pub residuals: Vec<Residual>,
    /// Input indices of the spans enclosing fully contained spans
    pub fully_contained: Vec<usize>,
    /// Input indices of every span that intersects a blend region
    pub touched: BTreeSet<usize>,
}

impl Classification {
    /// Input indices of every span that took part in a blend, ascending.
    pub fn blend_indices(&self) -> BTreeSet<usize> {
        self.touched
            .iter()
            .chain(self.fully_contained.iter())
            .copied()
            .collect()
    }
}

/// Union of all blend regions.
pub fn blend_union(regions: &[BlendRegion]) -> RangeSet {
    let mut union = RangeSet::new();
    for region in regions {
        union.insert(region.range());
    }
    union
}

/// Relates `span` to the blend regions.
///
/// A span is partial when its first or last position is blended, or when it
/// encloses a whole region, and some position of it is not blended. It is fully
/// contained when its first or last position is blended and every position is.
pub fn relation(span: &Span, union: &RangeSet, regions: &[BlendRegion]) -> Relation {
    let semi_inclusive = union.contains(span.start)
        || (span.end > span.start && union.contains(span.end - 1));
    let totally_inclusive = union.covers(&span.range());
    let blend_inclusive = regions
        .iter()
        .any(|r| r.start < r.end && span.start <= r.start && r.end <= span.end);

    if (semi_inclusive || blend_inclusive) && !totally_inclusive {
        Relation::Partial
    } else if semi_inclusive && totally_inclusive {
        Relation::FullyContained
    } else {
        Relation::Disjoint
    }
}

/// Sorted position of the smallest span that contains `inner`.
///
/// Ties go to the earliest span. `inner` itself qualifies when it is in `spans`.
pub fn smallest_enclosing(spans: &[Indexed], inner: &Span) -> Option<usize> {
    spans
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.span.contains_span(inner))
        .min_by_key(|(_, entry)| entry.span.len())
        .map(|(position, _)| position)
}

fn carve(owner: usize, span: &Span, regions: &[BlendRegion]) -> Residual {
    let mut ranges = RangeSet::from_range(span.range());
    for region in regions {
        ranges.subtract(&region.range());
    }
    Residual {
        owner,
        ranges,
        color: span.color.clone(),
    }
}

/// Classifies every span in `spans` (sorted by start) against `regions`.
pub fn classify(spans: &[Indexed], regions: &[BlendRegion]) -> Classification {
    let union = blend_union(regions);
    let mut classification = Classification::default();
    let mut partial = BTreeSet::new();
    let mut enclosing: Vec<usize> = Vec::new();

    for (position, entry) in spans.iter().enumerate() {
        match relation(&entry.span, &union, regions) {
            Relation::Partial => {
                classification.touched.insert(entry.index);
                partial.insert(position);
                classification
                    .residuals
                    .push(carve(position, &entry.span, regions));
            }
            Relation::FullyContained => {
                classification.touched.insert(entry.index);
                match smallest_enclosing(spans, &entry.span) {
                    Some(outer) if !enclosing.contains(&outer) => enclosing.push(outer),
                    Some(_) => {}
                    None => trace!("No enclosing span for span {}", entry.index),
                }
            }
            Relation::Disjoint => {}
        }
    }

    for outer in enclosing {
        let Some(entry) = spans.get(outer) else {
            continue;
        };
        classification.fully_contained.push(entry.index);
        if !partial.contains(&outer) {
            classification
                .residuals
                .push(carve(outer, &entry.span, regions));
        }
    }

    classification
}
