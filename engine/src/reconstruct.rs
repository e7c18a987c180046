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

//! Reconstruction of spans from residual position sets.

use crate::classify::Residual;
use crate::range::RangeSet;
use crate::span::{Indexed, Span};

/// Tag for a piece closing at `end`.
///
/// The owner wins when it closes there too; otherwise the first span closing at
/// `end` lends its tag, falling back to the owner's.
fn closing_tag(owner: Option<&Span>, end: usize, spans: &[Indexed]) -> Option<String> {
    if let Some(owner) = owner.filter(|owner| owner.end == end) {
        return owner.tag.clone();
    }
    spans
        .iter()
        .find(|entry| entry.span.end == end)
        .map(|entry| entry.span.tag.clone())
        .unwrap_or_else(|| owner.and_then(|owner| owner.tag.clone()))
}

fn pieces(
    ranges: &RangeSet,
    color: Option<&str>,
    owner: Option<&Span>,
    spans: &[Indexed],
) -> Vec<Span> {
    ranges
        .iter()
        .filter(|range| !range.is_empty())
        .map(|range| Span {
            start: range.start,
            end: range.end,
            tag: closing_tag(owner, range.end, spans),
            color: color.map(str::to_string),
            text: None,
        })
        .collect()
}

/// Turns a residual into one span per contiguous sub-range.
///
/// `spans` is the sorted span list the residual's owner indexes into. A residual
/// whose owner is missing produces nothing.
pub fn reconstruct(residual: &Residual, spans: &[Indexed]) -> Vec<Span> {
    match spans.get(residual.owner) {
        Some(owner) => pieces(
            &residual.ranges,
            residual.color.as_deref(),
            Some(&owner.span),
            spans,
        ),
        None => Vec::new(),
    }
}

/// Turns an explicit position sequence into one span per contiguous run.
///
/// Runs break wherever a position is not its predecessor plus one. Each span
/// takes its tag from the first span in `spans` that closes where the run ends.
pub fn reconstruct_positions(
    positions: &[usize],
    color: Option<&str>,
    spans: &[Indexed],
) -> Vec<Span> {
    let ranges = RangeSet::from_positions(positions.iter().copied());
    pieces(&ranges, color, None, spans)
}
