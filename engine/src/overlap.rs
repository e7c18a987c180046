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

//! Pairwise overlap detection between colored spans.

use crate::span::{BlendRegion, Indexed, Span};
use markblend_color::ColorBlend;
use std::ops::Range;
use tracing::trace;

/// Range where `later` overlaps `earlier`, if any.
///
/// `earlier` must not start after `later`. Two rules apply in order:
///
/// 1. `earlier` closes inside `later`: the overlap runs from `later.start` to
///    `earlier.end`.
/// 2. `earlier` closes at or after a non-empty `later`: the overlap is all of
///    `later`.
///
/// Spans that only touch do not overlap.
pub fn overlap_range(earlier: &Span, later: &Span) -> Option<Range<usize>> {
    if later.start < earlier.end && earlier.end <= later.end {
        Some(later.start..earlier.end)
    } else if earlier.end >= later.end && later.end > later.start && earlier.end >= later.start {
        Some(later.start..later.end)
    } else {
        None
    }
}

/// Finds every blend region between pairs of colored spans.
///
/// `spans` must be sorted by start. Each span is compared with every span after
/// it; both must carry a color. The region color is `blend(earlier, later)` and
/// the region takes the later span's tag. Regions are returned in scan order and
/// may repeat; callers deduplicate them.
pub fn detect_overlaps<B>(spans: &[Indexed], blender: &B) -> Vec<BlendRegion>
where
    B: ColorBlend + ?Sized,
{
    let mut regions = Vec::new();
    for (position, earlier) in spans.iter().enumerate() {
        let Some(earlier_color) = earlier.span.color.as_deref() else {
            continue;
        };
        for later in &spans[position + 1..] {
            let Some(later_color) = later.span.color.as_deref() else {
                continue;
            };
            if let Some(range) = overlap_range(&earlier.span, &later.span) {
                trace!(
                    "Span {} overlaps span {} over {:?}",
                    earlier.index, later.index, range
                );
                regions.push(BlendRegion {
                    start: range.start,
                    end: range.end,
                    color: blender.blend(earlier_color, later_color),
                    tag: later.span.tag.clone(),
                });
            }
        }
    }
    regions
}
