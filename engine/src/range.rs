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

//! Integer position sets.
//!
//! [`expand`] turns a range into the explicit sequence of positions it covers.
//! [`RangeSet`] stores the same information as a normalized list of disjoint
//! sub-ranges, which is how residual ranges are carried between merge stages: a
//! hole of a single position is a split between two sub-ranges.

use std::ops::Range;

/// Iterator over every position of a range, in ascending order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Positions {
    next: usize,
    end: usize,
}

impl Iterator for Positions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next < self.end {
            let position = self.next;
            self.next += 1;
            Some(position)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}

/// Expands `range` into the positions it covers.
pub fn expand(range: &Range<usize>) -> Positions {
    Positions {
        next: range.start,
        end: range.end,
    }
}

/// An ordered set of positions stored as disjoint, non-adjacent, non-empty
/// sub-ranges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<Range<usize>>,
}

impl RangeSet {
    /// Creates an empty set.
    pub fn new() -> RangeSet {
        RangeSet::default()
    }

    /// Creates a set holding every position of `range`.
    pub fn from_range(range: Range<usize>) -> RangeSet {
        let mut set = RangeSet::new();
        set.insert(range);
        set
    }

    /// Rebuilds contiguous runs from a sequence of positions.
    ///
    /// A new sub-range starts wherever a position is not the previous one plus
    /// one. Out of order or repeated positions are folded in.
    pub fn from_positions<I>(positions: I) -> RangeSet
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = RangeSet::new();
        for position in positions {
            match set.ranges.last().map(|last| last.end) {
                Some(end) if end == position => {
                    if let Some(last) = set.ranges.last_mut() {
                        last.end += 1;
                    }
                }
                Some(end) if end < position => set.ranges.push(position..position + 1),
                Some(_) => set.insert(position..position + 1),
                None => set.ranges.push(position..position + 1),
            }
        }
        set
    }

    /// Adds every position of `range`, coalescing with touching sub-ranges.
    pub fn insert(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let mut merged = range;
        let mut placed = false;
        let mut ranges = Vec::with_capacity(self.ranges.len() + 1);
        for current in self.ranges.drain(..) {
            if current.end < merged.start {
                ranges.push(current);
            } else if merged.end < current.start {
                if !placed {
                    ranges.push(merged.clone());
                    placed = true;
                }
                ranges.push(current);
            } else {
                merged = merged.start.min(current.start)..merged.end.max(current.end);
            }
        }
        if !placed {
            ranges.push(merged);
        }
        self.ranges = ranges;
    }

    /// Removes every position of `cut`, splitting sub-ranges it bites into.
    pub fn subtract(&mut self, cut: &Range<usize>) {
        if cut.is_empty() {
            return;
        }
        let mut ranges = Vec::with_capacity(self.ranges.len() + 1);
        for current in self.ranges.drain(..) {
            if current.end <= cut.start || cut.end <= current.start {
                ranges.push(current);
                continue;
            }
            if current.start < cut.start {
                ranges.push(current.start..cut.start);
            }
            if cut.end < current.end {
                ranges.push(cut.end..current.end);
            }
        }
        self.ranges = ranges;
    }

    /// Returns `true` if `position` is in the set.
    pub fn contains(&self, position: usize) -> bool {
        let idx = self.ranges.partition_point(|r| r.end <= position);
        self.ranges.get(idx).is_some_and(|r| r.start <= position)
    }

    /// Returns `true` if every position of `range` is in the set.
    ///
    /// An empty range is always covered.
    pub fn covers(&self, range: &Range<usize>) -> bool {
        if range.is_empty() {
            return true;
        }
        let idx = self.ranges.partition_point(|r| r.end <= range.start);
        self.ranges
            .get(idx)
            .is_some_and(|r| r.start <= range.start && range.end <= r.end)
    }

    /// The parts of `range` that are not in the set.
    pub fn gaps_within(&self, range: &Range<usize>) -> RangeSet {
        let mut gaps = RangeSet::new();
        if range.is_empty() {
            return gaps;
        }
        let mut cursor = range.start;
        let first = self.ranges.partition_point(|r| r.end <= range.start);
        for current in &self.ranges[first..] {
            if current.start >= range.end {
                break;
            }
            if current.start > cursor {
                gaps.ranges.push(cursor..current.start);
            }
            cursor = cursor.max(current.end);
        }
        if cursor < range.end {
            gaps.ranges.push(cursor..range.end);
        }
        gaps
    }

    /// Iterates the sub-ranges in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, Range<usize>> {
        self.ranges.iter()
    }

    /// Iterates every position in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.ranges.iter().flat_map(expand)
    }

    /// Number of sub-ranges.
    pub fn count(&self) -> usize {
        self.ranges.len()
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.ranges.iter().map(|r| r.end - r.start).sum()
    }

    /// Returns `true` if the set holds no positions.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a Range<usize>;
    type IntoIter = std::slice::Iter<'a, Range<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
