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

//! Integration tests for markblend-engine
//!
//! These tests drive the full merge pipeline through the public API and check
//! the partition invariants over generated inputs.

use markblend_engine::range::RangeSet;
use markblend_engine::{MergeError, Merger, MixBlend, Partition, Span, merge};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn concat(a: &str, b: &str) -> String {
    format!("{}+{}", a, b)
}

fn colored(start: usize, end: usize, color: &str) -> Span {
    Span::new(start, end).with_color(color)
}

fn merge_concat(spans: &[Span]) -> Partition {
    Merger::with_blender(concat).merge(spans).expect("merge")
}

fn summary(spans: &[Span]) -> Vec<(usize, usize, Option<&str>, Option<&str>)> {
    spans
        .iter()
        .map(|s| (s.start, s.end, s.color.as_deref(), s.tag.as_deref()))
        .collect()
}

fn coverage(spans: &[Span]) -> RangeSet {
    let mut set = RangeSet::new();
    for span in spans {
        set.insert(span.range());
    }
    set
}

fn assert_disjoint(spans: &[Span]) {
    for (i, a) in spans.iter().enumerate() {
        for b in &spans[i + 1..] {
            assert!(
                a.start >= b.end || b.start >= a.end,
                "{:?} overlaps {:?}",
                a.range(),
                b.range()
            );
        }
    }
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_partial_overlap_splits_in_three() {
    let partition = merge_concat(&[colored(0, 10, "red"), colored(5, 15, "blue")]);
    assert_eq!(
        summary(&partition.spans),
        vec![
            (0, 5, Some("red"), None),
            (5, 10, Some("red+blue"), None),
            (10, 15, Some("blue"), None),
        ]
    );
    assert_eq!(partition.blend_indices, vec![0, 1]);
}

#[test]
fn test_nested_span_keeps_outer_tag() {
    let partition = merge_concat(&[
        colored(0, 20, "red").with_tag("A"),
        colored(5, 10, "blue").with_tag("B"),
    ]);
    assert_eq!(
        summary(&partition.spans),
        vec![
            (0, 5, Some("red"), Some("A")),
            (5, 10, Some("red+blue"), Some("B")),
            (10, 20, Some("red"), Some("A")),
        ]
    );
    assert_eq!(partition.blend_indices, vec![0, 1]);
}

#[test]
fn test_identical_duplicates_collapse() {
    let span = colored(0, 5, "red").with_tag("A");
    let partition = merge(&[span.clone(), span]).expect("merge");
    assert_eq!(
        summary(&partition.spans),
        vec![(0, 5, Some("red"), Some("A"))]
    );
    assert_eq!(partition.blend_indices, vec![0, 1]);
}

#[test]
fn test_uncolored_disjoint_unchanged() {
    let spans = vec![Span::new(0, 5), Span::new(10, 15)];
    let partition = merge(&spans).expect("merge");
    assert_eq!(partition.spans, spans);
    assert!(partition.blend_indices.is_empty());
}

// ============================================================================
// Blending
// ============================================================================

#[test]
fn test_equal_ranges_blend_both_colors() {
    let partition = merge_concat(&[colored(0, 5, "red"), colored(0, 5, "blue")]);
    assert_eq!(summary(&partition.spans), vec![(0, 5, Some("red+blue"), None)]);
    assert_eq!(partition.blend_indices, vec![0, 1]);
}

#[test]
fn test_blend_order_follows_start_not_input_order() {
    let forward = merge_concat(&[colored(0, 10, "red"), colored(5, 15, "blue")]);
    let backward = merge_concat(&[colored(5, 15, "blue"), colored(0, 10, "red")]);
    assert_eq!(forward.spans, backward.spans);
    assert_eq!(backward.blend_indices, vec![0, 1]);
}

#[test]
fn test_default_blend_mixes_channels() {
    let partition = Merger::with_blender(MixBlend)
        .merge(&[colored(0, 4, "#000000"), colored(2, 6, "#ffffff")])
        .expect("merge");
    assert_eq!(partition.spans[1].color.as_deref(), Some("#808080"));
}

#[test]
fn test_blend_indices_are_input_positions() {
    let partition = merge_concat(&[
        colored(30, 40, "green"),
        colored(5, 15, "blue"),
        colored(50, 60, "white"),
        colored(0, 10, "red"),
    ]);
    assert_eq!(partition.blend_indices, vec![1, 3]);
    assert!(partition.is_blended(3));
    assert!(!partition.is_blended(0));
}

#[test]
fn test_uncolored_spans_never_blend() {
    let partition = merge_concat(&[colored(0, 10, "red"), Span::new(5, 15).with_tag("X")]);
    assert!(partition.blend_indices.is_empty());
    assert_eq!(partition.spans.len(), 2);
}

#[test]
fn test_uncolored_span_keeps_its_stretch() {
    let partition = merge_concat(&[
        colored(0, 10, "red"),
        colored(5, 15, "blue"),
        Span::new(2, 4).with_tag("X"),
    ]);
    assert_eq!(
        summary(&partition.spans),
        vec![
            (0, 2, Some("red"), None),
            (2, 4, None, Some("X")),
            (4, 5, Some("red"), None),
            (5, 10, Some("red+blue"), None),
            (10, 15, Some("blue"), None),
        ]
    );
    assert_eq!(partition.blend_indices, vec![0, 1]);
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_adjacent_spans_do_not_blend() {
    let spans = vec![colored(0, 5, "red"), colored(5, 10, "blue")];
    let partition = merge(&spans).expect("merge");
    assert_eq!(partition.spans, spans);
    assert!(partition.blend_indices.is_empty());
}

#[test]
fn test_single_position_overlap_splits_remainders() {
    let partition = merge_concat(&[colored(0, 5, "red"), colored(4, 9, "blue")]);
    assert_eq!(
        summary(&partition.spans),
        vec![
            (0, 4, Some("red"), None),
            (4, 5, Some("red+blue"), None),
            (5, 9, Some("blue"), None),
        ]
    );
}

#[test]
fn test_empty_input() {
    let partition = merge(&[]).expect("merge");
    assert!(partition.spans.is_empty());
    assert!(partition.blend_indices.is_empty());
}

#[test]
fn test_invalid_range_rejected() {
    let err = merge(&[Span::new(0, 5), Span::new(8, 2)]).unwrap_err();
    assert_eq!(
        err,
        MergeError::InvalidRange {
            index: 1,
            start: 8,
            end: 2
        }
    );
}

#[test]
fn test_untouched_span_keeps_text() {
    let partition = merge_concat(&[
        colored(0, 5, "red").with_text("hello"),
        colored(10, 15, "blue").with_text("world"),
        colored(12, 20, "green"),
    ]);
    assert_eq!(partition.spans[0].text.as_deref(), Some("hello"));
    assert_eq!(partition.spans[1].range(), 10..12);
    assert_eq!(partition.spans[1].text, None);
    assert_eq!(partition.blend_indices, vec![1, 2]);
}

#[test]
fn test_input_is_not_modified() {
    let spans = vec![colored(5, 15, "blue"), colored(0, 10, "red")];
    let before = spans.clone();
    merge(&spans).expect("merge");
    assert_eq!(spans, before);
}

// ============================================================================
// Properties
// ============================================================================

fn colored_span() -> impl Strategy<Value = Span> {
    (
        0usize..40,
        1usize..15,
        prop::sample::select(vec!["red", "blue", "#00ff00", "yellow"]),
        prop::option::of(prop::sample::select(vec!["A", "B", "C"])),
    )
        .prop_map(|(start, len, color, tag)| {
            let span = colored(start, start + len, color);
            match tag {
                Some(tag) => span.with_tag(tag),
                None => span,
            }
        })
}

fn disjoint_spans() -> impl Strategy<Value = Vec<Span>> {
    prop::collection::vec((0usize..5, 1usize..8), 0..10).prop_map(|steps| {
        let mut cursor = 0;
        steps
            .into_iter()
            .map(|(gap, len)| {
                let span = colored(cursor + gap, cursor + gap + len, "red");
                cursor += gap + len;
                span
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_output_never_overlaps(spans in prop::collection::vec(colored_span(), 0..12)) {
        let partition = merge(&spans).expect("merge");
        assert_disjoint(&partition.spans);
        prop_assert!(partition.spans.iter().all(|span| !span.is_empty()));
    }

    #[test]
    fn prop_coverage_preserved(spans in prop::collection::vec(colored_span(), 0..12)) {
        let partition = merge(&spans).expect("merge");
        prop_assert_eq!(coverage(&partition.spans), coverage(&spans));
    }

    #[test]
    fn prop_disjoint_input_unchanged(spans in disjoint_spans()) {
        let mut shuffled = spans.clone();
        shuffled.reverse();
        let partition = merge(&shuffled).expect("merge");
        prop_assert_eq!(partition.spans, spans);
        prop_assert!(partition.blend_indices.is_empty());
    }

    #[test]
    fn prop_merge_is_idempotent(spans in prop::collection::vec(colored_span(), 0..12)) {
        let once = merge(&spans).expect("merge");
        let twice = merge(&once.spans).expect("merge");
        prop_assert_eq!(twice.spans, once.spans);
        prop_assert!(twice.blend_indices.is_empty());
    }

    #[test]
    fn prop_blend_indices_are_overlapping_spans(spans in prop::collection::vec(colored_span(), 0..12)) {
        let partition = merge(&spans).expect("merge");
        let expected: Vec<usize> = (0..spans.len())
            .filter(|&i| {
                spans
                    .iter()
                    .enumerate()
                    .any(|(j, other)| i != j && spans[i].intersects(other))
            })
            .collect();
        prop_assert_eq!(partition.blend_indices, expected);
    }

    #[test]
    fn prop_output_tags_come_from_input(spans in prop::collection::vec(colored_span(), 0..12)) {
        let partition = merge(&spans).expect("merge");
        let tags: BTreeSet<_> = spans.iter().map(|span| span.tag.clone()).collect();
        prop_assert!(partition.spans.iter().all(|span| tags.contains(&span.tag)));
    }
}
