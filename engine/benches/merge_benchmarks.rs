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

//! Benchmarks for span merging

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use markblend_engine::range::RangeSet;
use markblend_engine::{Merger, Span, merge};
use std::hint::black_box;

const COLORS: [&str; 4] = ["red", "#3366cc", "green", "rgb(200, 120, 0)"];

// Spans laid end to end with no overlap
fn disjoint_spans(count: usize) -> Vec<Span> {
    (0..count)
        .map(|i| Span::new(i * 10, i * 10 + 8).with_color(COLORS[i % COLORS.len()]))
        .collect()
}

// Each span overlaps its neighbours
fn chained_spans(count: usize) -> Vec<Span> {
    (0..count)
        .map(|i| {
            Span::new(i * 10, i * 10 + 15)
                .with_color(COLORS[i % COLORS.len()])
                .with_tag(format!("T{}", i % 3))
        })
        .collect()
}

// One long span with many short spans inside it
fn nested_spans(count: usize) -> Vec<Span> {
    let mut spans = vec![Span::new(0, count * 10).with_color("yellow").with_tag("OUTER")];
    spans.extend(
        (0..count).map(|i| Span::new(i * 10 + 2, i * 10 + 6).with_color(COLORS[i % COLORS.len()])),
    );
    spans
}

// Benchmark the no-overlap fast path
fn bench_merge_disjoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_disjoint");

    for size in [10, 100, 500].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let spans = disjoint_spans(size);
            b.iter(|| {
                let partition = merge(black_box(&spans)).unwrap();
                black_box(partition);
            });
        });
    }
    group.finish();
}

// Benchmark overlapping chains
fn bench_merge_chained(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_chained");

    for size in [10, 50, 200].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let spans = chained_spans(size);
            b.iter(|| {
                let partition = merge(black_box(&spans)).unwrap();
                black_box(partition);
            });
        });
    }
    group.finish();
}

// Benchmark a long span bitten by many inner spans
fn bench_merge_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_nested");

    for size in [10, 50, 200].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let spans = nested_spans(size);
            b.iter(|| {
                let partition = merge(black_box(&spans)).unwrap();
                black_box(partition);
            });
        });
    }
    group.finish();
}

// Benchmark with a trivial blend to isolate the interval work
fn bench_merge_custom_blend(c: &mut Criterion) {
    c.bench_function("merge_custom_blend", |b| {
        let merger = Merger::with_blender(|a: &str, _: &str| a.to_string());
        let spans = chained_spans(100);
        b.iter(|| {
            let partition = merger.merge(black_box(&spans)).unwrap();
            black_box(partition);
        });
    });
}

// Benchmark range set construction from explicit positions
fn bench_range_set_from_positions(c: &mut Criterion) {
    c.bench_function("range_set_from_positions", |b| {
        let positions: Vec<usize> = (0..10_000).filter(|p| p % 7 != 0).collect();
        b.iter(|| {
            let set = RangeSet::from_positions(black_box(positions.iter().copied()));
            black_box(set);
        });
    });
}

criterion_group!(
    benches,
    bench_merge_disjoint,
    bench_merge_chained,
    bench_merge_nested,
    bench_merge_custom_blend,
    bench_range_set_from_positions,
);
criterion_main!(benches);
