// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for scroll-driven activity tracking.
//!
//! Measures the performance of:
//! - Scoring a long list of rows against the viewport
//! - A burst of scroll events coalesced into one frame computation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use folio::ui::activity::{most_visible, StackedLayout, Tracker};
use std::hint::black_box;

const VIEWPORT_HEIGHT: f32 = 700.0;

fn layout(rows: usize) -> StackedLayout {
    StackedLayout::uniform(rows, 150.0, 16.0)
        .with_leading(136.0)
        .with_viewport_height(VIEWPORT_HEIGHT)
}

/// Benchmark a single most-visible computation over lists of growing length.
fn bench_most_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("activity_tracking");

    for rows in [10_usize, 100, 1_000] {
        let mut layout = layout(rows);
        layout.set_scroll_offset(layout.content_height() / 2.0);

        group.bench_with_input(BenchmarkId::new("most_visible", rows), &layout, |b, layout| {
            b.iter(|| black_box(most_visible(layout.rows(), VIEWPORT_HEIGHT, None)));
        });
    }

    group.finish();
}

/// Benchmark a frame's worth of scroll events followed by the frame itself.
fn bench_scroll_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("activity_tracking");
    let mut layout = layout(100);
    let mut tracker = Tracker::new(None);
    tracker.attach();

    group.bench_function("scroll_burst_then_frame", |b| {
        let mut offset = 0.0_f32;
        b.iter(|| {
            for _ in 0..16 {
                offset = (offset + 7.0) % layout.content_height();
                layout.set_scroll_offset(offset);
                tracker.on_scroll();
            }
            black_box(tracker.on_frame(layout.rows(), VIEWPORT_HEIGHT));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_most_visible, bench_scroll_burst);
criterion_main!(benches);
