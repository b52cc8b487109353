// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for page geometry and the scroll-driven visibility scans.
//!
//! Measures the performance of:
//! - Layout computation (runs on every resize)
//! - The center-band section scan (runs on every scroll event)
//! - The reveal trigger scan across a full page of scroll positions

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_landing::page::{CenterBand, PageLayout, RevealAnimator};
use std::hint::black_box;
use std::time::Instant;

const VIEWPORT: Size = Size {
    width: 1100.0,
    height: 800.0,
};

fn bench_layout_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_layout");

    group.bench_function("compute", |b| {
        b.iter(|| PageLayout::compute(black_box(VIEWPORT)));
    });

    group.finish();
}

fn bench_visibility_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility");
    let layout = PageLayout::compute(VIEWPORT);

    // One section lookup per simulated scroll frame, top to bottom.
    group.bench_function("section_at_full_page", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            let mut y = 0.0;
            while y < layout.total_height() {
                let band = CenterBand::at(black_box(y), VIEWPORT.height);
                if layout.section_at(&band).is_some() {
                    hits += 1;
                }
                y += 16.0;
            }
            hits
        });
    });

    // A full scroll through the page, promoting every reveal target.
    group.bench_function("reveal_scan_full_page", |b| {
        b.iter(|| {
            let mut reveal = RevealAnimator::new(true);
            let now = Instant::now();
            let mut promoted = 0usize;
            let mut y = 0.0;
            while y < layout.total_height() {
                promoted += reveal.observe(&layout, black_box(y), VIEWPORT.height, now);
                y += 16.0;
            }
            promoted
        });
    });

    group.finish();
}

criterion_group!(benches, bench_layout_compute, bench_visibility_scans);
criterion_main!(benches);
