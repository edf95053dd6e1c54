#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark comparing Cohen-Sutherland and Liang-Barsky clipping.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_raster::prelude::*;

fn segments(count: usize) -> Vec<Line> {
    // Deterministic spread: inside, crossing and fully outside segments.
    (0..count)
        .map(|i| {
            let t = i as f64;
            Line::from_coords(
                (t * 37.0) % 1000.0 - 100.0,
                (t * 53.0) % 800.0 - 100.0,
                (t * 71.0) % 1000.0 - 100.0,
                (t * 29.0) % 800.0 - 100.0,
            )
        })
        .collect()
}

fn clip_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip");
    let window = ClipWindow::from_bounds(100.0, 100.0, 700.0, 500.0);

    for count in [100, 10_000] {
        let lines = segments(count);
        for algorithm in [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky] {
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm:?}"), count),
                &lines,
                |b, lines| {
                    b.iter(|| {
                        lines
                            .iter()
                            .filter(|&&line| algorithm.clip(black_box(line), &window).is_accepted())
                            .count()
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, clip_benchmark);
criterion_main!(benches);
