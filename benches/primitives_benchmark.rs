//! Benchmark for canvas drawing primitives.

#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pincel::prelude::*;

fn clear_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_clear");

    for (width, height) in [(800, 600), (1920, 1080)] {
        let mut s = Surface::new(width, height, PixelFormat::Argb8888).unwrap();
        s.set_draw_color(Rgba::RED);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| {
                b.iter(|| {
                    s.clear();
                });
            },
        );
    }

    group.finish();
}

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");

    let mut s = Surface::new(800, 600, PixelFormat::Argb8888).unwrap();
    s.set_draw_color(Rgba::BLUE);

    group.bench_function("diagonal_800x600", |b| {
        b.iter(|| {
            s.draw_line(
                black_box(Position::new(0, 0)),
                black_box(Position::new(799, 599)),
            );
        });
    });

    group.bench_function("shallow_800x600", |b| {
        b.iter(|| {
            s.draw_line(
                black_box(Position::new(0, 550)),
                black_box(Position::new(799, 580)),
            );
        });
    });

    group.finish();
}

fn ellipse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ellipse");

    let mut s = Surface::new(800, 600, PixelFormat::Argb8888).unwrap();
    s.set_draw_color(Rgba::MAGENTA);

    group.bench_function("draw_ellipse_250x150", |b| {
        b.iter(|| {
            s.draw_ellipse(black_box(Position::new(400, 300)), 250, 150);
        });
    });

    group.bench_function("fill_ellipse_rect_500x300", |b| {
        b.iter(|| {
            s.fill_ellipse_rect(black_box(Rect::new(150, 150, 500, 300)));
        });
    });

    group.finish();
}

criterion_group!(benches, clear_benchmark, line_benchmark, ellipse_benchmark);
criterion_main!(benches);
