#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for scheme generation and grid selection.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use palette_gen::prelude::*;

fn generate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for model in [SchemeModel::Lch, SchemeModel::Hsl] {
        group.bench_with_input(
            BenchmarkId::from_parameter(model.name()),
            &model,
            |b, &model| {
                b.iter(|| generate_from_input(black_box("#007bff"), model));
            },
        );
    }

    group.finish();
}

fn select_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    let schemes = generate_from_input("#3fa34d", SchemeModel::Lch);

    for limit in [4, 12, 24] {
        group.bench_with_input(BenchmarkId::new("unique", limit), &limit, |b, &limit| {
            b.iter(|| get_unique_colors(black_box(&schemes), limit));
        });

        group.bench_with_input(BenchmarkId::new("grid_all", limit), &limit, |b, &limit| {
            b.iter(|| grid_items(black_box(&schemes), ActiveScheme::All, limit));
        });
    }

    group.finish();
}

criterion_group!(benches, generate_benchmark, select_benchmark);
criterion_main!(benches);
