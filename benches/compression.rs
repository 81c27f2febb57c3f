use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use conceptlab::domain::compression::{
    build_frequency_ranks, run_length_encode, windowed_match, WindowSize,
};

const TEXT: &str = "It was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of Light, it was the season of Darkness, it was the spring \
of hope, it was the winter of despair.";

fn bench_rank_coding(c: &mut Criterion) {
    c.bench_function("rank coding", |b| {
        b.iter(|| build_frequency_ranks(black_box(TEXT)))
    });
}

fn bench_windowed_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowed match");
    for window in WindowSize::PRESETS {
        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, &window| {
            b.iter(|| windowed_match(black_box(TEXT), WindowSize::new(window)).count())
        });
    }
    group.finish();
}

fn bench_run_length(c: &mut Criterion) {
    let runs = "AAAAAABBBBBBCCCCCCDDDDDDEEEEEEAAAAAA".repeat(32);
    c.bench_function("run length", |b| {
        b.iter(|| run_length_encode(black_box(&runs)))
    });
}

criterion_group!(
    benches,
    bench_rank_coding,
    bench_windowed_match,
    bench_run_length
);
criterion_main!(benches);
