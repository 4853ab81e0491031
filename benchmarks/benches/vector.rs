// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use rampart::Vector;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench vector
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

// =============================================================================
// Growth
// =============================================================================

fn bench_push_from_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_from_empty");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vector", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vector::new();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_push_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_reserved");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec = Vec::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vector", size), &size, |b, &s| {
            let mut vec = Vector::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(&vec);
            });
        });
    }

    group.finish();
}

// =============================================================================
// Copy
// =============================================================================

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let std_source: Vec<String> = (0..size).map(|i| i.to_string()).collect();
        group.bench_with_input(BenchmarkId::new("Vec", size), &std_source, |b, src| {
            b.iter(|| black_box(src.clone()));
        });

        let source: Vector<String> = (0..size).map(|i| i.to_string()).collect();
        group.bench_with_input(BenchmarkId::new("Vector", size), &source, |b, src| {
            b.iter(|| black_box(src.clone()));
        });
    }

    group.finish();
}

// =============================================================================
// Access
// =============================================================================

fn bench_checked_vs_unchecked(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_sum");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let vec: Vector<u64> = (0..size as u64).collect();

        group.bench_with_input(BenchmarkId::new("at", size), &vec, |b, v| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..v.len() {
                    sum = sum.wrapping_add(*v.at(i).unwrap_or(&0));
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("get_unchecked", size), &vec, |b, v| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..v.len() {
                    // SAFETY: i < len
                    sum = sum.wrapping_add(unsafe { *v.get_unchecked(i) });
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("clear");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vector<String>", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s).map(|i| i.to_string()).collect::<Vector<String>>(),
                |mut vec| {
                    vec.clear();
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    vector_benches,
    bench_push_from_empty,
    bench_push_reserved,
    bench_clone,
    bench_checked_vs_unchecked,
    bench_clear
);

criterion_main!(vector_benches);
