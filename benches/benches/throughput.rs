//! Datagen Criterion Benchmark
//!
//! Generator and copier throughput across patterns, sizes and chunkings.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use datagen::{GeneratorRegistry, RandomSource, StreamCopier};
use std::hint::black_box;
use std::io;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

const KEYS: [&str; 9] = ["0", "f", "r", "ra", "ran", "ctr", "ctr2", "ctr4", "ctr8"];

// =============================================================================
// BENCHMARK 1: FILL
// =============================================================================

/// Raw `fill` throughput per pattern into one reused 64 KB buffer.
fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Fill");
    let registry = GeneratorRegistry::standard(&RandomSource::with_seed(1));

    let mut buffer = vec![0u8; 64 * KB];
    group.throughput(Throughput::Bytes(buffer.len() as u64));

    for key in KEYS {
        let generator = registry.resolve(key).unwrap();
        group.bench_function(BenchmarkId::from_parameter(key), |b| {
            b.iter(|| generator.fill(black_box(&mut buffer)).unwrap())
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: COPY
// =============================================================================

/// End-to-end copy into `io::sink()` for several request sizes.
fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Copy");
    group.sample_size(30);
    let registry = GeneratorRegistry::standard(&RandomSource::with_seed(2));
    let copier = StreamCopier::default();

    let sizes = [(64 * KB, "64KB"), (MB, "1MB"), (16 * MB, "16MB")];

    for key in ["0", "r", "ctr8"] {
        let generator = registry.resolve(key).unwrap();
        for (size, name) in sizes {
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(key, name),
                &(size as u64),
                |b, &total| b.iter(|| copier.copy(generator, &mut io::sink(), black_box(total)).unwrap()),
            );
        }
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: CHUNK SIZE
// =============================================================================

/// Effect of the working-buffer size on a 4 MB counter copy.
fn bench_chunk_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Chunk-Size");
    let registry = GeneratorRegistry::standard(&RandomSource::with_seed(3));
    let generator = registry.resolve("ctr4").unwrap();

    let total = 4 * MB;
    group.throughput(Throughput::Bytes(total as u64));

    for chunk in [512, 4 * KB, 64 * KB, MB] {
        let copier = StreamCopier::new(chunk).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(chunk), &copier, |b, copier| {
            b.iter(|| copier.copy(generator, &mut io::sink(), total as u64).unwrap())
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: CONTENTION
// =============================================================================

/// One shared counter filled from 1 to N Rayon workers.
fn bench_contention(c: &mut Criterion) {
    use rayon::prelude::*;

    let mut group = c.benchmark_group("4-Contention");
    group.sample_size(30);
    let registry = GeneratorRegistry::standard(&RandomSource::with_seed(4));
    let generator = registry.resolve("ctr8").unwrap();

    let fills = 64;
    group.throughput(Throughput::Bytes((fills * 64 * KB) as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{threads}threads")),
            &threads,
            |b, _| {
                pool.install(|| {
                    b.iter(|| {
                        (0..fills).into_par_iter().for_each(|_| {
                            let mut buf = vec![0u8; 64 * KB];
                            generator.fill(&mut buf).unwrap();
                            black_box(&buf);
                        });
                    })
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_fill,
    bench_copy,
    bench_chunk_size,
    bench_contention
);
criterion_main!(benches);
