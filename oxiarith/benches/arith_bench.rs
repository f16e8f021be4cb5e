//! Performance benchmarks for oxiarith
//!
//! This benchmark suite evaluates:
//! - Compression/decompression throughput per data pattern
//! - Linear versus Fenwick-tree model cost
//! - Effect of the code width presets

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxiarith::{ArithConfig, ModelKind, compress_to_vec, decompress_to_vec};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - all bytes are the same (best compression)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - no patterns (worst compression)
    pub fn random(size: usize) -> Vec<u8> {
        let mut seed: u64 = 0x123456789ABCDEF0;
        (0..size)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                (seed >> 32) as u8
            })
            .collect()
    }

    /// Text-like data
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        text.iter().copied().cycle().take(size).collect()
    }

    /// Skewed distribution - a handful of symbols dominate
    pub fn skewed(size: usize) -> Vec<u8> {
        let mut seed: u64 = 0x0F1E2D3C4B5A6978;
        (0..size)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                let r = (seed >> 40) as u32;
                (r.trailing_zeros().min(15) as u8) * 17
            })
            .collect()
    }
}

const SIZE: usize = 256 * 1024;

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
    ("skewed", test_data::skewed as PatternGenerator),
];

/// Benchmark compression speed per pattern and model
fn bench_compression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_speed");

    for (pattern_name, generator) in PATTERNS {
        let data = generator(SIZE);
        for model in [ModelKind::Linear, ModelKind::Tree] {
            let config = ArithConfig::PRECISE.with_model(model);
            let id = format!("{}/{}", model, pattern_name);

            group.throughput(Throughput::Bytes(SIZE as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| {
                    let compressed = compress_to_vec(black_box(data), config).unwrap();
                    black_box(compressed);
                });
            });
        }
    }

    group.finish();
}

/// Benchmark decompression speed per pattern and model
fn bench_decompression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_speed");

    for (pattern_name, generator) in PATTERNS {
        let original = generator(SIZE);
        for model in [ModelKind::Linear, ModelKind::Tree] {
            let config = ArithConfig::PRECISE.with_model(model);
            let compressed = compress_to_vec(&original, config).unwrap();
            let id = format!("{}/{}", model, pattern_name);

            group.throughput(Throughput::Bytes(SIZE as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &compressed, |b, data| {
                b.iter(|| {
                    let decompressed = decompress_to_vec(black_box(data), config).unwrap();
                    black_box(decompressed);
                });
            });
        }
    }

    group.finish();
}

/// Benchmark the code width presets on text
fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("presets");
    let data = test_data::text_like(SIZE);

    let presets = [
        ("compact", ArithConfig::COMPACT),
        ("balanced", ArithConfig::BALANCED),
        ("precise", ArithConfig::PRECISE),
    ];

    for (name, config) in presets {
        group.throughput(Throughput::Bytes(SIZE as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let compressed = compress_to_vec(black_box(data), config).unwrap();
                let decompressed = decompress_to_vec(&compressed, config).unwrap();
                black_box(decompressed);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_speed,
    bench_decompression_speed,
    bench_presets
);
criterion_main!(benches);
