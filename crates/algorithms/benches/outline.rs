//! Benchmarks for the border outline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use topogra_algorithms::morphology::{outline, OutlineParams};
use topogra_core::Raster;

/// Irregular coastline: filled where a cheap hash says land
fn create_test_raster(size: usize) -> Raster<u8> {
    let mut r = Raster::new(size, size);
    for row in 0..size {
        for col in 0..size {
            if (row * 7 + col * 13) % 5 < 2 && row > size / 8 && col > size / 8 {
                r.set(row, col, 1).unwrap();
            }
        }
    }
    r
}

fn bench_outline_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/outline");
    let params = OutlineParams::new(3, u8::MAX);
    for size in [256, 512, 1024, 2048] {
        let raster = create_test_raster(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| outline(black_box(&raster), &params).unwrap())
        });
    }
    group.finish();
}

fn bench_outline_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/outline_rounds");
    let raster = create_test_raster(512);
    for rounds in [1, 3, 10] {
        let params = OutlineParams::new(rounds, u8::MAX);
        group.bench_with_input(BenchmarkId::from_parameter(rounds), &rounds, |b, _| {
            b.iter(|| outline(black_box(&raster), &params).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_outline_size, bench_outline_rounds);
criterion_main!(benches);
