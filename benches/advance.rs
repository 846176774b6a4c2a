//! Benchmarks for the per-frame simulation step.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swirl::prelude::*;

const DT: f32 = 1.0 / 60.0;

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for count in [1_000, 8_000, 50_000] {
        group.bench_function(BenchmarkId::new("idle", count), |b| {
            let mut system = ParticleSystem::builder()
                .with_count(count)
                .with_seed(42)
                .build()
                .expect("valid count");
            let frame = GestureFrame::none();
            b.iter(|| {
                system.advance(black_box(DT), &frame, None);
            })
        });

        group.bench_function(BenchmarkId::new("pinch", count), |b| {
            let mut system = ParticleSystem::builder()
                .with_count(count)
                .with_seed(42)
                .build()
                .expect("valid count");
            let frame = GestureFrame::single(Gesture::Pinch, 0.3, 0.7);
            b.iter(|| {
                system.advance(black_box(DT), &frame, None);
            })
        });

        group.bench_function(BenchmarkId::new("chaos", count), |b| {
            let mut system = ParticleSystem::builder()
                .with_count(count)
                .with_seed(42)
                .build()
                .expect("valid count");
            let frame = GestureFrame::single(Gesture::Open, 0.5, 0.5);
            b.iter(|| {
                system.advance(black_box(DT), &frame, None);
            })
        });
    }

    group.finish();
}

fn bench_shape_generation(c: &mut Criterion) {
    use swirl::shape::ShapeGenerator;

    let mut group = c.benchmark_group("shapes");
    group.bench_function("galaxy_8000", |b| {
        b.iter(|| {
            let mut gen = ShapeGenerator::new(8_000, 42);
            black_box(gen.galaxy())
        })
    });
    group.bench_function("text_8000", |b| {
        b.iter(|| black_box(swirl::text::generate_positions("SWIRL", 8_000, 42)))
    });
    group.finish();
}

criterion_group!(benches, bench_advance, bench_shape_generation);
criterion_main!(benches);
