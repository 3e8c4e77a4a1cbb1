//! Benchmarks for the symbols pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use symbols::{render_picture, Config, PaletteCycler, RandomSampler, ShapeGenerator};

// -- Generation benchmarks --

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    group.bench_function("describe_30", |b| {
        b.iter(|| {
            let mut sampler = RandomSampler::new();
            ShapeGenerator::new(PaletteCycler::new(), &mut sampler).describe_all(black_box(30))
        })
    });

    group.bench_function("describe_1000", |b| {
        b.iter(|| {
            let mut sampler = RandomSampler::new();
            ShapeGenerator::new(PaletteCycler::new(), &mut sampler).describe_all(black_box(1000))
        })
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    for count in [0, 30, 300] {
        let config = Config {
            count,
            ..Config::default()
        };
        group.bench_function(format!("picture_{count}"), |b| {
            b.iter(|| {
                let mut sampler = RandomSampler::new();
                render_picture(black_box(&config), &mut sampler).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generation, bench_rendering);
criterion_main!(benches);
