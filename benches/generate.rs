use criterion::{Criterion, black_box, criterion_group, criterion_main};

use planet_maker::{NoiseParameters, Palette, PlanetGenerator};

fn params() -> NoiseParameters {
    NoiseParameters::new(4.0, 8, 0.5, 2.0, 42).unwrap()
}

fn bench_generate_64(c: &mut Criterion) {
    let generator = PlanetGenerator::new(Palette::Earth, params());

    c.bench_function("generate_64", |b| {
        b.iter(|| generator.render(black_box(64)).unwrap());
    });
}

fn bench_generate_512(c: &mut Criterion) {
    let generator = PlanetGenerator::new(Palette::Mars, params());

    c.bench_function("generate_512", |b| {
        b.iter(|| generator.render(black_box(512)).unwrap());
    });
}

fn bench_generate_512_parallel(c: &mut Criterion) {
    let generator = PlanetGenerator::new(Palette::Mars, params());

    c.bench_function("generate_512_parallel", |b| {
        b.iter(|| generator.render_parallel(black_box(512)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_generate_64,
    bench_generate_512,
    bench_generate_512_parallel
);
criterion_main!(benches);
