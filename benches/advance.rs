use criterion::{criterion_group, criterion_main, Criterion};
use sparse_life::{patterns, Engine, SparseEngine};

fn bench_random_soup(c: &mut Criterion) {
    const N: usize = 1 << 7;
    let mut life = SparseEngine::random(N, N, 0.3, Some(42)).unwrap();
    c.bench_function("random_soup_128", |b| b.iter(|| life.advance()));
}

fn bench_glider_gun(c: &mut Criterion) {
    let seed = patterns::find("gosper glider gun").unwrap().seed().unwrap();
    let mut life = SparseEngine::new(seed);
    // the gun keeps emitting gliders, so the population grows slowly
    life.update(300);
    c.bench_function("glider_gun", |b| b.iter(|| life.advance()));
}

fn bench_r_pentomino(c: &mut Criterion) {
    let seed = patterns::find("r-pentomino").unwrap().seed().unwrap();
    c.bench_function("r_pentomino_100", |b| {
        b.iter(|| {
            let mut life = SparseEngine::new(seed.clone());
            life.update(100);
            life.population()
        })
    });
}

criterion_group!(
    benches,
    bench_random_soup,
    bench_glider_gun,
    bench_r_pentomino,
);
criterion_main!(benches);
