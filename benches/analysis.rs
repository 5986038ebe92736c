use criterion::{criterion_group, criterion_main, Criterion};
use mazes::masks::PassabilityMask;
use mazes::{analysis, generators, pathing};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_analyze_17(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(17);
    let layout = generators::solvable_maze(&mut rng, 17, "bench", 12).unwrap();

    c.bench_function("analyze_17", move |b| {
        b.iter(|| analysis::analyze(&layout))
    });
}

fn bench_distances_17(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(17);
    let layout = generators::solvable_maze(&mut rng, 17, "bench", 12).unwrap();
    let mask = PassabilityMask::from_layout(&layout);
    let start = layout.start();

    c.bench_function("distances_17", move |b| {
        b.iter(|| pathing::Distances::new(&mask, start))
    });
}

fn bench_generate_17(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(17);

    c.bench_function("generate_17", move |b| {
        b.iter(|| generators::solvable_maze(&mut rng, 17, "bench", 12))
    });
}

criterion_group!(benches,
    bench_analyze_17,
    bench_distances_17,
    bench_generate_17
);
criterion_main!(benches);
