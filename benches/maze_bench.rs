use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;

use maze_runner::{SessionRng, carve_maze, solve};

fn bench_generate(rows: usize, cols: usize) {
    let mut rng = SessionRng::from_random();
    carve_maze(rows, cols, &mut rng).unwrap();
}

fn bench_generate_and_solve(rows: usize, cols: usize) {
    let mut rng = SessionRng::from_random();
    let grid = carve_maze(rows, cols, &mut rng).unwrap();
    solve(&grid, grid.entrance(), grid.exit()).unwrap();
}

fn maze_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("maze");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(50)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("generate_21x21", |b| b.iter(|| bench_generate(21, 21)));

    group.bench_function("generate_101x101", |b| b.iter(|| bench_generate(101, 101)));

    group.bench_function("generate_and_solve_101x101", |b| {
        b.iter(|| bench_generate_and_solve(101, 101))
    });

    group.finish();
}

criterion_group!(benches, maze_bench);
criterion_main!(benches);
