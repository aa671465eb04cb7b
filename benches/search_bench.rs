use criterion::{criterion_group, criterion_main, Criterion};
use grid_replay::{find_path, Coordinate, PathingGrid};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_grids(n: usize, count: usize, density: f64) -> Vec<PathingGrid> {
    let mut rng = StdRng::seed_from_u64(0);
    let last = n as i32 - 1;
    (0..count)
        .map(|_| {
            let mut grid =
                PathingGrid::new(n, Coordinate::new(0, 0), Coordinate::new(last, last)).unwrap();
            for row in 0..n as i32 {
                for col in 0..n as i32 {
                    let coord = Coordinate::new(row, col);
                    if !grid.is_protected(&coord) && rng.gen_bool(density) {
                        grid.set_obstacle(coord, true).unwrap();
                    }
                }
            }
            grid.update();
            grid
        })
        .collect()
}

fn random_bench(c: &mut Criterion) {
    for n in [10, 64, 256] {
        let grids = random_grids(n, 16, 0.3);
        c.bench_function(format!("uniform cost, {n}x{n}").as_str(), |b| {
            b.iter(|| {
                for grid in &grids {
                    black_box(find_path(grid, grid.start(), grid.goal()).ok());
                }
            })
        });
    }
}

fn open_bench(c: &mut Criterion) {
    let n = 256;
    let grid = random_grids(n, 1, 0.0).remove(0);
    c.bench_function(format!("uniform cost, open {n}x{n}").as_str(), |b| {
        b.iter(|| black_box(find_path(&grid, grid.start(), grid.goal()).ok()))
    });
}

criterion_group!(benches, random_bench, open_bench);
criterion_main!(benches);
