//! Benchmarks for the randomized minimum cut drivers
//!
//! Measures:
//! - Sequential trial throughput on grid and random graphs
//! - Flat-parallel scaling across worker counts
//! - Recursion-tree parallelism under different split budgets

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use randcut::{
    fast_rand_min_cut, fast_rand_min_cut_par, par_fast_rand_min_cut, EdgeFlags, Undirected,
};
use std::collections::HashSet;

/// Generate a random connected graph with n nodes and ~m extra edges.
fn random_graph(n: usize, m: usize, seed: u64) -> Undirected {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut g = Undirected::new();
    let mut edge_set = HashSet::new();

    // spanning path keeps the graph connected
    for i in 0..n - 1 {
        g.connect(i, i + 1, 1.0, EdgeFlags::NONE).unwrap();
        edge_set.insert((i, i + 1));
    }
    let mut added = 0;
    while added < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let key = if u < v { (u, v) } else { (v, u) };
            if edge_set.insert(key) {
                g.connect(u, v, rng.gen_range(1.0..4.0), EdgeFlags::NONE).unwrap();
                added += 1;
            }
        }
    }

    g
}

/// Generate a grid graph (good test case with known small cuts).
fn grid_graph(width: usize, height: usize) -> Undirected {
    let mut g = Undirected::new();
    for i in 0..height {
        for j in 0..width {
            let v = i * width + j;
            if j + 1 < width {
                g.connect(v, v + 1, 1.0, EdgeFlags::NONE).unwrap();
            }
            if i + 1 < height {
                g.connect(v, v + width, 1.0, EdgeFlags::NONE).unwrap();
            }
        }
    }
    g
}

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");

    for &n in &[16, 32, 64] {
        let g = random_graph(n, n * 2, 42);
        group.bench_with_input(BenchmarkId::new("random", n), &g, |b, g| {
            b.iter(|| black_box(fast_rand_min_cut(g, 10)));
        });
    }

    let grid = grid_graph(8, 8);
    group.bench_function("grid_8x8", |b| {
        b.iter(|| black_box(fast_rand_min_cut(&grid, 10)));
    });

    group.finish();
}

fn bench_flat_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_parallel");
    let g = random_graph(64, 128, 42);

    for &threads in &[1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| black_box(fast_rand_min_cut_par(&g, 40, threads)));
        });
    }

    group.finish();
}

fn bench_tree_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_parallel");
    let g = random_graph(64, 128, 42);

    for &split in &[1, 2, 4, 0] {
        group.bench_with_input(BenchmarkId::from_parameter(split), &split, |b, &split| {
            b.iter(|| black_box(par_fast_rand_min_cut(&g, 40, split)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sequential, bench_flat_parallel, bench_tree_parallel);
criterion_main!(benches);
