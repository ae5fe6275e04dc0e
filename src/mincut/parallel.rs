//! Parallel minimum cut drivers
//!
//! Two orthogonal axes of parallelism over the same contraction engine:
//! across trials, where workers run disjoint shares of the iteration count
//! on private contexts, and inside the recursion tree, where one trial
//! forks its two subcontractions onto the pool while a split budget lasts.
//! Workers share only the read-only graph; minima are combined by a
//! reduce, so there is no locking anywhere.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::graph::Undirected;
use crate::mincut::{rng_from, Cut, KargerStein, MinCutConfig};

/// Estimate the minimum cut of `g` over `iter` trials partitioned across
/// up to `threads` workers. The worker count is capped by the pool width
/// and the iteration count; each worker runs its share on a private
/// context and the minima are reduced on return.
pub fn fast_rand_min_cut_par(g: &Undirected, iter: usize, threads: usize) -> Cut {
    fast_rand_min_cut_par_with(g, &MinCutConfig::new(iter), threads)
}

/// As [`fast_rand_min_cut_par`], configured explicitly.
pub fn fast_rand_min_cut_par_with(g: &Undirected, config: &MinCutConfig, threads: usize) -> Cut {
    let workers = threads
        .min(rayon::current_num_threads())
        .min(config.iterations)
        .max(1);
    let share = config.iterations / workers;
    let rem = config.iterations % workers;

    // derive worker seeds up front so a seeded call stays reproducible
    // regardless of scheduling
    let mut master = rng_from(config.seed);
    let seeds: Vec<u64> = (0..workers).map(|_| master.gen()).collect();

    debug!(
        iterations = config.iterations,
        workers,
        order = g.order(),
        size = g.size(),
        "running flat-parallel min-cut trials"
    );

    seeds
        .into_par_iter()
        .enumerate()
        .map(|(j, seed)| {
            let iterations = share + usize::from(j < rem);
            let mut ka = KargerStein::new(g, StdRng::seed_from_u64(seed));
            let mut best = Cut::unbounded();
            for _ in 0..iterations {
                ka.init();
                ka.fast_min_cut();
                if ka.weight() < best.weight {
                    best = ka.cut();
                }
            }
            best
        })
        .reduce(Cut::unbounded, |a, b| if b.weight < a.weight { b } else { a })
}

/// Estimate the minimum cut of `g` over `iter` trials, parallelising
/// inside each trial's recursion tree: every recursion level forks its two
/// subcontractions onto the pool until `split` levels have forked. A
/// `split` of 0 leaves the budget unbounded.
pub fn par_fast_rand_min_cut(g: &Undirected, iter: usize, split: usize) -> Cut {
    par_fast_rand_min_cut_with(g, &MinCutConfig::new(iter), split)
}

/// As [`par_fast_rand_min_cut`], configured explicitly.
pub fn par_fast_rand_min_cut_with(g: &Undirected, config: &MinCutConfig, split: usize) -> Cut {
    debug!(
        iterations = config.iterations,
        split,
        order = g.order(),
        size = g.size(),
        "running tree-parallel min-cut trials"
    );
    let mut ka = KargerStein::with_split(g, rng_from(config.seed), split);
    let mut best = Cut::unbounded();
    for _ in 0..config.iterations {
        ka.init();
        ka.fast_min_cut_par();
        if ka.weight() < best.weight {
            best = ka.cut();
        }
    }

    best
}
