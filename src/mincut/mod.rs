//! Randomized minimum cut via Karger–Stein recursive contraction
//!
//! Drivers repeatedly contract the graph down to two supernodes and keep
//! the lightest set of surviving edges across trials. The graph itself is
//! never mutated; each trial runs on a private contraction context, which
//! is what allows the parallel drivers to share one graph across workers.
//!
//! Three drivers are provided:
//!
//! - [`fast_rand_min_cut`]: sequential trials
//! - [`fast_rand_min_cut_par`]: trials partitioned across workers
//! - [`par_fast_rand_min_cut`]: parallelism inside the recursion tree
//!
//! # Example
//!
//! ```rust
//! use randcut::graph::{EdgeFlags, Undirected};
//! use randcut::mincut::fast_rand_min_cut;
//!
//! // two triangles joined by a single bridge
//! let mut g = Undirected::new();
//! for &(u, v) in &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)] {
//!     g.connect(u, v, 1.0, EdgeFlags::NONE).unwrap();
//! }
//! let bridge = g.connect(2, 3, 1.0, EdgeFlags::NONE).unwrap();
//!
//! let cut = fast_rand_min_cut(&g, 100);
//! assert_eq!(cut.weight, 1.0);
//! assert_eq!(cut.edges, vec![bridge]);
//! ```

mod karger;
mod parallel;

pub use parallel::{
    fast_rand_min_cut_par, fast_rand_min_cut_par_with, par_fast_rand_min_cut,
    par_fast_rand_min_cut_with,
};

pub(crate) use karger::KargerStein;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::graph::{EdgeId, Undirected};

/// A cut of a graph: a set of edges whose removal disconnects it, and the
/// sum of their weights. Edge ids resolve against the graph the driver ran
/// on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    /// Ids of the edges crossing the cut.
    pub edges: Vec<EdgeId>,
    /// Sum of the crossing edges' weights.
    pub weight: f64,
}

impl Cut {
    /// The identity for minimum folds: no edges, infinite weight.
    pub fn unbounded() -> Cut {
        Cut {
            edges: Vec::new(),
            weight: f64::INFINITY,
        }
    }
}

impl Default for Cut {
    fn default() -> Cut {
        Cut::unbounded()
    }
}

/// Configuration shared by the minimum cut drivers
#[derive(Debug, Clone, PartialEq)]
pub struct MinCutConfig {
    /// Number of independent contraction trials; the best cut across
    /// trials is returned.
    pub iterations: usize,
    /// Seed for the driver's random stream. `None` seeds from entropy;
    /// setting a seed makes a driver call reproducible.
    pub seed: Option<u64>,
}

impl Default for MinCutConfig {
    fn default() -> MinCutConfig {
        MinCutConfig {
            iterations: 32,
            seed: None,
        }
    }
}

impl MinCutConfig {
    /// Configuration running `iterations` trials.
    pub fn new(iterations: usize) -> MinCutConfig {
        MinCutConfig {
            iterations,
            ..MinCutConfig::default()
        }
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> MinCutConfig {
        self.seed = Some(seed);
        self
    }
}

pub(crate) fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Estimate the minimum cut of `g` over `iter` sequential Karger–Stein
/// trials. With zero iterations the returned cut is
/// [`unbounded`](Cut::unbounded).
pub fn fast_rand_min_cut(g: &Undirected, iter: usize) -> Cut {
    fast_rand_min_cut_with(g, &MinCutConfig::new(iter))
}

/// As [`fast_rand_min_cut`], configured explicitly.
pub fn fast_rand_min_cut_with(g: &Undirected, config: &MinCutConfig) -> Cut {
    debug!(
        iterations = config.iterations,
        order = g.order(),
        size = g.size(),
        "running sequential min-cut trials"
    );
    let mut ka = KargerStein::new(g, rng_from(config.seed));
    let mut best = Cut::unbounded();
    for _ in 0..config.iterations {
        ka.init();
        ka.fast_min_cut();
        if ka.weight() < best.weight {
            best = ka.cut();
            trace!(weight = best.weight, edges = best.edges.len(), "trial improved best cut");
        }
    }

    best
}
