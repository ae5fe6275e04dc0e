//! # randcut
//!
//! Randomized minimum cut over weighted undirected multigraphs.
//!
//! The crate couples three pieces: a mutable multigraph with stable
//! integer identifiers and O(1) structural mutation, a weighted sampler
//! without replacement over an implicit binary tree, and the Karger–Stein
//! recursive contraction algorithm with sequential and parallel drivers.
//! Contraction runs on an overlay of supernode labels and never mutates
//! the graph, so any number of trials can share one graph concurrently.
//!
//! ## Quick Start
//!
//! ```rust
//! use randcut::graph::{EdgeFlags, Undirected};
//! use randcut::mincut::fast_rand_min_cut;
//!
//! // a triangle with unit weights
//! let mut g = Undirected::new();
//! g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();
//! g.connect(1, 2, 1.0, EdgeFlags::NONE).unwrap();
//! g.connect(0, 2, 1.0, EdgeFlags::NONE).unwrap();
//!
//! let cut = fast_rand_min_cut(&g, 20);
//! assert_eq!(cut.weight, 2.0);
//! assert_eq!(cut.edges.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - [`graph`]: undirected multigraph with slot tables and compact lists
//! - [`select`]: weighted selection without replacement in O(log n)
//! - [`mincut`]: contraction contexts and the min-cut drivers
//! - [`traverse`]: breadth-first and depth-first searchers
//! - [`error`]: error kinds shared across the crate
//!
//! ## Parallelism
//!
//! [`mincut::fast_rand_min_cut_par`] partitions trials across workers;
//! [`mincut::par_fast_rand_min_cut`] forks inside the recursion tree under
//! a split budget. Both share the input graph read-only and combine minima
//! without locking. Seed a driver through
//! [`mincut::MinCutConfig::with_seed`] for reproducible runs.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod graph;
pub mod mincut;
pub mod select;
pub mod traverse;

// Re-exports for convenient access
pub use error::{GraphError, Result};
pub use graph::{
    Edge, EdgeFlags, EdgeId, GraphStats, Hop, Node, NodeId, Undirected, Weight, MAX_EDGE_ID,
    MAX_NODE_ID,
};
pub use mincut::{
    fast_rand_min_cut, fast_rand_min_cut_par, fast_rand_min_cut_par_with, fast_rand_min_cut_with,
    par_fast_rand_min_cut, par_fast_rand_min_cut_with, Cut, MinCutConfig,
};
pub use select::{Selector, WeightedItem};
pub use traverse::{BreadthFirst, DepthFirst};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Prelude module with commonly used types
///
/// ```rust
/// use randcut::prelude::*;
///
/// let mut g = Undirected::new();
/// g.connect(0, 1, 1.0, EdgeFlags::NONE).unwrap();
/// assert_eq!(g.order(), 2);
/// ```
pub mod prelude {
    //! Prelude module with commonly used types

    pub use crate::error::{GraphError, Result};
    pub use crate::graph::{Edge, EdgeFlags, EdgeId, Hop, Node, NodeId, Undirected, Weight};
    pub use crate::mincut::{
        fast_rand_min_cut, fast_rand_min_cut_par, par_fast_rand_min_cut, Cut, MinCutConfig,
    };
    pub use crate::select::{Selector, WeightedItem};
    pub use crate::traverse::{BreadthFirst, DepthFirst};
}
